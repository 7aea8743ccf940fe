use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use matcher::config::Config;
use matcher::controller::{AnalysisSession, SubmissionState};
use matcher::input::{ResumeFile, ADVISORY_MAX_RESUME_BYTES};
use matcher::render::{render_json, render_text};
use matcher::report::ReportView;
use matcher::service::HttpAnalysisService;

/// Score a resume against a job description.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Resume file: PDF or image (up to 10 MB)
    #[arg(short, long)]
    resume: PathBuf,

    /// Job description text
    #[arg(short, long, conflicts_with = "job_description_file")]
    job_description: Option<String>,

    /// File containing the job description
    #[arg(long)]
    job_description_file: Option<PathBuf>,

    /// Declared MIME type of the resume; inferred from the extension if omitted
    #[arg(long)]
    mime_type: Option<String>,

    /// Base URL of the analysis service (overrides MATCHER_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?.with_api_url(args.api_url.clone());

    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting matcher v{}", env!("CARGO_PKG_VERSION"));

    let service = HttpAnalysisService::new(&config).context("Failed to build HTTP client")?;
    info!("Analysis endpoint: {}", service.endpoint());

    let mut session = AnalysisSession::new();

    let resume = ResumeFile::load(&args.resume, args.mime_type.as_deref())
        .await
        .with_context(|| format!("Failed to read resume '{}'", args.resume.display()))?;
    if resume.exceeds_advisory_size() {
        warn!(
            "Resume is {} bytes; the service may reject files over {} bytes",
            resume.size(),
            ADVISORY_MAX_RESUME_BYTES
        );
    }
    if let Err(err) = session.select_resume(resume) {
        eprintln!("{err}");
        process::exit(1);
    }

    let job_description = match (&args.job_description, &args.job_description_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read job description '{}'", path.display()))?,
        (None, None) => String::new(),
    };
    session.set_job_description(job_description);

    match session.submit(&service).await {
        SubmissionState::Succeeded(report) => {
            let view = ReportView::new(report);
            if args.json {
                println!("{}", render_json(&view)?);
            } else {
                print!("{}", render_text(&view));
            }
            Ok(())
        }
        SubmissionState::Failed(message) => {
            eprintln!("{message}");
            process::exit(1);
        }
        state => anyhow::bail!("Analysis ended in unexpected state: {state:?}"),
    }
}
