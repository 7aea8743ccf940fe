//! Input Collector: the resume file and job description for one analysis attempt.
//!
//! Only PDFs and images are accepted as resumes. A rejected selection never
//! touches the stored file.

use std::path::Path;

use bytes::Bytes;

use crate::errors::ValidationError;

/// Upload limit shown to the user. Not enforced here; the analysis service owns it.
pub const ADVISORY_MAX_RESUME_BYTES: u64 = 10 * 1024 * 1024;

const PDF_MIME: &str = "application/pdf";
const IMAGE_MIME_PREFIX: &str = "image/";

/// A resume as selected by the user: raw bytes plus the name and MIME type it declares.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeFile {
    pub name: String,
    pub mime_type: String,
    pub content: Bytes,
}

impl ResumeFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            content: content.into(),
        }
    }

    /// Reads a resume from disk. The MIME type comes from `mime_override`
    /// or, failing that, from the file extension.
    pub async fn load(path: &Path, mime_override: Option<&str>) -> std::io::Result<Self> {
        let content = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("resume")
            .to_string();
        let mime_type = mime_override
            .map(str::to_string)
            .unwrap_or_else(|| mime_type_for_path(path).to_string());

        Ok(Self::new(name, mime_type, content))
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    pub fn exceeds_advisory_size(&self) -> bool {
        self.size() > ADVISORY_MAX_RESUME_BYTES
    }
}

/// Maps a file extension to the MIME type a browser would declare for it.
pub fn mime_type_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => PDF_MIME,
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("tif") | Some("tiff") => "image/tiff",
        Some("txt") => "text/plain",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

/// `application/pdf` or any `image/*`.
pub fn is_accepted_mime_type(mime_type: &str) -> bool {
    mime_type == PDF_MIME || mime_type.starts_with(IMAGE_MIME_PREFIX)
}

/// Inputs for one analysis attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    resume: Option<ResumeFile>,
    job_description: String,
}

impl InputState {
    pub fn resume(&self) -> Option<&ResumeFile> {
        self.resume.as_ref()
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    /// Stores `candidate` if its declared type is accepted. On rejection the
    /// previously selected file, if any, is kept.
    pub fn select_resume(&mut self, candidate: ResumeFile) -> Result<(), ValidationError> {
        if !is_accepted_mime_type(&candidate.mime_type) {
            return Err(ValidationError::UnsupportedFileType);
        }
        self.resume = Some(candidate);
        Ok(())
    }

    /// Replaces the job description. Empty text is allowed until submission.
    pub fn set_job_description(&mut self, text: impl Into<String>) {
        self.job_description = text.into();
    }

    /// Both a resume and a non-blank job description are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.resume.is_none() || self.job_description.trim().is_empty() {
            return Err(ValidationError::MissingInput);
        }
        Ok(())
    }
}
