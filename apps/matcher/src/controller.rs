//! Submission Controller: one `AnalysisSession` per analysis workflow.
//!
//! ```text
//! Idle      --submit(invalid)-->       Failed
//! Idle      --submit(valid)-->         InFlight
//! InFlight  --transport/status error-> Failed
//! InFlight  --parsed report-->         Succeeded
//! Failed    --submit(valid)-->         InFlight
//! Succeeded --reset()-->               Idle
//! ```
//!
//! Transitions are plain methods that return the new state. I/O happens only in
//! `submit`, which is `begin_submission` + one service call + `complete_submission`.

use chrono::{DateTime, Utc};
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::errors::{AnalysisError, SubmitError, ValidationError};
use crate::input::{InputState, ResumeFile};
use crate::report::MatchReport;
use crate::service::{AnalysisRequest, AnalysisService};

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    Idle,
    InFlight,
    Failed(String),
    Succeeded(MatchReport),
}

/// A submission that has entered `InFlight` and awaits its outcome.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub attempt: u64,
    pub started_at: DateTime<Utc>,
    pub request: AnalysisRequest,
}

/// State for one user's analysis workflow. Nothing is shared between sessions.
#[derive(Debug)]
pub struct AnalysisSession {
    id: Uuid,
    input: InputState,
    state: SubmissionState,
    /// Rejected file selection. Kept apart from `state` so a report survives it.
    input_error: Option<ValidationError>,
    attempt: u64,
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            input: InputState::default(),
            state: SubmissionState::Idle,
            input_error: None,
            attempt: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn report(&self) -> Option<&MatchReport> {
        match &self.state {
            SubmissionState::Succeeded(report) => Some(report),
            _ => None,
        }
    }

    /// The message currently shown to the user, if any.
    pub fn error(&self) -> Option<String> {
        if let Some(err) = &self.input_error {
            return Some(err.to_string());
        }
        match &self.state {
            SubmissionState::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }

    /// Whether the analyze trigger should be enabled.
    pub fn can_submit(&self) -> bool {
        self.state != SubmissionState::InFlight
    }

    pub fn select_resume(&mut self, candidate: ResumeFile) -> Result<(), ValidationError> {
        match self.input.select_resume(candidate) {
            Ok(()) => {
                self.clear_error();
                debug!(session = %self.id, "Resume selected");
                Ok(())
            }
            Err(err) => {
                debug!(session = %self.id, "Resume rejected: {err}");
                self.input_error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub fn set_job_description(&mut self, text: impl Into<String>) {
        self.input.set_job_description(text);
        self.clear_error();
    }

    /// Validates input and enters `InFlight`, yielding the payload to send.
    ///
    /// Rejected without any state change while a submission is already in flight.
    /// Invalid input moves the session to `Failed`.
    pub fn begin_submission(&mut self) -> Result<PendingSubmission, SubmitError> {
        if self.state == SubmissionState::InFlight {
            warn!(session = %self.id, attempt = self.attempt, "Submission rejected: already in flight");
            return Err(SubmitError::AlreadyInFlight);
        }

        self.input_error = None;

        let resume = match (self.input.validate(), self.input.resume()) {
            (Ok(()), Some(resume)) => resume.clone(),
            _ => {
                let err = ValidationError::MissingInput;
                self.state = SubmissionState::Failed(err.to_string());
                debug!(session = %self.id, "Submission blocked: missing input");
                return Err(err.into());
            }
        };

        self.attempt += 1;
        self.state = SubmissionState::InFlight;
        debug!(session = %self.id, attempt = self.attempt, "Submission in flight");

        Ok(PendingSubmission {
            attempt: self.attempt,
            started_at: Utc::now(),
            request: AnalysisRequest {
                resume,
                job_description: self.input.job_description().to_string(),
            },
        })
    }

    /// Resolves `pending` into `Succeeded` or `Failed`.
    ///
    /// An outcome for an attempt that is no longer current (superseded or reset) is dropped.
    pub fn complete_submission(
        &mut self,
        pending: &PendingSubmission,
        outcome: Result<MatchReport, AnalysisError>,
    ) -> &SubmissionState {
        if self.state != SubmissionState::InFlight || pending.attempt != self.attempt {
            warn!(
                session = %self.id,
                attempt = pending.attempt,
                current = self.attempt,
                "Discarding stale analysis outcome"
            );
            return &self.state;
        }

        let elapsed_ms = (Utc::now() - pending.started_at).num_milliseconds();

        self.state = match outcome {
            Ok(report) => {
                debug!(
                    session = %self.id,
                    attempt = pending.attempt,
                    elapsed_ms,
                    overall_score = report.overall_score,
                    "Analysis succeeded"
                );
                SubmissionState::Succeeded(report)
            }
            Err(err) => {
                error!(
                    session = %self.id,
                    attempt = pending.attempt,
                    elapsed_ms,
                    "Analysis failed: {err}"
                );
                SubmissionState::Failed(err.user_message().to_string())
            }
        };

        &self.state
    }

    /// Runs one full submission attempt against `service`.
    pub async fn submit(&mut self, service: &dyn AnalysisService) -> &SubmissionState {
        let pending = match self.begin_submission() {
            Ok(pending) => pending,
            Err(_) => return &self.state,
        };

        let outcome = service.analyze(&pending.request).await;
        self.complete_submission(&pending, outcome)
    }

    /// Clears inputs and any report or error, returning to `Idle`.
    pub fn reset(&mut self) -> &SubmissionState {
        self.input = InputState::default();
        self.input_error = None;
        self.state = SubmissionState::Idle;
        debug!(session = %self.id, "Session reset");
        &self.state
    }

    /// Clears the displayed error. A completed report is left in place.
    fn clear_error(&mut self) {
        self.input_error = None;
        if matches!(self.state, SubmissionState::Failed(_)) {
            self.state = SubmissionState::Idle;
        }
    }
}
