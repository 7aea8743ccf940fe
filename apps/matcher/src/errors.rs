use thiserror::Error;

/// The only message shown to the user when the analysis service fails.
/// Upstream detail is logged, never displayed.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze resume. Please try again.";

/// Local input problems. Never reach the network.
/// The `Display` text is the exact user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please upload a PDF or image file")]
    UnsupportedFileType,

    #[error("Please upload a resume and paste a job description")]
    MissingInput,
}

/// Why a submission could not be started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("An analysis is already in progress")]
    AlreadyInFlight,
}

/// Transport and service failures from the analysis endpoint.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Analysis service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed analysis report: {0}")]
    Parse(#[from] serde_json::Error),
}

impl AnalysisError {
    /// What the user sees. Every variant collapses to the same message.
    pub fn user_message(&self) -> &'static str {
        ANALYSIS_FAILED_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_user_facing() {
        assert_eq!(
            ValidationError::UnsupportedFileType.to_string(),
            "Please upload a PDF or image file"
        );
        assert_eq!(
            ValidationError::MissingInput.to_string(),
            "Please upload a resume and paste a job description"
        );
    }

    #[test]
    fn test_submit_error_is_transparent_over_validation() {
        let err = SubmitError::from(ValidationError::MissingInput);
        assert_eq!(
            err.to_string(),
            "Please upload a resume and paste a job description"
        );
    }

    #[test]
    fn test_status_error_hides_body_from_user() {
        let err = AnalysisError::Status {
            status: 500,
            body: "{\"error\": \"Text extraction failed: EOF marker not found\"}".to_string(),
        };
        assert!(err.to_string().contains("EOF marker"));
        assert_eq!(err.user_message(), ANALYSIS_FAILED_MESSAGE);
    }
}
