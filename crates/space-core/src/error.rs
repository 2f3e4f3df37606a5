//! Error types for the SPACE website core

use std::time::Duration;

use thiserror::Error;

use crate::form::ValidationErrors;
use crate::quote::{QuoteField, QuoteStep};

/// Main error type for SPACE website operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration or payload (de)serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration is present but unusable
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The email relay still carries placeholder credentials
    #[error("Email relay is not configured (missing {0})")]
    RelayNotConfigured(&'static str),

    /// The email relay rejected the request or could not be reached
    #[error("Email relay error: {0}")]
    Relay(String),

    /// The email relay did not answer in time
    #[error("Email relay timed out after {}ms", .0.as_millis())]
    RelayTimeout(Duration),

    /// Uploaded attachment exceeds the size limit
    #[error("Attachment {name} is {size} bytes; the limit is {limit} bytes")]
    AttachmentTooLarge { name: String, size: u64, limit: u64 },

    /// The browser could not report the attachment's size
    #[error("Could not read attachment {0}")]
    AttachmentUnreadable(String),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

/// Misuse of the quote wizard's state machine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WizardError {
    /// Submit was attempted before reaching the review step
    #[error("Quote can only be submitted from the review step (currently on step {})", .0.number())]
    NotOnReviewStep(QuoteStep),

    /// Submit was attempted after the request was already submitted
    #[error("Quote request was already submitted")]
    AlreadySubmitted,

    /// One or more steps still have invalid fields
    #[error("Quote request has {} invalid field(s)", .0.len())]
    Invalid(ValidationErrors<QuoteField>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::RelayNotConfigured("service_id");
        assert_eq!(
            format!("{}", err),
            "Email relay is not configured (missing service_id)"
        );
    }

    #[test]
    fn test_timeout_display() {
        let err = SiteError::RelayTimeout(Duration::from_secs(10));
        assert_eq!(format!("{}", err), "Email relay timed out after 10000ms");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SiteError = io_err.into();
        assert!(matches!(err, SiteError::Io(_)));
    }

    #[test]
    fn test_unreadable_attachment_display() {
        let err = SiteError::AttachmentUnreadable("brief.pdf".into());
        assert_eq!(err.to_string(), "Could not read attachment brief.pdf");
    }

    #[test]
    fn test_wizard_error_display() {
        let err = WizardError::NotOnReviewStep(QuoteStep::Project);
        assert_eq!(
            err.to_string(),
            "Quote can only be submitted from the review step (currently on step 2)"
        );
    }
}
