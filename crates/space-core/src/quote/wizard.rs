//! The step-gated quote wizard.
//!
//! ```text
//! Contact -> Project -> Budget -> Review -> Submitted
//!    ^---------^----------^---------'   (previous)
//! ```
//!
//! `next` only advances when the current step validates. `submit` only works
//! on the review step and re-checks every step at once, so a draft edited
//! after passing an earlier step cannot slip through.

use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::draft::{Attachment, QuoteDraft, QuoteField};
use super::service::PriceEstimate;
use super::step::QuoteStep;
use super::template::{quote_email, quote_whatsapp};
use super::validate::{validate_all, validate_step, QuoteErrors};
use crate::config::SiteConfig;
use crate::error::{SiteError, SiteResult, WizardError};
use crate::links::OutboundMessage;

/// Simulated processing time between submit and the thank-you screen.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// Where the wizard currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardPhase {
    Editing(QuoteStep),
    Submitted,
}

/// Everything produced by a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSubmission {
    pub email: OutboundMessage,
    pub mailto: String,
    pub whatsapp_link: String,
    pub estimate: Option<PriceEstimate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteWizard {
    draft: QuoteDraft,
    errors: QuoteErrors,
    attachment: Option<Attachment>,
    phase: WizardPhase,
}

impl Default for QuoteWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteWizard {
    pub fn new() -> Self {
        Self {
            draft: QuoteDraft::new(),
            errors: QuoteErrors::new(),
            attachment: None,
            phase: WizardPhase::Editing(QuoteStep::Contact),
        }
    }

    pub fn draft(&self) -> &QuoteDraft {
        &self.draft
    }

    pub fn errors(&self) -> &QuoteErrors {
        &self.errors
    }

    pub fn error(&self, field: QuoteField) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    /// Current step. A submitted wizard reports the review step.
    pub fn step(&self) -> QuoteStep {
        match self.phase {
            WizardPhase::Editing(step) => step,
            WizardPhase::Submitted => QuoteStep::Review,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == WizardPhase::Submitted
    }

    pub fn estimate(&self) -> Option<PriceEstimate> {
        self.draft.estimate()
    }

    /// Update one field and drop its error; other errors stay.
    pub fn set_field(&mut self, field: QuoteField, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors.clear_field(field);
    }

    /// Attach a file, replacing any previous one.
    pub fn attach(&mut self, name: impl Into<String>, size_bytes: u64) -> SiteResult<()> {
        let file = Attachment::new(name, size_bytes)?;
        tracing::debug!(name = %file.name, size = file.size_bytes, "Attached file to quote");
        self.attachment = Some(file);
        Ok(())
    }

    /// Attach a file whose size may be unknown. An unknown size is an
    /// error and leaves the current attachment untouched.
    pub fn attach_reported(
        &mut self,
        name: impl Into<String>,
        size_bytes: Option<u64>,
    ) -> SiteResult<()> {
        let name = name.into();
        match size_bytes {
            Some(size) => self.attach(name, size),
            None => {
                tracing::warn!(%name, "Attachment size unavailable");
                Err(SiteError::AttachmentUnreadable(name))
            }
        }
    }

    pub fn remove_attachment(&mut self) {
        self.attachment = None;
    }

    /// Validate the current step and move forward if it passes.
    ///
    /// On failure the errors are stored and returned and the step is unchanged.
    /// On the last step this is a no-op that returns the review step.
    pub fn next(&mut self) -> Result<QuoteStep, QuoteErrors> {
        let WizardPhase::Editing(step) = self.phase else {
            return Ok(QuoteStep::Review);
        };

        let errors = validate_step(&self.draft, step);
        if !errors.is_empty() {
            tracing::debug!(step = step.number(), errors = errors.len(), "Quote step rejected");
            self.errors = errors.clone();
            return Err(errors);
        }

        self.errors = QuoteErrors::new();
        let target = step.next().unwrap_or(step);
        self.phase = WizardPhase::Editing(target);
        Ok(target)
    }

    /// Go back one step. Never below the first step.
    pub fn previous(&mut self) -> QuoteStep {
        if let WizardPhase::Editing(step) = self.phase {
            let target = step.previous().unwrap_or(step);
            self.phase = WizardPhase::Editing(target);
        }
        self.step()
    }

    /// Submit from the review step.
    ///
    /// Every step is checked together; if anything fails the errors are
    /// stored and the wizard stays on the review step.
    pub fn submit(
        &mut self,
        config: &SiteConfig,
        today: NaiveDate,
    ) -> Result<QuoteSubmission, WizardError> {
        match self.phase {
            WizardPhase::Submitted => return Err(WizardError::AlreadySubmitted),
            WizardPhase::Editing(step) if !step.is_last() => {
                return Err(WizardError::NotOnReviewStep(step));
            }
            WizardPhase::Editing(_) => {}
        }

        if let Err(errors) = validate_all(&self.draft).into_result() {
            self.errors = errors.clone();
            return Err(WizardError::Invalid(errors));
        }

        let email = quote_email(&self.draft, self.attachment.as_ref(), today);
        let submission = QuoteSubmission {
            mailto: email.mailto(&config.contact.email),
            whatsapp_link: config.contact.whatsapp_link(&quote_whatsapp(&self.draft)),
            estimate: self.draft.estimate(),
            email,
        };

        tracing::info!(
            service = %self.draft.service_needed,
            attachment = self.attachment.is_some(),
            "Quote request submitted"
        );
        self.errors = QuoteErrors::new();
        self.phase = WizardPhase::Submitted;
        Ok(submission)
    }

    /// Start over: first step, empty fields, no attachment, no errors.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> QuoteWizard {
        let mut wizard = QuoteWizard::new();
        wizard.set_field(QuoteField::FullName, "Jane Doe");
        wizard.set_field(QuoteField::Email, "jane@x.com");
        wizard.set_field(QuoteField::Phone, "+911234567890");
        wizard.set_field(QuoteField::ServiceNeeded, "Frontend");
        wizard.set_field(QuoteField::ProjectDescription, "d".repeat(60));
        wizard.set_field(QuoteField::BudgetRange, "50k-150k");
        wizard.set_field(QuoteField::Deadline, "8 weeks");
        wizard
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_next_blocked_by_errors() {
        let mut wizard = QuoteWizard::new();
        let errors = wizard.next().unwrap_err();
        assert!(errors.contains(QuoteField::FullName));
        assert_eq!(wizard.step(), QuoteStep::Contact);
        assert_eq!(wizard.errors(), &errors);
    }

    #[test]
    fn test_edit_clears_only_that_field() {
        let mut wizard = QuoteWizard::new();
        let _ = wizard.next();
        wizard.set_field(QuoteField::FullName, "J");
        assert_eq!(wizard.error(QuoteField::FullName), None);
        assert_eq!(wizard.error(QuoteField::Email), Some("Email is required"));
    }

    #[test]
    fn test_walk_to_review_and_submit() {
        let mut wizard = filled();
        assert_eq!(wizard.next(), Ok(QuoteStep::Project));
        assert_eq!(wizard.next(), Ok(QuoteStep::Budget));
        assert_eq!(wizard.next(), Ok(QuoteStep::Review));
        assert_eq!(wizard.next(), Ok(QuoteStep::Review));

        let submission = wizard.submit(&SiteConfig::default(), today()).unwrap();
        assert!(wizard.is_submitted());
        assert!(submission.mailto.starts_with("mailto:spaceforwebsite@gmail.com?subject="));
        assert!(submission.whatsapp_link.starts_with("https://wa.me/919110687983?text="));
        assert_eq!(submission.estimate.map(|e| e.max), Some(50_000));
    }

    #[test]
    fn test_submit_requires_review_step() {
        let mut wizard = filled();
        assert_eq!(
            wizard.submit(&SiteConfig::default(), today()),
            Err(WizardError::NotOnReviewStep(QuoteStep::Contact))
        );
    }

    #[test]
    fn test_submit_rechecks_every_step() {
        let mut wizard = filled();
        for _ in 0..3 {
            wizard.next().unwrap();
        }
        wizard.set_field(QuoteField::Email, "broken");
        let err = wizard.submit(&SiteConfig::default(), today()).unwrap_err();
        match err {
            WizardError::Invalid(errors) => {
                assert_eq!(errors.fields().collect::<Vec<_>>(), vec![QuoteField::Email]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(wizard.step(), QuoteStep::Review);
        assert!(!wizard.is_submitted());
    }

    #[test]
    fn test_submit_twice() {
        let mut wizard = filled();
        for _ in 0..3 {
            wizard.next().unwrap();
        }
        wizard.submit(&SiteConfig::default(), today()).unwrap();
        assert_eq!(
            wizard.submit(&SiteConfig::default(), today()),
            Err(WizardError::AlreadySubmitted)
        );
    }

    #[test]
    fn test_previous_never_below_first() {
        let mut wizard = filled();
        wizard.next().unwrap();
        assert_eq!(wizard.previous(), QuoteStep::Contact);
        assert_eq!(wizard.previous(), QuoteStep::Contact);
    }

    #[test]
    fn test_reset() {
        let mut wizard = filled();
        wizard.attach("brief.pdf", 1024).unwrap();
        wizard.next().unwrap();
        wizard.reset();
        assert_eq!(wizard, QuoteWizard::new());
    }

    #[test]
    fn test_unknown_size_is_not_attached() {
        let mut wizard = QuoteWizard::new();
        let err = wizard.attach_reported("brief.pdf", None).unwrap_err();
        assert!(matches!(err, SiteError::AttachmentUnreadable(ref n) if n == "brief.pdf"));
        assert!(wizard.attachment().is_none());

        wizard.attach_reported("brief.pdf", Some(2048)).unwrap();
        assert!(wizard.attach_reported("other.pdf", None).is_err());
        assert_eq!(wizard.attachment().map(|a| a.name.as_str()), Some("brief.pdf"));
    }

    #[test]
    fn test_reported_size_still_capped() {
        let mut wizard = QuoteWizard::new();
        let err = wizard.attach_reported("huge.zip", Some(u64::MAX)).unwrap_err();
        assert!(matches!(err, SiteError::AttachmentTooLarge { .. }));
    }

    #[test]
    fn test_oversized_attachment_is_rejected() {
        let mut wizard = QuoteWizard::new();
        assert!(wizard.attach("huge.zip", u64::MAX).is_err());
        assert!(wizard.attachment().is_none());
    }
}
