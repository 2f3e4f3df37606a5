//! Per-step validation of the quote draft.

use super::draft::{QuoteDraft, QuoteField};
use super::step::QuoteStep;
use crate::form::{check_email, check_required, is_blank, trimmed_len, ValidationErrors};

/// Minimum length of the project description, in characters.
pub const MIN_DESCRIPTION_CHARS: usize = 50;

pub type QuoteErrors = ValidationErrors<QuoteField>;

/// Check the fields that belong to `step`. Never fails, only reports.
pub fn validate_step(draft: &QuoteDraft, step: QuoteStep) -> QuoteErrors {
    let mut errors = QuoteErrors::new();

    match step {
        QuoteStep::Contact => {
            check_required(&mut errors, QuoteField::FullName, &draft.full_name, "Name is required");
            check_email(&mut errors, QuoteField::Email, &draft.email);
            check_required(&mut errors, QuoteField::Phone, &draft.phone, "Phone is required");
        }
        QuoteStep::Project => {
            if draft.service().is_none() {
                errors.insert(QuoteField::ServiceNeeded, "Please select a service");
            }
            if is_blank(&draft.project_description) {
                errors.insert(
                    QuoteField::ProjectDescription,
                    "Project description is required",
                );
            } else if trimmed_len(&draft.project_description) < MIN_DESCRIPTION_CHARS {
                errors.insert(
                    QuoteField::ProjectDescription,
                    "Please provide at least 50 characters of description",
                );
            }
        }
        QuoteStep::Budget => {
            if draft.budget().is_none() {
                errors.insert(QuoteField::BudgetRange, "Please select a budget range");
            }
            check_required(&mut errors, QuoteField::Deadline, &draft.deadline, "Deadline is required");
        }
        QuoteStep::Review => {}
    }

    errors
}

/// Check every step at once.
pub fn validate_all(draft: &QuoteDraft) -> QuoteErrors {
    let mut errors = QuoteErrors::new();
    for step in QuoteStep::ALL {
        errors.merge(validate_step(draft, step));
    }
    errors
}

/// Characters typed so far against the minimum, e.g. `12 / 50 characters`.
pub fn description_counter(draft: &QuoteDraft) -> String {
    format!(
        "{} / {} characters",
        trimmed_len(&draft.project_description),
        MIN_DESCRIPTION_CHARS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_ok() -> QuoteDraft {
        QuoteDraft::new()
            .with(QuoteField::FullName, "Jane Doe")
            .with(QuoteField::Email, "jane@x.com")
            .with(QuoteField::Phone, "+911234567890")
    }

    #[test]
    fn test_empty_contact_step() {
        let errors = validate_step(&QuoteDraft::new(), QuoteStep::Contact);
        assert_eq!(errors.get(QuoteField::FullName), Some("Name is required"));
        assert_eq!(errors.get(QuoteField::Email), Some("Email is required"));
        assert_eq!(errors.get(QuoteField::Phone), Some("Phone is required"));
        assert!(!errors.contains(QuoteField::Company));
    }

    #[test]
    fn test_bad_email_is_the_only_error() {
        let draft = contact_ok().with(QuoteField::Email, "not-an-email");
        let errors = validate_step(&draft, QuoteStep::Contact);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(QuoteField::Email), Some("Email is invalid"));
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let draft = contact_ok().with(QuoteField::FullName, "   ");
        let errors = validate_step(&draft, QuoteStep::Contact);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![QuoteField::FullName]);
    }

    #[test]
    fn test_description_length_boundary() {
        let short = "x".repeat(MIN_DESCRIPTION_CHARS - 1);
        let exact = "x".repeat(MIN_DESCRIPTION_CHARS);
        let base = QuoteDraft::new().with(QuoteField::ServiceNeeded, "Frontend");

        let errors = validate_step(
            &base.clone().with(QuoteField::ProjectDescription, short),
            QuoteStep::Project,
        );
        assert_eq!(
            errors.get(QuoteField::ProjectDescription),
            Some("Please provide at least 50 characters of description")
        );

        let errors = validate_step(
            &base.with(QuoteField::ProjectDescription, exact),
            QuoteStep::Project,
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_padding_does_not_count_toward_length() {
        let padded = format!("   {}   ", "y".repeat(MIN_DESCRIPTION_CHARS - 1));
        let draft = QuoteDraft::new()
            .with(QuoteField::ServiceNeeded, "IEEE")
            .with(QuoteField::ProjectDescription, padded);
        assert!(validate_step(&draft, QuoteStep::Project).contains(QuoteField::ProjectDescription));
    }

    #[test]
    fn test_unknown_selection_is_rejected() {
        let draft = QuoteDraft::new()
            .with(QuoteField::ServiceNeeded, "Blockchain")
            .with(QuoteField::BudgetRange, "a lot")
            .with(QuoteField::Deadline, "soon");
        assert!(validate_step(&draft, QuoteStep::Project).contains(QuoteField::ServiceNeeded));
        assert_eq!(
            validate_step(&draft, QuoteStep::Budget).get(QuoteField::BudgetRange),
            Some("Please select a budget range")
        );
    }

    #[test]
    fn test_review_step_is_vacuous() {
        assert!(validate_step(&QuoteDraft::new(), QuoteStep::Review).is_empty());
    }

    #[test]
    fn test_validate_all_collects_every_step() {
        let errors = validate_all(&QuoteDraft::new());
        assert_eq!(errors.len(), 7);
    }

    #[test]
    fn test_counter() {
        let draft = QuoteDraft::new().with(QuoteField::ProjectDescription, " abc ");
        assert_eq!(description_counter(&draft), "3 / 50 characters");
    }
}
