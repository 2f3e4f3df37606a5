//! End-to-end scenarios for the site's forms and the chat widget
//!
//! These drive the public API the way the pages do: field edits, step
//! transitions, submit, and the links that come out the other end.

use chrono::NaiveDate;
use space_core::chat::{respond, Transcript};
use space_core::contact::{contact_email, validate_contact};
use space_core::links::encode_component;
use space_core::quote::{validate_step, MIN_DESCRIPTION_CHARS};
use space_core::{
    ContactDraft, ContactField, QuoteDraft, QuoteField, QuoteStep, QuoteWizard, SiteConfig, Topic,
    WizardError,
};

// ============================================================================
// Helpers
// ============================================================================

fn jane_doe() -> Vec<(QuoteField, String)> {
    vec![
        (QuoteField::FullName, "Jane Doe".to_string()),
        (QuoteField::Email, "jane@x.com".to_string()),
        (QuoteField::Phone, "+911234567890".to_string()),
        (QuoteField::ServiceNeeded, "Frontend".to_string()),
        (QuoteField::ProjectDescription, "x".repeat(60)),
        (QuoteField::BudgetRange, "50k-150k".to_string()),
        (QuoteField::Deadline, "8 weeks".to_string()),
    ]
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

// ============================================================================
// Quote wizard
// ============================================================================

#[test]
fn test_jane_doe_passes_every_step_and_submits() {
    let mut draft = QuoteDraft::new();
    for (field, value) in jane_doe() {
        draft.set(field, value);
    }
    for step in QuoteStep::ALL {
        assert!(validate_step(&draft, step).is_empty(), "step {:?}", step);
    }

    let mut wizard = QuoteWizard::new();
    for (field, value) in jane_doe() {
        wizard.set_field(field, value);
    }
    while !wizard.step().is_last() {
        wizard.next().expect("step should validate");
    }

    let submission = wizard.submit(&SiteConfig::default(), today()).unwrap();
    assert!(submission.email.subject.contains("Jane Doe"));
    assert!(submission.email.subject.contains("Frontend Website Development"));
    assert!(submission
        .mailto
        .contains(&encode_component("Custom Quote Request: Frontend Website Development")));
    assert!(wizard.is_submitted());
}

#[test]
fn test_not_an_email_is_the_only_step_one_error() {
    let mut wizard = QuoteWizard::new();
    for (field, value) in jane_doe() {
        wizard.set_field(field, value);
    }
    wizard.set_field(QuoteField::Email, "not-an-email");

    let errors = wizard.next().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(QuoteField::Email), Some("Email is invalid"));
    assert_eq!(wizard.step(), QuoteStep::Contact);
}

#[test]
fn test_missing_field_blocks_its_step_only() {
    let mut wizard = QuoteWizard::new();
    for (field, value) in jane_doe() {
        if field != QuoteField::Deadline {
            wizard.set_field(field, value);
        }
    }
    assert_eq!(wizard.next(), Ok(QuoteStep::Project));
    assert_eq!(wizard.next(), Ok(QuoteStep::Budget));
    let errors = wizard.next().unwrap_err();
    assert_eq!(errors.get(QuoteField::Deadline), Some("Deadline is required"));
    assert_eq!(wizard.step(), QuoteStep::Budget);

    wizard.set_field(QuoteField::Deadline, "ASAP");
    assert!(wizard.errors().is_empty());
    assert_eq!(wizard.next(), Ok(QuoteStep::Review));
}

#[test]
fn test_going_back_then_breaking_a_field_blocks_submit() {
    let mut wizard = QuoteWizard::new();
    for (field, value) in jane_doe() {
        wizard.set_field(field, value);
    }
    for _ in 0..3 {
        wizard.next().unwrap();
    }
    wizard.previous();
    wizard.previous();
    wizard.set_field(
        QuoteField::ProjectDescription,
        "y".repeat(MIN_DESCRIPTION_CHARS - 10),
    );
    wizard.next().unwrap_err();
    assert_eq!(wizard.step(), QuoteStep::Project);

    // Submitting from anywhere but review is refused outright
    assert!(matches!(
        wizard.submit(&SiteConfig::default(), today()),
        Err(WizardError::NotOnReviewStep(QuoteStep::Project))
    ));
}

#[test]
fn test_attachment_shows_in_email() {
    let mut wizard = QuoteWizard::new();
    for (field, value) in jane_doe() {
        wizard.set_field(field, value);
    }
    wizard.attach("wireframes.pdf", 51_200).unwrap();
    for _ in 0..3 {
        wizard.next().unwrap();
    }
    let submission = wizard.submit(&SiteConfig::default(), today()).unwrap();
    assert!(submission
        .email
        .body
        .contains("Attachment: wireframes.pdf (50.00 KB)"));
}

// ============================================================================
// Contact form
// ============================================================================

#[test]
fn test_contact_form_to_mailto() {
    let draft = ContactDraft::new()
        .with(ContactField::Name, "Kiran")
        .with(ContactField::Email, "kiran@college.edu")
        .with(ContactField::ProjectType, "IEEE")
        .with(ContactField::Message, "Need help with a paper on federated learning.");
    assert!(validate_contact(&draft).is_empty());

    let config = SiteConfig::default();
    let link = contact_email(&draft).mailto(&config.contact.email);
    assert!(link.starts_with("mailto:spaceforwebsite@gmail.com?subject=New%20Inquiry%3A%20IEEE%20Paper%20Support%20-%20Kiran&body="));
}

// ============================================================================
// Chat widget
// ============================================================================

#[test]
fn test_medilink_question() {
    let reply = respond("what about the medilink project");
    assert_eq!(reply.topic, Topic::MediLink);

    let mut transcript = Transcript::new(0);
    let question = transcript
        .ask("what about the medilink project", 10)
        .unwrap()
        .text
        .clone();
    let answer = transcript.answer(&question, 810);
    assert_eq!(answer.text, Topic::MediLink.answer());
}
