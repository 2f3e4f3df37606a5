//! Property-based tests for validation, reveal bookkeeping and chat rules
//!
//! Uses proptest to check the invariants the pages rely on.

use proptest::prelude::*;
use space_core::chat::{classify, respond, RULES};
use space_core::form::is_valid_email;
use space_core::quote::{validate_step, MIN_DESCRIPTION_CHARS};
use space_core::{QuoteDraft, QuoteField, QuoteStep, RevealOptions, RevealSet, Topic};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Reveal events: (index, crossed-viewport?) pairs
fn reveal_events_strategy() -> impl Strategy<Value = Vec<(usize, bool)>> {
    prop::collection::vec((0..20usize, any::<bool>()), 0..200)
}

/// Lower-case words that contain none of the chat keywords
fn off_topic_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[bcdfghjkpqvwxz ]{0,40}")
        .expect("valid regex")
}

/// Strings without an `@`
fn no_at_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9._ -]{0,40}").expect("valid regex")
}

/// `local@domain` with no dot anywhere after the `@`
fn no_domain_dot_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{1,10}@[a-z0-9]{1,10}").expect("valid regex")
}

fn project_step_draft(description: String) -> QuoteDraft {
    QuoteDraft::new()
        .with(QuoteField::ServiceNeeded, "AIDL")
        .with(QuoteField::ProjectDescription, description)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The visible set never shrinks and never holds duplicates
    #[test]
    fn reveal_set_is_monotonic(events in reveal_events_strategy()) {
        let mut set = RevealSet::new();
        let opts = RevealOptions::STANDARD;
        let mut previous: Vec<usize> = Vec::new();

        for (index, fire_timer) in events {
            let _ = set.schedule(index, &opts);
            if fire_timer {
                set.reveal(index);
            }
            let now: Vec<usize> = set.visible().collect();
            for seen in &previous {
                prop_assert!(now.contains(seen));
            }
            let mut dedup = now.clone();
            dedup.dedup();
            prop_assert_eq!(&dedup, &now);
            previous = now;
        }
    }

    /// An index is scheduled at most once per page lifetime
    #[test]
    fn reveal_schedules_once(index in 0..50usize, repeats in 1..10usize) {
        let mut set = RevealSet::new();
        let opts = RevealOptions::FAST;
        let scheduled = (0..repeats)
            .filter(|_| set.schedule(index, &opts).is_some())
            .count();
        prop_assert_eq!(scheduled, 1);
    }

    /// Descriptions of 50+ trimmed characters never get the length error
    #[test]
    fn long_descriptions_pass(len in MIN_DESCRIPTION_CHARS..400, pad in 0..5usize) {
        let text = format!("{}{}{}", " ".repeat(pad), "a".repeat(len), " ".repeat(pad));
        let errors = validate_step(&project_step_draft(text), QuoteStep::Project);
        prop_assert!(errors.is_empty());
    }

    /// Shorter non-blank descriptions always do
    #[test]
    fn short_descriptions_fail(len in 1..MIN_DESCRIPTION_CHARS) {
        let errors = validate_step(&project_step_draft("b".repeat(len)), QuoteStep::Project);
        prop_assert_eq!(
            errors.get(QuoteField::ProjectDescription),
            Some("Please provide at least 50 characters of description")
        );
    }

    /// No `@` means the email is flagged
    #[test]
    fn email_without_at_is_invalid(email in no_at_strategy()) {
        prop_assert!(!is_valid_email(&email));
    }

    /// No dot after the `@` means the email is flagged
    #[test]
    fn email_without_domain_dot_is_invalid(email in no_domain_dot_strategy()) {
        prop_assert!(!is_valid_email(&email));
    }

    /// Same question, same answer
    #[test]
    fn chat_is_deterministic(question in ".{0,80}") {
        prop_assert_eq!(respond(&question), respond(&question));
    }

    /// Questions without any keyword get exactly the fallback
    #[test]
    fn chat_falls_back(question in off_topic_strategy()) {
        let lower = question.to_lowercase();
        prop_assume!(RULES
            .iter()
            .all(|(keywords, _)| keywords.iter().all(|k| !lower.contains(k))));
        prop_assert_eq!(classify(&question), Topic::Fallback);
        prop_assert_eq!(respond(&question).text, Topic::Fallback.answer());
    }
}
