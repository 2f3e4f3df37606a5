//! Shared form plumbing: field naming, error maps and the common rules.
//!
//! Every form on the site (quote wizard, contact page, CTA modal) keeps its
//! draft as plain strings keyed by a field enum and reports problems as a
//! [`ValidationErrors`] map. The map is keyed by the same enum, so it can only
//! ever name fields the form actually has.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::OnceLock;

use regex::Regex;

/// A named input of a form.
pub trait FormField: Copy + Ord + Debug {
    /// The form-level field name (camelCase, as used by the markup).
    fn name(&self) -> &'static str;
}

/// Per-field error messages produced by a validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors<F: FormField> {
    errors: BTreeMap<F, String>,
}

impl<F: FormField> Default for ValidationErrors<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: FormField> ValidationErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `field`. A field keeps its first message.
    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    /// Message for `field`, if it failed.
    pub fn get(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: F) -> bool {
        self.errors.contains_key(&field)
    }

    /// Drop the error for a single field (the user is editing it).
    pub fn clear_field(&mut self, field: F) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Failed fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> + '_ {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Fold another error set into this one.
    pub fn merge(&mut self, other: ValidationErrors<F>) {
        for (field, message) in other.errors {
            self.insert(field, message);
        }
    }

    /// `Ok(())` when empty, otherwise the errors themselves.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn email_pattern() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"\S+@\S+\.\S+").ok())
        .as_ref()
}

/// Loose email shape check: something, `@`, something, `.`, something.
pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_some_and(|re| re.is_match(value))
}

/// True when the value is empty after trimming whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Character count of the trimmed value.
pub fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

/// Standard "required + shape" email rule shared by every form.
pub fn check_email<F: FormField>(errors: &mut ValidationErrors<F>, field: F, value: &str) {
    if is_blank(value) {
        errors.insert(field, "Email is required");
    } else if !is_valid_email(value) {
        errors.insert(field, "Email is invalid");
    }
}

/// Required-field rule.
pub fn check_required<F: FormField>(
    errors: &mut ValidationErrors<F>,
    field: F,
    value: &str,
    message: &str,
) {
    if is_blank(value) {
        errors.insert(field, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Field {
        Name,
        Email,
    }

    impl FormField for Field {
        fn name(&self) -> &'static str {
            match self {
                Field::Name => "name",
                Field::Email => "email",
            }
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("jane@x.com"));
        assert!(is_valid_email("a.b@sub.domain.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("jane@localhost"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_first_message_wins() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::Email, "Email is required");
        errors.insert(Field::Email, "Email is invalid");
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_clear_field_only_touches_that_field() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::Name, "Name is required");
        errors.insert(Field::Email, "Email is required");

        assert!(errors.clear_field(Field::Name));
        assert!(!errors.clear_field(Field::Name));
        assert!(errors.contains(Field::Email));
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Email]);
    }

    #[test]
    fn test_check_email_rules() {
        let mut errors = ValidationErrors::new();
        check_email(&mut errors, Field::Email, "   ");
        assert_eq!(errors.get(Field::Email), Some("Email is required"));

        let mut errors = ValidationErrors::new();
        check_email(&mut errors, Field::Email, "nope");
        assert_eq!(errors.get(Field::Email), Some("Email is invalid"));
    }

    #[test]
    fn test_trimmed_len_counts_chars() {
        assert_eq!(trimmed_len("  héllo  "), 5);
        assert_eq!(Field::Name.name(), "name");
    }
}
