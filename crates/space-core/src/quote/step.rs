//! Wizard steps of the quote form.

use serde::{Deserialize, Serialize};

use super::draft::QuoteField;

/// Number of steps in the quote wizard.
pub const TOTAL_STEPS: u8 = 4;

/// One page of the quote wizard. Always within `1..=TOTAL_STEPS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QuoteStep {
    Contact,
    Project,
    Budget,
    Review,
}

impl QuoteStep {
    pub const ALL: [QuoteStep; TOTAL_STEPS as usize] = [
        QuoteStep::Contact,
        QuoteStep::Project,
        QuoteStep::Budget,
        QuoteStep::Review,
    ];

    /// 1-based step number.
    pub fn number(&self) -> u8 {
        match self {
            QuoteStep::Contact => 1,
            QuoteStep::Project => 2,
            QuoteStep::Budget => 3,
            QuoteStep::Review => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Progress-bar caption.
    pub fn label(&self) -> &'static str {
        match self {
            QuoteStep::Contact => "Contact",
            QuoteStep::Project => "Project",
            QuoteStep::Budget => "Budget",
            QuoteStep::Review => "Review",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            QuoteStep::Contact => "Your Contact Details",
            QuoteStep::Project => "Project Requirements",
            QuoteStep::Budget => "Budget & Timeline",
            QuoteStep::Review => "Review Your Request",
        }
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(&self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    pub fn is_last(&self) -> bool {
        self.number() == TOTAL_STEPS
    }

    /// Width of the progress bar, in percent.
    pub fn progress_percent(&self) -> u8 {
        self.number() * 100 / TOTAL_STEPS
    }

    /// Fields entered on this step (required and optional).
    pub fn fields(&self) -> &'static [QuoteField] {
        match self {
            QuoteStep::Contact => &[
                QuoteField::FullName,
                QuoteField::Email,
                QuoteField::Phone,
                QuoteField::Company,
            ],
            QuoteStep::Project => &[
                QuoteField::ServiceNeeded,
                QuoteField::ProjectDescription,
                QuoteField::AdditionalRequirements,
            ],
            QuoteStep::Budget => &[
                QuoteField::BudgetRange,
                QuoteField::Deadline,
                QuoteField::ReferralSource,
            ],
            QuoteStep::Review => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(QuoteStep::Contact.previous(), None);
        assert_eq!(QuoteStep::Review.next(), None);
        assert_eq!(QuoteStep::from_number(0), None);
        assert_eq!(QuoteStep::from_number(5), None);
        assert_eq!(QuoteStep::from_number(3), Some(QuoteStep::Budget));
    }

    #[test]
    fn test_walk_forward_and_back() {
        let mut step = QuoteStep::Contact;
        let mut seen = vec![step];
        while let Some(next) = step.next() {
            step = next;
            seen.push(step);
        }
        assert_eq!(seen, QuoteStep::ALL.to_vec());
        assert_eq!(step.previous(), Some(QuoteStep::Budget));
    }

    #[test]
    fn test_progress() {
        assert_eq!(QuoteStep::Contact.progress_percent(), 25);
        assert_eq!(QuoteStep::Review.progress_percent(), 100);
    }

    #[test]
    fn test_every_field_belongs_to_one_step() {
        let mut fields: Vec<QuoteField> = QuoteStep::ALL
            .iter()
            .flat_map(|s| s.fields().iter().copied())
            .collect();
        let total = fields.len();
        fields.sort();
        fields.dedup();
        assert_eq!(fields.len(), total);
        assert_eq!(total, QuoteField::ALL.len());
    }
}
