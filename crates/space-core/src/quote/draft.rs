//! The in-progress quote request.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::service::{BudgetRange, PriceEstimate, ReferralSource, ServiceKind};
use crate::error::{SiteError, SiteResult};
use crate::form::FormField;

/// Largest attachment accepted by the quote form (10 MiB).
pub const MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Inputs of the quote form, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QuoteField {
    FullName,
    Email,
    Phone,
    Company,
    ServiceNeeded,
    ProjectDescription,
    AdditionalRequirements,
    BudgetRange,
    Deadline,
    ReferralSource,
}

impl QuoteField {
    pub const ALL: [QuoteField; 10] = [
        QuoteField::FullName,
        QuoteField::Email,
        QuoteField::Phone,
        QuoteField::Company,
        QuoteField::ServiceNeeded,
        QuoteField::ProjectDescription,
        QuoteField::AdditionalRequirements,
        QuoteField::BudgetRange,
        QuoteField::Deadline,
        QuoteField::ReferralSource,
    ];

    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            QuoteField::FullName => "Full Name",
            QuoteField::Email => "Email Address",
            QuoteField::Phone => "Phone Number",
            QuoteField::Company => "Company/Organization",
            QuoteField::ServiceNeeded => "Primary Service Needed",
            QuoteField::ProjectDescription => "Detailed Project Description",
            QuoteField::AdditionalRequirements => "Additional Requirements",
            QuoteField::BudgetRange => "Budget Range",
            QuoteField::Deadline => "Expected Deadline",
            QuoteField::ReferralSource => "How did you hear about us?",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(
            self,
            QuoteField::Company | QuoteField::AdditionalRequirements | QuoteField::ReferralSource
        )
    }
}

impl FormField for QuoteField {
    fn name(&self) -> &'static str {
        match self {
            QuoteField::FullName => "fullName",
            QuoteField::Email => "email",
            QuoteField::Phone => "phone",
            QuoteField::Company => "company",
            QuoteField::ServiceNeeded => "serviceNeeded",
            QuoteField::ProjectDescription => "projectDescription",
            QuoteField::AdditionalRequirements => "additionalRequirements",
            QuoteField::BudgetRange => "budgetRange",
            QuoteField::Deadline => "deadline",
            QuoteField::ReferralSource => "referralSource",
        }
    }
}

impl FromStr for QuoteField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuoteField::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or(())
    }
}

/// A file the client attached to the request. Only its metadata travels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub size_bytes: u64,
}

impl Attachment {
    /// Accept a file if it is within [`MAX_ATTACHMENT_BYTES`].
    pub fn new(name: impl Into<String>, size_bytes: u64) -> SiteResult<Self> {
        let name = name.into();
        if size_bytes > MAX_ATTACHMENT_BYTES {
            return Err(SiteError::AttachmentTooLarge {
                name,
                size: size_bytes,
                limit: MAX_ATTACHMENT_BYTES,
            });
        }
        Ok(Self { name, size_bytes })
    }

    /// Size in KB with two decimals, e.g. `12.50 KB`.
    pub fn size_label(&self) -> String {
        format!("{:.2} KB", self.size_bytes as f64 / 1024.0)
    }
}

/// Field values of the quote form. Everything is kept as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service_needed: String,
    pub project_description: String,
    pub additional_requirements: String,
    pub budget_range: String,
    pub deadline: String,
    pub referral_source: String,
}

impl QuoteDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: QuoteField) -> &str {
        match field {
            QuoteField::FullName => &self.full_name,
            QuoteField::Email => &self.email,
            QuoteField::Phone => &self.phone,
            QuoteField::Company => &self.company,
            QuoteField::ServiceNeeded => &self.service_needed,
            QuoteField::ProjectDescription => &self.project_description,
            QuoteField::AdditionalRequirements => &self.additional_requirements,
            QuoteField::BudgetRange => &self.budget_range,
            QuoteField::Deadline => &self.deadline,
            QuoteField::ReferralSource => &self.referral_source,
        }
    }

    pub fn set(&mut self, field: QuoteField, value: impl Into<String>) {
        let slot = match field {
            QuoteField::FullName => &mut self.full_name,
            QuoteField::Email => &mut self.email,
            QuoteField::Phone => &mut self.phone,
            QuoteField::Company => &mut self.company,
            QuoteField::ServiceNeeded => &mut self.service_needed,
            QuoteField::ProjectDescription => &mut self.project_description,
            QuoteField::AdditionalRequirements => &mut self.additional_requirements,
            QuoteField::BudgetRange => &mut self.budget_range,
            QuoteField::Deadline => &mut self.deadline,
            QuoteField::ReferralSource => &mut self.referral_source,
        };
        *slot = value.into();
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, field: QuoteField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn service(&self) -> Option<ServiceKind> {
        self.service_needed.parse().ok()
    }

    pub fn budget(&self) -> Option<BudgetRange> {
        self.budget_range.parse().ok()
    }

    pub fn referral(&self) -> Option<ReferralSource> {
        ReferralSource::ALL
            .into_iter()
            .find(|r| r.code() == self.referral_source)
    }

    /// Price band for the selected service, if any.
    pub fn estimate(&self) -> Option<PriceEstimate> {
        self.service().map(|s| s.estimate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_every_field() {
        let mut draft = QuoteDraft::new();
        for field in QuoteField::ALL {
            draft.set(field, field.name());
        }
        for field in QuoteField::ALL {
            assert_eq!(draft.get(field), field.name());
        }
    }

    #[test]
    fn test_field_names_parse_back() {
        for field in QuoteField::ALL {
            assert_eq!(field.name().parse::<QuoteField>(), Ok(field));
        }
        assert!("full_name".parse::<QuoteField>().is_err());
    }

    #[test]
    fn test_selections_resolve() {
        let draft = QuoteDraft::new()
            .with(QuoteField::ServiceNeeded, "AIDL")
            .with(QuoteField::BudgetRange, "flexible")
            .with(QuoteField::ReferralSource, "LinkedIn");
        assert_eq!(draft.service(), Some(ServiceKind::Aidl));
        assert_eq!(draft.budget(), Some(BudgetRange::Flexible));
        assert_eq!(draft.referral(), Some(ReferralSource::LinkedIn));
        assert_eq!(draft.estimate().map(|e| e.min), Some(80_000));
    }

    #[test]
    fn test_attachment_limit() {
        assert!(Attachment::new("brief.pdf", MAX_ATTACHMENT_BYTES).is_ok());
        let err = Attachment::new("video.zip", MAX_ATTACHMENT_BYTES + 1).unwrap_err();
        assert!(matches!(err, SiteError::AttachmentTooLarge { .. }));
    }

    #[test]
    fn test_attachment_size_label() {
        let file = Attachment::new("brief.pdf", 12_800).unwrap();
        assert_eq!(file.size_label(), "12.50 KB");
    }

    #[test]
    fn test_draft_serializes_with_form_names() {
        let draft = QuoteDraft::new().with(QuoteField::FullName, "Jane");
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["fullName"], "Jane");
        assert_eq!(json["serviceNeeded"], "");
    }
}
