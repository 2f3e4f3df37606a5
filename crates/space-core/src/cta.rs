//! The call-to-action banner: a short enquiry modal sent through the email
//! relay, plus a WhatsApp quick-connect modal.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::form::{check_email, check_required, FormField, ValidationErrors};

/// Delay before the modal closes after a successful send.
pub const CLOSE_DELAY: Duration = Duration::from_millis(2000);

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! We'll contact you soon.";
pub const FAILURE_MESSAGE: &str =
    "Failed to send message. Please try WhatsApp or call us directly.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CtaField {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl FormField for CtaField {
    fn name(&self) -> &'static str {
        match self {
            CtaField::Name => "name",
            CtaField::Email => "email",
            CtaField::Phone => "phone",
            CtaField::Service => "service",
            CtaField::Message => "message",
        }
    }
}

/// Services offered in the CTA dropdown. The form value is the label itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CtaService {
    Frontend,
    FullStack,
    AiMl,
    IeeePaper,
    CorporateTraining,
    #[default]
    GeneralInquiry,
}

impl CtaService {
    pub const ALL: [CtaService; 6] = [
        CtaService::Frontend,
        CtaService::FullStack,
        CtaService::AiMl,
        CtaService::IeeePaper,
        CtaService::CorporateTraining,
        CtaService::GeneralInquiry,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CtaService::Frontend => "Frontend Development",
            CtaService::FullStack => "Full Stack Development",
            CtaService::AiMl => "AI/ML Projects",
            CtaService::IeeePaper => "IEEE Paper Assistance",
            CtaService::CorporateTraining => "Corporate Training",
            CtaService::GeneralInquiry => "General Inquiry",
        }
    }
}

impl fmt::Display for CtaService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CtaService {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CtaService::ALL
            .into_iter()
            .find(|svc| svc.label() == s)
            .ok_or(())
    }
}

pub type CtaErrors = ValidationErrors<CtaField>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: CtaService,
    pub message: String,
}

impl CtaDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a text field. `Service` takes a dropdown label; unknown labels
    /// leave the selection as it was.
    pub fn set(&mut self, field: CtaField, value: impl Into<String>) {
        let value = value.into();
        match field {
            CtaField::Name => self.name = value,
            CtaField::Email => self.email = value,
            CtaField::Phone => self.phone = value,
            CtaField::Message => self.message = value,
            CtaField::Service => {
                if let Ok(service) = value.parse() {
                    self.service = service;
                }
            }
        }
    }

    pub fn with(mut self, field: CtaField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Name and email are present, so the relay can be tried too.
    pub fn can_relay(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }
}

pub fn validate_cta(draft: &CtaDraft) -> CtaErrors {
    let mut errors = CtaErrors::new();
    check_required(&mut errors, CtaField::Name, &draft.name, "Name is required");
    check_email(&mut errors, CtaField::Email, &draft.email);
    check_required(&mut errors, CtaField::Phone, &draft.phone, "Phone is required");
    errors
}

/// Opening line for the quick-connect WhatsApp chat.
pub fn whatsapp_intro(draft: &CtaDraft) -> String {
    let name = if draft.name.is_empty() {
        "[Your Name]"
    } else {
        draft.name.as_str()
    };
    let message = if draft.message.is_empty() {
        "I would like to discuss my project."
    } else {
        draft.message.as_str()
    };
    format!(
        "Hi! I'm {}. I'm interested in {}. {}",
        name, draft.service, message
    )
}

/// Progress of a relay send, as shown in the modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelayStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl RelayStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, RelayStatus::Sending)
    }

    /// Banner text, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            RelayStatus::Sent => Some(SUCCESS_MESSAGE),
            RelayStatus::Failed => Some(FAILURE_MESSAGE),
            RelayStatus::Idle | RelayStatus::Sending => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_service() {
        assert_eq!(CtaDraft::new().service, CtaService::GeneralInquiry);
    }

    #[test]
    fn test_service_from_label() {
        let draft = CtaDraft::new().with(CtaField::Service, "AI/ML Projects");
        assert_eq!(draft.service, CtaService::AiMl);
        let draft = draft.with(CtaField::Service, "Blockchain");
        assert_eq!(draft.service, CtaService::AiMl);
    }

    #[test]
    fn test_required_fields() {
        let errors = validate_cta(&CtaDraft::new());
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![CtaField::Name, CtaField::Email, CtaField::Phone]
        );
        let ok = CtaDraft::new()
            .with(CtaField::Name, "Asha")
            .with(CtaField::Email, "asha@site.io")
            .with(CtaField::Phone, "+91 90000 00000");
        assert!(validate_cta(&ok).is_empty());
    }

    #[test]
    fn test_whatsapp_intro_placeholders() {
        assert_eq!(
            whatsapp_intro(&CtaDraft::new()),
            "Hi! I'm [Your Name]. I'm interested in General Inquiry. I would like to discuss my project."
        );
        let draft = CtaDraft::new()
            .with(CtaField::Name, "Asha")
            .with(CtaField::Service, "Corporate Training")
            .with(CtaField::Message, "Team of 20.");
        assert_eq!(
            whatsapp_intro(&draft),
            "Hi! I'm Asha. I'm interested in Corporate Training. Team of 20."
        );
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(RelayStatus::Idle.message(), None);
        assert_eq!(RelayStatus::Sent.message(), Some(SUCCESS_MESSAGE));
        assert_eq!(RelayStatus::Failed.message(), Some(FAILURE_MESSAGE));
    }
}
