//! The contact page form.

use std::fmt::Write as _;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::form::{check_email, check_required, is_blank, trimmed_len, FormField, ValidationErrors};
use crate::links::{self, OutboundMessage};

/// Minimum message length, in trimmed characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Simulated send time before the success banner.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// How long the success banner stays before the form clears.
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

/// Subject of the plain "email us" link.
pub const DIRECT_EMAIL_SUBJECT: &str = "Inquiry from SPACE Website";

/// WhatsApp text used when the form is not filled in enough.
pub const GENERIC_WHATSAPP_TEXT: &str =
    "Hi SPACE Team! I'm interested in your services and would like to discuss a project.";

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const SHORT_RULE: &str = "━━━━━━━━━━━━━━━━";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    ProjectType,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::ProjectType,
        ContactField::Message,
    ];
}

impl FormField for ContactField {
    fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::ProjectType => "projectType",
            ContactField::Message => "message",
        }
    }
}

/// What the visitor wants to talk about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InquiryKind {
    Frontend,
    FullStack,
    #[serde(rename = "AIDL")]
    Aidl,
    Workshop,
    #[serde(rename = "IEEE")]
    Ieee,
    Other,
}

impl InquiryKind {
    pub const ALL: [InquiryKind; 6] = [
        InquiryKind::Frontend,
        InquiryKind::FullStack,
        InquiryKind::Aidl,
        InquiryKind::Workshop,
        InquiryKind::Ieee,
        InquiryKind::Other,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            InquiryKind::Frontend => "Frontend",
            InquiryKind::FullStack => "FullStack",
            InquiryKind::Aidl => "AIDL",
            InquiryKind::Workshop => "Workshop",
            InquiryKind::Ieee => "IEEE",
            InquiryKind::Other => "Other",
        }
    }

    /// Dropdown text, also used in the email.
    pub fn label(&self) -> &'static str {
        match self {
            InquiryKind::Frontend => "Frontend Development",
            InquiryKind::FullStack => "Full Stack Development",
            InquiryKind::Aidl => "AI/Deep Learning Project",
            InquiryKind::Workshop => "Training / Workshop",
            InquiryKind::Ieee => "IEEE Paper Support",
            InquiryKind::Other => "Other Inquiry",
        }
    }

    pub fn whatsapp_label(&self) -> &'static str {
        match self {
            InquiryKind::Frontend => "Frontend Development",
            InquiryKind::FullStack => "Full Stack Development",
            InquiryKind::Aidl => "AI/Deep Learning",
            InquiryKind::Workshop => "Training/Workshop",
            InquiryKind::Ieee => "IEEE Paper Support",
            InquiryKind::Other => "General Inquiry",
        }
    }
}

impl FromStr for InquiryKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InquiryKind::ALL
            .into_iter()
            .find(|k| k.code() == s)
            .ok_or(())
    }
}

pub type ContactErrors = ValidationErrors<ContactField>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub message: String,
}

impl ContactDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::ProjectType => &self.project_type,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::ProjectType => &mut self.project_type,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn with(mut self, field: ContactField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn inquiry(&self) -> Option<InquiryKind> {
        self.project_type.parse().ok()
    }

    /// Enough is filled in to send a personalised WhatsApp message.
    pub fn ready_for_whatsapp(&self) -> bool {
        !self.name.is_empty() && self.inquiry().is_some() && !self.message.is_empty()
    }
}

pub fn validate_contact(draft: &ContactDraft) -> ContactErrors {
    let mut errors = ContactErrors::new();

    check_required(&mut errors, ContactField::Name, &draft.name, "Name is required");
    check_email(&mut errors, ContactField::Email, &draft.email);
    if draft.inquiry().is_none() {
        errors.insert(ContactField::ProjectType, "Please select a service");
    }
    if is_blank(&draft.message) {
        errors.insert(ContactField::Message, "Message is required");
    } else if trimmed_len(&draft.message) < MIN_MESSAGE_CHARS {
        errors.insert(ContactField::Message, "Message must be at least 10 characters");
    }

    errors
}

fn inquiry_label(draft: &ContactDraft, whatsapp: bool) -> &str {
    match draft.inquiry() {
        Some(kind) if whatsapp => kind.whatsapp_label(),
        Some(kind) => kind.label(),
        None => draft.project_type.as_str(),
    }
}

pub fn contact_email(draft: &ContactDraft) -> OutboundMessage {
    let label = inquiry_label(draft, false);
    let subject = format!("New Inquiry: {} - {}", label, draft.name);
    let phone = if draft.phone.is_empty() {
        "Not provided"
    } else {
        draft.phone.as_str()
    };

    let mut body = String::from(
        "Hello SPACE Team,\n\nYou have received a new inquiry from your website.\n\n",
    );
    let _ = write!(body, "{RULE}\nCLIENT INFORMATION\n{RULE}\n\n");
    let _ = writeln!(body, "👤 Name: {}", draft.name);
    let _ = writeln!(body, "📧 Email: {}", draft.email);
    let _ = writeln!(body, "📱 Phone: {}", phone);
    let _ = writeln!(body, "🎯 Service Needed: {}", label);
    let _ = write!(body, "\n{RULE}\nMESSAGE\n{RULE}\n\n{}\n\n{RULE}\n\n", draft.message);
    body.push_str(
        "This inquiry was submitted via the SPACE website contact form.\n\
         Please respond within 24 hours for best client experience.\n\n\
         Best regards,\n\
         SPACE Website System",
    );

    OutboundMessage::new(subject, body)
}

/// WhatsApp text for the form, or the generic greeting when it is incomplete.
pub fn contact_whatsapp(draft: &ContactDraft) -> String {
    if !draft.ready_for_whatsapp() {
        return GENERIC_WHATSAPP_TEXT.to_string();
    }

    let mut text = String::from("🌟 *New Project Inquiry from SPACE Website*\n\n");
    let _ = writeln!(text, "👤 *Name:* {}", draft.name);
    let _ = writeln!(text, "📧 *Email:* {}", draft.email);
    if !draft.phone.is_empty() {
        let _ = writeln!(text, "📱 *Phone:* {}", draft.phone);
    }
    let _ = writeln!(text, "🎯 *Service:* {}", inquiry_label(draft, true));
    let _ = write!(
        text,
        "\n{SHORT_RULE}\n📝 *Message:*\n{}\n{SHORT_RULE}\n\n_Sent via SPACE Contact Form_",
        draft.message
    );
    text
}

/// `mailto:` with only the standard subject.
pub fn direct_email_link(address: &str) -> String {
    links::mailto(address, DIRECT_EMAIL_SUBJECT, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        ContactDraft::new()
            .with(ContactField::Name, "Ravi")
            .with(ContactField::Email, "ravi@example.in")
            .with(ContactField::ProjectType, "AIDL")
            .with(ContactField::Message, "Need a vision model for crop health.")
    }

    #[test]
    fn test_valid_form() {
        assert!(validate_contact(&filled()).is_empty());
    }

    #[test]
    fn test_empty_form_messages() {
        let errors = validate_contact(&ContactDraft::new());
        assert_eq!(errors.get(ContactField::Name), Some("Name is required"));
        assert_eq!(errors.get(ContactField::Email), Some("Email is required"));
        assert_eq!(errors.get(ContactField::ProjectType), Some("Please select a service"));
        assert_eq!(errors.get(ContactField::Message), Some("Message is required"));
        assert!(!errors.contains(ContactField::Phone));
    }

    #[test]
    fn test_short_message() {
        let draft = filled().with(ContactField::Message, "  long enough ");
        assert_eq!(validate_contact(&draft).len(), 0);
        let draft = filled().with(ContactField::Message, "   hi there ");
        assert_eq!(
            validate_contact(&draft).get(ContactField::Message),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn test_email_template() {
        let msg = contact_email(&filled());
        assert_eq!(msg.subject, "New Inquiry: AI/Deep Learning Project - Ravi");
        assert!(msg.body.starts_with("Hello SPACE Team,"));
        assert!(msg.body.contains("📱 Phone: Not provided"));
        assert!(msg.body.contains("Need a vision model for crop health."));
        assert!(msg.body.ends_with("SPACE Website System"));
    }

    #[test]
    fn test_whatsapp_personalised_or_generic() {
        let text = contact_whatsapp(&filled().with(ContactField::Phone, "+91 99999 00000"));
        assert!(text.contains("🎯 *Service:* AI/Deep Learning"));
        assert!(text.contains("📱 *Phone:* +91 99999 00000"));

        let text = contact_whatsapp(&filled().with(ContactField::Message, ""));
        assert_eq!(text, GENERIC_WHATSAPP_TEXT);
    }

    #[test]
    fn test_direct_email_link() {
        assert_eq!(
            direct_email_link("spaceforwebsite@gmail.com"),
            "mailto:spaceforwebsite@gmail.com?subject=Inquiry%20from%20SPACE%20Website"
        );
    }
}
