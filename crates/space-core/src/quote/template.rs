//! Message templates for a finished quote request.

use std::fmt::Write as _;

use chrono::NaiveDate;

use super::draft::{Attachment, QuoteDraft};
use crate::links::OutboundMessage;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const SHORT_RULE: &str = "━━━━━━━━━━━━━━━━";

/// Description characters kept in the WhatsApp message.
pub const WHATSAPP_DESCRIPTION_CHARS: usize = 200;

/// Long date as written in India, e.g. `16 October 2026`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

fn service_label(draft: &QuoteDraft, whatsapp: bool) -> &str {
    match draft.service() {
        Some(kind) if whatsapp => kind.whatsapp_label(),
        Some(kind) => kind.email_label(),
        None => draft.service_needed.as_str(),
    }
}

fn section(body: &mut String, title: &str) {
    let _ = write!(body, "\n{RULE}\n{title}\n{RULE}\n\n");
}

/// Subject line of the quote email.
pub fn quote_subject(draft: &QuoteDraft) -> String {
    format!(
        "Custom Quote Request: {} - {}",
        service_label(draft, false),
        draft.full_name
    )
}

/// Subject and body of the quote email.
pub fn quote_email(
    draft: &QuoteDraft,
    attachment: Option<&Attachment>,
    date: NaiveDate,
) -> OutboundMessage {
    let mut body = String::new();

    let _ = write!(body, "{RULE}\n📋 CUSTOM QUOTE REQUEST\n{RULE}\n\n");
    let _ = writeln!(body, "📅 Date: {}", long_date(date));

    section(&mut body, "👤 CLIENT INFORMATION");
    let _ = writeln!(body, "Full Name: {}", draft.full_name);
    let _ = writeln!(body, "Email: {}", draft.email);
    let _ = writeln!(body, "Phone: {}", draft.phone);
    if !draft.company.trim().is_empty() {
        let _ = writeln!(body, "Company: {}", draft.company);
    }

    section(&mut body, "🎯 PROJECT DETAILS");
    let _ = writeln!(body, "Service Required: {}", service_label(draft, false));
    let _ = write!(body, "\nProject Description:\n{}\n", draft.project_description);
    if !draft.additional_requirements.trim().is_empty() {
        let _ = write!(
            body,
            "\nAdditional Requirements:\n{}\n",
            draft.additional_requirements
        );
    }

    section(&mut body, "💰 BUDGET & TIMELINE");
    let budget = draft
        .budget()
        .map(|b| b.label().to_string())
        .unwrap_or_else(|| draft.budget_range.clone());
    let _ = writeln!(body, "Budget Range: {}", budget);
    let _ = writeln!(body, "Required Deadline: {}", draft.deadline);
    if let Some(estimate) = draft.estimate() {
        let _ = write!(body, "\n📊 Estimated Price Range:\n{}\n", estimate);
    }

    section(&mut body, "📌 ADDITIONAL INFORMATION");
    if let Some(referral) = draft.referral() {
        let _ = writeln!(body, "How did you hear about us: {}", referral.label());
    }
    match attachment {
        Some(file) => {
            let _ = writeln!(body, "Attachment: {} ({})", file.name, file.size_label());
        }
        None => body.push_str("No attachments\n"),
    }

    let _ = write!(
        body,
        "\n{RULE}\n\n\
         ⚡ NEXT STEPS:\n\
         1. SPACE team will review your requirements\n\
         2. You'll receive a detailed quote within 24 hours\n\
         3. Schedule a consultation call to discuss further\n\n\
         This request was submitted via the SPACE website quote form.\n\
         Please prioritize and respond within 24 hours.\n\n\
         Best regards,\n\
         SPACE Quote System"
    );

    OutboundMessage::new(quote_subject(draft), body)
}

/// Short WhatsApp version of the request.
pub fn quote_whatsapp(draft: &QuoteDraft) -> String {
    let description: String = draft
        .project_description
        .chars()
        .take(WHATSAPP_DESCRIPTION_CHARS)
        .collect();
    let ellipsis = if draft.project_description.chars().count() > WHATSAPP_DESCRIPTION_CHARS {
        "..."
    } else {
        ""
    };

    format!(
        "🎯 *Custom Quote Request*\n\n\
         👤 *Client:* {name}\n\
         📧 *Email:* {email}\n\
         📱 *Phone:* {phone}\n\n\
         {SHORT_RULE}\n\
         💼 *Service Needed:*\n{service}\n\n\
         📝 *Project Description:*\n{description}{ellipsis}\n\n\
         💰 *Budget:* {budget}\n\
         ⏱️ *Deadline:* {deadline}\n\n\
         {SHORT_RULE}\n\
         _Submitted via SPACE Quote Form_",
        name = draft.full_name,
        email = draft.email,
        phone = draft.phone,
        service = service_label(draft, true),
        budget = draft.budget_range,
        deadline = draft.deadline,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::QuoteField;

    fn draft() -> QuoteDraft {
        QuoteDraft::new()
            .with(QuoteField::FullName, "Jane Doe")
            .with(QuoteField::Email, "jane@x.com")
            .with(QuoteField::Phone, "+911234567890")
            .with(QuoteField::ServiceNeeded, "Frontend")
            .with(QuoteField::ProjectDescription, "A marketing site with a blog.")
            .with(QuoteField::BudgetRange, "50k-150k")
            .with(QuoteField::Deadline, "8 weeks")
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_long_date() {
        assert_eq!(long_date(date()), "16 October 2026");
        assert_eq!(
            long_date(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()),
            "5 January 2025"
        );
    }

    #[test]
    fn test_subject() {
        assert_eq!(
            quote_subject(&draft()),
            "Custom Quote Request: Frontend Website Development - Jane Doe"
        );
    }

    #[test]
    fn test_email_body_sections() {
        let msg = quote_email(&draft(), None, date());
        assert!(msg.body.contains("📅 Date: 16 October 2026"));
        assert!(msg.body.contains("Full Name: Jane Doe"));
        assert!(msg.body.contains("Service Required: Frontend Website Development"));
        assert!(msg.body.contains("Budget Range: ₹50,000 - ₹1,50,000"));
        assert!(msg.body.contains("Required Deadline: 8 weeks"));
        assert!(msg.body.contains("₹15,000 - ₹50,000"));
        assert!(msg.body.contains("No attachments"));
        assert!(!msg.body.contains("Company:"));
        assert!(!msg.body.contains("Additional Requirements:"));
        assert!(msg.body.ends_with("SPACE Quote System"));
    }

    #[test]
    fn test_email_optional_lines() {
        let d = draft()
            .with(QuoteField::Company, "Acme")
            .with(QuoteField::AdditionalRequirements, "Dark mode")
            .with(QuoteField::ReferralSource, "Google");
        let file = Attachment::new("brief.pdf", 2048).unwrap();
        let msg = quote_email(&d, Some(&file), date());
        assert!(msg.body.contains("Company: Acme"));
        assert!(msg.body.contains("Additional Requirements:\nDark mode"));
        assert!(msg.body.contains("How did you hear about us: Google Search"));
        assert!(msg.body.contains("Attachment: brief.pdf (2.00 KB)"));
    }

    #[test]
    fn test_whatsapp_truncates_description() {
        let long = "z".repeat(WHATSAPP_DESCRIPTION_CHARS + 20);
        let text = quote_whatsapp(&draft().with(QuoteField::ProjectDescription, long));
        let expected = format!("{}...", "z".repeat(WHATSAPP_DESCRIPTION_CHARS));
        assert!(text.contains(&expected));
        assert!(!text.contains(&"z".repeat(WHATSAPP_DESCRIPTION_CHARS + 1)));
    }

    #[test]
    fn test_whatsapp_short_description_untouched() {
        let text = quote_whatsapp(&draft());
        assert!(text.contains("A marketing site with a blog.\n"));
        assert!(text.contains("*Service Needed:*\nFrontend Development"));
        assert!(text.contains("💰 *Budget:* 50k-150k"));
    }
}
