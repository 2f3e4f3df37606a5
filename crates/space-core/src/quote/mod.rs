//! Custom quote requests.
//!
//! A four-step wizard collects a [`QuoteDraft`], validates each step as the
//! client moves forward, and on submit renders the request as an email and a
//! WhatsApp message.

mod draft;
mod service;
mod step;
mod template;
mod validate;
mod wizard;

pub use draft::{Attachment, QuoteDraft, QuoteField, MAX_ATTACHMENT_BYTES};
pub use service::{format_inr, BudgetRange, PriceEstimate, ReferralSource, ServiceKind};
pub use step::{QuoteStep, TOTAL_STEPS};
pub use template::{
    long_date, quote_email, quote_subject, quote_whatsapp, WHATSAPP_DESCRIPTION_CHARS,
};
pub use validate::{
    description_counter, validate_all, validate_step, QuoteErrors, MIN_DESCRIPTION_CHARS,
};
pub use wizard::{QuoteSubmission, QuoteWizard, WizardPhase, SUBMIT_DELAY};
