//! SPACE Website Core Library
//!
//! Everything the SPACE marketing site does besides drawing pixels.
//!
//! ## Overview
//!
//! SPACE is a small technology-services company. Its site is a set of routed
//! pages built from static content and a handful of forms. There is no
//! backend: forms are validated in the browser and handed off as `mailto:`
//! and WhatsApp deep links, or sent through a third-party email relay.
//!
//! ## Modules
//!
//! - **quote**: the four-step quote wizard, its validation and templates
//! - **contact** / **cta**: the contact page form and the CTA banner modal
//! - **links**: `mailto:`, `wa.me` and `tel:` builders
//! - **relay**: email relay payloads with a timeout
//! - **chat**: the keyword-matching project assistant
//! - **reveal** / **carousel**: scroll-reveal and rotation bookkeeping
//! - **catalog**: static page content and its filters
//!
//! ## Quick Start
//!
//! ```ignore
//! use space_core::{QuoteField, QuoteWizard, SiteConfig};
//!
//! let mut wizard = QuoteWizard::new();
//! wizard.set_field(QuoteField::FullName, "Jane Doe");
//! // ... fill the remaining fields ...
//! while !wizard.step().is_last() {
//!     wizard.next()?;
//! }
//! let submission = wizard.submit(&SiteConfig::default(), today)?;
//! println!("{}", submission.mailto);
//! ```

pub mod carousel;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod contact;
pub mod cta;
pub mod error;
pub mod form;
pub mod links;
pub mod quote;
pub mod relay;
pub mod reveal;

// Re-exports
pub use chat::{ChatMessage, Sender, Topic, Transcript};
pub use config::{ContactChannels, EmailRelayConfig, SiteConfig};
pub use contact::{ContactDraft, ContactField, InquiryKind};
pub use cta::{CtaDraft, CtaField, CtaService, RelayStatus};
pub use error::{SiteError, SiteResult, WizardError};
pub use form::{FormField, ValidationErrors};
pub use links::OutboundMessage;
pub use quote::{
    QuoteDraft, QuoteErrors, QuoteField, QuoteStep, QuoteSubmission, QuoteWizard, ServiceKind,
};
pub use relay::{EmailRelay, RelayRequest};
pub use reveal::{RevealOptions, RevealSet};
