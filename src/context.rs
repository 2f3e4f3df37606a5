//! Site-wide context.
//!
//! The [`SiteConfig`] is provided once by `App` and read by any component
//! that builds links or talks to the email relay.
//!
//! ## Usage
//!
//! ```ignore
//! let config = use_site_config();
//! let link = config.contact.tel_link();
//! ```

use dioxus::prelude::*;
use space_core::SiteConfig;

/// Hook to access the site configuration from context.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}
