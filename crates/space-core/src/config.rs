//! Site configuration: public contact channels and email relay credentials.
//!
//! Defaults are the company's published channels. The relay identifiers ship
//! as placeholders and must be supplied (build-time env vars for the web app,
//! a JSON file for the CLI) before the relay path works.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};
use crate::links;

/// Prefix used by the placeholder relay identifiers.
const PLACEHOLDER_PREFIX: &str = "YOUR_";

/// Default EmailJS REST endpoint.
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Public ways to reach the company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactChannels {
    /// Inbox that receives quote and contact emails
    pub email: String,
    /// Phone number in E.164 form (with leading `+`)
    pub phone: String,
    /// WhatsApp number, digits only
    pub whatsapp: String,
    pub address: String,
    pub map_link: String,
}

impl Default for ContactChannels {
    fn default() -> Self {
        Self {
            email: "spaceforwebsite@gmail.com".to_string(),
            phone: "+919110687983".to_string(),
            whatsapp: "919110687983".to_string(),
            address: "Tech Innovation Hub, Bangalore, India".to_string(),
            map_link: "https://maps.app.goo.gl/example".to_string(),
        }
    }
}

impl ContactChannels {
    pub fn tel_link(&self) -> String {
        links::tel(&self.phone)
    }

    pub fn whatsapp_link(&self, text: &str) -> String {
        links::whatsapp(&self.whatsapp, text)
    }
}

/// Credentials for the third-party transactional email relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailRelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Address the relay template delivers to
    pub recipient: String,
    /// Give up waiting for the relay after this many milliseconds
    pub timeout_ms: u64,
}

impl Default for EmailRelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            service_id: "YOUR_SERVICE_ID".to_string(),
            template_id: "YOUR_TEMPLATE_ID".to_string(),
            public_key: "YOUR_PUBLIC_KEY".to_string(),
            recipient: "prajwalganiga06@gmail.com".to_string(),
            timeout_ms: 10_000,
        }
    }
}

impl EmailRelayConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// First identifier that is still empty or a placeholder.
    pub fn missing_credential(&self) -> Option<&'static str> {
        [
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("public_key", &self.public_key),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty() || value.starts_with(PLACEHOLDER_PREFIX))
        .map(|(name, _)| name)
    }

    pub fn is_configured(&self) -> bool {
        self.missing_credential().is_none()
    }

    /// Fail fast with [`SiteError::RelayNotConfigured`] on placeholders.
    pub fn ensure_configured(&self) -> SiteResult<()> {
        match self.missing_credential() {
            Some(name) => Err(SiteError::RelayNotConfigured(name)),
            None => Ok(()),
        }
    }
}

/// Everything the site needs to know about the outside world.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub contact: ContactChannels,
    pub relay: EmailRelayConfig,
}

impl SiteConfig {
    /// Parse a JSON document; missing keys fall back to defaults.
    pub fn from_json_str(json: &str) -> SiteResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Load a JSON config file.
    pub fn load(path: &Path) -> SiteResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), "Loaded site config");
        Ok(config)
    }

    /// Defaults with relay identifiers taken from the build environment.
    ///
    /// Reads `SPACE_EMAILJS_SERVICE_ID`, `SPACE_EMAILJS_TEMPLATE_ID` and
    /// `SPACE_EMAILJS_PUBLIC_KEY` at compile time.
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        config.apply_relay_overrides(
            option_env!("SPACE_EMAILJS_SERVICE_ID"),
            option_env!("SPACE_EMAILJS_TEMPLATE_ID"),
            option_env!("SPACE_EMAILJS_PUBLIC_KEY"),
        );
        config
    }

    /// Replace relay identifiers that are provided and non-empty.
    pub fn apply_relay_overrides(
        &mut self,
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) {
        let pairs = [
            (&mut self.relay.service_id, service_id),
            (&mut self.relay.template_id, template_id),
            (&mut self.relay.public_key, public_key),
        ];
        for (slot, value) in pairs {
            if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
                *slot = value.trim().to_string();
            }
        }
    }

    fn check(&self) -> SiteResult<()> {
        if self.contact.email.trim().is_empty() {
            return Err(SiteError::Config("contact.email must not be empty".into()));
        }
        if !self.contact.whatsapp.chars().any(|c| c.is_ascii_digit()) {
            return Err(SiteError::Config(
                "contact.whatsapp must contain a phone number".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_relay_is_placeholder() {
        let config = SiteConfig::default();
        assert!(!config.relay.is_configured());
        assert_eq!(config.relay.missing_credential(), Some("service_id"));
        assert!(matches!(
            config.relay.ensure_configured(),
            Err(SiteError::RelayNotConfigured("service_id"))
        ));
    }

    #[test]
    fn test_overrides_fill_credentials() {
        let mut config = SiteConfig::default();
        config.apply_relay_overrides(Some("svc_1"), Some(" tpl_2 "), Some(""));
        assert_eq!(config.relay.service_id, "svc_1");
        assert_eq!(config.relay.template_id, "tpl_2");
        assert_eq!(config.relay.missing_credential(), Some("public_key"));

        config.apply_relay_overrides(None, None, Some("pk_3"));
        assert!(config.relay.is_configured());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            SiteConfig::from_json_str(r#"{"contact": {"email": "hello@space.dev"}}"#).unwrap();
        assert_eq!(config.contact.email, "hello@space.dev");
        assert_eq!(config.contact.whatsapp, "919110687983");
        assert_eq!(config.relay.endpoint, DEFAULT_RELAY_ENDPOINT);
    }

    #[test]
    fn test_rejects_empty_email() {
        let err = SiteConfig::from_json_str(r#"{"contact": {"email": " "}}"#).unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(
            &path,
            r#"{"relay": {"service_id": "s", "template_id": "t", "public_key": "p"}}"#,
        )
        .unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert!(config.relay.is_configured());
        assert_eq!(config.relay.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_contact_links() {
        let contact = ContactChannels::default();
        assert_eq!(contact.tel_link(), "tel:+919110687983");
        assert_eq!(
            contact.whatsapp_link("hi"),
            "https://wa.me/919110687983?text=hi"
        );
    }
}
