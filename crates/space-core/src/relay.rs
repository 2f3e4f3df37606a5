//! Transactional email relay (EmailJS REST API).
//!
//! The core only builds the payload and enforces the configuration and
//! timeout rules. The HTTP call itself is behind [`EmailRelay`] so the web app
//! can use the browser's fetch while tests use an in-memory relay.

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{select, Either};
use serde::{Deserialize, Serialize};

use crate::config::EmailRelayConfig;
use crate::cta::CtaDraft;
use crate::error::{SiteError, SiteResult};

/// Fields substituted into the relay's email template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
    pub to_email: String,
}

/// JSON body POSTed to the relay endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayRequest {
    pub service_id: String,
    pub template_id: String,
    /// The account's public key
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl RelayRequest {
    /// Build the request for a CTA enquiry. Fails on placeholder credentials.
    pub fn from_cta(draft: &CtaDraft, config: &EmailRelayConfig) -> SiteResult<Self> {
        config.ensure_configured()?;
        Ok(Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            user_id: config.public_key.clone(),
            template_params: TemplateParams {
                from_name: draft.name.clone(),
                from_email: draft.email.clone(),
                phone: draft.phone.clone(),
                service: draft.service.label().to_string(),
                message: draft.message.clone(),
                to_email: config.recipient.clone(),
            },
        })
    }

    pub fn to_json(&self) -> SiteResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Something that can hand a [`RelayRequest`] to the relay service.
#[allow(async_fn_in_trait)]
pub trait EmailRelay {
    async fn send(&self, endpoint: &str, request: &RelayRequest) -> SiteResult<()>;
}

/// Run `relay.send` but give up once `timer` fires.
///
/// `timer` is the platform's sleep future for `timeout`; the value of
/// `timeout` is only used for the error.
pub async fn deliver<R, T>(
    relay: &R,
    endpoint: &str,
    request: &RelayRequest,
    timeout: Duration,
    timer: T,
) -> SiteResult<()>
where
    R: EmailRelay,
    T: Future<Output = ()>,
{
    let send = pin!(relay.send(endpoint, request));
    let timer = pin!(timer);
    match select(send, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(SiteError::RelayTimeout(timeout)),
    }
}

/// Send a CTA enquiry through the configured relay.
///
/// `sleep` produces the platform timer used for the timeout.
pub async fn send_cta<R, F, T>(
    relay: &R,
    config: &EmailRelayConfig,
    draft: &CtaDraft,
    sleep: F,
) -> SiteResult<()>
where
    R: EmailRelay,
    F: FnOnce(Duration) -> T,
    T: Future<Output = ()>,
{
    let request = RelayRequest::from_cta(draft, config)?;
    let timeout = config.timeout();

    tracing::debug!(service = %draft.service, "Sending enquiry through email relay");
    let result = deliver(relay, &config.endpoint, &request, timeout, sleep(timeout)).await;
    match &result {
        Ok(()) => tracing::info!(service = %draft.service, "Enquiry delivered"),
        Err(e) => tracing::warn!(error = %e, "Email relay failed"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cta::CtaField;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRelay {
        sent: Mutex<Vec<(String, RelayRequest)>>,
        fail: bool,
    }

    impl EmailRelay for RecordingRelay {
        async fn send(&self, endpoint: &str, request: &RelayRequest) -> SiteResult<()> {
            if self.fail {
                return Err(SiteError::Relay("HTTP 400".into()));
            }
            self.sent
                .lock()
                .unwrap()
                .push((endpoint.to_string(), request.clone()));
            Ok(())
        }
    }

    struct StalledRelay;

    impl EmailRelay for StalledRelay {
        async fn send(&self, _endpoint: &str, _request: &RelayRequest) -> SiteResult<()> {
            std::future::pending().await
        }
    }

    fn configured() -> EmailRelayConfig {
        EmailRelayConfig {
            service_id: "service_abc".into(),
            template_id: "template_xyz".into(),
            public_key: "pk_123".into(),
            ..EmailRelayConfig::default()
        }
    }

    fn draft() -> CtaDraft {
        CtaDraft::new()
            .with(CtaField::Name, "Asha")
            .with(CtaField::Email, "asha@site.io")
            .with(CtaField::Phone, "+919000000000")
    }

    #[test]
    fn test_payload_shape() {
        let request = RelayRequest::from_cta(&draft(), &configured()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();
        assert_eq!(json["service_id"], "service_abc");
        assert_eq!(json["user_id"], "pk_123");
        assert_eq!(json["template_params"]["from_name"], "Asha");
        assert_eq!(json["template_params"]["service"], "General Inquiry");
        assert_eq!(json["template_params"]["to_email"], "prajwalganiga06@gmail.com");
    }

    #[test]
    fn test_placeholders_fail_fast() {
        let err = RelayRequest::from_cta(&draft(), &EmailRelayConfig::default()).unwrap_err();
        assert!(matches!(err, SiteError::RelayNotConfigured("service_id")));
    }

    #[tokio::test]
    async fn test_send_cta_delivers() {
        let relay = RecordingRelay::default();
        let config = configured();
        send_cta(&relay, &config, &draft(), tokio::time::sleep)
            .await
            .unwrap();
        let sent = relay.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, config.endpoint);
    }

    #[tokio::test]
    async fn test_relay_error_propagates() {
        let relay = RecordingRelay {
            fail: true,
            ..Default::default()
        };
        let err = send_cta(&relay, &configured(), &draft(), tokio::time::sleep)
            .await
            .unwrap_err();
        assert!(matches!(err, SiteError::Relay(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_relay_times_out() {
        let err = send_cta(&StalledRelay, &configured(), &draft(), tokio::time::sleep)
            .await
            .unwrap_err();
        assert!(matches!(err, SiteError::RelayTimeout(d) if d == Duration::from_secs(10)));
    }

    #[tokio::test]
    async fn test_unconfigured_never_calls_relay() {
        let relay = RecordingRelay::default();
        let result = send_cta(&relay, &EmailRelayConfig::default(), &draft(), tokio::time::sleep).await;
        assert!(result.is_err());
        assert!(relay.sent.lock().unwrap().is_empty());
    }
}
