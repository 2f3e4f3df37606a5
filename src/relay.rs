//! Email relay over the browser's `fetch`.

use gloo::net::http::Request;
use gloo::timers::future::sleep;
use space_core::cta::CtaDraft;
use space_core::relay::send_cta;
use space_core::{EmailRelay, EmailRelayConfig, RelayRequest, SiteError, SiteResult};

/// POSTs the request as JSON with `gloo-net`.
pub struct FetchRelay;

impl EmailRelay for FetchRelay {
    async fn send(&self, endpoint: &str, request: &RelayRequest) -> SiteResult<()> {
        let response = Request::post(endpoint)
            .json(request)
            .map_err(|e| SiteError::Relay(e.to_string()))?
            .send()
            .await
            .map_err(|e| SiteError::Relay(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(SiteError::Relay(format!(
                "HTTP {} {}",
                response.status(),
                response.status_text()
            )))
        }
    }
}

/// Send a CTA enquiry, giving up after the configured timeout.
pub async fn send_enquiry(config: &EmailRelayConfig, draft: &CtaDraft) -> SiteResult<()> {
    send_cta(&FetchRelay, config, draft, sleep).await
}
