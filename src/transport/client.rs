use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use tracing::{debug, warn};

use super::{Endpoint, ResponsePolicy};
use crate::error::{NotifyError, NotifyResult};

/// One-shot JSON POST transport shared by all provider clients.
///
/// Wraps a `reqwest::Client` configured from an [`Endpoint`]: request
/// timeout, rustls TLS, and optional certificate-verification skip. The
/// underlying connection pool is safe for concurrent use, so the owning
/// provider client can be shared across tasks.
#[derive(Debug, Clone)]
pub struct WebhookTransport {
    http: reqwest::Client,
}

impl WebhookTransport {
    /// Builds the transport from endpoint configuration.
    ///
    /// # Errors
    /// Returns [`NotifyError::Transport`] if the HTTP client cannot be
    /// constructed.
    pub fn new(endpoint: &Endpoint) -> NotifyResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(endpoint.timeout)
            .use_rustls_tls()
            .danger_accept_invalid_certs(endpoint.insecure_skip_verify)
            .build()
            .map_err(|source| NotifyError::Transport { source })?;

        Ok(Self { http })
    }

    /// Serializes `message`, POSTs it to `url` and hands the response to
    /// the provider's [`ResponsePolicy`].
    ///
    /// A serialization failure yields [`NotifyError::Encoding`] before any
    /// network traffic. Network, TLS and timeout failures yield
    /// [`NotifyError::Transport`]; no retry is performed.
    ///
    /// [`NotifyError::Encoding`]: crate::error::NotifyError::Encoding
    /// [`NotifyError::Transport`]: crate::error::NotifyError::Transport
    pub async fn send_json<M, P>(&self, url: &str, message: &M, policy: &P) -> NotifyResult<()>
    where
        M: Serialize + ?Sized,
        P: ResponsePolicy,
    {
        let payload = serde_json::to_vec(message)
            .map_err(|source| NotifyError::encoding("serializing outbound message", source))?;

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|source| NotifyError::Transport { source })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| NotifyError::Transport { source })?;

        debug!(
            provider = policy.provider(),
            %status,
            body = %String::from_utf8_lossy(&body),
            "webhook response received"
        );

        let outcome = policy.interpret(status, &body);
        if let Err(NotifyError::Rejected { code, message, .. }) = &outcome {
            warn!(provider = policy.provider(), code = *code, message = %message, "delivery rejected");
        }
        outcome
    }
}
