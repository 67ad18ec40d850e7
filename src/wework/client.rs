use reqwest::StatusCode;

use super::message::{Article, WeWorkMessage};
use crate::error::NotifyResult;
use crate::transport::{Endpoint, ResponsePolicy, WebhookTransport};

/// Production webhook base for WeCom group robots; the robot key is
/// appended directly to it.
pub const DEFAULT_WEBHOOK: &str = "https://qyapi.weixin.qq.com/cgi-bin/webhook/send?key=";

struct WeWorkPolicy;

impl ResponsePolicy for WeWorkPolicy {
    fn provider(&self) -> &'static str {
        "wework"
    }

    // Fire-and-forget: a completed round-trip is a delivery. The raw body
    // is already logged by the transport.
    fn interpret(&self, _status: StatusCode, _body: &[u8]) -> NotifyResult<()> {
        Ok(())
    }
}

/// WeCom group-robot client bound to one webhook endpoint.
///
/// WeCom robots have no keyword security mode, so the endpoint's keyword
/// is never applied here.
#[derive(Debug, Clone)]
pub struct WeWorkClient {
    endpoint: Endpoint,
    transport: WebhookTransport,
}

impl WeWorkClient {
    /// Creates a client from endpoint configuration.
    ///
    /// # Errors
    /// Returns [`NotifyError::Transport`] if the underlying HTTP client
    /// cannot be built.
    ///
    /// [`NotifyError::Transport`]: crate::error::NotifyError::Transport
    pub fn new(endpoint: Endpoint) -> NotifyResult<Self> {
        let transport = WebhookTransport::new(&endpoint)?;
        Ok(Self { endpoint, transport })
    }

    fn webhook_url(&self) -> String {
        format!(
            "{}{}",
            self.endpoint.base_or(DEFAULT_WEBHOOK),
            self.endpoint.token
        )
    }

    /// Delivers an already-built message.
    pub async fn send(&self, message: &WeWorkMessage) -> NotifyResult<()> {
        self.transport
            .send_json(&self.webhook_url(), message, &WeWorkPolicy)
            .await
    }

    /// Sends a text message with optional userid/mobile mentions.
    pub async fn send_text(
        &self,
        content: impl Into<String>,
        mentioned_list: Vec<String>,
        mentioned_mobile_list: Vec<String>,
    ) -> NotifyResult<()> {
        self.send(&WeWorkMessage::text(
            content,
            mentioned_list,
            mentioned_mobile_list,
        ))
        .await
    }

    pub async fn send_markdown(&self, content: impl Into<String>) -> NotifyResult<()> {
        self.send(&WeWorkMessage::markdown(content)).await
    }

    pub async fn send_image(
        &self,
        base64: impl Into<String>,
        md5: impl Into<String>,
    ) -> NotifyResult<()> {
        self.send(&WeWorkMessage::image(base64, md5)).await
    }

    pub async fn send_news(&self, articles: Vec<Article>) -> NotifyResult<()> {
        self.send(&WeWorkMessage::news(articles)).await
    }

    pub async fn send_file(&self, media_id: impl Into<String>) -> NotifyResult<()> {
        self.send(&WeWorkMessage::file(media_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::{Duration, Instant};

    use crate::error::NotifyError;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer, timeout: Duration) -> WeWorkClient {
        let endpoint = Endpoint::new("robot-key")
            .with_base_url(format!("{}/webhook/send?key=", server.uri()))
            .with_timeout(timeout);
        WeWorkClient::new(endpoint).unwrap()
    }

    #[tokio::test]
    async fn completed_round_trip_is_success_regardless_of_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/webhook/send"))
            .and(query_param("key", "robot-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<garbage!>"))
            .mount(&server)
            .await;

        let client = test_client(&server, Duration::from_secs(5));
        assert!(client.send_markdown("**deploy done**").await.is_ok());
    }

    #[tokio::test]
    async fn non_200_status_is_still_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let client = test_client(&server, Duration::from_secs(5));
        assert!(client.send_text("ping", vec![], vec![]).await.is_ok());
    }

    #[tokio::test]
    async fn slow_server_times_out_as_transport_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let client = test_client(&server, Duration::from_millis(200));
        let start = Instant::now();
        let err = client.send_text("ping", vec![], vec![]).await.unwrap_err();
        let elapsed = start.elapsed();

        assert!(matches!(err, NotifyError::Transport { .. }));
        // Bounded by the configured timeout plus scheduling slack.
        assert!(elapsed >= Duration::from_millis(200));
        assert!(elapsed < Duration::from_secs(2), "took {elapsed:?}");
    }
}
