use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use super::message::{FeishuMessage, PostNode};
use crate::error::{NotifyError, NotifyResult};
use crate::transport::{Endpoint, ResponsePolicy, WebhookTransport};

/// Production webhook base for Feishu custom bots; the hook token is
/// appended as the final path segment.
pub const DEFAULT_WEBHOOK: &str = "https://open.feishu.cn/open-apis/bot/v2/hook/";

/// Error body Feishu returns alongside a non-200 status.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    msg: String,
}

struct FeishuPolicy;

impl ResponsePolicy for FeishuPolicy {
    fn provider(&self) -> &'static str {
        "feishu"
    }

    // HTTP 200 is success regardless of body; anything else carries a
    // {code, msg} error envelope.
    fn interpret(&self, status: StatusCode, body: &[u8]) -> NotifyResult<()> {
        if status == StatusCode::OK {
            return Ok(());
        }

        let envelope: ErrorEnvelope = serde_json::from_slice(body)
            .map_err(|source| NotifyError::encoding("decoding feishu error envelope", source))?;

        Err(NotifyError::Rejected {
            provider: self.provider(),
            code: envelope.code,
            message: envelope.msg,
        })
    }
}

/// Feishu custom-bot client bound to one webhook endpoint.
#[derive(Debug, Clone)]
pub struct FeishuClient {
    endpoint: Endpoint,
    transport: WebhookTransport,
}

impl FeishuClient {
    /// Creates a client from endpoint configuration.
    ///
    /// # Errors
    /// Returns [`NotifyError::Transport`] if the underlying HTTP client
    /// cannot be built.
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

    /// Delivers an already-built message as-is; the keyword suffix is not
    /// applied here.
    pub async fn send(&self, message: &FeishuMessage) -> NotifyResult<()> {
        self.transport
            .send_json(&self.webhook_url(), message, &FeishuPolicy)
            .await
    }

    /// Sends a plain text message, appending the configured keyword.
    pub async fn send_text(&self, text: impl Into<String>) -> NotifyResult<()> {
        let text = self.endpoint.apply_keyword(text.into());
        self.send(&FeishuMessage::text(text)).await
    }

    /// Sends a rich-text post, appending the keyword to its title.
    pub async fn send_post(
        &self,
        title: impl Into<String>,
        content: Vec<Vec<PostNode>>,
    ) -> NotifyResult<()> {
        let title = self.endpoint.apply_keyword(title.into());
        self.send(&FeishuMessage::post(title, content)).await
    }

    /// Sends an image by its upload key. No keyword applies.
    pub async fn send_image(&self, image_key: impl Into<String>) -> NotifyResult<()> {
        self.send(&FeishuMessage::image(image_key)).await
    }

    /// Shares a group chat card. No keyword applies.
    pub async fn send_share_chat(&self, share_chat_id: impl Into<String>) -> NotifyResult<()> {
        self.send(&FeishuMessage::share_chat(share_chat_id)).await
    }

    /// Sends an interactive card payload as-is. No keyword applies.
    pub async fn send_interactive(&self, card: Value) -> NotifyResult<()> {
        self.send(&FeishuMessage::interactive(card)).await
    }
}
