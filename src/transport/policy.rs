use reqwest::StatusCode;

use crate::error::NotifyResult;

/// Strategy for interpreting a provider's response envelope.
///
/// Providers disagree on how a webhook signals failure: DingTalk always
/// answers HTTP 200 and hides the verdict in an `errcode` body, Feishu uses
/// the HTTP status itself, WeCom is fire-and-forget. Each provider
/// implements this trait once; the shared [`WebhookTransport`] stays free of
/// provider branches.
///
/// [`WebhookTransport`]: super::WebhookTransport
pub trait ResponsePolicy {
    /// Provider name used in errors and log events.
    fn provider(&self) -> &'static str;

    /// Decides success or failure from the HTTP status and the full
    /// response body.
    ///
    /// # Returns
    /// `Ok(())` on delivery, [`NotifyError::Rejected`] on a structured
    /// provider failure, [`NotifyError::Encoding`] when the body cannot be
    /// decoded against the provider's envelope schema.
    ///
    /// [`NotifyError::Rejected`]: crate::error::NotifyError::Rejected
    /// [`NotifyError::Encoding`]: crate::error::NotifyError::Encoding
    fn interpret(&self, status: StatusCode, body: &[u8]) -> NotifyResult<()>;
}
