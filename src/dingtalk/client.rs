use reqwest::StatusCode;
use serde::Deserialize;

use super::message::{ActionCard, At, DingTalkMessage, FeedCardLink, Link, Markdown};
use crate::error::{NotifyError, NotifyResult};
use crate::transport::{Endpoint, ResponsePolicy, WebhookTransport};

/// Production webhook base for DingTalk group robots.
pub const DEFAULT_WEBHOOK: &str = "https://oapi.dingtalk.com/robot/send";

/// Response envelope: the robot answers HTTP 200 unconditionally and puts
/// the verdict in the body.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    errcode: i64,
    #[serde(default)]
    errmsg: String,
}

struct DingTalkPolicy;

impl ResponsePolicy for DingTalkPolicy {
    fn provider(&self) -> &'static str {
        "dingtalk"
    }

    fn interpret(&self, _status: StatusCode, body: &[u8]) -> NotifyResult<()> {
        let envelope: Envelope = serde_json::from_slice(body)
            .map_err(|source| NotifyError::encoding("decoding dingtalk response envelope", source))?;

        if envelope.errcode != 0 {
            return Err(NotifyError::Rejected {
                provider: self.provider(),
                code: envelope.errcode,
                message: envelope.errmsg,
            });
        }
        Ok(())
    }
}

/// DingTalk group-robot client bound to one webhook endpoint.
///
/// Cloning is cheap and the client is safe to share across tasks: the
/// endpoint is immutable and each send builds its own request.
///
/// # Example
/// ```ignore
/// let client = DingTalkClient::new(Endpoint::new(token).with_keyword("CI"))?;
/// client.send_text("build passed", At::default()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct DingTalkClient {
    endpoint: Endpoint,
    transport: WebhookTransport,
}

impl DingTalkClient {
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
            "{}?access_token={}",
            self.endpoint.base_or(DEFAULT_WEBHOOK),
            self.endpoint.token
        )
    }

    /// Delivers an already-built message as-is; the keyword suffix is not
    /// applied here.
    pub async fn send(&self, message: &DingTalkMessage) -> NotifyResult<()> {
        self.transport
            .send_json(&self.webhook_url(), message, &DingTalkPolicy)
            .await
    }

    /// Sends a text message, appending the configured keyword to the
    /// content.
    pub async fn send_text(&self, content: impl Into<String>, at: At) -> NotifyResult<()> {
        let content = self.endpoint.apply_keyword(content.into());
        self.send(&DingTalkMessage::text(content, at)).await
    }

    /// Sends a markdown message, appending the keyword to its title.
    pub async fn send_markdown(&self, mut markdown: Markdown, at: At) -> NotifyResult<()> {
        markdown.title = self.endpoint.apply_keyword(markdown.title);
        self.send(&DingTalkMessage::markdown(markdown, at)).await
    }

    /// Sends a link message, appending the keyword to its title.
    pub async fn send_link(&self, mut link: Link) -> NotifyResult<()> {
        link.title = self.endpoint.apply_keyword(link.title);
        self.send(&DingTalkMessage::link(link)).await
    }

    /// Sends an action card, appending the keyword to its title.
    pub async fn send_action_card(&self, mut action_card: ActionCard) -> NotifyResult<()> {
        action_card.title = self.endpoint.apply_keyword(action_card.title);
        self.send(&DingTalkMessage::action_card(action_card)).await
    }

    /// Sends a feed card, appending the keyword to every link title.
    pub async fn send_feed_card(&self, mut links: Vec<FeedCardLink>) -> NotifyResult<()> {
        for link in &mut links {
            link.title = self.endpoint.apply_keyword(std::mem::take(&mut link.title));
        }
        self.send(&DingTalkMessage::feed_card(links)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer, keyword: Option<&str>) -> DingTalkClient {
        let mut endpoint = Endpoint::new("test-token")
            .with_base_url(format!("{}/robot/send", server.uri()));
        if let Some(keyword) = keyword {
            endpoint = endpoint.with_keyword(keyword);
        }
        DingTalkClient::new(endpoint).unwrap()
    }

    #[tokio::test]
    async fn errcode_zero_is_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/robot/send"))
            .and(query_param("access_token", "test-token"))
            .and(header("content-type", "application/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "errcode": 0, "errmsg": "ok" })),
            )
            .mount(&server)
            .await;

        let client = test_client(&server, None);
        let result = client.send_text("release ready", At::default()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn nonzero_errcode_is_rejected_with_errmsg() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "errcode": 5, "errmsg": "bad token" })),
            )
            .mount(&server)
            .await;

        let client = test_client(&server, None);
        let err = client
            .send_text("release ready", At::default())
            .await
            .unwrap_err();

        match err {
            NotifyError::Rejected { provider, code, message } => {
                assert_eq!(provider, "dingtalk");
                assert_eq!(code, 5);
                assert_eq!(message, "bad token");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_envelope_is_an_encoding_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = test_client(&server, None);
        let err = client
            .send_text("release ready", At::default())
            .await
            .unwrap_err();

        assert!(matches!(err, NotifyError::Encoding { .. }));
    }

    #[tokio::test]
    async fn keyword_suffix_lands_on_text_content() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_json(json!({
                "msgtype": "text",
                "text": { "content": "release readyK" },
                "at": { "isAtAll": false }
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "errcode": 0, "errmsg": "ok" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server, Some("K"));
        client.send_text("release ready", At::default()).await.unwrap();
    }

    #[tokio::test]
    async fn keyword_suffix_lands_on_markdown_and_link_titles() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_json(json!({
                "msgtype": "markdown",
                "markdown": { "title": "AlertK", "text": "**disk full**" },
                "at": { "isAtAll": true }
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "errcode": 0, "errmsg": "ok" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(body_json(json!({
                "msgtype": "link",
                "link": {
                    "title": "ReportK",
                    "text": "nightly numbers",
                    "messageUrl": "https://ci.example/report"
                }
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "errcode": 0, "errmsg": "ok" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server, Some("K"));
        client
            .send_markdown(
                Markdown {
                    title: "Alert".into(),
                    text: "**disk full**".into(),
                },
                At::all(),
            )
            .await
            .unwrap();
        client
            .send_link(Link {
                title: "Report".into(),
                text: "nightly numbers".into(),
                message_url: "https://ci.example/report".into(),
                pic_url: String::new(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn keyword_suffix_lands_on_every_feed_card_title() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_json(json!({
                "msgtype": "feedCard",
                "feedCard": { "links": [
                    { "title": "oneK", "messageURL": "https://a", "picURL": "https://a.png" },
                    { "title": "twoK", "messageURL": "https://b", "picURL": "https://b.png" }
                ]}
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "errcode": 0, "errmsg": "ok" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server, Some("K"));
        client
            .send_feed_card(vec![
                FeedCardLink {
                    title: "one".into(),
                    message_url: "https://a".into(),
                    pic_url: "https://a.png".into(),
                },
                FeedCardLink {
                    title: "two".into(),
                    message_url: "https://b".into(),
                    pic_url: "https://b.png".into(),
                },
            ])
            .await
            .unwrap();
    }
}
