//! DingTalk robot message models.
//!
//! Wire format reference: the robot expects `{"msgtype": "...", ...}` with
//! one payload object named after the type, plus an optional `at` block on
//! text and markdown messages.

use serde::{Deserialize, Serialize};

/// Outbound DingTalk message, tagged by `msgtype`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "msgtype", rename_all = "camelCase")]
pub enum DingTalkMessage {
    Text {
        text: Text,
        at: At,
    },
    Markdown {
        markdown: Markdown,
        at: At,
    },
    Link {
        link: Link,
    },
    ActionCard {
        #[serde(rename = "actionCard")]
        action_card: ActionCard,
    },
    FeedCard {
        #[serde(rename = "feedCard")]
        feed_card: FeedCard,
    },
}

impl DingTalkMessage {
    pub fn text(content: impl Into<String>, at: At) -> Self {
        DingTalkMessage::Text {
            text: Text {
                content: content.into(),
            },
            at,
        }
    }

    pub fn markdown(markdown: Markdown, at: At) -> Self {
        DingTalkMessage::Markdown { markdown, at }
    }

    pub fn link(link: Link) -> Self {
        DingTalkMessage::Link { link }
    }

    pub fn action_card(action_card: ActionCard) -> Self {
        DingTalkMessage::ActionCard { action_card }
    }

    pub fn feed_card(links: Vec<FeedCardLink>) -> Self {
        DingTalkMessage::FeedCard {
            feed_card: FeedCard { links },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub content: String,
}

/// Mention block for text and markdown messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct At {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub at_mobiles: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub at_user_ids: Vec<String>,
    #[serde(default)]
    pub is_at_all: bool,
}

impl At {
    /// Mention everyone in the group.
    pub fn all() -> Self {
        Self {
            is_at_all: true,
            ..Self::default()
        }
    }

    /// Mention members by phone number.
    pub fn mobiles(mobiles: Vec<String>) -> Self {
        Self {
            at_mobiles: mobiles,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Markdown {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub title: String,
    pub text: String,
    pub message_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pic_url: String,
}

/// Action card, either whole-card (`single_title` + `single_url`) or with
/// independent buttons. The robot ignores the single-* fields when `btns`
/// is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionCard {
    pub title: String,
    pub text: String,
    /// "0" = vertical buttons, "1" = horizontal.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub btn_orientation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_title: Option<String>,
    #[serde(
        rename = "singleURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub single_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub btns: Vec<ActionCardButton>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionCardButton {
    pub title: String,
    #[serde(rename = "actionURL")]
    pub action_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedCard {
    pub links: Vec<FeedCardLink>,
}

// Note: feed-card links use the URL spelling, unlike the link message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedCardLink {
    pub title: String,
    #[serde(rename = "messageURL")]
    pub message_url: String,
    #[serde(rename = "picURL")]
    pub pic_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_message_wire_shape() {
        let message = DingTalkMessage::text("release ready", At::mobiles(vec!["13800000000".into()]));

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "msgtype": "text",
                "text": { "content": "release ready" },
                "at": { "atMobiles": ["13800000000"], "isAtAll": false }
            })
        );
    }

    #[test]
    fn action_card_uses_camel_case_url_fields() {
        let message = DingTalkMessage::action_card(ActionCard {
            title: "Deploy".into(),
            text: "## Deploy v2".into(),
            btn_orientation: "1".into(),
            single_title: None,
            single_url: None,
            btns: vec![ActionCardButton {
                title: "Approve".into(),
                action_url: "https://ci.example/approve".into(),
            }],
        });

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["msgtype"], "actionCard");
        assert_eq!(value["actionCard"]["btnOrientation"], "1");
        assert_eq!(
            value["actionCard"]["btns"][0]["actionURL"],
            "https://ci.example/approve"
        );
    }

    #[test]
    fn feed_card_round_trips() {
        let message = DingTalkMessage::feed_card(vec![FeedCardLink {
            title: "Nightly report".into(),
            message_url: "https://ci.example/report".into(),
            pic_url: "https://ci.example/report.png".into(),
        }]);

        let encoded = serde_json::to_string(&message).unwrap();
        assert!(encoded.contains("\"messageURL\""));
        let decoded: DingTalkMessage = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn markdown_round_trips_with_at_all() {
        let message = DingTalkMessage::markdown(
            Markdown {
                title: "Alert".into(),
                text: "**disk full**".into(),
            },
            At::all(),
        );

        let encoded = serde_json::to_string(&message).unwrap();
        let decoded: DingTalkMessage = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, message);
    }
}
