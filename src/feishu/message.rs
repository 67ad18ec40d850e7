//! Feishu custom-bot message models.
//!
//! The bot v2 hook expects `{"msg_type": "...", "content": {...}}`, except
//! interactive cards which sit under a top-level `card` key.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outbound Feishu message, tagged by `msg_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "msg_type", rename_all = "snake_case")]
pub enum FeishuMessage {
    Text { content: TextContent },
    Post { content: PostContent },
    Image { content: ImageContent },
    ShareChat { content: ShareChatContent },
    Interactive { card: Value },
}

impl FeishuMessage {
    pub fn text(text: impl Into<String>) -> Self {
        FeishuMessage::Text {
            content: TextContent { text: text.into() },
        }
    }

    /// Rich-text post in the `zh_cn` locale, one paragraph per inner vec.
    pub fn post(title: impl Into<String>, content: Vec<Vec<PostNode>>) -> Self {
        FeishuMessage::Post {
            content: PostContent {
                post: Post {
                    zh_cn: PostBody {
                        title: title.into(),
                        content,
                    },
                },
            },
        }
    }

    /// Image previously uploaded to Feishu, referenced by its key.
    pub fn image(image_key: impl Into<String>) -> Self {
        FeishuMessage::Image {
            content: ImageContent {
                image_key: image_key.into(),
            },
        }
    }

    pub fn share_chat(share_chat_id: impl Into<String>) -> Self {
        FeishuMessage::ShareChat {
            content: ShareChatContent {
                share_chat_id: share_chat_id.into(),
            },
        }
    }

    /// Interactive card; the card JSON is passed through untouched.
    pub fn interactive(card: Value) -> Self {
        FeishuMessage::Interactive { card }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostContent {
    pub post: Post,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub zh_cn: PostBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostBody {
    pub title: String,
    /// Paragraphs of inline nodes.
    pub content: Vec<Vec<PostNode>>,
}

/// Inline node of a rich-text post paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum PostNode {
    Text {
        text: String,
    },
    A {
        text: String,
        href: String,
    },
    At {
        user_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        user_name: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageContent {
    pub image_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareChatContent {
    pub share_chat_id: String,
}
