//! WeCom group-robot message models.

use serde::{Deserialize, Serialize};

/// Outbound WeCom message, tagged by `msgtype`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "msgtype", rename_all = "lowercase")]
pub enum WeWorkMessage {
    Text { text: TextContent },
    Markdown { markdown: MarkdownContent },
    Image { image: ImageContent },
    News { news: NewsContent },
    File { file: FileContent },
}

impl WeWorkMessage {
    pub fn text(
        content: impl Into<String>,
        mentioned_list: Vec<String>,
        mentioned_mobile_list: Vec<String>,
    ) -> Self {
        WeWorkMessage::Text {
            text: TextContent {
                content: content.into(),
                mentioned_list,
                mentioned_mobile_list,
            },
        }
    }

    pub fn markdown(content: impl Into<String>) -> Self {
        WeWorkMessage::Markdown {
            markdown: MarkdownContent {
                content: content.into(),
            },
        }
    }

    /// Image as raw base64 plus the md5 of the un-encoded bytes.
    pub fn image(base64: impl Into<String>, md5: impl Into<String>) -> Self {
        WeWorkMessage::Image {
            image: ImageContent {
                base64: base64.into(),
                md5: md5.into(),
            },
        }
    }

    pub fn news(articles: Vec<Article>) -> Self {
        WeWorkMessage::News {
            news: NewsContent { articles },
        }
    }

    /// File previously uploaded through the robot's media endpoint.
    pub fn file(media_id: impl Into<String>) -> Self {
        WeWorkMessage::File {
            file: FileContent {
                media_id: media_id.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
    /// Member userids to @, or "@all".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mentioned_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mentioned_mobile_list: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkdownContent {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageContent {
    pub base64: String,
    pub md5: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsContent {
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub picurl: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileContent {
    pub media_id: String,
}
