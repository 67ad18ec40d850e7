//! WeCom (WeChat Work) group-robot webhook client.
//!
//! Fire-and-forget: the robot key is appended to the base URL and delivery
//! counts as successful once the HTTP round-trip completes.

mod client;
mod message;

pub use client::{DEFAULT_WEBHOOK, WeWorkClient};
pub use message::{
    Article, FileContent, ImageContent, MarkdownContent, NewsContent, TextContent, WeWorkMessage,
};
