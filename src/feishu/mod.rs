//! Feishu custom-bot webhook client.
//!
//! The hook token is the last URL path segment. HTTP 200 means delivered;
//! any other status carries a `{code, msg}` error body.

mod client;
mod message;

pub use client::{DEFAULT_WEBHOOK, FeishuClient};
pub use message::{
    FeishuMessage, ImageContent, Post, PostBody, PostContent, PostNode, ShareChatContent,
    TextContent,
};
