//! DingTalk group-robot webhook client.
//!
//! The robot answers HTTP 200 for every request and reports the verdict in
//! an `{errcode, errmsg}` body; the access token travels as a query
//! parameter.

mod client;
mod message;

pub use client::{DEFAULT_WEBHOOK, DingTalkClient};
pub use message::{
    ActionCard, ActionCardButton, At, DingTalkMessage, FeedCard, FeedCardLink, Link, Markdown,
    Text,
};
