//! Chat-bot webhook notification client.
//!
//! One client per provider (DingTalk, Feishu, WeCom group robots), all built
//! on the same pipeline: build a typed message, serialize it, POST it to the
//! webhook, interpret the provider's response envelope. Providers differ
//! only in where the token sits in the URL and how the response signals
//! failure; that variability lives behind [`transport::ResponsePolicy`].
//!
//! ```ignore
//! use webhook_notify::dingtalk::{At, DingTalkClient};
//! use webhook_notify::transport::Endpoint;
//!
//! let client = DingTalkClient::new(Endpoint::new(token).with_keyword("CI"))?;
//! client.send_text("build passed", At::default()).await?;
//! ```

pub mod dingtalk;
pub mod error;
pub mod feishu;
pub mod transport;
pub mod wework;

pub use error::{NotifyError, NotifyResult};
pub use transport::Endpoint;
