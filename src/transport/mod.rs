//! Generic webhook delivery core shared by every provider.
//!
//! A provider client owns an [`Endpoint`] (immutable config) and a
//! [`WebhookTransport`] (the reqwest client built from it). The only
//! per-provider variability — how a response signals success or failure —
//! lives behind the [`ResponsePolicy`] trait, implemented once per provider.

mod client;
mod endpoint;
mod policy;

pub use client::WebhookTransport;
pub use endpoint::{DEFAULT_TIMEOUT, Endpoint};
pub use policy::ResponsePolicy;
