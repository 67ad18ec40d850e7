use thiserror::Error;

/// Error type covering every way a webhook delivery can fail.
///
/// Errors are returned to the caller synchronously; nothing is retried or
/// suppressed inside the crate. Each send is atomic from the caller's
/// perspective.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Local JSON failure: either the outbound message could not be
    /// serialized (no network call is made in that case) or a provider
    /// response body could not be decoded against its envelope schema.
    #[error("JSON encoding failed while {context}")]
    Encoding {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Network-level failure: connection refused, TLS handshake error,
    /// or the configured timeout elapsed before a response arrived.
    #[error("webhook request failed")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The provider received the request and returned a structured
    /// application-level rejection.
    #[error("{provider} rejected delivery: {message} (code {code})")]
    Rejected {
        provider: &'static str,
        code: i64,
        message: String,
    },
}

impl NotifyError {
    pub(crate) fn encoding(context: impl Into<String>, source: serde_json::Error) -> Self {
        NotifyError::Encoding {
            context: context.into(),
            source,
        }
    }
}

/// Type alias for Result with NotifyError to simplify function signatures
pub type NotifyResult<T> = Result<T, NotifyError>;
