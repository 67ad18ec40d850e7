use std::time::Duration;

/// Default request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Immutable webhook endpoint configuration.
///
/// One `Endpoint` backs one client instance. Every send reads it and builds
/// its own request, so a client may be shared across tasks freely.
///
/// # Example
/// ```ignore
/// let endpoint = Endpoint::new("a1b2c3".to_string())
///     .with_keyword("ALERT")
///     .with_timeout(Duration::from_secs(10));
/// let client = DingTalkClient::new(endpoint)?;
/// ```
#[derive(Debug, Clone)]
pub struct Endpoint {
    /// Webhook base URL. Each provider client fills in its production
    /// default; override it to point at a mock server in tests.
    pub base_url: Option<String>,
    /// Robot credential: access token (DingTalk), hook token (Feishu) or
    /// key (WeCom), placed in the URL per provider policy.
    pub token: String,
    /// Security keyword appended to outbound titles/content so the robot's
    /// keyword filter accepts the message. `None` disables the suffix.
    pub keyword: Option<String>,
    /// Per-request timeout. Defaults to [`DEFAULT_TIMEOUT`].
    pub timeout: Duration,
    /// Skip TLS certificate verification. Only useful behind intercepting
    /// proxies; leave off otherwise.
    pub insecure_skip_verify: bool,
}

impl Endpoint {
    /// Creates an endpoint for `token` with default timeout, no keyword and
    /// TLS verification enabled.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: None,
            token: token.into(),
            keyword: None,
            timeout: DEFAULT_TIMEOUT,
            insecure_skip_verify: false,
        }
    }

    /// Overrides the provider's default webhook base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the security keyword suffix.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Sets the request timeout. A zero duration falls back to
    /// [`DEFAULT_TIMEOUT`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = if timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            timeout
        };
        self
    }

    /// Disables TLS certificate verification for this endpoint.
    pub fn danger_insecure_skip_verify(mut self) -> Self {
        self.insecure_skip_verify = true;
        self
    }

    /// Base URL to use, falling back to the provider default.
    pub(crate) fn base_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.base_url.as_deref().unwrap_or(default)
    }

    /// Appends the configured keyword to `text`, once.
    pub(crate) fn apply_keyword(&self, mut text: String) -> String {
        if let Some(keyword) = &self.keyword {
            text.push_str(keyword);
        }
        text
    }
}
