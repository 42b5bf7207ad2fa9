//! Client configuration and its validated builder.
//!
//! All validation is performed during construction: a [`Client`] that
//! exists is always safe to use.
//!
//! [`Client`]: super::Client

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use super::observer::{NoopObserver, RequestObserver};

/// Default base URL of the Inkpost API.
pub const BASE_API: &str = "https://api.inkpost.com/v1/";

/// API version pinned by this crate, sent with every request.
pub const API_VERSION: &str = "2021-06-03";

/// Header carrying the pinned API version.
pub const VERSION_HEADER: &str = "Inkpost-Version";

/// Error type for client configuration.
///
/// Covers validation failures during [`ClientBuilder::build`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The API key was empty.
    #[error("API key must not be empty")]
    EmptyApiKey,

    /// The base URL could not be parsed or cannot serve as a base.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The API key contains bytes that cannot appear in an HTTP header.
    #[error("API key contains characters not allowed in an HTTP header")]
    InvalidApiKey,

    /// The user agent contains bytes that cannot appear in an HTTP header.
    #[error("User agent contains characters not allowed in an HTTP header")]
    InvalidUserAgent,
}

/// Builder for [`Client`] with validation at `build` time.
///
/// # Example
///
/// ```
/// use inkpost::client::ClientBuilder;
/// use std::time::Duration;
///
/// let client = ClientBuilder::new("test_0dc8d51e0acffcb1880e0f19c79b2f5b0cc")
///     .user_agent("my-app/1.0")
///     .timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
/// ```
///
/// [`Client`]: super::Client
#[derive(Clone)]
pub struct ClientBuilder {
    base_url: String,
    api_key: String,
    user_agent: String,
    timeout: Option<Duration>,
    observer: Arc<dyn RequestObserver>,
}

impl ClientBuilder {
    /// Default user agent, derived from the crate version.
    pub const DEFAULT_USER_AGENT: &'static str =
        concat!("inkpost-rust/", env!("CARGO_PKG_VERSION"));

    /// Creates a builder for the given API key with default settings.
    ///
    /// Defaults: production base URL ([`BASE_API`]), crate user agent,
    /// no timeout, no-op observer.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: BASE_API.to_owned(),
            api_key: api_key.into(),
            user_agent: Self::DEFAULT_USER_AGENT.to_owned(),
            timeout: None,
            observer: Arc::new(NoopObserver),
        }
    }

    /// Overrides the base URL (e.g. for a staging environment or a local
    /// test server).
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the `User-Agent` header value sent with every request.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets a deadline applied to every request.
    ///
    /// Without one, requests wait as long as the underlying HTTP client
    /// allows.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Installs an observer notified after every completed request.
    #[must_use]
    pub fn observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the API key is empty or unusable in a
    /// header, or the base URL is invalid.
    pub(super) fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        if self.api_key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        if self.api_key.bytes().any(|b| b.is_ascii_control()) {
            return Err(ConfigError::InvalidApiKey);
        }
        if http::HeaderValue::from_str(&self.user_agent).is_err() {
            return Err(ConfigError::InvalidUserAgent);
        }

        // Endpoint paths are joined onto the base, so it must end with a
        // slash to keep its last path segment.
        let mut base = self.base_url;
        if !base.ends_with('/') {
            base.push('/');
        }

        let base_url = Url::parse(&base).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: base,
                reason: "URL cannot serve as a base for endpoint paths".to_owned(),
            });
        }

        Ok(ValidatedConfig {
            base_url,
            api_key: self.api_key,
            user_agent: self.user_agent,
            timeout: self.timeout,
            observer: self.observer,
        })
    }
}

impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Fully validated client configuration.
pub(super) struct ValidatedConfig {
    pub(super) base_url: Url,
    pub(super) api_key: String,
    pub(super) user_agent: String,
    pub(super) timeout: Option<Duration>,
    pub(super) observer: Arc<dyn RequestObserver>,
}
