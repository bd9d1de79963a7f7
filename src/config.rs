//! Client configuration.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use crate::{PayrexError, Result};

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.payrexhq.com";

/// Environment variable holding the secret API key.
pub const API_KEY_ENV: &str = "PAYREX_API_KEY";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "PAYREX_API_BASE_URL";

/// PayRex client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Secret API key, sent as the Basic auth username.
    pub api_key: SecretString,
    /// Base URL for all requests.
    pub base_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Client identifier sent as `User-Agent`.
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a configuration builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Start a builder from `PAYREX_API_KEY` and `PAYREX_API_BASE_URL`.
    pub fn from_env() -> ClientConfigBuilder {
        let mut builder = ClientConfigBuilder::default();

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            builder = builder.api_key(key);
        }
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            builder = builder.base_url(url);
        }

        builder
    }

    /// Default client identifier, `payrex-rust/<version>`.
    pub fn default_user_agent() -> String {
        format!("payrex-rust/{}", env!("CARGO_PKG_VERSION"))
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug)]
pub struct ClientConfigBuilder {
    api_key: Option<SecretString>,
    base_url: String,
    timeout: Duration,
    connect_timeout: Duration,
    user_agent: String,
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: ClientConfig::default_user_agent(),
        }
    }
}

impl ClientConfigBuilder {
    /// Set the secret API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        let key: String = key.into();
        self.api_key = Some(SecretString::new(key.into_boxed_str()));
        self
    }

    /// Override the base URL. Only needed for mock servers and proxies.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the whole-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Override the client identifier.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<ClientConfig> {
        let api_key = self
            .api_key
            .filter(|k| !k.expose_secret().is_empty())
            .ok_or_else(|| PayrexError::Construction("API key is required".to_string()))?;

        url::Url::parse(&self.base_url).map_err(|e| {
            PayrexError::Construction(format!("invalid base URL '{}': {}", self.base_url, e))
        })?;

        Ok(ClientConfig {
            api_key,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            user_agent: self.user_agent,
        })
    }
}
