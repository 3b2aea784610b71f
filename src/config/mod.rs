//! Configuration types for the Octopus API client.
//!
//! # Overview
//!
//! - [`OctopusConfig`]: settings shared by every request made through one
//!   [`OctopusApi`](crate::OctopusApi)
//! - [`OctopusConfigBuilder`]: builder for [`OctopusConfig`]
//! - [`ApiKey`]: validated API key with masked debug output
//! - [`ServerUrl`]: validated Octopus server URL
//!
//! # Example
//!
//! ```rust
//! use octopus_api::{ApiKey, OctopusConfig, ServerUrl};
//! use std::time::Duration;
//!
//! let config = OctopusConfig::builder()
//!     .server_url(ServerUrl::new("https://octopus.example.com").unwrap())
//!     .api_key(ApiKey::new("API-XXXXXXXX").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ServerUrl};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the Octopus API client.
///
/// # Thread Safety
///
/// `OctopusConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct OctopusConfig {
    server_url: ServerUrl,
    api_key: ApiKey,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl OctopusConfig {
    /// Creates a new builder for constructing an `OctopusConfig`.
    #[must_use]
    pub fn builder() -> OctopusConfigBuilder {
        OctopusConfigBuilder::new()
    }

    /// Returns the server URL.
    #[must_use]
    pub const fn server_url(&self) -> &ServerUrl {
        &self.server_url
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout handed to the transport, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify OctopusConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OctopusConfig>();
};

/// Builder for constructing [`OctopusConfig`] instances.
///
/// `server_url` and `api_key` are required. Without a timeout the transport's
/// own default applies.
#[derive(Debug, Default)]
pub struct OctopusConfigBuilder {
    server_url: Option<ServerUrl>,
    api_key: Option<ApiKey>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl OctopusConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the server URL (required).
    #[must_use]
    pub fn server_url(mut self, url: ServerUrl) -> Self {
        self.server_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`OctopusConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `server_url` or
    /// `api_key` are not set.
    pub fn build(self) -> Result<OctopusConfig, ConfigError> {
        let server_url = self
            .server_url
            .ok_or(ConfigError::MissingRequiredField {
                field: "server_url",
            })?;
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(OctopusConfig {
            server_url,
            api_key,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_url() -> ServerUrl {
        ServerUrl::new("https://octopus.example.com").unwrap()
    }

    #[test]
    fn test_builder_requires_server_url() {
        let result = OctopusConfigBuilder::new()
            .api_key(ApiKey::new("API-KEY").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "server_url"
            })
        ));
    }

    #[test]
    fn test_builder_requires_api_key() {
        let result = OctopusConfigBuilder::new().server_url(server_url()).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_builder_defaults() {
        let config = OctopusConfig::builder()
            .server_url(server_url())
            .api_key(ApiKey::new("API-KEY").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.server_url().as_ref(), "https://octopus.example.com");
        assert!(config.user_agent_prefix().is_none());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = OctopusConfig::builder()
            .server_url(server_url())
            .api_key(ApiKey::new("API-KEY").unwrap())
            .user_agent_prefix("release-bot/2.1")
            .timeout(Duration::from_secs(15))
            .build()
            .unwrap();

        assert_eq!(config.user_agent_prefix(), Some("release-bot/2.1"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_config_debug_masks_api_key() {
        let config = OctopusConfig::builder()
            .server_url(server_url())
            .api_key(ApiKey::new("API-TOPSECRET").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("OctopusConfig"));
        assert!(!debug_str.contains("API-TOPSECRET"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OctopusConfig>();
    }
}
