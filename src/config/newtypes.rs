//! Validated newtype wrappers for configuration values.
//!
//! These wrappers validate their contents on construction, so a built
//! [`OctopusConfig`](crate::OctopusConfig) never carries an empty key or a
//! scheme-less server URL.

use crate::error::ConfigError;
use std::fmt;

/// A validated Octopus API key.
///
/// The key is sent on every request in the `X-Octopus-ApiKey` header. Its
/// `Debug` output is masked so it never ends up in logs.
///
/// # Example
///
/// ```rust
/// use octopus_api::ApiKey;
///
/// let key = ApiKey::new("API-XXXXXXXX").unwrap();
/// assert_eq!(key.as_ref(), "API-XXXXXXXX");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty or whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated Octopus server URL.
///
/// Must use the `http` or `https` scheme and carry a host. Trailing slashes are
/// trimmed so paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use octopus_api::ServerUrl;
///
/// let url = ServerUrl::new("https://octopus.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://octopus.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerUrl(String);

impl ServerUrl {
    /// Creates a new validated server URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidServerUrl`] if the URL has no `http(s)://`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));

        match host {
            Some(host) if !host.is_empty() && !host.starts_with('/') => {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(ConfigError::InvalidServerUrl { url }),
        }
    }
}

impl AsRef<str> for ServerUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
