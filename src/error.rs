//! Error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! settings are rejected before any request is made.
//!
//! # Example
//!
//! ```rust
//! use octopus_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building an [`OctopusConfig`](crate::OctopusConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Octopus API key (API-...).")]
    EmptyApiKey,

    /// Server URL is invalid.
    #[error("Invalid server URL '{url}'. Please provide a URL with scheme (e.g., 'https://octopus.example.com').")]
    InvalidServerUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
