//! Error types for resource traversal and persistence.
//!
//! - [`ResourceError::MissingRelation`]: a relation accessor found no link
//! - [`ResourceError::MissingField`]: a field a relation depends on is absent
//! - [`ResourceError::MalformedTimestamp`]: a timestamp field has the wrong shape
//! - [`ResourceError::NotFound`]: a lookup by id answered 404
//! - [`ResourceError::Http`]: any other transport failure
//!
//! Reaching the end of a [`Pages`](crate::rest::Pages) sequence is not an
//! error; `next_item()` returns `Ok(None)`.
//!
//! # Example
//!
//! ```rust,ignore
//! use octopus_api::rest::{HasProjectLink, ResourceError};
//!
//! match release.project().await {
//!     Ok(project) => println!("{:?}", project.name()),
//!     Err(ResourceError::MissingRelation { resource, relation }) => {
//!         println!("{resource} has no {relation} link");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::{HttpError, HttpResponseError};
use thiserror::Error;

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The node's `Links` collection has no entry for the requested relation.
    ///
    /// Raised before any request is sent.
    #[error("{resource} has no '{relation}' link")]
    MissingRelation {
        /// The type name of the resource (e.g., "Deployment").
        resource: &'static str,
        /// The link key that was looked up (e.g., "Project").
        relation: String,
    },

    /// A field needed to reach a related resource is absent or empty.
    #[error("{resource} has no '{field}' field")]
    MissingField {
        /// The type name of the resource.
        resource: &'static str,
        /// The field that was looked up.
        field: &'static str,
    },

    /// A timestamp field is present but does not match
    /// `%Y-%m-%dT%H:%M:%S.%f%z`.
    #[error("{resource}.{field} is not a valid timestamp ({value}): {reason}")]
    MalformedTimestamp {
        /// The type name of the resource.
        resource: &'static str,
        /// The timestamp field.
        field: &'static str,
        /// The raw value found in the field.
        value: String,
        /// Why parsing failed.
        reason: String,
    },

    /// A task's `State` field holds a value outside the known vocabulary.
    #[error("Unknown task state '{value}'")]
    UnknownTaskState {
        /// The raw state value.
        value: String,
    },

    /// The server returned JSON of an unexpected shape where a resource object
    /// was required.
    #[error("Expected {expected} for {resource}, got {found}")]
    InvalidPayload {
        /// The type name of the resource being built.
        resource: &'static str,
        /// What was expected (e.g., "a JSON object").
        expected: &'static str,
        /// The JSON type actually found.
        found: &'static str,
    },

    /// The resource was not found (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource.
        resource: &'static str,
        /// The id that was requested.
        id: String,
    },

    /// A transport-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Maps a failed lookup by id, turning a 404 into [`ResourceError::NotFound`].
    #[must_use]
    pub fn from_lookup(error: HttpError, resource: &'static str, id: &str) -> Self {
        match error {
            HttpError::Response(HttpResponseError { code: 404, .. }) => Self::NotFound {
                resource,
                id: id.to_string(),
            },
            other => Self::Http(other),
        }
    }

    /// Returns the request ID if the server supplied one.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Http(HttpError::Response(e)) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

/// Returns the JSON type name of `value`, for [`ResourceError::InvalidPayload`].
pub(crate) const fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
