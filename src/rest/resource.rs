//! The [`ApiResource`] trait shared by every typed resource.
//!
//! A typed resource is a thin newtype over a [`ResourceNode`]. The trait
//! gives [`Pages`](crate::rest::Pages) and the relation accessors a way to
//! build the right type from a JSON object, and gives
//! [`OctopusApi`](crate::OctopusApi) the collection path to query.
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use octopus_api::rest::{ApiResource, HasProjectLink, ResourceNode};
//!
//! #[derive(Clone, Debug, serde::Serialize)]
//! #[serde(transparent)]
//! pub struct Channel(ResourceNode);
//!
//! impl ApiResource for Channel {
//!     const NAME: &'static str = "Channel";
//!     const PATH: &'static str = "channels";
//!
//!     fn from_node(node: ResourceNode) -> Self { Self(node) }
//!     fn node(&self) -> &ResourceNode { &self.0 }
//!     fn node_mut(&mut self) -> &mut ResourceNode { &mut self.0 }
//!     fn into_node(self) -> ResourceNode { self.0 }
//! }
//!
//! impl HasProjectLink for Channel {}
//! ```

use serde_json::{Map, Value};

use crate::clients::Connection;
use crate::rest::{ResourceError, ResourceNode};

/// A typed view over a [`ResourceNode`].
pub trait ApiResource: Sized + Send + Sync {
    /// The singular resource name (e.g., "Deployment"), used in errors and logs.
    const NAME: &'static str;

    /// The collection segment under `/api/` (e.g., "deployments").
    const PATH: &'static str;

    /// Wraps a node.
    fn from_node(node: ResourceNode) -> Self;

    /// Returns the wrapped node.
    fn node(&self) -> &ResourceNode;

    /// Returns the wrapped node mutably.
    fn node_mut(&mut self) -> &mut ResourceNode;

    /// Unwraps the node.
    fn into_node(self) -> ResourceNode;

    /// Builds a resource from a flattened field set.
    #[must_use]
    fn from_fields(connection: Connection, fields: Map<String, Value>) -> Self {
        Self::from_node(ResourceNode::new(connection, Self::NAME, fields))
    }

    /// Builds a resource from a JSON value, which must be an object.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidPayload`] for anything but a JSON object.
    fn from_value(connection: Connection, value: Value) -> Result<Self, ResourceError> {
        ResourceNode::from_value(connection, Self::NAME, value).map(Self::from_node)
    }
}
