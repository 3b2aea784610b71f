//! The resource graph: typed resources, their relations, and lazy paging.
//!
//! - [`ResourceNode`]: one server entity, held as an ordered field map
//! - [`ApiResource`]: the trait every typed resource implements
//! - [`Pages`]: a lazy, forward-only sequence over a paged list endpoint
//! - Relation capabilities ([`HasProjectLink`], [`HasDeploymentsLink`], ...):
//!   follow `Links` entries into other resources
//! - [`ResourceError`]: what can go wrong along the way
//! - [`resources`]: the concrete Octopus resource types
//!
//! # Example
//!
//! ```rust,ignore
//! use octopus_api::rest::{HasDeploymentsLink, HasTaskLink, HasTaskTimestamps};
//!
//! let release = api.release("Releases-1").await?;
//! let mut deployments = release.deployments()?;
//! while let Some(deployment) = deployments.next_item().await? {
//!     let task = deployment.task().await?;
//!     println!("{:?} started {:?}", deployment.id(), task.start_time()?);
//! }
//! ```

mod errors;
pub mod links;
mod node;
mod pages;
mod relations;
mod resource;
pub mod resources;
mod timestamp;

pub use errors::ResourceError;
pub use links::strip_link_template;
pub use node::ResourceNode;
pub use pages::Pages;
pub use relations::{
    HasDeployedBy, HasDeploymentsLink, HasEnvironmentLink, HasInterruptionsLink, HasProjectLink,
    HasReleaseLink, HasTaskLink, HasTaskTimestamps, HasVariablesLink, DEPLOYED_BY_ID,
};
pub use resource::ApiResource;
pub use timestamp::{format_timestamp, parse_timestamp, TIMESTAMP_FORMAT};
