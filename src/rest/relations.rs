//! Relation and timestamp capabilities.
//!
//! Each trait is a small capability a resource type opts into with an empty
//! `impl`. All behavior lives in the default methods, which go through
//! [`ApiResource::node`] to reach the underlying [`ResourceNode`].
//!
//! ```rust,ignore
//! use octopus_api::rest::{HasProjectLink, HasDeploymentsLink};
//!
//! let release = api.release("Releases-1").await?;
//! let project = release.project().await?;
//! let mut deployments = release.deployments()?;
//! while let Some(deployment) = deployments.next_item().await? {
//!     println!("{:?}", deployment.id());
//! }
//! ```
//!
//! [`ResourceNode`]: crate::rest::ResourceNode

use chrono::{DateTime, FixedOffset};

use crate::rest::links;
use crate::rest::resources::{
    Deployment, Environment, Interruption, Project, Release, Task, User, VariableSet,
};
use crate::rest::{ApiResource, Pages, ResourceError};

/// Field holding the id of the user who started a deployment.
pub const DEPLOYED_BY_ID: &str = "DeployedById";

/// Resources linking to their owning [`Project`].
#[allow(async_fn_in_trait)]
pub trait HasProjectLink: ApiResource {
    /// Fetches the linked project.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingRelation`] if there is no `Project`
    /// link, or [`ResourceError::Http`] if the GET fails.
    async fn project(&self) -> Result<Project, ResourceError> {
        self.node().fetch_relation(links::PROJECT).await
    }
}

/// Resources linking to a target [`Environment`].
#[allow(async_fn_in_trait)]
pub trait HasEnvironmentLink: ApiResource {
    /// Fetches the linked environment.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingRelation`] if there is no `Environment`
    /// link, or [`ResourceError::Http`] if the GET fails.
    async fn environment(&self) -> Result<Environment, ResourceError> {
        self.node().fetch_relation(links::ENVIRONMENT).await
    }
}

/// Resources linking to a [`Release`].
#[allow(async_fn_in_trait)]
pub trait HasReleaseLink: ApiResource {
    /// Fetches the linked release.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingRelation`] if there is no `Release`
    /// link, or [`ResourceError::Http`] if the GET fails.
    async fn release(&self) -> Result<Release, ResourceError> {
        self.node().fetch_relation(links::RELEASE).await
    }
}

/// Resources linking to the server [`Task`] that carries them out.
#[allow(async_fn_in_trait)]
pub trait HasTaskLink: ApiResource {
    /// Fetches the linked task.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingRelation`] if there is no `Task` link,
    /// or [`ResourceError::Http`] if the GET fails.
    async fn task(&self) -> Result<Task, ResourceError> {
        self.node().fetch_relation(links::TASK).await
    }
}

/// Resources linking to a [`VariableSet`].
#[allow(async_fn_in_trait)]
pub trait HasVariablesLink: ApiResource {
    /// Fetches the linked variable set.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingRelation`] if there is no `Variables`
    /// link, or [`ResourceError::Http`] if the GET fails.
    async fn variable_set(&self) -> Result<VariableSet, ResourceError> {
        self.node().fetch_relation(links::VARIABLES).await
    }
}

/// Resources linking to a paged collection of [`Deployment`]s.
pub trait HasDeploymentsLink: ApiResource {
    /// Returns a lazy sequence over the linked deployments.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingRelation`] if there is no `Deployments` link.
    fn deployments(&self) -> Result<Pages<Deployment>, ResourceError> {
        self.node().relation_pages(links::DEPLOYMENTS)
    }
}

/// Resources linking to a paged collection of [`Interruption`]s.
pub trait HasInterruptionsLink: ApiResource {
    /// Returns a lazy sequence over the linked interruptions.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingRelation`] if there is no `Interruptions` link.
    fn interruptions(&self) -> Result<Pages<Interruption>, ResourceError> {
        self.node().relation_pages(links::INTERRUPTIONS)
    }
}

/// Resources recording the [`User`] who started them.
///
/// Octopus exposes no link for this; the user is looked up by the
/// `DeployedById` field under `/api/users/`.
#[allow(async_fn_in_trait)]
pub trait HasDeployedBy: ApiResource {
    /// Fetches the user who started this resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] without sending anything if
    /// `DeployedById` is absent or empty, or [`ResourceError::Http`] if the
    /// GET fails.
    async fn deployed_by(&self) -> Result<User, ResourceError> {
        let node = self.node();
        let id = node
            .get_str(DEPLOYED_BY_ID)
            .filter(|id| !id.is_empty())
            .ok_or(ResourceError::MissingField {
                resource: Self::NAME,
                field: DEPLOYED_BY_ID,
            })?;

        let path = format!("api/{}/{}", User::PATH, urlencoding::encode(id));
        let url = node.connection().resolve(&path);
        tracing::debug!(resource = Self::NAME, user = id, url = %url, "fetching initiating user");
        node.fetch_url(&url).await
    }
}

/// Resources carrying the server task timing fields.
///
/// Each accessor returns `Ok(None)` when its field is absent, `null` or empty.
pub trait HasTaskTimestamps: ApiResource {
    /// Parses `StartTime`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedTimestamp`] if the field does not parse.
    fn start_time(&self) -> Result<Option<DateTime<FixedOffset>>, ResourceError> {
        self.node().timestamp("StartTime")
    }

    /// Parses `QueueTime`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedTimestamp`] if the field does not parse.
    fn time_queue(&self) -> Result<Option<DateTime<FixedOffset>>, ResourceError> {
        self.node().timestamp("QueueTime")
    }

    /// Parses `QueueTimeExpiry`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedTimestamp`] if the field does not parse.
    fn time_expiry(&self) -> Result<Option<DateTime<FixedOffset>>, ResourceError> {
        self.node().timestamp("QueueTimeExpiry")
    }

    /// Parses `LastUpdatedTime`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedTimestamp`] if the field does not parse.
    fn time_last_updated(&self) -> Result<Option<DateTime<FixedOffset>>, ResourceError> {
        self.node().timestamp("LastUpdatedTime")
    }

    /// Parses `CompletedTime`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedTimestamp`] if the field does not parse.
    fn time_completed(&self) -> Result<Option<DateTime<FixedOffset>>, ResourceError> {
        self.node().timestamp("CompletedTime")
    }
}
