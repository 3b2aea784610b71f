//! Deployment resource.

use chrono::{DateTime, FixedOffset};

use crate::rest::{
    HasDeployedBy, HasEnvironmentLink, HasInterruptionsLink, HasProjectLink, HasReleaseLink,
    HasTaskLink, ResourceError,
};

api_resource! {
    /// A release deployed to an environment.
    ///
    /// ```rust,ignore
    /// use octopus_api::rest::{HasDeployedBy, HasEnvironmentLink, HasTaskLink};
    ///
    /// let deployment = api.deployment("Deployments-1").await?;
    /// let environment = deployment.environment().await?;
    /// let user = deployment.deployed_by().await?;
    /// let task = deployment.task().await?;
    /// ```
    Deployment, "deployments"
}

impl HasProjectLink for Deployment {}
impl HasEnvironmentLink for Deployment {}
impl HasReleaseLink for Deployment {}
impl HasTaskLink for Deployment {}
impl HasInterruptionsLink for Deployment {}
impl HasDeployedBy for Deployment {}

impl Deployment {
    /// Returns the `ReleaseId` field.
    #[must_use]
    pub fn release_id(&self) -> Option<&str> {
        self.get_str("ReleaseId")
    }

    /// Returns the `EnvironmentId` field.
    #[must_use]
    pub fn environment_id(&self) -> Option<&str> {
        self.get_str("EnvironmentId")
    }

    /// Returns the `ProjectId` field.
    #[must_use]
    pub fn project_id(&self) -> Option<&str> {
        self.get_str("ProjectId")
    }

    /// Returns the `TaskId` field.
    #[must_use]
    pub fn task_id(&self) -> Option<&str> {
        self.get_str("TaskId")
    }

    /// Parses the `Created` timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedTimestamp`] if the field does not parse.
    pub fn created(&self) -> Result<Option<DateTime<FixedOffset>>, ResourceError> {
        self.timestamp("Created")
    }
}
