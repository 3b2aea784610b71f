//! Release resource.

use chrono::{DateTime, FixedOffset};

use crate::rest::{HasDeploymentsLink, HasProjectLink, ResourceError};

api_resource! {
    /// A versioned snapshot of a project, ready to deploy.
    Release, "releases"
}

impl HasProjectLink for Release {}
impl HasDeploymentsLink for Release {}

impl Release {
    /// Returns the `Version` field.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.get_str("Version")
    }

    /// Returns the `ProjectId` field.
    #[must_use]
    pub fn project_id(&self) -> Option<&str> {
        self.get_str("ProjectId")
    }

    /// Returns the `ReleaseNotes` field.
    #[must_use]
    pub fn release_notes(&self) -> Option<&str> {
        self.get_str("ReleaseNotes")
    }

    /// Parses the `Assembled` timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MalformedTimestamp`] if the field does not parse.
    pub fn assembled(&self) -> Result<Option<DateTime<FixedOffset>>, ResourceError> {
        self.timestamp("Assembled")
    }
}
