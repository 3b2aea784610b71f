//! Project resource.

use serde_json::Value;

api_resource! {
    /// A deployable unit: its deployment process, variables and releases.
    Project, "projects"
}

impl Project {
    /// Returns the `Slug` field.
    #[must_use]
    pub fn slug(&self) -> Option<&str> {
        self.get_str("Slug")
    }

    /// Returns the `Description` field.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.get_str("Description")
    }

    /// Returns the `VariableSetId` field.
    #[must_use]
    pub fn variable_set_id(&self) -> Option<&str> {
        self.get_str("VariableSetId")
    }

    /// Returns `true` if the project is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.get("IsDisabled")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}
