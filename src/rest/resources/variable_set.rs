//! Variable set resource.

use serde_json::Value;

api_resource! {
    /// The variables owned by a project or library variable set.
    VariableSet, "variables"
}

impl VariableSet {
    /// Returns the `OwnerId` field.
    #[must_use]
    pub fn owner_id(&self) -> Option<&str> {
        self.get_str("OwnerId")
    }

    /// Returns the `Version` field, which the server bumps on every change.
    #[must_use]
    pub fn version(&self) -> Option<u64> {
        self.get("Version").and_then(Value::as_u64)
    }

    /// Returns the raw `Variables` array.
    #[must_use]
    pub fn variables(&self) -> Option<&Vec<Value>> {
        self.get("Variables").and_then(Value::as_array)
    }
}
