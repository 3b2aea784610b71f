//! Environment resource.

api_resource! {
    /// A deployment target group such as "Staging" or "Production".
    Environment, "environments"
}

impl Environment {
    /// Returns the `Description` field.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.get_str("Description")
    }

    /// Returns the `SortOrder` field.
    #[must_use]
    pub fn sort_order(&self) -> Option<i64> {
        self.get("SortOrder").and_then(serde_json::Value::as_i64)
    }
}
