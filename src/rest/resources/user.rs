//! User resource.

use serde_json::Value;

api_resource! {
    /// An Octopus user account.
    User, "users"
}

impl User {
    /// Returns the `Username` field.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.get_str("Username")
    }

    /// Returns the `DisplayName` field.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.get_str("DisplayName")
    }

    /// Returns the `EmailAddress` field.
    #[must_use]
    pub fn email_address(&self) -> Option<&str> {
        self.get_str("EmailAddress")
    }

    /// Returns `true` if the account is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.get("IsActive").and_then(Value::as_bool).unwrap_or(false)
    }
}
