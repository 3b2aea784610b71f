//! Interruption resource.

use serde_json::Value;

api_resource! {
    /// A pause in a running task that waits for manual intervention or guidance.
    Interruption, "interruptions"
}

impl Interruption {
    /// Returns the `Title` field.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.get_str("Title")
    }

    /// Returns the `TaskId` field.
    #[must_use]
    pub fn task_id(&self) -> Option<&str> {
        self.get_str("TaskId")
    }

    /// Returns `true` while the interruption still waits for a response.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.get("IsPending")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}
