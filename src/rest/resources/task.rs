//! Server task resource and its state vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rest::{HasInterruptionsLink, HasTaskTimestamps, ResourceError};

/// The lifecycle state of a server task, as spelled on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TaskState {
    Canceled,
    Cancelling,
    Completed,
    Executing,
    Failed,
    Incomplete,
    Queued,
    Running,
    Success,
    TimedOut,
    Unsuccessful,
}

impl TaskState {
    /// Every state, in alphabetical order.
    pub const ALL: [Self; 11] = [
        Self::Canceled,
        Self::Cancelling,
        Self::Completed,
        Self::Executing,
        Self::Failed,
        Self::Incomplete,
        Self::Queued,
        Self::Running,
        Self::Success,
        Self::TimedOut,
        Self::Unsuccessful,
    ];

    /// Returns the wire spelling (e.g., "TimedOut").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Canceled => "Canceled",
            Self::Cancelling => "Cancelling",
            Self::Completed => "Completed",
            Self::Executing => "Executing",
            Self::Failed => "Failed",
            Self::Incomplete => "Incomplete",
            Self::Queued => "Queued",
            Self::Running => "Running",
            Self::Success => "Success",
            Self::TimedOut => "TimedOut",
            Self::Unsuccessful => "Unsuccessful",
        }
    }

    /// Returns `true` for states a task never leaves.
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(
            self,
            Self::Canceled | Self::Completed | Self::Failed | Self::Success | Self::TimedOut | Self::Unsuccessful
        )
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskState {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| ResourceError::UnknownTaskState {
                value: s.to_string(),
            })
    }
}

api_resource! {
    /// A unit of server-side work, such as running a deployment.
    ///
    /// ```rust,ignore
    /// use octopus_api::rest::HasTaskTimestamps;
    ///
    /// let task = api.task("ServerTasks-1").await?;
    /// if task.state()?.is_some_and(|state| state.is_final()) {
    ///     println!("finished at {:?}", task.time_completed()?);
    /// }
    /// ```
    Task, "tasks"
}

impl HasInterruptionsLink for Task {}
impl HasTaskTimestamps for Task {}

impl Task {
    /// Parses the `State` field.
    ///
    /// Returns `Ok(None)` when the field is absent or empty.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::UnknownTaskState`] for a value outside
    /// [`TaskState::ALL`].
    pub fn state(&self) -> Result<Option<TaskState>, ResourceError> {
        match self.get_str("State") {
            None | Some("") => Ok(None),
            Some(state) => state.parse().map(Some),
        }
    }

    /// Returns the `Description` field.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.get_str("Description")
    }

    /// Returns the `ErrorMessage` field, if the task failed with one.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.get_str("ErrorMessage").filter(|message| !message.is_empty())
    }

    /// Returns `true` once the server reports the task as completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.get("IsCompleted")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}
