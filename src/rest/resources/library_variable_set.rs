//! Library variable set resource.

use crate::rest::HasVariablesLink;

api_resource! {
    /// A named variable set shared between projects.
    ///
    /// The variables themselves live in a separate [`VariableSet`](super::VariableSet)
    /// reached through [`HasVariablesLink::variable_set`].
    LibraryVariableSet, "libraryvariablesets"
}

impl HasVariablesLink for LibraryVariableSet {}

impl LibraryVariableSet {
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
}
