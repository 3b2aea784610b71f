//! Typed Octopus resources.
//!
//! Every type here is a newtype over a [`ResourceNode`](crate::rest::ResourceNode)
//! and derefs to it, so field access and [`save`](crate::rest::ResourceNode::save)
//! work the same on all of them. What differs is the collection path and the
//! relation capabilities each type opts into:
//!
//! | Type | Path | Relations |
//! |---|---|---|
//! | [`Deployment`] | `deployments` | project, environment, release, task, interruptions, deployed-by |
//! | [`Environment`] | `environments` | |
//! | [`Interruption`] | `interruptions` | |
//! | [`LibraryVariableSet`] | `libraryvariablesets` | variable set |
//! | [`Project`] | `projects` | |
//! | [`Release`] | `releases` | project, deployments |
//! | [`Task`] | `tasks` | interruptions, timestamps |
//! | [`User`] | `users` | |
//! | [`VariableSet`] | `variables` | |

/// Declares a resource newtype with its [`ApiResource`](crate::rest::ApiResource)
/// and `Deref` impls.
macro_rules! api_resource {
    ($(#[$meta:meta])* $name:ident, $path:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, serde::Serialize)]
        #[serde(transparent)]
        pub struct $name(crate::rest::ResourceNode);

        impl crate::rest::ApiResource for $name {
            const NAME: &'static str = stringify!($name);
            const PATH: &'static str = $path;

            fn from_node(node: crate::rest::ResourceNode) -> Self {
                Self(node)
            }

            fn node(&self) -> &crate::rest::ResourceNode {
                &self.0
            }

            fn node_mut(&mut self) -> &mut crate::rest::ResourceNode {
                &mut self.0
            }

            fn into_node(self) -> crate::rest::ResourceNode {
                self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = crate::rest::ResourceNode;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }
    };
}

mod deployment;
mod environment;
mod interruption;
mod library_variable_set;
mod project;
mod release;
mod task;
mod user;
mod variable_set;

pub use deployment::Deployment;
pub use environment::Environment;
pub use interruption::Interruption;
pub use library_variable_set::LibraryVariableSet;
pub use project::Project;
pub use release::Release;
pub use task::{Task, TaskState};
pub use user::User;
pub use variable_set::VariableSet;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use serde_json::Value;

    use crate::clients::testing::ScriptedTransport;
    use crate::clients::Connection;
    use crate::rest::ApiResource;

    pub const BASE: &str = "https://octopus.example.com";

    /// Builds a resource over a fresh scripted transport.
    pub fn resource<T: ApiResource>(fields: Value) -> (Arc<ScriptedTransport>, T) {
        let transport = Arc::new(ScriptedTransport::default());
        let connection = Connection::new(transport.clone(), BASE);
        let resource = T::from_value(connection, fields).unwrap();
        (transport, resource)
    }
}
