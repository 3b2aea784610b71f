//! The service facade: entry points into the resource graph.
//!
//! [`OctopusApi`] owns the single [`Connection`] every resource and page
//! sequence spawned from it shares.
//!
//! # Example
//!
//! ```rust,ignore
//! use octopus_api::{ApiKey, OctopusApi, OctopusConfig, ServerUrl};
//! use octopus_api::rest::HasProjectLink;
//!
//! let config = OctopusConfig::builder()
//!     .server_url(ServerUrl::new("https://octopus.example.com")?)
//!     .api_key(ApiKey::new("API-XXXXXXXX")?)
//!     .build()?;
//! let api = OctopusApi::new(&config)?;
//!
//! let mut releases = api.releases(None);
//! while let Some(release) = releases.next_item().await? {
//!     let project = release.project().await?;
//!     println!("{:?} {:?}", project.name(), release.version());
//! }
//! ```

use std::sync::Arc;

use serde_json::Value;

use crate::clients::{Connection, HttpClient, HttpError, Query, Transport};
use crate::config::OctopusConfig;
use crate::rest::resources::{
    Deployment, Environment, LibraryVariableSet, Project, Release, Task, User,
};
use crate::rest::{ApiResource, Pages, ResourceError};

/// Client for the Octopus Deploy REST API.
///
/// Cheap to clone; clones share one connection.
#[derive(Clone, Debug)]
pub struct OctopusApi {
    connection: Connection,
}

// Verify OctopusApi is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OctopusApi>();
};

impl OctopusApi {
    /// Creates a client that talks to the configured server over HTTP.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the underlying HTTP client cannot be built.
    pub fn new(config: &OctopusConfig) -> Result<Self, HttpError> {
        let transport = HttpClient::new(config)?;
        tracing::debug!(server = %config.server_url(), "created Octopus API client");
        Ok(Self::with_transport(
            Arc::new(transport),
            config.server_url().as_ref(),
        ))
    }

    /// Creates a client over any [`Transport`].
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>, url_base: &str) -> Self {
        Self {
            connection: Connection::new(transport, url_base),
        }
    }

    /// Returns the shared connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Returns a lazy sequence over `{base}/api/{T::PATH}`.
    ///
    /// `parameters` go out with the first page request only.
    #[must_use]
    pub fn all<T: ApiResource>(&self, parameters: Option<Query>) -> Pages<T> {
        Pages::new(self.connection.clone(), self.collection_url::<T>(), parameters)
    }

    /// Fetches one resource by id from `{base}/api/{T::PATH}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the server answers 404,
    /// [`ResourceError::Http`] for other failures.
    pub async fn find<T: ApiResource>(&self, id: &str) -> Result<T, ResourceError> {
        let url = format!("{}/{}", self.collection_url::<T>(), urlencoding::encode(id));
        tracing::debug!(resource = T::NAME, id, "fetching resource");

        let body = self
            .connection
            .get(&url, None)
            .await
            .map_err(|e| ResourceError::from_lookup(e, T::NAME, id))?;
        T::from_value(self.connection.clone(), body)
    }

    /// Creates a resource by POSTing `body` to `{base}/api/{T::PATH}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] if the POST fails, or
    /// [`ResourceError::InvalidPayload`] if the response is not an object.
    pub async fn create<T: ApiResource>(&self, body: Value) -> Result<T, ResourceError> {
        let url = self.collection_url::<T>();
        tracing::debug!(resource = T::NAME, url = %url, "creating resource");

        let created = self.connection.post(&url, body).await?;
        T::from_value(self.connection.clone(), created)
    }

    /// Lists deployments.
    #[must_use]
    pub fn deployments(&self, parameters: Option<Query>) -> Pages<Deployment> {
        self.all(parameters)
    }

    /// Fetches a deployment by id.
    ///
    /// # Errors
    ///
    /// See [`find`](Self::find).
    pub async fn deployment(&self, id: &str) -> Result<Deployment, ResourceError> {
        self.find(id).await
    }

    /// Lists environments.
    #[must_use]
    pub fn environments(&self, parameters: Option<Query>) -> Pages<Environment> {
        self.all(parameters)
    }

    /// Fetches an environment by id.
    ///
    /// # Errors
    ///
    /// See [`find`](Self::find).
    pub async fn environment(&self, id: &str) -> Result<Environment, ResourceError> {
        self.find(id).await
    }

    /// Lists library variable sets.
    #[must_use]
    pub fn library_variable_sets(&self, parameters: Option<Query>) -> Pages<LibraryVariableSet> {
        self.all(parameters)
    }

    /// Fetches a library variable set by id.
    ///
    /// # Errors
    ///
    /// See [`find`](Self::find).
    pub async fn library_variable_set(&self, id: &str) -> Result<LibraryVariableSet, ResourceError> {
        self.find(id).await
    }

    /// Creates a library variable set.
    ///
    /// # Errors
    ///
    /// See [`create`](Self::create).
    pub async fn create_library_variable_set(
        &self,
        body: Value,
    ) -> Result<LibraryVariableSet, ResourceError> {
        self.create(body).await
    }

    /// Lists projects.
    #[must_use]
    pub fn projects(&self, parameters: Option<Query>) -> Pages<Project> {
        self.all(parameters)
    }

    /// Fetches a project by id.
    ///
    /// # Errors
    ///
    /// See [`find`](Self::find).
    pub async fn project(&self, id: &str) -> Result<Project, ResourceError> {
        self.find(id).await
    }

    /// Lists releases.
    #[must_use]
    pub fn releases(&self, parameters: Option<Query>) -> Pages<Release> {
        self.all(parameters)
    }

    /// Fetches a release by id.
    ///
    /// # Errors
    ///
    /// See [`find`](Self::find).
    pub async fn release(&self, id: &str) -> Result<Release, ResourceError> {
        self.find(id).await
    }

    /// Lists server tasks.
    #[must_use]
    pub fn tasks(&self, parameters: Option<Query>) -> Pages<Task> {
        self.all(parameters)
    }

    /// Fetches a server task by id.
    ///
    /// # Errors
    ///
    /// See [`find`](Self::find).
    pub async fn task(&self, id: &str) -> Result<Task, ResourceError> {
        self.find(id).await
    }

    /// Lists users.
    #[must_use]
    pub fn users(&self, parameters: Option<Query>) -> Pages<User> {
        self.all(parameters)
    }

    /// Fetches a user by id.
    ///
    /// # Errors
    ///
    /// See [`find`](Self::find).
    pub async fn user(&self, id: &str) -> Result<User, ResourceError> {
        self.find(id).await
    }

    fn collection_url<T: ApiResource>(&self) -> String {
        self.connection.resolve(&format!("api/{}", T::PATH))
    }
}
