//! # Octopus Deploy API Rust Client
//!
//! An async client for the Octopus Deploy REST API that exposes the server's
//! resources as a navigable graph.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`OctopusConfig`] and [`OctopusConfigBuilder`]
//! - Validated newtypes for the API key and server URL
//! - [`OctopusApi`], the entry point for listing, fetching and creating resources
//! - [`Pages`], a lazy sequence that fetches list pages only when needed
//! - [`ResourceNode`], a fetched resource whose `Links` can be followed into
//!   related resources, and which can be saved back to the server
//!
//! ## Quick Start
//!
//! ```rust
//! use octopus_api::{ApiKey, OctopusConfig, ServerUrl};
//!
//! let config = OctopusConfig::builder()
//!     .server_url(ServerUrl::new("https://octopus.example.com").unwrap())
//!     .api_key(ApiKey::new("API-XXXXXXXXXXXXXXXX").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Walking the Resource Graph
//!
//! ```rust,ignore
//! use octopus_api::OctopusApi;
//! use octopus_api::rest::{HasDeployedBy, HasEnvironmentLink, HasTaskLink, HasTaskTimestamps};
//!
//! let api = OctopusApi::new(&config)?;
//!
//! let mut deployments = api.deployments(None);
//! while let Some(deployment) = deployments.next_item().await? {
//!     let environment = deployment.environment().await?;
//!     let user = deployment.deployed_by().await?;
//!     let task = deployment.task().await?;
//!     println!(
//!         "{:?} to {:?} by {:?}, started {:?}",
//!         deployment.id(),
//!         environment.name(),
//!         user.username(),
//!         task.start_time()?,
//!     );
//! }
//! ```
//!
//! ## Updating a Resource
//!
//! ```rust,ignore
//! let mut project = api.project("Projects-1").await?;
//! project.set("Description", "Managed by the release bot");
//! project.save().await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Lazy**: Nothing is fetched until a sequence is advanced or a relation followed
//! - **Sequential**: Every operation awaits its one request; there is no prefetching,
//!   caching or retrying
//! - **Thread-safe**: The client and connection are `Send + Sync`

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use api::OctopusApi;
pub use config::{ApiKey, OctopusConfig, OctopusConfigBuilder, ServerUrl};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    Connection, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, Query, Transport,
};

// Re-export resource graph types
pub use rest::{ApiResource, Pages, ResourceError, ResourceNode};
