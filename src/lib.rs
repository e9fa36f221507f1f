//! # Travis CI Integration Library
//!
//! An async client for the Travis CI API v3:
//! - Organizations and repositories resources
//! - Typed option structs encoded as query parameters
//! - The `@pagination` envelope surfaced on every list call
//! - Structured errors carrying the Travis error envelope and raw response
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_travis::{RepositoriesOption, TravisClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TravisClient::builder().token("xxxxxxxxxxxx").build()?;
//!
//!     let options = RepositoriesOption {
//!         active: Some(true),
//!         limit: Some(25),
//!         ..Default::default()
//!     };
//!     let (repos, response) = client.repositories().list_by_owner("octocat", &options).await?;
//!     for repo in repos {
//!         println!("{:?}", repo.slug);
//!     }
//!
//!     if let Some(next) = response.next_page() {
//!         let (more, _) = client.repositories().list_page(next).await?;
//!         println!("next page has {} repositories", more.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod config;
pub mod errors;
pub mod types;

// Authentication
pub mod auth;

// HTTP client and transport
pub mod client;

// Pagination envelope and response metadata
pub mod pagination;

// API Services
pub mod services;

// Observability
pub mod observability;

// Re-exports for convenience
pub use auth::AuthMethod;
pub use client::{TravisClient, TravisClientBuilder};
pub use config::{TravisConfig, TravisConfigBuilder};
pub use errors::{TravisError, TravisErrorKind, TravisResult};
pub use pagination::{PageLink, Pagination, Response};
pub use services::{
    OrganizationOption, OrganizationsOption, OrganizationsService, RepositoriesOption,
    RepositoriesService, RepositoryOption,
};
pub use types::*;
