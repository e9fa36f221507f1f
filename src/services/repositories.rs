//! Repository operations.

use super::serialize_comma_separated;
use crate::client::TravisClient;
use crate::errors::TravisResult;
use crate::pagination::{PageLink, Response};
use crate::types::Repository;
use serde::{Deserialize, Serialize};

/// Service for repository operations.
///
/// Repositories are addressed by numeric ID or by slug (`owner/name`); both
/// are accepted wherever a `slug_or_id` is taken.
pub struct RepositoriesService<'a> {
    client: &'a TravisClient,
}

impl<'a> RepositoriesService<'a> {
    /// Creates a new repositories service.
    pub fn new(client: &'a TravisClient) -> Self {
        Self { client }
    }

    /// Lists repositories the current user has access to.
    pub async fn list(&self, options: &RepositoriesOption) -> TravisResult<(Vec<Repository>, Response)> {
        self.list_at(&["repos"], options).await
    }

    /// Lists repositories of an owner (user or organization login).
    pub async fn list_by_owner(
        &self,
        owner: &str,
        options: &RepositoriesOption,
    ) -> TravisResult<(Vec<Repository>, Response)> {
        self.list_at(&["owner", owner, "repos"], options).await
    }

    /// Lists repositories of an owner identified by GitHub ID.
    pub async fn list_by_github_id(
        &self,
        github_id: u64,
        options: &RepositoriesOption,
    ) -> TravisResult<(Vec<Repository>, Response)> {
        let github_id = github_id.to_string();
        self.list_at(&["owner", "github_id", github_id.as_str(), "repos"], options)
            .await
    }

    /// Fetches another page of a repository listing.
    pub async fn list_page(&self, link: &PageLink) -> TravisResult<(Vec<Repository>, Response)> {
        let (list, response): (RepositoryList, Response) = self.client.get_page(link).await?;
        Ok((list.repositories, response))
    }

    /// Fetches a repository by ID or slug.
    pub async fn find(
        &self,
        slug_or_id: &str,
        options: &RepositoryOption,
    ) -> TravisResult<(Repository, Response)> {
        self.client.get(&["repo", slug_or_id], options).await
    }

    /// Enables builds for a repository.
    pub async fn activate(&self, slug_or_id: &str) -> TravisResult<(Repository, Response)> {
        self.action(slug_or_id, "activate").await
    }

    /// Disables builds for a repository.
    pub async fn deactivate(&self, slug_or_id: &str) -> TravisResult<(Repository, Response)> {
        self.action(slug_or_id, "deactivate").await
    }

    /// Migrates a repository from travis-ci.org to travis-ci.com.
    pub async fn migrate(&self, slug_or_id: &str) -> TravisResult<(Repository, Response)> {
        self.action(slug_or_id, "migrate").await
    }

    /// Stars a repository for the current user.
    pub async fn star(&self, slug_or_id: &str) -> TravisResult<(Repository, Response)> {
        self.action(slug_or_id, "star").await
    }

    /// Unstars a repository for the current user.
    pub async fn unstar(&self, slug_or_id: &str) -> TravisResult<(Repository, Response)> {
        self.action(slug_or_id, "unstar").await
    }

    async fn list_at(
        &self,
        segments: &[&str],
        options: &RepositoriesOption,
    ) -> TravisResult<(Vec<Repository>, Response)> {
        let (list, response): (RepositoryList, Response) = self.client.get(segments, options).await?;
        Ok((list.repositories, response))
    }

    async fn action(&self, slug_or_id: &str, action: &str) -> TravisResult<(Repository, Response)> {
        self.client
            .post(&["repo", slug_or_id, action], Option::<&()>::None)
            .await
    }
}

/// Options for [`RepositoriesService::find`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct RepositoryOption {
    /// Attributes to eager load, e.g. `repository.default_branch`.
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_comma_separated"
    )]
    pub include: Vec<String>,
}

/// Filters for repository listings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RepositoriesOption {
    /// Only repositories with builds enabled (or disabled).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Only repositories active on travis-ci.org.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_on_org: Option<bool>,
    /// Only repositories managed by a GitHub App installation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_by_installation: Option<bool>,
    /// Only private (or public) repositories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    /// Only repositories starred by the current user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starred: Option<bool>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Offset into the collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Sort key, e.g. `id`, `name` or `last_build_started_at:desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// Attributes to eager load.
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_comma_separated"
    )]
    pub include: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RepositoryList {
    #[serde(default)]
    repositories: Vec<Repository>,
}
