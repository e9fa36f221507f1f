//! Core data types for the Travis CI API.
//!
//! Every field is optional: the API omits attributes depending on the
//! representation it renders (`minimal` vs `standard`) and on `include`.

use serde::{Deserialize, Serialize};

/// Travis CI organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization ID.
    pub id: Option<u64>,
    /// Login name.
    pub login: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// ID of the organization on GitHub.
    pub github_id: Option<u64>,
    /// Avatar URL.
    pub avatar_url: Option<String>,
    /// Whether the organization has an education account.
    pub education: Option<bool>,
    /// Whether repositories may be migrated to travis-ci.com.
    pub allow_migration: Option<bool>,
    /// Repositories, present with `include=organization.repositories`.
    pub repositories: Option<Vec<Repository>>,
}

/// Travis CI repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository ID.
    pub id: Option<u64>,
    /// Repository name.
    pub name: Option<String>,
    /// Slug (`owner/name`).
    pub slug: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// ID of the repository on GitHub.
    pub github_id: Option<u64>,
    /// ID of the repository on its VCS provider.
    pub vcs_id: Option<String>,
    /// VCS provider type, e.g. `GithubRepository`.
    pub vcs_type: Option<String>,
    /// Main language as reported by GitHub.
    pub github_language: Option<String>,
    /// Whether builds are enabled.
    pub active: Option<bool>,
    /// Whether the repository is private.
    pub private: Option<bool>,
    /// Owner.
    pub owner: Option<Owner>,
    /// Default branch.
    pub default_branch: Option<Branch>,
    /// Whether the current user starred the repository.
    pub starred: Option<bool>,
    /// Whether the repository is managed by a GitHub App installation.
    pub managed_by_installation: Option<bool>,
    /// Whether the repository is active on travis-ci.org.
    pub active_on_org: Option<bool>,
    /// Migration status.
    pub migration_status: Option<String>,
}

/// Minimal representation of a repository owner (user or organization).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Owner ID.
    pub id: Option<u64>,
    /// Login name.
    pub login: Option<String>,
    /// API path of the owner.
    #[serde(rename = "@href")]
    pub href: Option<String>,
}

/// Minimal representation of a branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    /// Branch name.
    pub name: Option<String>,
    /// API path of the branch.
    #[serde(rename = "@href")]
    pub href: Option<String>,
}
