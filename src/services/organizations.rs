//! Organization operations.

use super::serialize_comma_separated;
use crate::client::TravisClient;
use crate::errors::TravisResult;
use crate::pagination::{PageLink, Response};
use crate::types::Organization;
use serde::{Deserialize, Serialize};

/// Service for organization operations.
pub struct OrganizationsService<'a> {
    client: &'a TravisClient,
}

impl<'a> OrganizationsService<'a> {
    /// Creates a new organizations service.
    pub fn new(client: &'a TravisClient) -> Self {
        Self { client }
    }

    /// Fetches an organization by ID.
    pub async fn find(
        &self,
        id: u64,
        options: &OrganizationOption,
    ) -> TravisResult<(Organization, Response)> {
        let id = id.to_string();
        self.client.get(&["org", id.as_str()], options).await
    }

    /// Lists the organizations the current user is a member of.
    pub async fn list(
        &self,
        options: &OrganizationsOption,
    ) -> TravisResult<(Vec<Organization>, Response)> {
        let (list, response): (OrganizationList, Response) = self.client.get(&["orgs"], options).await?;
        Ok((list.organizations, response))
    }

    /// Fetches another page of an organization listing.
    pub async fn list_page(&self, link: &PageLink) -> TravisResult<(Vec<Organization>, Response)> {
        let (list, response): (OrganizationList, Response) = self.client.get_page(link).await?;
        Ok((list.organizations, response))
    }
}

/// Options for [`OrganizationsService::find`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrganizationOption {
    /// Attributes to eager load, e.g. `organization.repositories`.
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_comma_separated"
    )]
    pub include: Vec<String>,
}

/// Options for [`OrganizationsService::list`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrganizationsOption {
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Offset into the collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Sort key, e.g. `id` or `login:desc`.
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
struct OrganizationList {
    #[serde(default)]
    organizations: Vec<Organization>,
}
