//! Organization API trait

use async_trait::async_trait;

use crate::client::models::{CreateOrganizationRequest, Organization, OrganizationList};
use crate::error::Result;

/// Organization operations for the IQ Server API
#[async_trait]
pub trait OrganizationApi: Send + Sync {
    /// List every organization visible to the authenticated user.
    async fn list_organizations(&self) -> Result<OrganizationList>;

    /// Create an organization and return it with its server-assigned ID.
    async fn create_organization(&self, request: CreateOrganizationRequest) -> Result<Organization>;
}
