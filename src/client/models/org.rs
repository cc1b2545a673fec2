//! Organization models

use serde::{Deserialize, Serialize};

/// Organization resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Server-assigned organization ID
    pub id: String,

    /// Organization name (unique on the server)
    pub name: String,

    /// Parent organization ID (the root organization has none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_organization_id: Option<String>,
}

/// Response body of `GET /api/v2/organizations`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganizationList {
    #[serde(default)]
    pub organizations: Vec<Organization>,
}

impl OrganizationList {
    /// First organization whose name matches exactly (case-sensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Organization> {
        self.organizations.iter().find(|org| org.name == name)
    }
}

/// Request body for creating an organization
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrganizationRequest {
    pub name: String,
}
