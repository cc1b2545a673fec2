//! Application models

use serde::{Deserialize, Serialize};

/// Application resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Server-assigned internal ID, stable across moves
    pub id: String,

    /// Caller-chosen public ID
    pub public_id: String,

    /// Display name
    pub name: String,

    /// Owning organization
    pub organization_id: String,
}

/// Response body of `GET /api/v2/applications?publicId=...`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationList {
    #[serde(default)]
    pub applications: Vec<Application>,
}

/// Request body for creating an application
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    pub public_id: String,
    pub name: String,
    pub organization_id: String,
}

impl CreateApplicationRequest {
    /// The public ID doubles as the display name.
    pub fn named_after(public_id: &str, organization_id: &str) -> Self {
        Self {
            public_id: public_id.to_string(),
            name: public_id.to_string(),
            organization_id: organization_id.to_string(),
        }
    }
}
