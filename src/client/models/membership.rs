//! Role membership models

use serde::Serialize;

/// Owner role ID shipped with IQ Server. Identical on every installation
/// that has not re-created its built-in roles.
pub const OWNER_ROLE_ID: &str = "1cddabf7fdaa47d6833454af10e0a3ef";

/// A role membership that was set on an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMembership {
    pub organization_id: String,
    pub role_id: String,
    pub member_name: String,
}
