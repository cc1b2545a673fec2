//! Outcomes of a provisioning run

use serde::Serialize;

use crate::client::models::{Application, Organization, RoleMembership};

/// How the organization was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrgOutcome {
    Found,
    Created,
}

/// How the application ended up in the organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum AppOutcome {
    Created,
    Relocated { from_organization_id: String },
    AlreadyInPlace,
}

/// The organization the run targeted
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedOrganization {
    #[serde(flatten)]
    pub organization: Organization,
    pub outcome: OrgOutcome,
}

impl ResolvedOrganization {
    pub fn id(&self) -> &str {
        &self.organization.id
    }
}

/// The application after provisioning
#[derive(Debug, Clone, Serialize)]
pub struct ProvisionedApplication {
    #[serde(flatten)]
    pub application: Application,
    pub outcome: AppOutcome,
}

/// Everything a successful run did
#[derive(Debug, Clone, Serialize)]
pub struct ProvisionReport {
    pub organization: ResolvedOrganization,
    pub membership: RoleMembership,
    pub application: ProvisionedApplication,
}

/// What a dry run found and what a real run would change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisionPlan {
    pub organization: OrgPlan,
    pub membership: MembershipPlan,
    pub application: AppPlan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum OrgPlan {
    Reuse { id: String, name: String },
    Create { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipPlan {
    pub role_id: String,
    pub member_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum AppPlan {
    Create {
        public_id: String,
    },
    Relocate {
        id: String,
        public_id: String,
        from_organization_id: String,
    },
    Keep {
        id: String,
        public_id: String,
    },
}
