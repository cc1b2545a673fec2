//! Provisioning flow
//!
//! One run resolves (or creates) the organization, grants the owner role to
//! a member, then creates the application or relocates an existing one into
//! the organization. Each step is awaited before the next starts:
//!
//! ```text
//! resolve_organization -> assign_owner -> provision_application
//!                                              |-- created
//!                                              `-- conflict -> relocate_application
//! ```

mod app;
mod membership;
mod org;
mod plan;
pub mod report;

use log::debug;

use crate::client::IqApi;
use crate::client::models::OWNER_ROLE_ID;
use crate::error::Result;

pub use report::{AppOutcome, AppPlan, OrgOutcome, OrgPlan, ProvisionPlan, ProvisionReport};

/// What to provision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionRequest {
    /// Organization name, created when absent
    pub org_name: String,
    /// Application public ID, also used as its display name
    pub app_id: String,
    /// User that receives the owner role
    pub member_name: String,
}

/// Runs the provisioning steps against an IQ Server API
pub struct Provisioner<'a, C> {
    client: &'a C,
    role_id: String,
}

impl<'a, C: IqApi> Provisioner<'a, C> {
    /// Provisioner granting the built-in owner role
    pub fn new(client: &'a C) -> Self {
        Self {
            client,
            role_id: OWNER_ROLE_ID.to_string(),
        }
    }

    /// Grant a different role ID as "owner"
    pub fn with_role_id(mut self, role_id: impl Into<String>) -> Self {
        self.role_id = role_id.into();
        self
    }

    /// Run every step in order; the first failure ends the run.
    pub async fn run(&self, request: &ProvisionRequest) -> Result<ProvisionReport> {
        debug!(
            "Provisioning org='{}' app='{}' member='{}'",
            request.org_name, request.app_id, request.member_name
        );

        let organization = self.resolve_organization(&request.org_name).await?;
        let membership = self
            .assign_owner(organization.id(), &request.member_name)
            .await?;
        let application = self
            .provision_application(organization.id(), &request.app_id)
            .await?;

        Ok(ProvisionReport {
            organization,
            membership,
            application,
        })
    }
}
