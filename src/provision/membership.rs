//! Owner role assignment

use log::info;

use super::Provisioner;
use crate::client::IqApi;
use crate::client::models::RoleMembership;
use crate::error::Result;

impl<C: IqApi> Provisioner<'_, C> {
    /// Grant the owner role to `member_name` on the organization.
    pub async fn assign_owner(
        &self,
        organization_id: &str,
        member_name: &str,
    ) -> Result<RoleMembership> {
        self.client
            .set_organization_role_member(organization_id, &self.role_id, member_name)
            .await?;

        info!(
            "Granted role {} to '{}' on organization {}",
            self.role_id, member_name, organization_id
        );
        Ok(RoleMembership {
            organization_id: organization_id.to_string(),
            role_id: self.role_id.clone(),
            member_name: member_name.to_string(),
        })
    }
}
