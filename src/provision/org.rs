//! Organization resolution

use log::{debug, info};

use super::Provisioner;
use super::report::{OrgOutcome, ResolvedOrganization};
use crate::client::IqApi;
use crate::client::models::CreateOrganizationRequest;
use crate::error::{ApiError, Result};

impl<C: IqApi> Provisioner<'_, C> {
    /// Find the organization named `name`, creating it when absent.
    ///
    /// Names are compared exactly; the first match wins.
    pub async fn resolve_organization(&self, name: &str) -> Result<ResolvedOrganization> {
        debug!("Looking up organization '{}'", name);
        let list = self.client.list_organizations().await?;

        if let Some(existing) = list.find_by_name(name) {
            debug!("Found organization '{}' ({})", name, existing.id);
            return Ok(ResolvedOrganization {
                organization: existing.clone(),
                outcome: OrgOutcome::Found,
            });
        }

        let created = self
            .client
            .create_organization(CreateOrganizationRequest {
                name: name.to_string(),
            })
            .await?;

        if created.id.is_empty() {
            return Err(ApiError::InvalidResponse(
                "Created organization has no 'id'".to_string(),
            )
            .into());
        }

        info!("Created organization '{}' ({})", created.name, created.id);
        Ok(ResolvedOrganization {
            organization: created,
            outcome: OrgOutcome::Created,
        })
    }
}
