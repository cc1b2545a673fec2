//! Dry-run planning: lookups only, no writes

use log::debug;

use super::report::{AppPlan, MembershipPlan, OrgPlan, ProvisionPlan};
use super::{ProvisionRequest, Provisioner};
use crate::client::IqApi;
use crate::error::Result;

impl<C: IqApi> Provisioner<'_, C> {
    /// Work out what [`Provisioner::run`] would change, using GET requests only.
    pub async fn plan(&self, request: &ProvisionRequest) -> Result<ProvisionPlan> {
        let list = self.client.list_organizations().await?;
        let target = list.find_by_name(&request.org_name);

        let organization = match target {
            Some(org) => OrgPlan::Reuse {
                id: org.id.clone(),
                name: org.name.clone(),
            },
            None => OrgPlan::Create {
                name: request.org_name.clone(),
            },
        };

        let application = match self.find_application(&request.app_id).await? {
            None => AppPlan::Create {
                public_id: request.app_id.clone(),
            },
            Some(existing) if target.is_some_and(|org| org.id == existing.organization_id) => {
                AppPlan::Keep {
                    id: existing.id,
                    public_id: existing.public_id,
                }
            }
            Some(existing) => AppPlan::Relocate {
                id: existing.id,
                public_id: existing.public_id,
                from_organization_id: existing.organization_id,
            },
        };

        debug!("Planned {:?} / {:?}", organization, application);
        Ok(ProvisionPlan {
            organization,
            membership: MembershipPlan {
                role_id: self.role_id.clone(),
                member_name: request.member_name.clone(),
            },
            application,
        })
    }
}
