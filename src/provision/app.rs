//! Application creation and relocation

use log::{debug, info, warn};

use super::Provisioner;
use super::report::{AppOutcome, ProvisionedApplication};
use crate::client::IqApi;
use crate::client::models::{Application, CreateApplicationRequest};
use crate::error::{ApiError, Error, Result};

impl<C: IqApi> Provisioner<'_, C> {
    /// Make sure application `public_id` lives in the organization.
    ///
    /// Creates it; when the server refuses because the public ID is taken,
    /// moves the existing application instead. Only the final outcome is
    /// returned.
    pub async fn provision_application(
        &self,
        organization_id: &str,
        public_id: &str,
    ) -> Result<ProvisionedApplication> {
        let request = CreateApplicationRequest::named_after(public_id, organization_id);

        match self.client.create_application(request).await {
            Ok(application) => {
                info!(
                    "Created application '{}' ({}) in organization {}",
                    application.public_id, application.id, application.organization_id
                );
                Ok(ProvisionedApplication {
                    application,
                    outcome: AppOutcome::Created,
                })
            }
            Err(Error::Api(create)) if create.is_conflict() => {
                debug!(
                    "Create of application '{}' refused ({}); relocating existing one",
                    public_id, create
                );
                self.relocate_application(organization_id, public_id)
                    .await
                    .map_err(|relocate| Error::Relocation {
                        create,
                        relocate: Box::new(relocate),
                    })
            }
            Err(err) => Err(err),
        }
    }

    /// Move the application with `public_id` into the organization.
    ///
    /// The internal ID is kept; no move is issued when the application is
    /// already there.
    pub async fn relocate_application(
        &self,
        organization_id: &str,
        public_id: &str,
    ) -> Result<ProvisionedApplication> {
        let mut existing = self.find_application(public_id).await?.ok_or_else(|| {
            ApiError::NotFound(format!("Application with public ID '{}'", public_id))
        })?;

        if existing.organization_id == organization_id {
            debug!(
                "Application '{}' already belongs to organization {}",
                public_id, organization_id
            );
            return Ok(ProvisionedApplication {
                application: existing,
                outcome: AppOutcome::AlreadyInPlace,
            });
        }

        self.client
            .move_application(&existing.id, organization_id)
            .await?;

        let from_organization_id =
            std::mem::replace(&mut existing.organization_id, organization_id.to_string());
        info!(
            "Moved application '{}' ({}) from organization {} to {}",
            public_id, existing.id, from_organization_id, organization_id
        );

        Ok(ProvisionedApplication {
            application: existing,
            outcome: AppOutcome::Relocated {
                from_organization_id,
            },
        })
    }

    /// First application registered under `public_id`, if any.
    pub(super) async fn find_application(&self, public_id: &str) -> Result<Option<Application>> {
        let found = self.client.find_applications(public_id).await?;
        if found.applications.len() > 1 {
            warn!(
                "{} applications share public ID '{}'; using the first",
                found.applications.len(),
                public_id
            );
        }
        Ok(found.applications.into_iter().next())
    }
}
