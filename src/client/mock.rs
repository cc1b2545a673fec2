//! Mock IQ Server API client for testing
//!
//! Keeps organizations, applications and role memberships in memory so the
//! provisioning flow can be exercised end to end without a server.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{ApplicationApi, MembershipApi, OrganizationApi};
use super::models::{
    Application, ApplicationList, CreateApplicationRequest, CreateOrganizationRequest,
    Organization, OrganizationList, RoleMembership,
};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockIqClient::new()
///     .with_orgs(vec![org("org-42", "Department H")])
///     .await;
///
/// let orgs = mock.list_organizations().await?;
/// assert_eq!(orgs.organizations.len(), 1);
/// ```
#[derive(Default)]
pub struct MockIqClient {
    orgs: Arc<Mutex<Vec<Organization>>>,
    apps: Arc<Mutex<Vec<Application>>>,
    memberships: Arc<Mutex<Vec<RoleMembership>>>,
    /// Error returned by the next call to the named operation, consumed on use
    errors: Arc<Mutex<Vec<(Operation, ApiError)>>>,
    call_count: Arc<Mutex<CallCounts>>,
}

/// Mocked operations, used to target injected errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListOrganizations,
    CreateOrganization,
    CreateApplication,
    FindApplications,
    MoveApplication,
    SetRoleMember,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct CallCounts {
    pub list_organizations: usize,
    pub create_organization: usize,
    pub create_application: usize,
    pub find_applications: usize,
    pub move_application: usize,
    pub set_role_member: usize,
}

impl CallCounts {
    /// Number of calls that change server state.
    pub fn mutations(&self) -> usize {
        self.create_organization
            + self.create_application
            + self.move_application
            + self.set_role_member
    }
}

/// Build an organization fixture
pub fn org(id: &str, name: &str) -> Organization {
    Organization {
        id: id.to_string(),
        name: name.to_string(),
        parent_organization_id: Some("ROOT_ORGANIZATION_ID".to_string()),
    }
}

/// Build an application fixture
pub fn app(id: &str, public_id: &str, organization_id: &str) -> Application {
    Application {
        id: id.to_string(),
        public_id: public_id.to_string(),
        name: public_id.to_string(),
        organization_id: organization_id.to_string(),
    }
}

impl MockIqClient {
    /// Create a new mock client with an empty server.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed existing organizations.
    pub async fn with_orgs(self, orgs: Vec<Organization>) -> Self {
        *self.orgs.lock().await = orgs;
        self
    }

    /// Seed existing applications.
    pub async fn with_apps(self, apps: Vec<Application>) -> Self {
        *self.apps.lock().await = apps;
        self
    }

    /// Fail the next call of `operation` with `error`.
    pub async fn with_error(self, operation: Operation, error: ApiError) -> Self {
        self.errors.lock().await.push((operation, error));
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Current organizations on the mock server.
    pub async fn orgs(&self) -> Vec<Organization> {
        self.orgs.lock().await.clone()
    }

    /// Current applications on the mock server.
    pub async fn apps(&self) -> Vec<Application> {
        self.apps.lock().await.clone()
    }

    /// Memberships set so far.
    pub async fn memberships(&self) -> Vec<RoleMembership> {
        self.memberships.lock().await.clone()
    }

    /// Count the call, then return an injected error if one targets it.
    async fn enter(&self, operation: Operation) -> Result<()> {
        {
            let mut counts = self.call_count.lock().await;
            match operation {
                Operation::ListOrganizations => counts.list_organizations += 1,
                Operation::CreateOrganization => counts.create_organization += 1,
                Operation::CreateApplication => counts.create_application += 1,
                Operation::FindApplications => counts.find_applications += 1,
                Operation::MoveApplication => counts.move_application += 1,
                Operation::SetRoleMember => counts.set_role_member += 1,
            }
        }

        let mut errors = self.errors.lock().await;
        if let Some(pos) = errors.iter().position(|(op, _)| *op == operation) {
            let (_, err) = errors.remove(pos);
            return Err(err.into());
        }
        Ok(())
    }
}

#[async_trait]
impl OrganizationApi for MockIqClient {
    async fn list_organizations(&self) -> Result<OrganizationList> {
        self.enter(Operation::ListOrganizations).await?;
        Ok(OrganizationList {
            organizations: self.orgs.lock().await.clone(),
        })
    }

    async fn create_organization(
        &self,
        request: CreateOrganizationRequest,
    ) -> Result<Organization> {
        self.enter(Operation::CreateOrganization).await?;

        let mut orgs = self.orgs.lock().await;
        if orgs.iter().any(|o| o.name == request.name) {
            return Err(ApiError::BadRequest(format!(
                "Organization name '{}' is already in use",
                request.name
            ))
            .into());
        }

        let created = org(&format!("mock-org-{}", orgs.len() + 1), &request.name);
        orgs.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl ApplicationApi for MockIqClient {
    async fn create_application(&self, request: CreateApplicationRequest) -> Result<Application> {
        self.enter(Operation::CreateApplication).await?;

        let mut apps = self.apps.lock().await;
        if apps.iter().any(|a| a.public_id == request.public_id) {
            return Err(ApiError::BadRequest(format!(
                "Application public ID '{}' is already used",
                request.public_id
            ))
            .into());
        }

        let created = Application {
            id: format!("mock-app-{}", apps.len() + 1),
            public_id: request.public_id,
            name: request.name,
            organization_id: request.organization_id,
        };
        apps.push(created.clone());
        Ok(created)
    }

    async fn find_applications(&self, public_id: &str) -> Result<ApplicationList> {
        self.enter(Operation::FindApplications).await?;
        let applications = self
            .apps
            .lock()
            .await
            .iter()
            .filter(|a| a.public_id == public_id)
            .cloned()
            .collect();
        Ok(ApplicationList { applications })
    }

    async fn move_application(&self, application_id: &str, organization_id: &str) -> Result<()> {
        self.enter(Operation::MoveApplication).await?;

        if !self.orgs.lock().await.iter().any(|o| o.id == organization_id) {
            return Err(ApiError::NotFound(format!("Organization {}", organization_id)).into());
        }

        let mut apps = self.apps.lock().await;
        let app = apps
            .iter_mut()
            .find(|a| a.id == application_id)
            .ok_or_else(|| ApiError::NotFound(format!("Application {}", application_id)))?;
        app.organization_id = organization_id.to_string();
        Ok(())
    }
}

#[async_trait]
impl MembershipApi for MockIqClient {
    async fn set_organization_role_member(
        &self,
        organization_id: &str,
        role_id: &str,
        member_name: &str,
    ) -> Result<()> {
        self.enter(Operation::SetRoleMember).await?;

        let membership = RoleMembership {
            organization_id: organization_id.to_string(),
            role_id: role_id.to_string(),
            member_name: member_name.to_string(),
        };
        let mut memberships = self.memberships.lock().await;
        if !memberships.contains(&membership) {
            memberships.push(membership);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_injected_error_is_consumed_once() {
        let mock = MockIqClient::new()
            .with_error(Operation::ListOrganizations, ApiError::Unauthorized)
            .await;

        assert!(mock.list_organizations().await.is_err());
        assert!(mock.list_organizations().await.is_ok());
        assert_eq!(mock.call_counts().await.list_organizations, 2);
    }

    #[tokio::test]
    async fn test_injected_error_only_hits_its_operation() {
        let mock = MockIqClient::new()
            .with_error(Operation::MoveApplication, ApiError::Forbidden)
            .await;

        assert!(mock.list_organizations().await.is_ok());
        assert!(mock.find_applications("app-1").await.is_ok());
    }

    #[tokio::test]
    async fn test_duplicate_public_id_is_bad_request() {
        let mock = MockIqClient::new()
            .with_apps(vec![app("internal-1", "app-1", "org-99")])
            .await;

        let err = mock
            .create_application(CreateApplicationRequest::named_after("app-1", "org-42"))
            .await
            .unwrap_err();

        assert!(matches!(err, crate::error::Error::Api(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_move_keeps_internal_id() {
        let mock = MockIqClient::new()
            .with_orgs(vec![org("org-42", "Department H"), org("org-99", "Other")])
            .await
            .with_apps(vec![app("internal-1", "app-1", "org-99")])
            .await;

        mock.move_application("internal-1", "org-42").await.unwrap();

        let apps = mock.apps().await;
        assert_eq!(apps[0].id, "internal-1");
        assert_eq!(apps[0].organization_id, "org-42");
    }
}
