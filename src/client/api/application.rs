//! Application API trait

use async_trait::async_trait;

use crate::client::models::{Application, ApplicationList, CreateApplicationRequest};
use crate::error::Result;

/// Application operations for the IQ Server API
#[async_trait]
pub trait ApplicationApi: Send + Sync {
    /// Create an application under the organization named in the request.
    ///
    /// Fails with a conflict-class error when the public ID is already taken.
    async fn create_application(&self, request: CreateApplicationRequest) -> Result<Application>;

    /// Look up applications by public ID.
    async fn find_applications(&self, public_id: &str) -> Result<ApplicationList>;

    /// Move an application, addressed by internal ID, to another organization.
    async fn move_application(&self, application_id: &str, organization_id: &str) -> Result<()>;
}
