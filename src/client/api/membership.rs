//! Role membership API trait

use async_trait::async_trait;

use crate::error::Result;

/// Role membership operations for the IQ Server API
#[async_trait]
pub trait MembershipApi: Send + Sync {
    /// Grant `role_id` to user `member_name` on an organization.
    ///
    /// The server treats this as a set, so repeating it is harmless.
    async fn set_organization_role_member(
        &self,
        organization_id: &str,
        role_id: &str,
        member_name: &str,
    ) -> Result<()>;
}
