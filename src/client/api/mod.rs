//! API trait definitions split by resource
//!
//! - [`OrganizationApi`] - Organization lookup and creation
//! - [`ApplicationApi`] - Application creation, lookup and relocation
//! - [`MembershipApi`] - Role membership assignment
//!
//! The [`IqApi`] super-trait combines all three.

mod application;
mod membership;
mod organization;

pub use application::ApplicationApi;
pub use membership::MembershipApi;
pub use organization::OrganizationApi;

/// Everything the provisioning flow needs from IQ Server.
pub trait IqApi: OrganizationApi + ApplicationApi + MembershipApi {}

impl<T> IqApi for T where T: OrganizationApi + ApplicationApi + MembershipApi {}
