//! IQ Server API data models
//!
//! Models are organized by resource type.

mod app;
mod membership;
mod org;

pub use app::{Application, ApplicationList, CreateApplicationRequest};
pub use membership::{OWNER_ROLE_ID, RoleMembership};
pub use org::{CreateOrganizationRequest, Organization, OrganizationList};
