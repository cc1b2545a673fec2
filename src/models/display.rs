//! Display models for table output
//!
//! One row per provisioning step.

use tabled::Tabled;

use crate::provision::{AppOutcome, AppPlan, OrgOutcome, OrgPlan, ProvisionPlan, ProvisionReport};

/// A provisioning step for table output.
#[derive(Debug, Clone, Tabled)]
pub struct StepDisplay {
    #[tabled(rename = "STEP")]
    pub step: String,

    #[tabled(rename = "RESOURCE")]
    pub resource: String,

    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "RESULT")]
    pub result: String,
}

impl StepDisplay {
    fn new(step: &str, resource: &str, id: &str, result: impl Into<String>) -> Self {
        Self {
            step: step.to_string(),
            resource: resource.to_string(),
            id: id.to_string(),
            result: result.into(),
        }
    }

    /// Rows for a completed run
    pub fn from_report(report: &ProvisionReport) -> Vec<Self> {
        let org = &report.organization;
        let org_result = match org.outcome {
            OrgOutcome::Found => "found",
            OrgOutcome::Created => "created",
        };

        let app = &report.application;
        let app_result = match &app.outcome {
            AppOutcome::Created => "created".to_string(),
            AppOutcome::Relocated {
                from_organization_id,
            } => format!("moved from {}", from_organization_id),
            AppOutcome::AlreadyInPlace => "already in organization".to_string(),
        };

        vec![
            Self::new("organization", &org.organization.name, org.id(), org_result),
            Self::new(
                "owner",
                &report.membership.member_name,
                &report.membership.role_id,
                "granted",
            ),
            Self::new(
                "application",
                &app.application.public_id,
                &app.application.id,
                app_result,
            ),
        ]
    }

    /// Rows for a dry run
    pub fn from_plan(plan: &ProvisionPlan) -> Vec<Self> {
        let org = match &plan.organization {
            OrgPlan::Reuse { id, name } => Self::new("organization", name, id, "exists"),
            OrgPlan::Create { name } => Self::new("organization", name, "-", "would create"),
        };

        let app = match &plan.application {
            AppPlan::Create { public_id } => {
                Self::new("application", public_id, "-", "would create")
            }
            AppPlan::Relocate {
                id,
                public_id,
                from_organization_id,
            } => Self::new(
                "application",
                public_id,
                id,
                format!("would move from {}", from_organization_id),
            ),
            AppPlan::Keep { id, public_id } => {
                Self::new("application", public_id, id, "already in organization")
            }
        };

        vec![
            org,
            Self::new(
                "owner",
                &plan.membership.member_name,
                &plan.membership.role_id,
                "would grant",
            ),
            app,
        ]
    }
}
