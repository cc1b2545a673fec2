//! Human-oriented output, one line per step

use colored::Colorize;

use crate::provision::{AppOutcome, AppPlan, OrgOutcome, OrgPlan, ProvisionPlan, ProvisionReport};

/// Render a completed run
pub fn format_report(report: &ProvisionReport) -> String {
    let org = &report.organization;
    let org_line = match org.outcome {
        OrgOutcome::Found => format!(
            "Organization \"{}\" found (ID: {})",
            org.organization.name.bold(),
            org.id()
        ),
        OrgOutcome::Created => format!(
            "Organization \"{}\" created (ID: {})",
            org.organization.name.bold(),
            org.id()
        ),
    };

    let membership = &report.membership;
    let member_line = format!(
        "Owner role {} granted to {}",
        membership.role_id.dimmed(),
        membership.member_name.bold()
    );

    let app = &report.application.application;
    let app_line = match &report.application.outcome {
        AppOutcome::Created => format!(
            "Application {} created (ID: {})",
            app.public_id.bold(),
            app.id
        ),
        AppOutcome::Relocated {
            from_organization_id,
        } => format!(
            "Application {} moved from {} to \"{}\" (ID: {})",
            app.public_id.bold(),
            from_organization_id,
            org.organization.name,
            app.id
        ),
        AppOutcome::AlreadyInPlace => format!(
            "Application {} already in \"{}\" (ID: {})",
            app.public_id.bold(),
            org.organization.name,
            app.id
        ),
    };

    [org_line, member_line, app_line]
        .iter()
        .map(|line| format!("{} {}", "✓".green(), line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a dry run
pub fn format_plan(plan: &ProvisionPlan) -> String {
    let org_name = match &plan.organization {
        OrgPlan::Reuse { name, .. } | OrgPlan::Create { name } => name,
    };

    let org_line = match &plan.organization {
        OrgPlan::Reuse { id, name } => {
            format!("Organization \"{}\" exists (ID: {})", name.bold(), id)
        }
        OrgPlan::Create { name } => format!("Would create organization \"{}\"", name.bold()),
    };

    let member_line = format!(
        "Would grant owner role {} to {}",
        plan.membership.role_id.dimmed(),
        plan.membership.member_name.bold()
    );

    let app_line = match &plan.application {
        AppPlan::Create { public_id } => {
            format!("Would create application {}", public_id.bold())
        }
        AppPlan::Relocate {
            id,
            public_id,
            from_organization_id,
        } => format!(
            "Would move application {} (ID: {}) from {} to \"{}\"",
            public_id.bold(),
            id,
            from_organization_id,
            org_name
        ),
        AppPlan::Keep { id, public_id } => format!(
            "Application {} already in \"{}\" (ID: {})",
            public_id.bold(),
            org_name,
            id
        ),
    };

    [org_line, member_line, app_line]
        .iter()
        .map(|line| format!("{} {}", "→".cyan(), line))
        .collect::<Vec<_>>()
        .join("\n")
}
