//! Provisioning target arguments

use clap::Args;

use crate::provision::ProvisionRequest;

/// The organization, application and member to provision.
///
/// Validated together so every missing flag is reported at once.
#[derive(Args, Debug, Default, Clone)]
pub struct TargetArgs {
    /// Organization name; created when it does not exist
    #[arg(long = "orgName", value_name = "NAME")]
    pub org_name: Option<String>,

    /// Application public ID, also used as its name
    #[arg(long = "appId", value_name = "ID")]
    pub app_id: Option<String>,

    /// User granted the owner role on the organization
    #[arg(long = "memberName", value_name = "USER")]
    pub member_name: Option<String>,
}

impl TargetArgs {
    /// Build the request, or list the flags that are missing or empty.
    pub fn to_request(&self) -> std::result::Result<ProvisionRequest, Vec<String>> {
        let mut missing = Vec::new();
        let org_name = required(&self.org_name, "--orgName", &mut missing);
        let app_id = required(&self.app_id, "--appId", &mut missing);
        let member_name = required(&self.member_name, "--memberName", &mut missing);

        match (org_name, app_id, member_name) {
            (Some(org_name), Some(app_id), Some(member_name)) => Ok(ProvisionRequest {
                org_name,
                app_id,
                member_name,
            }),
            _ => Err(missing),
        }
    }
}

/// Non-empty value of a flag, recording its name when absent.
pub(crate) fn required(
    value: &Option<String>,
    flag: &str,
    missing: &mut Vec<String>,
) -> Option<String> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Some(v.to_string()),
        _ => {
            missing.push(flag.to_string());
            None
        }
    }
}
