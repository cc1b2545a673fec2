//! Provision command implementation

use colored::Colorize;
use log::debug;

use crate::cli::{Cli, CommandContext};
use crate::error::Result;
use crate::output;
use crate::provision::Provisioner;

/// Run the provisioning flow, or plan it with `--dry-run`
pub async fn run(cli: &Cli) -> Result<()> {
    let ctx = CommandContext::new(cli)?;
    let provisioner = Provisioner::new(&ctx.client).with_role_id(ctx.role_id.as_str());

    if cli.dry_run {
        eprintln!("{}", "DRY RUN - no changes will be made".yellow());
        eprintln!();
        let plan = provisioner.plan(&ctx.request).await?;
        return output::print(&plan, ctx.format);
    }

    let report = provisioner.run(&ctx.request).await?;
    debug!("Provisioning against {} finished", ctx.server.url);
    output::print(&report, ctx.format)
}
