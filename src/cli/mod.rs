//! CLI definition and command handlers

use clap::Parser;

pub mod args;
pub mod context;
pub mod provision;

pub use args::{ConnectionArgs, OutputFormat, TargetArgs};
pub use context::CommandContext;

/// iqprov - ensure an organization, its owner and an application exist in Nexus IQ Server
#[derive(Parser, Debug)]
#[command(name = "iqprov")]
#[command(version, about, long_about = None)]
#[command(after_help = "\
Example:
  iqprov --u admin --p admin123 --serverURL http://localhost:8070 \\
         --orgName 'Department H' --appId app-1 --memberName roger.lau")]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(flatten)]
    pub target: TargetArgs,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        env = "IQPROV_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location (defaults to ~/.iqprov/config.yaml)
    #[arg(long, env = "IQPROV_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Look everything up and show what would change, without changing it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long, env = "IQPROV_DEBUG", hide_env = true)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_original_flag_names() {
        let cli = Cli::try_parse_from([
            "iqprov",
            "--u",
            "admin",
            "--p",
            "admin123",
            "--serverURL",
            "https://iq.example.com",
            "--orgName",
            "Department H",
            "--appId",
            "app-1",
            "--memberName",
            "roger.lau",
        ])
        .unwrap();

        assert_eq!(cli.connection.username.as_deref(), Some("admin"));
        assert_eq!(cli.connection.password.as_deref(), Some("admin123"));
        assert_eq!(
            cli.connection.server_url.as_deref(),
            Some("https://iq.example.com")
        );
        assert_eq!(cli.target.org_name.as_deref(), Some("Department H"));
        assert_eq!(cli.target.app_id.as_deref(), Some("app-1"));
        assert_eq!(cli.target.member_name.as_deref(), Some("roger.lau"));
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(!cli.dry_run);
        assert!(!cli.connection.insecure);
    }

    #[test]
    fn test_flags_are_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["iqprov", "--dry-run", "--format", "json"]).unwrap();
        assert!(cli.dry_run);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.target.org_name.is_none());
    }
}
