//! Command execution context
//!
//! Merges CLI flags, environment and the config file into validated
//! settings, and builds the API client from them.

use std::io::IsTerminal;

use dialoguer::Password;
use log::debug;

use crate::cli::args::required;
use crate::cli::{Cli, ConnectionArgs, OutputFormat, TargetArgs};
use crate::client::IqClient;
use crate::config::{Config, DEFAULT_SERVER_URL, ServerSettings};
use crate::error::{ConfigError, Result};
use crate::provision::ProvisionRequest;

/// Everything a provisioning run needs.
pub struct CommandContext {
    /// Authenticated API client
    pub client: IqClient,
    /// Resolved connection settings
    pub server: ServerSettings,
    /// What to provision
    pub request: ProvisionRequest,
    /// Role granted to the member
    pub role_id: String,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Precedence for every setting: CLI flag > environment variable >
    /// config file > default.
    ///
    /// # Errors
    /// Returns error if the config file cannot be loaded, required values
    /// are missing, or the client cannot be built.
    pub fn new(cli: &Cli) -> Result<Self> {
        let config = Config::load_at(cli.config.as_deref())?;

        let mut connection = cli.connection.clone();
        if let Some(username) = password_prompt_user(&cli.connection, &cli.target, &config) {
            connection.password = prompt_password(username)?;
        }

        let (server, request) = resolve(&connection, &cli.target, &config)?;
        debug!("Using IQ Server at {} as '{}'", server.url, server.username);

        let client = IqClient::new(&server)?;

        Ok(Self {
            client,
            server,
            request,
            role_id: config.owner_role_id().to_string(),
            format: cli.format,
        })
    }
}

/// Merge flags with the config file and check that nothing required is missing.
///
/// All missing values are reported together.
pub fn resolve(
    connection: &ConnectionArgs,
    target: &TargetArgs,
    config: &Config,
) -> Result<(ServerSettings, ProvisionRequest)> {
    let (request, mut missing) = match target.to_request() {
        Ok(request) => (Some(request), Vec::new()),
        Err(missing) => (None, missing),
    };

    let username = required(
        &connection.username.clone().or_else(|| config.username.clone()),
        "--u",
        &mut missing,
    );
    let password = required(
        &connection.password.clone().or_else(|| config.password.clone()),
        "--p",
        &mut missing,
    );

    let (Some(request), Some(username), Some(password)) = (request, username, password) else {
        return Err(ConfigError::MissingArguments(missing).into());
    };

    let url = [connection.server_url.as_deref(), config.server_url.as_deref()]
        .into_iter()
        .flatten()
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_SERVER_URL)
        .to_string();

    let server = ServerSettings {
        url,
        username,
        password,
        insecure: connection.insecure || config.insecure.unwrap_or(false),
        timeout: config.timeout(),
    };

    Ok((server, request))
}

/// The user to ask a password for, when only the password is missing.
///
/// Missing target flags are reported before anyone is prompted.
fn password_prompt_user<'a>(
    connection: &'a ConnectionArgs,
    target: &TargetArgs,
    config: &'a Config,
) -> Option<&'a str> {
    if connection.password.is_some() || config.password.is_some() {
        return None;
    }
    if target.to_request().is_err() {
        return None;
    }
    connection
        .username
        .as_deref()
        .or(config.username.as_deref())
        .filter(|username| !username.is_empty())
}

/// Ask for the password when a person is at the terminal.
fn prompt_password(username: &str) -> Result<Option<String>> {
    if !std::io::stdin().is_terminal() || !std::io::stderr().is_terminal() {
        return Ok(None);
    }

    let password = Password::new()
        .with_prompt(format!("IQ Server password for {}", username))
        .interact()?;
    Ok(Some(password))
}
