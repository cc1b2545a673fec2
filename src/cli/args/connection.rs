//! Server connection arguments

use clap::Args;

/// How to reach and authenticate against IQ Server.
///
/// Each value falls back to the environment, then the config file.
#[derive(Args, Debug, Default, Clone)]
pub struct ConnectionArgs {
    /// IQ Server username
    #[arg(long = "u", value_name = "USER", env = "IQPROV_USER", hide_env = true)]
    pub username: Option<String>,

    /// IQ Server password (prompted for when missing and running in a terminal)
    #[arg(
        long = "p",
        value_name = "PASSWORD",
        env = "IQPROV_PASSWORD",
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// IQ Server base URL [default: http://localhost:8070]
    #[arg(
        long = "serverURL",
        value_name = "URL",
        env = "IQPROV_SERVER_URL",
        hide_env = true
    )]
    pub server_url: Option<String>,

    /// Accept invalid TLS certificates (never use against production)
    #[arg(long, env = "IQPROV_INSECURE", hide_env = true)]
    pub insecure: bool,
}
