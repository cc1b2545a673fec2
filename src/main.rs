//! iqprov - provision organizations, owners and applications in Nexus IQ Server

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod provision;

use cli::Cli;
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(&cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    cli::provision::run(cli).await
}

fn init_logging(debug: bool) {
    if debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Warn)
            .filter_module("iqprov", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        log::debug!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }
}
