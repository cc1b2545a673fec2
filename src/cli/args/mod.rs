//! Shared CLI argument types
//!
//! Argument groups are flattened into [`Cli`](crate::cli::Cli) using
//! `#[command(flatten)]`.

mod common;
mod connection;
mod target;

pub use common::OutputFormat;
pub use connection::ConnectionArgs;
pub use target::TargetArgs;
pub(crate) use target::required;
