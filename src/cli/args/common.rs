//! Common CLI types

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - one line per step (default)
    #[default]
    Pretty,
    /// Table format - one row per step
    Table,
    /// JSON format - structured for scripts
    Json,
}
