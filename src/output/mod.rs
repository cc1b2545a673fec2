//! Output formatting for CLI results

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::models::StepDisplay;
use crate::provision::{ProvisionPlan, ProvisionReport};

pub mod json;
pub mod pretty;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;
}

/// Format and print data to stdout
pub fn print<T: Formattable>(data: &T, format: OutputFormat) -> Result<()> {
    let output = data.format(format)?;
    println!("{}", output);
    Ok(())
}

impl Formattable for ProvisionReport {
    fn format(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Pretty => pretty::format_report(self),
            OutputFormat::Table => table::format_table(&StepDisplay::from_report(self)),
            OutputFormat::Json => json::format_json(self)?,
        })
    }
}

impl Formattable for ProvisionPlan {
    fn format(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Pretty => pretty::format_plan(self),
            OutputFormat::Table => table::format_table(&StepDisplay::from_plan(self)),
            OutputFormat::Json => json::format_json(self)?,
        })
    }
}
