//! JSON output formatting
//!
//! Every document is wrapped as `{ "data": ..., "meta": { timestamp, version } }`.

use chrono::Utc;
use serde::Serialize;

/// Envelope for JSON output
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a, T: ?Sized> {
    pub data: &'a T,
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// RFC 3339 time the document was produced
    pub timestamp: String,

    /// iqprov version
    pub version: &'static str,
}

impl<'a, T: ?Sized> JsonOutput<'a, T> {
    pub fn new(data: &'a T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION"),
            },
        }
    }
}

/// Format data as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}
