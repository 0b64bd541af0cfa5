//! Lossless JSON export and import of the full race collection.

use crate::error::Result;
use crate::types::RaceEntry;

/// Serialize the full collection, pretty-printed.
pub fn export_json(races: &[RaceEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(races)?)
}

/// Parse a collection previously produced by [`export_json`].
pub fn import_json(text: &str) -> Result<Vec<RaceEntry>> {
    Ok(serde_json::from_str(text)?)
}
