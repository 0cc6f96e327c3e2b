//! Input table parsing.
//!
//! The generator consumes a flat string→string table. Two concrete formats
//! are supported, selected by file extension: Apple `.strings` files and
//! (possibly nested) JSON objects. Both preserve document order so the
//! generated code is stable for a stable input.

use std::path::Path;

use anyhow::Result;

use super::entry::LocalizationEntry;

pub mod json;
pub mod strings;

/// Parse `content` into entries, picking the format from the file extension.
///
/// Anything that is not `.json` is treated as a `.strings` file, which is
/// also what the original Apple tooling expects by default.
pub fn parse_table(path: &Path, content: &str, delimiter: &str) -> Result<Vec<LocalizationEntry>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => json::parse_table(content, delimiter),
        _ => Ok(strings::parse_table(content)?),
    }
}
