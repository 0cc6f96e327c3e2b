//! JSON table parsing.
//!
//! Accepts both a flat object (`{"a.b": "text"}`) and a nested one
//! (`{"a": {"b": "text"}}`); nested objects are flattened by joining the key
//! segments with the configured delimiter. Document order is preserved
//! (serde_json is built with `preserve_order`), which keeps generated code
//! stable. Non-string scalar values carry no translation and are ignored.

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::core::entry::LocalizationEntry;

/// Parse a JSON document into entries in document order.
pub fn parse_table(content: &str, delimiter: &str) -> Result<Vec<LocalizationEntry>> {
    let json: Value =
        serde_json::from_str(content).context("failed to parse input as JSON")?;

    let Value::Object(_) = json else {
        bail!("expected a JSON object of translation keys at the top level");
    };

    let mut entries = Vec::new();
    flatten(&json, String::new(), delimiter, &mut entries);
    Ok(entries)
}

fn flatten(value: &Value, prefix: String, delimiter: &str, result: &mut Vec<LocalizationEntry>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}{}{}", prefix, delimiter, key)
                };
                flatten(val, new_prefix, delimiter, result);
            }
        }
        Value::String(s) => {
            result.push(LocalizationEntry::new(prefix, s.clone()));
        }
        // Numbers, booleans, nulls and arrays are not translations.
        _ => {}
    }
}
