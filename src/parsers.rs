//! Per-format text-to-mapping parsers.
//!
//! Each parser takes the full file contents and produces a flat [`Mapping`]
//! of top-level keys. Errors are returned as the underlying parser's message
//! string; the store wraps them with the file name before warning.
//!
//! The YAML and JSON parsers require a mapping/object at the top level —
//! a bare scalar or list has no keys to merge and is rejected as malformed.

use ini::Ini;
use serde_json::Value;

use crate::types::Mapping;

/// Parse YAML text into its top-level mapping.
pub fn parse_from_yaml(text: &str) -> Result<Mapping, String> {
    serde_yaml::from_str(text).map_err(|e| e.to_string())
}

/// Parse JSON text into its top-level object.
pub fn parse_from_json(text: &str) -> Result<Mapping, String> {
    serde_json::from_str(text).map_err(|e| e.to_string())
}

/// Parse INI text, flattening sections one level.
///
/// Each `[section]` becomes a top-level key holding a mapping of that
/// section's keys to string values. Keys that appear before any section
/// header land at the top level directly, also as strings.
pub fn parse_from_ini(text: &str) -> Result<Mapping, String> {
    let ini = Ini::load_from_str(text).map_err(|e| e.to_string())?;
    let mut mapping = Mapping::new();
    for (section, props) in ini.iter() {
        match section {
            Some(name) => {
                let table: Mapping = props
                    .iter()
                    .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
                    .collect();
                mapping.insert(name.to_string(), Value::Object(table));
            }
            None => {
                for (k, v) in props.iter() {
                    mapping.insert(k.to_string(), Value::String(v.to_string()));
                }
            }
        }
    }
    Ok(mapping)
}
