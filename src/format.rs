//! Format resolution: from a file path to a parser.
//!
//! Dispatch runs in two steps, both visible to callers:
//!
//! 1. [`format_tag`] normalizes a path into a **tag** — the lower-cased
//!    extension including its dot (`".yaml"`), or the literal `"default"`
//!    for extensionless paths.
//! 2. [`Format::for_tag`] looks the tag up in a fixed registry. An
//!    unregistered tag yields `None`; the caller decides how to report it.
//!
//! The registry is the [`Format`] enum itself. It is not mutable at runtime;
//! supporting a new format means adding a variant here and a parser in
//! [`parsers`](crate::parsers) — the merge logic never changes.

use std::path::Path;

use crate::parsers;
use crate::types::Mapping;

/// A recognized configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
    Ini,
}

/// Every tag the registry recognizes, in display order for help text.
pub const SUPPORTED_TAGS: &[&str] = &[".yml", ".yaml", ".json", ".ini", "default"];

impl Format {
    /// Look up a format by tag. `"default"` (an extensionless path) maps to
    /// INI, matching the registry table in the crate docs.
    pub fn for_tag(tag: &str) -> Option<Format> {
        match tag {
            ".yml" | ".yaml" => Some(Format::Yaml),
            ".json" => Some(Format::Json),
            ".ini" | "default" => Some(Format::Ini),
            _ => None,
        }
    }

    /// Resolve a path straight to a format, if its tag is registered.
    pub fn for_path(path: &Path) -> Option<Format> {
        Format::for_tag(&format_tag(path))
    }

    /// Parse file contents with this format's parser.
    ///
    /// # Errors
    ///
    /// Returns the underlying parser's message when the text is malformed or
    /// its top level is not a mapping.
    pub fn parse(self, text: &str) -> Result<Mapping, String> {
        match self {
            Format::Yaml => parsers::parse_from_yaml(text),
            Format::Json => parsers::parse_from_json(text),
            Format::Ini => parsers::parse_from_ini(text),
        }
    }
}

/// Normalize a path into its format tag.
///
/// The tag is the extension, lower-cased, with the leading dot kept
/// (`"conf.YAML"` → `".yaml"`). A path with no extension gets the
/// designated `"default"` tag; a trailing dot (`"conf."`) counts as no
/// extension.
pub fn format_tag(path: &Path) -> String {
    match path.extension() {
        Some(ext) if !ext.is_empty() => format!(".{}", ext.to_string_lossy().to_lowercase()),
        _ => "default".to_string(),
    }
}
