//! The configuration namespace and the batch loader that fills it.
//!
//! [`ConfigStore`] owns a single flat key→value mapping with process
//! lifetime. It is an explicit service object: create one early, load into
//! it, and pass it by reference to whatever needs configuration. There is no
//! ambient global and no locking — loading is expected to happen once,
//! before concurrent work starts.
//!
//! # Loading
//!
//! [`load`](ConfigStore::load) walks an ordered batch of paths. Each file is
//! resolved to a format by extension, parsed, and merged in sequence. The
//! failure policy is *warn and abort the batch*: the first bad path (empty,
//! missing, unsupported type, unreadable, or malformed) emits one `tracing`
//! warning and stops the whole call — later paths are skipped, but merges
//! already applied stay. Nothing propagates to the caller; a bad config file
//! must never crash the process. Callers that want per-file isolation call
//! `load` once per file.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::warn;

use crate::error::ConfError;
use crate::format::{self, Format};
use crate::types::{Mapping, MergePolicy, is_truthy};

/// The process-wide configuration namespace.
#[derive(Debug, Default)]
pub struct ConfigStore {
    namespace: Mapping,
}

impl ConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the given files, in order, and merge their top-level keys into
    /// the namespace under `policy`.
    ///
    /// Any failure warns and aborts the remaining batch; see the module docs
    /// for the exact policy. Never fails.
    pub fn load<I, S>(&mut self, paths: I, policy: MergePolicy)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for path in paths {
            match read_file(path.as_ref()) {
                Ok(mapping) => self.merge(mapping, policy),
                Err(err) => {
                    warn!("{err}");
                    // Abort the whole batch, not just this path.
                    return;
                }
            }
        }
    }

    /// Merge one parsed file into the namespace.
    fn merge(&mut self, mapping: Mapping, policy: MergePolicy) {
        for (key, value) in mapping {
            let keep = policy == MergePolicy::KeepExisting
                && self.namespace.get(&key).is_some_and(is_truthy);
            if !keep {
                self.namespace.insert(key, value);
            }
        }
    }

    /// Look up a key. Absent keys are the caller's problem — pair with
    /// `unwrap_or`/`map` for defaults.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.namespace.get(key)
    }

    /// Whether the namespace has an entry for `key` (regardless of
    /// truthiness).
    pub fn contains(&self, key: &str) -> bool {
        self.namespace.contains_key(key)
    }

    /// Iterate over all keys currently in the namespace.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.namespace.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.namespace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespace.is_empty()
    }

    /// Drop every entry. Intended for test isolation.
    pub fn clear(&mut self) {
        self.namespace.clear();
    }
}

/// Resolve, read, and parse a single config file.
///
/// This is the per-file half of `load`: it returns the parsed mapping or the
/// first failure, and the driving loop turns failures into warnings.
fn read_file(path: &str) -> Result<Mapping, ConfError> {
    if path.is_empty() {
        return Err(ConfError::EmptyPath);
    }
    let path = Path::new(path);
    if !path.exists() {
        return Err(ConfError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let tag = format::format_tag(path);
    let Some(fmt) = Format::for_tag(&tag) else {
        return Err(ConfError::UnsupportedFormat { tag });
    };
    let text = fs::read_to_string(path).map_err(|source| ConfError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    fmt.parse(&text).map_err(|message| ConfError::Parse {
        path: path.to_path_buf(),
        message,
    })
}
