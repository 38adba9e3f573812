//! Best-effort, multi-format configuration loading. Name your files, load
//! them once, and read a flat namespace for the rest of the process.
//!
//! ```ignore
//! let mut config = ConfigStore::new();
//! config.load(["base.yaml", "local.ini"], MergePolicy::Override);
//!
//! let host = config.get("host");
//! ```
//!
//! Conflet reads an ordered batch of configuration files, picks a parser for
//! each by file extension, and merges every file's top-level keys into a
//! single key→value namespace. The namespace is deliberately flat and
//! untyped: values are whatever the source format deserializes to, and
//! callers look keys up by name.
//!
//! # Why conflet
//!
//! Most small services want exactly this much configuration: a couple of
//! files named on the command line, merged in order, readable from anywhere
//! in the program — and a process that keeps running even when one of those
//! files is missing or malformed. Conflet implements that contract and
//! nothing more: no schema validation, no environment-variable
//! interpolation, no hot reload.
//!
//! # Supported formats
//!
//! The parser registry is fixed and keyed by the lower-cased file extension:
//!
//! | Extension | Format |
//! |-----------|--------|
//! | `.yml`, `.yaml` | YAML — top-level mapping |
//! | `.json` | JSON — top-level object |
//! | `.ini` | INI — each `[section]` becomes a key holding its entries as strings |
//! | *(none)* | treated as INI |
//!
//! See [`Format`] and the [`parsers`] module for the per-format contracts.
//!
//! # Merge policy
//!
//! One [`MergePolicy`] applies to a whole `load` batch:
//!
//! - **[`Override`](MergePolicy::Override)** (the default, and what the CLI
//!   adapter uses): every parsed key replaces whatever the namespace held.
//!   Within a batch, the last file defining a key wins.
//! - **[`KeepExisting`](MergePolicy::KeepExisting)**: existing entries win —
//!   with one deliberate wrinkle: an entry holding a *falsy* value (null,
//!   `false`, zero, empty string/array/object) counts as "not really set"
//!   and is still replaced. Presence alone does not protect a key.
//!
//! # Failure policy: warn and abort the batch
//!
//! `load` never fails and never panics. An empty path, a missing or
//! unreadable file, an unregistered extension, or a parse error each emit
//! one `tracing` warning and abort the **entire remaining batch** — later
//! paths are skipped even if they are fine. Merges already applied stay;
//! there is no rollback. The process simply continues with whatever
//! configuration made it in, and absent keys stay absent.
//!
//! This is a fail-fast-on-batch policy, not per-file isolation. Callers who
//! want each file judged independently call `load` once per file.
//!
//! # Startup via the command line
//!
//! With the `clap` feature (on by default), [`load_from_args`] parses the
//! process arguments for a multi-valued `--config` option and loads any
//! named files with override semantics. Unrecognized flags are ignored, so
//! the option coexists with the host application's own CLI. The core has no
//! CLI dependency; without the feature, construct a [`ConfigStore`] and call
//! [`load`](ConfigStore::load) yourself:
//!
//! ```toml
//! conflet = { version = "...", default-features = false }
//! ```
//!
//! # Sharing the store
//!
//! [`ConfigStore`] is an explicit service object, not an ambient global:
//! create one at startup, load into it, and pass it by reference. It has no
//! internal locking — load before spawning concurrent work. For test
//! isolation there is [`clear`](ConfigStore::clear).

pub mod error;
pub mod parsers;
pub mod types;

#[cfg(feature = "clap")]
mod cli;
mod format;
mod store;

#[cfg(test)]
mod fixtures;

#[cfg(feature = "clap")]
pub use cli::{ConfArgs, load_from_args};
pub use error::ConfError;
pub use format::{Format, SUPPORTED_TAGS, format_tag};
pub use store::ConfigStore;
pub use types::{Mapping, MergePolicy};
