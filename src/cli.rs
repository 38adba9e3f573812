//! Clap adapter for conflet.
//!
//! This module is the **optional integration layer** between conflet's
//! framework-agnostic core and the [clap](https://docs.rs/clap) CLI parser.
//! It is compiled only when the `clap` Cargo feature is enabled (on by
//! default).
//!
//! [`ConfArgs`] models the conventional startup interface: a multi-valued
//! `--config` option naming the files to load. Unrecognized arguments are
//! ignored rather than rejected, so the option can sit alongside whatever
//! other flags the host application parses. [`load_from_args`] wires it up
//! end to end: parse the real process arguments, and if at least one path
//! was supplied, load the batch with override semantics.
//!
//! If you use a different CLI parser (or no CLI at all), skip this module
//! and call [`ConfigStore::load`](crate::ConfigStore::load) directly.

use clap::Parser;

use crate::format::SUPPORTED_TAGS;
use crate::store::ConfigStore;
use crate::types::MergePolicy;

/// Clap-derived `--config` option for configuration loading at startup.
#[derive(Debug, Parser)]
#[command(name = "conflet", ignore_errors = true)]
pub struct ConfArgs {
    #[arg(long = "config", value_name = "conf-file", num_args = 1.., help = config_help())]
    pub config: Vec<String>,
}

/// Help text for `--config`, built from the parser registry so it never
/// drifts from the formats the registry actually recognizes.
fn config_help() -> String {
    format!(
        "Conf file(s) to load. Supported types are: {}",
        SUPPORTED_TAGS.join(", ")
    )
}

impl ConfArgs {
    /// Parse the real process arguments. Flags the struct does not know
    /// about are ignored, not rejected.
    pub fn from_process_args() -> Self {
        ConfArgs::parse()
    }

    /// Load any named config files into `store`, overriding existing keys.
    ///
    /// Does nothing when no `--config` paths were supplied.
    pub fn apply(&self, store: &mut ConfigStore) {
        if !self.config.is_empty() {
            store.load(&self.config, MergePolicy::Override);
        }
    }
}

/// Parse process arguments and load any `--config` files into `store`.
pub fn load_from_args(store: &mut ConfigStore) {
    ConfArgs::from_process_args().apply(store);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::write_conf;
    use serde_json::json;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> ConfArgs {
        ConfArgs::try_parse_from(args).unwrap()
    }

    #[test]
    fn help_names_every_supported_tag() {
        let help = config_help();
        for tag in SUPPORTED_TAGS {
            assert!(help.contains(tag), "help should mention {tag}");
        }
    }

    #[test]
    fn parse_no_config_is_empty() {
        let args = parse(&["test"]);
        assert!(args.config.is_empty());
    }

    #[test]
    fn parse_single_path() {
        let args = parse(&["test", "--config", "a.yml"]);
        assert_eq!(args.config, ["a.yml"]);
    }

    #[test]
    fn parse_multiple_paths_after_one_flag() {
        let args = parse(&["test", "--config", "a.yml", "b.ini"]);
        assert_eq!(args.config, ["a.yml", "b.ini"]);
    }

    #[test]
    fn parse_repeated_flag_accumulates() {
        let args = parse(&["test", "--config", "a.yml", "--config", "b.ini"]);
        assert_eq!(args.config, ["a.yml", "b.ini"]);
    }

    #[test]
    fn unknown_flags_are_ignored() {
        let args = parse(&["test", "--config", "a.yml", "--verbose"]);
        assert_eq!(args.config, ["a.yml"]);
    }

    #[test]
    fn apply_with_no_paths_leaves_store_untouched() {
        let args = parse(&["test"]);
        let mut store = ConfigStore::new();
        args.apply(&mut store);
        assert!(store.is_empty());
    }

    #[test]
    fn apply_loads_named_files() {
        let dir = TempDir::new().unwrap();
        let path = write_conf(&dir, "app.yaml", "host: localhost\n");

        let args = parse(&["test", "--config", &path]);
        let mut store = ConfigStore::new();
        args.apply(&mut store);

        assert_eq!(store.get("host"), Some(&json!("localhost")));
    }

    #[test]
    fn apply_uses_override_semantics() {
        let dir = TempDir::new().unwrap();
        let first = write_conf(&dir, "a.yaml", "port: 1000\n");
        let second = write_conf(&dir, "b.yaml", "port: 2000\n");

        let args = parse(&["test", "--config", &first, &second]);
        let mut store = ConfigStore::new();
        args.apply(&mut store);

        assert_eq!(store.get("port"), Some(&json!(2000)));
    }
}
