#[cfg(test)]
pub mod test {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tempfile::TempDir;
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Metadata, Subscriber};

    /// Write a config file into `dir` and return its path as a string,
    /// ready to hand to `ConfigStore::load`.
    pub fn write_conf(dir: &TempDir, name: &str, contents: &str) -> String {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    /// Minimal subscriber that counts WARN-level events, for asserting on
    /// the warning channel. Install with `tracing::subscriber::with_default`.
    #[derive(Clone, Default)]
    pub struct WarnCounter {
        count: Arc<AtomicUsize>,
    }

    impl WarnCounter {
        pub fn count(&self) -> usize {
            self.count.load(Ordering::SeqCst)
        }
    }

    impl Subscriber for WarnCounter {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            *metadata.level() == Level::WARN
        }

        fn new_span(&self, _span: &Attributes<'_>) -> Id {
            Id::from_u64(1)
        }

        fn record(&self, _span: &Id, _values: &Record<'_>) {}

        fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

        fn event(&self, event: &Event<'_>) {
            if *event.metadata().level() == Level::WARN {
                self.count.fetch_add(1, Ordering::SeqCst);
            }
        }

        fn enter(&self, _span: &Id) {}

        fn exit(&self, _span: &Id) {}
    }

    /// Run `f` with a scoped [`WarnCounter`] and return how many warnings
    /// it emitted.
    pub fn warnings_emitted(f: impl FnOnce()) -> usize {
        let counter = WarnCounter::default();
        tracing::subscriber::with_default(counter.clone(), f);
        counter.count()
    }

    #[test]
    fn write_conf_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = write_conf(&dir, "x.yaml", "a: 1\n");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "a: 1\n");
    }
}
