use serde_json::Value;

/// A flat mapping of configuration keys to deserialized values.
///
/// This is what every format parser produces and what the
/// [`ConfigStore`](crate::ConfigStore) namespace is made of. Values can be
/// primitives, sequences, or nested mappings, depending on the source format.
pub type Mapping = serde_json::Map<String, Value>;

/// Rule for merging a parsed file into a namespace that may already hold
/// some of its keys. One policy applies uniformly to a whole `load` batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// New values unconditionally replace existing ones.
    #[default]
    Override,
    /// Existing values win — unless the existing value is *falsy* (null,
    /// `false`, zero, empty string/array/object), in which case the new
    /// value still lands. A key holding an empty value is treated as "not
    /// really set".
    KeepExisting,
}

/// Whether a namespace value counts as "set" for [`MergePolicy::KeepExisting`].
///
/// Mirrors dynamic-language truthiness: null, `false`, numeric zero, and
/// empty strings/arrays/objects are all falsy and therefore overridable.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
