//! Widget-initialization parameters and their merge policy.
//!
//! Extensions and processors contribute key/value pairs destined for the
//! widget-initialization object. Repeated writes to the same key combine
//! according to an explicit [`MergeMode`]; writes to different keys are
//! independent of each other, so only same-key ordering matters and it
//! follows extension setup order.

use indexmap::IndexMap;
use serde_json::Value;

/// How a new parameter write combines with an existing value for its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMode {
    /// Replace any existing value.
    #[default]
    Set,
    /// Place the new value after the existing one.
    Append,
    /// Place the new value before the existing one.
    Prepend,
}

/// A single parameter write.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// The widget configuration key.
    pub key: String,
    /// The JSON-shaped value.
    pub value: Value,
    /// How the write combines with an existing value.
    pub mode: MergeMode,
}

impl Parameter {
    /// Creates a parameter write.
    pub fn new(key: impl Into<String>, value: impl Into<Value>, mode: MergeMode) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            mode,
        }
    }

    /// Creates a replacing parameter write.
    pub fn set(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(key, value, MergeMode::Set)
    }
}

/// The accumulated parameter map for one table.
///
/// Keys keep first-write order so the serialized initialization object is
/// deterministic for a given pass.
#[derive(Debug, Clone, Default)]
pub struct ParameterSet {
    entries: IndexMap<String, Value>,
}

impl ParameterSet {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter write under the given merge mode.
    ///
    /// Combination rules for `Append`/`Prepend` when a value already exists:
    /// strings concatenate; arrays extend (or prefix) element-wise; any other
    /// shape is replaced by the new value. With no existing value, all modes
    /// behave like `Set`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Value>, mode: MergeMode) {
        let key = key.into();
        let value = value.into();

        match self.entries.entry(key) {
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(value);
            }
            indexmap::map::Entry::Occupied(mut slot) => {
                // Merging in place keeps the key at its first-write position.
                let existing = std::mem::take(slot.get_mut());
                *slot.get_mut() = match mode {
                    MergeMode::Set => value,
                    MergeMode::Append => combine(existing, value),
                    MergeMode::Prepend => combine(value, existing),
                };
            }
        }
    }

    /// Adds a pre-built [`Parameter`].
    pub fn add_parameter(&mut self, param: Parameter) {
        self.add(param.key, param.value, param.mode);
    }

    /// Looks up the current value for a key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns true if a value exists for the key.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates entries in first-write order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no parameter has been written.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Converts the set into a JSON object in first-write key order.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

fn combine(first: Value, second: Value) -> Value {
    match (first, second) {
        (Value::String(a), Value::String(b)) => Value::String(format!("{}{}", a, b)),
        (Value::Array(mut a), Value::Array(b)) => {
            a.extend(b);
            Value::Array(a)
        }
        // No generic combination exists for other shapes; the later write wins.
        (_, second) => second,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_then_append_concatenates_strings() {
        let mut params = ParameterSet::new();
        params.add("dom", "f", MergeMode::Set);
        params.add("dom", "S", MergeMode::Append);

        assert_eq!(params.get("dom"), Some(&json!("fS")));
    }

    #[test]
    fn prepend_places_new_value_first() {
        let mut params = ParameterSet::new();
        params.add("dom", "t", MergeMode::Set);
        params.add("dom", "l", MergeMode::Prepend);

        assert_eq!(params.get("dom"), Some(&json!("lt")));
    }

    #[test]
    fn set_replaces() {
        let mut params = ParameterSet::new();
        params.add("pageLength", 10, MergeMode::Set);
        params.add("pageLength", 25, MergeMode::Set);

        assert_eq!(params.get("pageLength"), Some(&json!(25)));
    }

    #[test]
    fn append_without_existing_behaves_like_set() {
        let mut params = ParameterSet::new();
        params.add("dom", "S", MergeMode::Append);

        assert_eq!(params.get("dom"), Some(&json!("S")));
    }

    #[test]
    fn arrays_extend_on_append() {
        let mut params = ParameterSet::new();
        params.add("lengthMenu", json!([10, 25]), MergeMode::Set);
        params.add("lengthMenu", json!([50]), MergeMode::Append);

        assert_eq!(params.get("lengthMenu"), Some(&json!([10, 25, 50])));
    }

    #[test]
    fn key_order_is_first_write_order() {
        let mut params = ParameterSet::new();
        params.add("b", 1, MergeMode::Set);
        params.add("a", 2, MergeMode::Set);
        params.add("b", 3, MergeMode::Set);

        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
