use crate::coerce;
use crate::value::Value;
use chrono::{DateTime, FixedOffset, TimeDelta};
use fxhash::FxHashMap;
use serde::Deserialize;
use tracing::trace;

/// Key under which an opaque string payload is stored by [`Options::from_raw`].
pub const RAW_KEY: &str = "source";

/// Dynamically typed configuration handed to object constructors.
///
/// Accessors come in pairs: `int(key)` falls back to the zero value, and
/// `int_or(key, default)` to the supplied default. Lookups never fail and
/// never mutate the bag.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Options {
    values: FxHashMap<String, Value>,
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an opaque string payload as a single-key bag under [`RAW_KEY`].
    pub fn from_raw(payload: impl Into<String>) -> Self {
        Self::new().with(RAW_KEY, payload.into())
    }

    /// Builder-style [`Options::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Stores `value` under `key`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// Raw stored value, including an explicit [`Value::Null`].
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns `true` when `key` is present, whatever it holds.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The opaque payload stored by [`Options::from_raw`], if present.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.lookup(RAW_KEY).and_then(coerce::to_string)
    }

    /// Nested bag stored under `key`; empty when absent or not a map.
    #[must_use]
    pub fn options(&self, key: &str) -> Self {
        match self.lookup(key) {
            Some(Value::Map(nested)) => nested.clone(),
            _ => Self::default(),
        }
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        self.values.get(key).filter(|value| !value.is_null())
    }

    /// Converts the value under `key`, tracing values that cannot be converted.
    fn coerced<T>(&self, key: &str, convert: impl FnOnce(&Value) -> Option<T>) -> Option<T> {
        let value = self.lookup(key)?;
        let converted = convert(value);
        if converted.is_none() {
            trace!(
                key,
                kind = value.kind(),
                sequence = value.is_sequence(),
                "Option not convertible, using default"
            );
        }
        converted
    }

    // --- Scalars ---

    #[must_use]
    pub fn string(&self, key: &str) -> String {
        self.string_or(key, "")
    }

    #[must_use]
    pub fn string_or(&self, key: &str, default: &str) -> String {
        self.coerced(key, coerce::to_string).unwrap_or_else(|| default.to_owned())
    }

    #[must_use]
    pub fn bool(&self, key: &str) -> bool {
        self.bool_or(key, false)
    }

    #[must_use]
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.coerced(key, coerce::to_bool).unwrap_or(default)
    }

    #[must_use]
    pub fn int(&self, key: &str) -> i64 {
        self.int_or(key, 0)
    }

    #[must_use]
    pub fn int_or(&self, key: &str, default: i64) -> i64 {
        self.coerced(key, coerce::to_int).unwrap_or(default)
    }

    #[must_use]
    pub fn uint(&self, key: &str) -> u64 {
        self.uint_or(key, 0)
    }

    #[must_use]
    pub fn uint_or(&self, key: &str, default: u64) -> u64 {
        self.coerced(key, coerce::to_uint).unwrap_or(default)
    }

    #[must_use]
    pub fn float(&self, key: &str) -> f64 {
        self.float_or(key, 0.0)
    }

    #[must_use]
    pub fn float_or(&self, key: &str, default: f64) -> f64 {
        self.coerced(key, coerce::to_float).unwrap_or(default)
    }

    // --- Time ---

    #[must_use]
    pub fn duration(&self, key: &str) -> TimeDelta {
        self.duration_or(key, TimeDelta::zero())
    }

    /// Reads a duration from a native value, a literal such as `"1h30m"`, or
    /// an integer count of nanoseconds.
    #[must_use]
    pub fn duration_or(&self, key: &str, default: TimeDelta) -> TimeDelta {
        self.lookup(key).map_or(default, |value| coerce::to_duration(value, default))
    }

    /// Zero value is the Unix epoch in UTC.
    #[must_use]
    pub fn time(&self, key: &str) -> DateTime<FixedOffset> {
        self.time_or(key, DateTime::UNIX_EPOCH.fixed_offset())
    }

    /// Reads a timestamp from a native value, a string in one of the known
    /// layouts (first match wins), or an integer count of Unix seconds.
    #[must_use]
    pub fn time_or(&self, key: &str, default: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        self.lookup(key).map_or(default, |value| coerce::to_time(value, default))
    }

    // --- Sequences ---

    #[must_use]
    pub fn string_slice(&self, key: &str) -> Vec<String> {
        self.string_slice_or(key, &[])
    }

    #[must_use]
    pub fn string_slice_or(&self, key: &str, default: &[&str]) -> Vec<String> {
        self.coerced(key, coerce::to_strings)
            .unwrap_or_else(|| default.iter().map(|s| (*s).to_owned()).collect())
    }

    #[must_use]
    pub fn int_slice(&self, key: &str) -> Vec<i64> {
        self.int_slice_or(key, &[])
    }

    #[must_use]
    pub fn int_slice_or(&self, key: &str, default: &[i64]) -> Vec<i64> {
        self.coerced(key, coerce::to_ints).unwrap_or_else(|| default.to_vec())
    }

    #[must_use]
    pub fn float_slice(&self, key: &str) -> Vec<f64> {
        self.float_slice_or(key, &[])
    }

    #[must_use]
    pub fn float_slice_or(&self, key: &str, default: &[f64]) -> Vec<f64> {
        self.coerced(key, coerce::to_floats).unwrap_or_else(|| default.to_vec())
    }

    #[must_use]
    pub fn bool_slice(&self, key: &str) -> Vec<bool> {
        self.bool_slice_or(key, &[])
    }

    #[must_use]
    pub fn bool_slice_or(&self, key: &str, default: &[bool]) -> Vec<bool> {
        self.coerced(key, coerce::to_bools).unwrap_or_else(|| default.to_vec())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        options.extend(iter);
        options
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Options {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_absent_are_identical() {
        let opts = Options::new().with("n", Value::Null);
        assert!(opts.has("n"));
        assert!(!opts.has("missing"));
        for key in ["n", "missing"] {
            assert_eq!(opts.string_or(key, "d"), "d");
            assert!(opts.bool_or(key, true));
            assert_eq!(opts.int_or(key, -3), -3);
            assert_eq!(opts.uint_or(key, 3), 3);
            assert_eq!(opts.float_or(key, 1.5), 1.5);
            assert_eq!(opts.duration_or(key, TimeDelta::seconds(5)), TimeDelta::seconds(5));
            assert_eq!(opts.int_slice_or(key, &[9]), vec![9]);
            assert_eq!(opts.string_slice_or(key, &["x"]), vec!["x".to_owned()]);
            assert_eq!(opts.float_slice_or(key, &[0.5]), vec![0.5]);
            assert_eq!(opts.bool_slice_or(key, &[true]), vec![true]);
            let epoch = DateTime::UNIX_EPOCH.fixed_offset();
            let later = epoch + TimeDelta::hours(1);
            assert_eq!(opts.time_or(key, later), later);
        }
    }

    #[test]
    fn raw_payload_round_trips() {
        let opts = Options::from_raw("LICENSE");
        assert_eq!(opts.raw().as_deref(), Some("LICENSE"));
        assert_eq!(opts.string(RAW_KEY), "LICENSE");
        assert_eq!(Options::new().raw(), None);
    }

    #[test]
    fn nested_options_are_reachable() {
        let inner = Options::new().with("port", 8080u16);
        let opts = Options::new().with("server", inner).with("flat", 1);
        assert_eq!(opts.options("server").uint("port"), 8080);
        assert!(opts.options("flat").is_empty());
        assert!(opts.options("missing").is_empty());
    }

    #[test]
    fn collect_from_pairs() {
        let opts: Options = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(opts.len(), 2);
        let mut keys: Vec<_> = opts.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, ["a", "b"]);
    }
}
