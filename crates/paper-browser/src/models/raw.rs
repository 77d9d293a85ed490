//! Raw paper records as returned by the remote endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A paper record exactly as the endpoint returned it.
///
/// The source has no fixed schema: any subset of fields may appear, some under
/// more than one name (`papertitle`/`title`, `published_at`/`created_at`),
/// some nested inside sub-records (`journal`, `publisher`, `client`). The
/// accessors here are total: they return `None` instead of failing, so the
/// normalizer can walk an ordered list of candidates per canonical field.
///
/// Coercion rules: strings, numbers, and booleans coerce to their display
/// form; JSON null, objects, and arrays in a scalar position count as absent.
/// Empty strings also count as absent, matching the truthiness chains in the
/// source data's producers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPaperRecord(pub Value);

impl RawPaperRecord {
    /// Wrap a JSON value as a raw record.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The underlying JSON value.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Top-level field lookup.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Nested object lookup (`None` if the field is absent or not an object).
    #[must_use]
    pub fn object(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|v| v.is_object())
    }

    /// First of the given top-level fields that coerces to a non-empty string.
    #[must_use]
    pub fn string_field(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.get(key).and_then(coerce_string))
    }

    /// First of the given fields on the `outer` sub-record that coerces to a
    /// non-empty string.
    #[must_use]
    pub fn nested_string(&self, outer: &str, keys: &[&str]) -> Option<String> {
        let object = self.object(outer)?;
        keys.iter().find_map(|key| object.get(key).and_then(coerce_string))
    }

    /// First of the given top-level fields that coerces to a finite number.
    #[must_use]
    pub fn number_field(&self, keys: &[&str]) -> Option<f64> {
        keys.iter().find_map(|key| self.get(key).and_then(coerce_number))
    }

    /// First of the given fields on the `outer` sub-record that coerces to a
    /// finite number.
    #[must_use]
    pub fn nested_number(&self, outer: &str, keys: &[&str]) -> Option<f64> {
        let object = self.object(outer)?;
        keys.iter().find_map(|key| object.get(key).and_then(coerce_number))
    }

    /// The source identifier, stringified (string or number accepted).
    #[must_use]
    pub fn id_string(&self) -> Option<String> {
        match self.get("id") {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    /// A top-level array field coerced element-wise to strings.
    ///
    /// Returns `None` unless the field is already a JSON array; scalar values
    /// are never promoted to a one-element list.
    #[must_use]
    pub fn string_array(&self, key: &str) -> Option<Vec<String>> {
        match self.get(key) {
            Some(Value::Array(items)) => {
                Some(items.iter().filter_map(coerce_string_keep_empty).collect())
            }
            _ => None,
        }
    }
}

impl From<Value> for RawPaperRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Coerce a scalar JSON value to a non-empty string.
fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Like [`coerce_string`] but keeps empty strings (array elements pass
/// through verbatim).
fn coerce_string_keep_empty(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Coerce a scalar JSON value to a finite number.
///
/// Strings parse their leading float prefix (`"2.5 (est)"` is 2.5), the way
/// the source data was originally consumed.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_float_prefix(s),
        _ => None,
    }
}

/// Parse the leading float prefix of a string: optional sign, digits, an
/// optional fractional part, and an optional exponent. Trailing garbage is
/// ignored; a string with no leading number yields `None`.
fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let mut saw_digit = false;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        saw_digit = true;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            saw_digit = true;
        }
    }
    if !saw_digit {
        return None;
    }
    // Exponent only counts if at least one digit follows it.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
