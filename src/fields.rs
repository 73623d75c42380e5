// src/fields.rs
//! Ordered fallback lookup over loosely-shaped JSON.
//!
//! jscpd renames fields between versions, so every lookup into a report
//! record tries an ordered list of candidate keys. A falsy value (null,
//! empty string, empty array, empty object, false, zero) defers to the
//! next candidate rather than winning the chain.

use serde_json::Value;

/// Returns whether a JSON value counts as present for fallback purposes.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Returns the value of the first listed key holding a truthy value.
///
/// Returns `None` for non-object records or when no candidate qualifies.
#[must_use]
pub fn first_truthy<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let obj = record.as_object()?;
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .find(|&v| is_truthy(v))
}
