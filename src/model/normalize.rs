//! Alias-driven field lookup over loosely shaped upstream records.
//!
//! Upstream endpoints disagree on key spelling (`TeamName` vs `full_name`, `PTS` vs `pts`),
//! sometimes from one record to the next. Everything that reads a raw record goes through
//! [`resolve`] with one of the alias lists in [`crate::model::aliases`].

use serde_json::{Map, Value};

pub type Record = Map<String, Value>;

/// Returns the value of the first alias present in `record` that is not `null`.
///
/// `0`, `""` and `false` count as present.
#[must_use]
pub fn resolve<'a>(record: &'a Record, aliases: &[&str]) -> Option<&'a Value> {
    aliases.iter().find_map(|key| match record.get(*key) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value),
    })
}

#[must_use]
pub fn resolve_or(record: &Record, aliases: &[&str], fallback: Value) -> Value {
    resolve(record, aliases).cloned().unwrap_or(fallback)
}

/// Formats a resolved value for display without interpreting its type.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[must_use]
pub fn field_text(record: &Record, aliases: &[&str], fallback: &str) -> String {
    resolve(record, aliases).map_or_else(|| fallback.to_string(), display_value)
}

/// Identifier lookup for click-through links. An empty identifier cannot build a link, so it
/// is treated as unresolvable here even though the lookup itself found it.
#[must_use]
pub fn field_id(record: &Record, aliases: &[&str]) -> Option<String> {
    resolve(record, aliases)
        .map(display_value)
        .filter(|id| !id.trim().is_empty())
}

/// The objects of an endpoint body that is either a bare array or an object carrying the
/// array under `key`. Anything else yields no records.
#[must_use]
pub fn collection<'a>(body: &'a Value, key: &str) -> Vec<&'a Record> {
    let items = match body {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get(key) {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        },
        _ => &[],
    };
    items.iter().filter_map(Value::as_object).collect()
}
