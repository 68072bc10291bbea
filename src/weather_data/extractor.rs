//! Typed, infallible accessors over a decoded JSON object.
//!
//! Every helper answers `None` when the key is missing or holds a value of the wrong
//! JSON type, so callers never have to distinguish "absent" from "malformed".

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

pub(crate) type JsonObject = Map<String, Value>;

/// Extracts an optional number (integer or float).
pub(crate) fn get_opt_f64(json: &JsonObject, key: &str) -> Option<f64> {
    json.get(key).and_then(Value::as_f64)
}

/// Extracts an optional whole number. Floats are accepted only when they have no
/// fractional part.
pub(crate) fn get_opt_int<T>(json: &JsonObject, key: &str) -> Option<T>
where
    T: TryFrom<i64>,
{
    let value = json.get(key)?;
    let int = match value.as_i64() {
        Some(int) => int,
        None => {
            let float = value.as_f64()?;
            if float.fract() != 0.0 || !float.is_finite() {
                return None;
            }
            float as i64
        }
    };
    T::try_from(int).ok()
}

pub(crate) fn get_opt_bool(json: &JsonObject, key: &str) -> Option<bool> {
    json.get(key).and_then(Value::as_bool)
}

pub(crate) fn get_opt_string(json: &JsonObject, key: &str) -> Option<String> {
    json.get(key).and_then(Value::as_str).map(str::to_owned)
}

pub(crate) fn get_opt_object<'a>(json: &'a JsonObject, key: &str) -> Option<&'a JsonObject> {
    json.get(key).and_then(Value::as_object)
}

/// Extracts a list whose elements are all strings; a single non-string element
/// discards the whole list.
pub(crate) fn get_opt_string_list(json: &JsonObject, key: &str) -> Option<Vec<String>> {
    json.get(key)?
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(str::to_owned))
        .collect()
}

/// Extracts a list whose elements are all objects; a single non-object element
/// discards the whole list.
pub(crate) fn get_opt_object_list<'a>(
    json: &'a JsonObject,
    key: &str,
) -> Option<Vec<&'a JsonObject>> {
    json.get(key)?
        .as_array()?
        .iter()
        .map(Value::as_object)
        .collect()
}

/// Converts a UNIX timestamp in (possibly fractional) seconds.
pub(crate) fn timestamp_to_utc(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1e9).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos)
}

/// Extracts an optional UNIX timestamp.
pub(crate) fn get_opt_time(json: &JsonObject, key: &str) -> Option<DateTime<Utc>> {
    get_opt_f64(json, key).and_then(timestamp_to_utc)
}
