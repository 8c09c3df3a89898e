//! Typed accessors over loosely typed JSON input.
//!
//! Each accessor returns the caller's default when the value has the wrong
//! type or is out of range. None of them fail.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserialize `value` as `T`, or return `default`.
pub fn get_or_default<T: DeserializeOwned>(value: &Value, default: T) -> T {
    T::deserialize(value).unwrap_or(default)
}

/// Read a boolean.
///
/// Accepts booleans, integers (non-zero is true), and the strings `"true"`,
/// `"false"`, `"1"`, `"0"`.
pub fn get_bool(value: &Value, default: bool) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => match s.as_str() {
            "true" | "1" => true,
            "false" | "0" => false,
            _ => default,
        },
        Value::Number(_) => value
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .map(|n| n != 0)
            .unwrap_or(default),
        _ => default,
    }
}

/// Read an integer that fits in `i32`.
pub fn get_i32(value: &Value, default: i32) -> i32 {
    value
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .unwrap_or(default)
}

/// Read an integer that fits in `i64`.
pub fn get_i64(value: &Value, default: i64) -> i64 {
    value.as_i64().unwrap_or(default)
}

/// Read a string.
pub fn get_str(value: &Value, default: &str) -> String {
    value.as_str().unwrap_or(default).to_string()
}

/// Read the elements of an array, or the values of an object.
pub fn get_values(value: &Value, default: Vec<Value>) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        Value::Object(map) => map.values().cloned().collect(),
        _ => default,
    }
}

/// Read a field of an object with [`get_or_default`]; missing fields give `default`.
pub fn get_field<T: DeserializeOwned>(value: &Value, field: &str, default: T) -> T {
    match value.get(field) {
        Some(v) => get_or_default(v, default),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_bool() {
        assert!(get_bool(&json!(true), false));
        assert!(!get_bool(&json!(false), true));
        assert!(get_bool(&json!("true"), false));
        assert!(get_bool(&json!("1"), false));
        assert!(!get_bool(&json!("false"), true));
        assert!(!get_bool(&json!("0"), true));
        assert!(get_bool(&json!("maybe"), true));
        assert!(!get_bool(&json!("maybe"), false));
        assert!(get_bool(&json!(5), false));
        assert!(!get_bool(&json!(0), true));
        assert!(get_bool(&json!(1.5), true));
        assert!(!get_bool(&json!(null), false));
        assert!(get_bool(&json!([1]), true));
    }

    #[test]
    fn test_get_ints() {
        assert_eq!(get_i32(&json!(42), 0), 42);
        assert_eq!(get_i32(&json!("42"), 7), 7);
        assert_eq!(get_i32(&json!(i64::MAX), 7), 7);
        assert_eq!(get_i64(&json!(i64::MAX), 0), i64::MAX);
        assert_eq!(get_i64(&json!(2.5), -1), -1);
        assert_eq!(get_i64(&json!(null), -1), -1);
    }

    #[test]
    fn test_get_str() {
        assert_eq!(get_str(&json!("alice"), "x"), "alice");
        assert_eq!(get_str(&json!(3), "x"), "x");
    }

    #[test]
    fn test_get_values() {
        assert_eq!(get_values(&json!([1, 2]), vec![]), vec![json!(1), json!(2)]);
        assert_eq!(get_values(&json!({"a": 1}), vec![]), vec![json!(1)]);
        assert_eq!(get_values(&json!("s"), vec![json!(0)]), vec![json!(0)]);
    }

    #[test]
    fn test_get_or_default_and_field() {
        let v = json!({"name": "alice", "count": 3});
        assert_eq!(get_field(&v, "name", String::new()), "alice");
        assert_eq!(get_field(&v, "count", 0u32), 3);
        assert_eq!(get_field(&v, "count", String::from("none")), "none");
        assert_eq!(get_field(&v, "missing", 9u8), 9);
        assert_eq!(get_or_default::<Vec<u8>>(&json!("nope"), vec![1]), vec![1]);
    }
}
