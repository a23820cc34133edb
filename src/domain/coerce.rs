use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce a loosely typed stored value into an integer score.
///
/// Integers pass through, finite floats are truncated toward zero, numeric
/// strings are parsed after trimming and booleans map to 1/0. Everything
/// else (null, empty or non-numeric strings, arrays, objects) is `None`.
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| float_to_int(n.as_f64()?)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn float_to_int(f: f64) -> Option<i64> {
    if !f.is_finite() {
        return None;
    }
    let truncated = f.trunc();
    if truncated < i64::MIN as f64 || truncated > i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}

/// Serde adapter for fields holding a possibly corrupt integer
pub fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_int(&value))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn integers_and_numeric_strings_coerce() {
        assert_eq!(coerce_int(&json!(3)), Some(3));
        assert_eq!(coerce_int(&json!(-1)), Some(-1));
        assert_eq!(coerce_int(&json!(" 4 ")), Some(4));
        assert_eq!(coerce_int(&json!(2.0)), Some(2));
        assert_eq!(coerce_int(&json!(2.9)), Some(2));
        assert_eq!(coerce_int(&json!(true)), Some(1));
    }

    #[test]
    fn non_numeric_values_are_missing() {
        assert_eq!(coerce_int(&json!(null)), None);
        assert_eq!(coerce_int(&json!("")), None);
        assert_eq!(coerce_int(&json!("two")), None);
        assert_eq!(coerce_int(&json!("2.5")), None);
        assert_eq!(coerce_int(&json!([1])), None);
        assert_eq!(coerce_int(&json!({"home": 1})), None);
    }
}
