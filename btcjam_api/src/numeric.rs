//! Coercion of loosely typed JSON numbers.
//!
//! Some BTCJam fields (notably `amount_funded`) arrive as an integer (`0`),
//! a quoted decimal (`"1.0000"`) or a float (`1.0000`) depending on the
//! response. [`decode_raw_json_float`] folds all three into one `f64`.

use serde_json::Value;

use crate::Error;

/// Decodes a JSON scalar that may be an integer, a decimal string or a float.
///
/// Attempts are made in that order and the first one that succeeds wins.
/// Anything else fails with [`Error::NumericCoercion`] carrying the raw JSON.
pub fn decode_raw_json_float(raw: &Value) -> Result<f64, Error> {
    if let Some(n) = raw.as_i64() {
        return Ok(n as f64);
    }
    if let Some(n) = raw.as_u64() {
        return Ok(n as f64);
    }
    if let Some(s) = raw.as_str() {
        if let Ok(n) = s.parse::<f64>() {
            return Ok(n);
        }
    }
    if let Some(n) = raw.as_f64() {
        return Ok(n);
    }
    Err(Error::NumericCoercion {
        raw: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_integers() {
        assert_eq!(decode_raw_json_float(&json!(1)).unwrap(), 1.0);
        assert_eq!(decode_raw_json_float(&json!(0)).unwrap(), 0.0);
        assert_eq!(decode_raw_json_float(&json!(-3)).unwrap(), -3.0);
    }

    #[test]
    fn decodes_large_unsigned_integers() {
        let value = json!(u64::MAX);
        assert_eq!(decode_raw_json_float(&value).unwrap(), u64::MAX as f64);
    }

    #[test]
    fn decodes_strings() {
        assert_eq!(decode_raw_json_float(&json!("1.234")).unwrap(), 1.234);
        assert_eq!(decode_raw_json_float(&json!("1.0000")).unwrap(), 1.0);
        assert_eq!(decode_raw_json_float(&json!("7")).unwrap(), 7.0);
    }

    #[test]
    fn decodes_floats() {
        assert_eq!(decode_raw_json_float(&json!(1.234)).unwrap(), 1.234);
        let parsed: Value = serde_json::from_str("1.0000").unwrap();
        assert_eq!(decode_raw_json_float(&parsed).unwrap(), 1.0);
    }

    #[test]
    fn rejects_non_numeric_strings() {
        let err = decode_raw_json_float(&json!("lots")).unwrap_err();
        assert!(matches!(err, Error::NumericCoercion { ref raw } if raw == "\"lots\""));
    }

    #[test]
    fn rejects_objects_and_arrays() {
        let err = decode_raw_json_float(&json!({"amount": 1})).unwrap_err();
        assert!(err.to_string().contains(r#"{"amount":1}"#));

        let err = decode_raw_json_float(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, Error::NumericCoercion { ref raw } if raw == "[1,2]"));
    }

    #[test]
    fn rejects_booleans_and_null() {
        assert!(decode_raw_json_float(&json!(true)).is_err());
        assert!(decode_raw_json_float(&Value::Null).is_err());
    }
}
