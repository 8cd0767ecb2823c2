use serde_json::Value;

/// Coerce an integer-like JSON value.
///
/// Accepts a native JSON integer that fits `i64`, or a non-empty string made only of
/// ASCII digits. Everything else (floats, booleans, null, signed or padded strings,
/// containers, overflowing digit strings) is rejected.
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => parse_digits(text),
        _ => None,
    }
}

fn parse_digits(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_digit_string_and_integer_coerce_identically() {
        assert_eq!(coerce_int(&json!("123")), Some(123));
        assert_eq!(coerce_int(&json!(123)), Some(123));
        assert_eq!(coerce_int(&json!("123")), coerce_int(&json!(123)));
    }

    #[test]
    fn test_leading_zeros_are_allowed() {
        assert_eq!(coerce_int(&json!("007")), Some(7));
        assert_eq!(coerce_int(&json!("0")), Some(0));
    }

    #[test]
    fn test_native_negative_integer_is_trivially_coercible() {
        assert_eq!(coerce_int(&json!(-5)), Some(-5));
    }

    #[test]
    fn test_rejected_representations() {
        for value in [
            json!(""),
            json!("-5"),
            json!("+5"),
            json!(" 5"),
            json!("5 "),
            json!("1.5"),
            json!("12a"),
            json!("١٢"),
            json!(1.5),
            json!(1.0),
            json!(true),
            json!(null),
            json!({}),
            json!([1]),
        ] {
            assert_eq!(coerce_int(&value), None, "expected {} to be rejected", value);
        }
    }

    #[test]
    fn test_overflow_is_rejected() {
        assert_eq!(coerce_int(&json!("9223372036854775807")), Some(i64::MAX));
        assert_eq!(coerce_int(&json!("9223372036854775808")), None);
        assert_eq!(coerce_int(&json!(u64::MAX)), None);
    }
}
