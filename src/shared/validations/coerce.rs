//! Numeric coercion and the per-field number rules applied after it.
//!
//! Coercion follows the JavaScript `Number()` cast:
//!
//! - numbers pass through
//! - strings are trimmed; a blank string is `0`; decimal literals (`"2.5"`,
//!   `"1e3"`, `"+4"`), `0x`/`0o`/`0b` literals and `"Infinity"` (optionally
//!   signed) are numbers; anything else, including `"inf"` and `"NaN"`, is not
//! - booleans map to `0`/`1`, `null` to `0`
//! - an empty array is `0`, a one-element array casts its element the way
//!   its string form would (`[2]` and `["2"]` are `2`, `[null]` is `0`,
//!   `[true]` is not a number); longer arrays and objects are not numbers
//!
//! Deviation: radix literals wider than 64 bits are rejected rather than
//! rounded to a float.

use std::borrow::Cow;

use serde_json::Value;
use validator::{ValidationError, ValidationErrors};

pub const CODE_INVALID_TYPE: &str = "invalid_type";
pub const CODE_NOT_INTEGER: &str = "not_integer";
pub const CODE_TOO_SMALL: &str = "too_small";
pub const CODE_TOO_BIG: &str = "too_big";
pub const CODE_NOT_REPRESENTABLE: &str = "not_representable";

const RADIX_PREFIXES: [(&str, u32); 6] = [
    ("0x", 16),
    ("0X", 16),
    ("0o", 8),
    ("0O", 8),
    ("0b", 2),
    ("0B", 2),
];

/// Coerce an untyped value to a number. `None` means the value is not
/// coercible (including `NaN`).
pub fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => parse_numeric(s)?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null => 0.0,
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [Value::Bool(_)] | [Value::Object(_)] => return None,
            [single] => coerce_number(single)?,
            _ => return None,
        },
        Value::Object(_) => return None,
    };

    (!n.is_nan()).then_some(n)
}

fn parse_numeric(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    for (prefix, radix) in RADIX_PREFIXES {
        if let Some(digits) = s.strip_prefix(prefix) {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }

    // keeps out the `inf` / `nan` spellings the float parser accepts
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }

    s.parse::<f64>().ok()
}

/// A coerced, positive whole-number field with an optional upper bound.
#[derive(Debug, Clone, Copy)]
pub struct NumberRule {
    pub field: &'static str,
    pub default: u64,
    pub max: Option<u64>,
}

impl NumberRule {
    /// Resolve the field from `input`.
    ///
    /// Absent keys take the default. Every violated rule is recorded in
    /// `errors`; `None` is returned when at least one was.
    pub fn apply(&self, input: Option<&Value>, errors: &mut ValidationErrors) -> Option<u64> {
        let Some(raw) = input else {
            return Some(self.default);
        };

        let Some(n) = coerce_number(raw) else {
            errors.add(
                self.field,
                issue(CODE_INVALID_TYPE, "Expected number, received nan".into()),
            );
            return None;
        };

        self.check(n, errors)
    }

    /// Check an already numeric value against the rules.
    pub fn check(&self, n: f64, errors: &mut ValidationErrors) -> Option<u64> {
        let mut valid = true;

        if !n.is_finite() || n.fract() != 0.0 {
            errors.add(
                self.field,
                issue(CODE_NOT_INTEGER, "Expected integer, received float".into()),
            );
            valid = false;
        }

        if n <= 0.0 {
            errors.add(
                self.field,
                issue(CODE_TOO_SMALL, "Number must be greater than 0".into()),
            );
            valid = false;
        }

        match self.max {
            Some(max) if n > max as f64 => {
                errors.add(
                    self.field,
                    issue(
                        CODE_TOO_BIG,
                        format!("Number must be less than or equal to {max}").into(),
                    ),
                );
                valid = false;
            }
            // only a finite integer can still be out of u64 range here
            None if valid && n >= u64::MAX as f64 => {
                errors.add(
                    self.field,
                    issue(
                        CODE_NOT_REPRESENTABLE,
                        "Number is too large to represent".into(),
                    ),
                );
                valid = false;
            }
            _ => {}
        }

        valid.then_some(n as u64)
    }
}

fn issue(code: &'static str, message: Cow<'static, str>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message);
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const LIMIT: NumberRule = NumberRule {
        field: "limit",
        default: 20,
        max: Some(100),
    };

    const PAGE: NumberRule = NumberRule {
        field: "page",
        default: 1,
        max: None,
    };

    fn codes(errors: &ValidationErrors) -> Vec<String> {
        errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter().map(|e| e.code.to_string()))
            .collect()
    }

    #[test]
    fn coerces_strings_numbers_and_scalars() {
        assert_eq!(coerce_number(&json!("3")), Some(3.0));
        assert_eq!(coerce_number(&json!(" 42 ")), Some(42.0));
        assert_eq!(coerce_number(&json!("2.5")), Some(2.5));
        assert_eq!(coerce_number(&json!("+4")), Some(4.0));
        assert_eq!(coerce_number(&json!("1e3")), Some(1000.0));
        assert_eq!(coerce_number(&json!(7)), Some(7.0));
        assert_eq!(coerce_number(&json!("")), Some(0.0));
        assert_eq!(coerce_number(&json!(true)), Some(1.0));
        assert_eq!(coerce_number(&Value::Null), Some(0.0));
    }

    #[test]
    fn radix_literals_are_numbers() {
        assert_eq!(coerce_number(&json!("0x10")), Some(16.0));
        assert_eq!(coerce_number(&json!("0o17")), Some(15.0));
        assert_eq!(coerce_number(&json!("0b101")), Some(5.0));
        assert_eq!(coerce_number(&json!("0x")), None);
        assert_eq!(coerce_number(&json!("0x+1")), None);
        assert_eq!(coerce_number(&json!("-0x10")), None);
    }

    #[test]
    fn only_capitalized_infinity_is_a_number() {
        assert_eq!(coerce_number(&json!("Infinity")), Some(f64::INFINITY));
        assert_eq!(coerce_number(&json!("-Infinity")), Some(f64::NEG_INFINITY));
        assert_eq!(coerce_number(&json!("infinity")), None);
        assert_eq!(coerce_number(&json!("inf")), None);
    }

    #[test]
    fn single_element_arrays_cast_their_element() {
        assert_eq!(coerce_number(&json!([])), Some(0.0));
        assert_eq!(coerce_number(&json!([2])), Some(2.0));
        assert_eq!(coerce_number(&json!(["3"])), Some(3.0));
        assert_eq!(coerce_number(&json!([null])), Some(0.0));
        assert_eq!(coerce_number(&json!([[5]])), Some(5.0));
        assert_eq!(coerce_number(&json!([true])), None);
        assert_eq!(coerce_number(&json!([1, 2])), None);
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert_eq!(coerce_number(&json!("abc")), None);
        assert_eq!(coerce_number(&json!("NaN")), None);
        assert_eq!(coerce_number(&json!("1_000")), None);
        assert_eq!(coerce_number(&json!({"n": 1})), None);
    }

    #[test]
    fn absent_field_takes_default() {
        let mut errors = ValidationErrors::new();
        assert_eq!(LIMIT.apply(None, &mut errors), Some(20));
        assert!(errors.is_empty());
    }

    #[test]
    fn non_coercible_value_is_not_defaulted() {
        let mut errors = ValidationErrors::new();
        assert_eq!(LIMIT.apply(Some(&json!("ten")), &mut errors), None);
        assert_eq!(codes(&errors), vec![CODE_INVALID_TYPE]);
    }

    #[test]
    fn reports_every_violated_rule() {
        let mut errors = ValidationErrors::new();
        assert_eq!(LIMIT.apply(Some(&json!(-1.5)), &mut errors), None);
        assert_eq!(codes(&errors), vec![CODE_NOT_INTEGER, CODE_TOO_SMALL]);
    }

    #[test]
    fn upper_bound_is_inclusive() {
        let mut errors = ValidationErrors::new();
        assert_eq!(LIMIT.apply(Some(&json!(100)), &mut errors), Some(100));
        assert_eq!(LIMIT.apply(Some(&json!(101)), &mut errors), None);
        assert_eq!(codes(&errors), vec![CODE_TOO_BIG]);
    }

    #[test]
    fn infinity_breaks_the_bound_only_where_one_exists() {
        let mut errors = ValidationErrors::new();
        assert_eq!(LIMIT.apply(Some(&json!("Infinity")), &mut errors), None);
        assert_eq!(codes(&errors), vec![CODE_NOT_INTEGER, CODE_TOO_BIG]);

        let mut errors = ValidationErrors::new();
        assert_eq!(PAGE.apply(Some(&json!("Infinity")), &mut errors), None);
        assert_eq!(codes(&errors), vec![CODE_NOT_INTEGER]);
    }

    #[test]
    fn unbounded_field_accepts_large_values() {
        let mut errors = ValidationErrors::new();
        assert_eq!(
            PAGE.apply(Some(&json!(5_000_000_000u64)), &mut errors),
            Some(5_000_000_000)
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn unbounded_field_rejects_unrepresentable_values() {
        let mut errors = ValidationErrors::new();
        assert_eq!(PAGE.apply(Some(&json!("1e30")), &mut errors), None);
        assert_eq!(codes(&errors), vec![CODE_NOT_REPRESENTABLE]);
    }
}
