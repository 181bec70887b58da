//! best-effort numeric coercion for heterogeneous source cells.
//!
//! both coercions are total: a value that is missing, one of the null
//! tokens, or not a finite number after cleanup yields the caller's default.
//! thousands-separator commas and surrounding whitespace are removed before
//! parsing, so census text such as "1,234.50" reads as 1234.5.
use crate::model::CellValue;

/// lowercase text forms that are read as "no value"
pub const NULL_TOKENS: [&str; 3] = ["nan", "none", ""];

/// coerces a cell to a float, defaulting to 0.0
pub fn coerce_float(value: &CellValue) -> f64 {
    coerce_float_or(value, 0.0)
}

/// coerces a cell to an integer, defaulting to 0
pub fn coerce_int(value: &CellValue) -> i64 {
    coerce_int_or(value, 0)
}

/// coerces a cell to a float, or returns `default` when the cell has no usable number.
pub fn coerce_float_or(value: &CellValue, default: f64) -> f64 {
    parse_finite(value).unwrap_or(default)
}

/// coerces a cell to an integer by truncating its float form toward zero,
/// or returns `default` when the cell has no usable number or the value does
/// not fit in an i64.
pub fn coerce_int_or(value: &CellValue, default: i64) -> i64 {
    match value {
        CellValue::Int(i) => *i,
        other => parse_finite(other)
            .map(f64::trunc)
            .filter(|f| *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
            .unwrap_or(default),
    }
}

fn parse_finite(value: &CellValue) -> Option<f64> {
    let parsed = match value {
        CellValue::Empty | CellValue::Bool(_) => None,
        CellValue::Int(i) => Some(*i as f64),
        CellValue::Float(f) => Some(*f),
        CellValue::String(s) => parse_text(s),
    };
    parsed.filter(|f| f.is_finite())
}

fn parse_text(text: &str) -> Option<f64> {
    if NULL_TOKENS.contains(&text.to_lowercase().as_str()) {
        return None;
    }
    let cleaned = text.replace(',', "");
    match cleaned.trim() {
        "" => None,
        trimmed => trimmed.parse::<f64>().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_tokens_return_default() {
        let nulls = [
            CellValue::Empty,
            CellValue::from(""),
            CellValue::from("nan"),
            CellValue::from("NaN"),
            CellValue::from("None"),
            CellValue::Float(f64::NAN),
        ];
        for value in nulls.iter() {
            assert_eq!(coerce_float_or(value, -1.0), -1.0, "{value:?}");
            assert_eq!(coerce_int_or(value, -1), -1, "{value:?}");
            assert_eq!(coerce_float(value), 0.0);
            assert_eq!(coerce_int(value), 0);
        }
    }

    #[test]
    fn test_thousands_separator() {
        let value = CellValue::from("1,234.50");
        assert_eq!(coerce_float(&value), 1234.5);
        assert_eq!(coerce_int(&value), 1234);
    }

    #[test]
    fn test_int_truncates_toward_zero() {
        assert_eq!(coerce_int(&CellValue::from("1,234.7")), 1234);
        assert_eq!(coerce_int(&CellValue::from("-3.9")), -3);
        assert_eq!(coerce_int(&CellValue::Float(99.99)), 99);
    }

    #[test]
    fn test_garbage_returns_default() {
        for text in ["abc", "(X)", "-", "250,000+", "12 34", "**"] {
            let value = CellValue::from(text);
            assert_eq!(coerce_float_or(&value, 7.5), 7.5, "{text}");
            assert_eq!(coerce_int_or(&value, 7), 7, "{text}");
        }
    }

    #[test]
    fn test_whitespace_is_stripped() {
        assert_eq!(coerce_float(&CellValue::from("  26.8 ")), 26.8);
        assert_eq!(coerce_int(&CellValue::from(" 6,105,542\t")), 6105542);
        assert_eq!(coerce_float_or(&CellValue::from("   "), 3.0), 3.0);
    }

    #[test]
    fn test_non_finite_returns_default() {
        assert_eq!(coerce_float_or(&CellValue::from("inf"), 1.0), 1.0);
        assert_eq!(coerce_float_or(&CellValue::Float(f64::INFINITY), 1.0), 1.0);
        assert_eq!(coerce_int_or(&CellValue::from("-infinity"), 2), 2);
        assert_eq!(coerce_int_or(&CellValue::from("1e300"), 2), 2);
    }

    #[test]
    fn test_numeric_cells_pass_through() {
        assert_eq!(coerce_float(&CellValue::Int(42)), 42.0);
        assert_eq!(coerce_int(&CellValue::Int(i64::MAX)), i64::MAX);
        assert_eq!(coerce_float(&CellValue::Float(0.25)), 0.25);
        assert_eq!(coerce_float(&CellValue::Bool(true)), 0.0);
    }
}
