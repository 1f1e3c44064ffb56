/// Literal argument coercion — text in, text-or-number out.

use std::fmt;

/// A value flowing through the engine: either free text or a number.
///
/// Generator actions return a `Value`; parenthesized call arguments are each
/// coerced into one before dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Value {
        Value::Text(s.into())
    }

    pub fn number(n: f64) -> Value {
        Value::Number(n)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Text(_) => None,
            Value::Number(n) => Some(*n),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            // f64's Display drops a trailing ".0", so integral results
            // substitute as "1", not "1.0".
            Value::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Number(n as f64)
    }
}

/// Coerce one argument token: trim it, and if what remains is a base-10
/// numeric literal (optional sign, digits, at most one decimal point) produce
/// a `Number`; otherwise keep the trimmed text. Total — every input has a
/// defined output.
pub fn coerce(token: &str) -> Value {
    let trimmed = token.trim();
    if is_numeric_literal(trimmed) {
        if let Ok(n) = trimmed.parse::<f64>() {
            return Value::Number(n);
        }
    }
    Value::Text(trimmed.to_string())
}

fn is_numeric_literal(s: &str) -> bool {
    let body = s.strip_prefix(['+', '-']).unwrap_or(s);
    if body.is_empty() {
        return false;
    }
    let mut digits = 0usize;
    let mut dots = 0usize;
    for c in body.chars() {
        if c.is_ascii_digit() {
            digits += 1;
        } else if c == '.' {
            dots += 1;
            if dots > 1 {
                return false;
            }
        } else {
            return false;
        }
    }
    digits > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_integer() {
        assert_eq!(coerce("1"), Value::Number(1.0));
        assert_eq!(coerce(" 42 "), Value::Number(42.0));
    }

    #[test]
    fn coerce_signed_and_decimal() {
        assert_eq!(coerce("-3.5"), Value::Number(-3.5));
        assert_eq!(coerce("+7"), Value::Number(7.0));
        assert_eq!(coerce(".5"), Value::Number(0.5));
    }

    #[test]
    fn coerce_text_trims() {
        assert_eq!(coerce(" hey hello "), Value::Text("hey hello".to_string()));
    }

    #[test]
    fn coerce_rejects_partial_numbers() {
        assert_eq!(coerce("1x"), Value::Text("1x".to_string()));
        assert_eq!(coerce("1.2.3"), Value::Text("1.2.3".to_string()));
        assert_eq!(coerce("--1"), Value::Text("--1".to_string()));
    }

    #[test]
    fn coerce_rejects_non_decimal_forms() {
        // Only plain base-10 literals count — no exponents, hex, or named
        // float constants.
        assert_eq!(coerce("1e5"), Value::Text("1e5".to_string()));
        assert_eq!(coerce("0x10"), Value::Text("0x10".to_string()));
        assert_eq!(coerce("inf"), Value::Text("inf".to_string()));
        assert_eq!(coerce("NaN"), Value::Text("NaN".to_string()));
    }

    #[test]
    fn coerce_empty_stays_text() {
        assert_eq!(coerce("   "), Value::Text(String::new()));
    }

    #[test]
    fn display_integral_number_has_no_decimal_point() {
        assert_eq!(Value::Number(1.0).to_string(), "1");
        assert_eq!(Value::Number(-2.5).to_string(), "-2.5");
        assert_eq!(Value::text("dog").to_string(), "dog");
    }
}
