use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Number;

use crate::error::{AppError, Result};

/// Parses a JSON body, reporting serde's complaint under `errors`.
pub fn parse_body<T: DeserializeOwned>(body: &[u8], message: &str) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| AppError::Validation {
        message: message.to_string(),
        errors: serde_json::json!([e.to_string()]),
    })
}

/// Treats empty strings as missing, matching what form clients send.
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Amounts arrive either as JSON numbers or as numeric strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(Number),
    Text(String),
}

impl NumericInput {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            Self::Text(s) => s.trim().parse().ok(),
        }
        .filter(|v: &f64| v.is_finite())
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Integral floats such as `2.5e18` come out as plain digits so that
    /// whole-unit parsers accept them.
    pub fn as_text(&self) -> String {
        match self {
            Self::Number(n) => match n.as_f64() {
                Some(v) if n.is_f64() && v.is_finite() && v.fract() == 0.0 => format!("{v:.0}"),
                _ => n.to_string(),
            },
            Self::Text(s) => s.trim().to_string(),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_input_accepts_numbers_and_strings() {
        let from_number: NumericInput = serde_json::from_str("12.5").unwrap();
        let from_text: NumericInput = serde_json::from_str("\" 7 \"").unwrap();

        assert_eq!(from_number.as_f64(), Some(12.5));
        assert_eq!(from_number.as_i32(), None);
        assert_eq!(from_text.as_i32(), Some(7));
        assert_eq!(from_text.as_text(), "7");
    }

    #[test]
    fn exponent_integers_render_as_digits() {
        let exponent: NumericInput = serde_json::from_str("2.5e18").unwrap();
        let fraction: NumericInput = serde_json::from_str("0.5").unwrap();
        let integer: NumericInput = serde_json::from_str("42").unwrap();

        assert_eq!(exponent.as_text(), "2500000000000000000");
        assert_eq!(fraction.as_text(), "0.5");
        assert_eq!(integer.as_text(), "42");
    }

    #[test]
    fn parse_body_reports_validation_errors() {
        let result: Result<serde_json::Map<String, serde_json::Value>> =
            parse_body(b"not json", "Invalid data");

        assert!(matches!(
            result,
            Err(AppError::Validation { ref message, .. }) if message == "Invalid data"
        ));
    }
}
