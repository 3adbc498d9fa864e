use crate::error::EvaluationError;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A numeric literal exactly as it appears on screen.
///
/// The text is kept verbatim so partially typed values such as `0.` or
/// `1.50` survive until the next keystroke; the numeric value is derived
/// on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand(String);

impl Operand {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Builds an operand from a computed value, in canonical form.
    pub fn from_value(value: Decimal) -> Self {
        Self(format_value(value))
    }

    pub fn value(&self) -> Result<Decimal, EvaluationError> {
        parse_value(&self.0)
            .ok_or_else(|| EvaluationError::Malformed(format!("not a number: {:?}", self.0)))
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parses typed or rendered operand text. A trailing decimal point is
/// accepted (`"12."` is 12).
pub fn parse_value(text: &str) -> Option<Decimal> {
    let digits = text.strip_suffix('.').unwrap_or(text);
    if digits.is_empty() || digits == "-" {
        return None;
    }
    Decimal::from_str(digits).ok()
}

/// Canonical rendering: no trailing fractional zeros, no negative zero.
pub fn format_value(value: Decimal) -> String {
    value.normalize().to_string()
}
