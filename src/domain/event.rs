use super::operator::Operator;
use crate::error::CalcError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A decimal digit key, `0..=9`.
///
/// Only constructible through validation, so the engine can append it to an
/// entry without checking again.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Result<Self, CalcError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(CalcError::InvalidDigit(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single keypad tap, as forwarded by the UI.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(try_from = "String")]
pub enum InputEvent {
    Digit(Digit),
    Point,
    Operator(Operator),
    Equals,
    Clear,
    ToggleSign,
    Percent,
}

impl FromStr for InputEvent {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let event = match label {
            "." => InputEvent::Point,
            "=" => InputEvent::Equals,
            "AC" | "ac" => InputEvent::Clear,
            "+/-" | "±" => InputEvent::ToggleSign,
            "%" => InputEvent::Percent,
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => {
                        InputEvent::Digit(Digit::new(c as u8 - b'0')?)
                    }
                    (Some(c), None) => Operator::from_glyph(c)
                        .map(InputEvent::Operator)
                        .ok_or_else(|| CalcError::UnknownKey(label.to_string()))?,
                    _ => return Err(CalcError::UnknownKey(label.to_string())),
                }
            }
        };
        Ok(event)
    }
}

impl TryFrom<String> for InputEvent {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputEvent::Digit(d) => write!(f, "{d}"),
            InputEvent::Point => f.write_str("."),
            InputEvent::Operator(op) => write!(f, "{op}"),
            InputEvent::Equals => f.write_str("="),
            InputEvent::Clear => f.write_str("AC"),
            InputEvent::ToggleSign => f.write_str("+/-"),
            InputEvent::Percent => f.write_str("%"),
        }
    }
}
