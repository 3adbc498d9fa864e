use crate::error::EvaluationError;
use rust_decimal::Decimal;
use std::fmt;

/// One of the four binary operations on the keypad.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The glyph used when the operator is rendered into an expression.
    pub fn glyph(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '−',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }

    /// Accepts the rendered glyph as well as the ASCII spellings people type.
    ///
    /// ASCII `-` is accepted here; whether it means subtraction or a sign is
    /// up to the caller, which knows the position.
    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '−' | '-' => Some(Operator::Subtract),
            '×' | '*' | 'x' | 'X' => Some(Operator::Multiply),
            '÷' | '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn apply(self, lhs: Decimal, rhs: Decimal) -> Result<Decimal, EvaluationError> {
        let result = match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Subtract => lhs.checked_sub(rhs),
            Operator::Multiply => lhs.checked_mul(rhs),
            Operator::Divide => {
                if rhs.is_zero() {
                    return Err(EvaluationError::DivisionByZero);
                }
                lhs.checked_div(rhs)
            }
        };
        result.ok_or(EvaluationError::Overflow)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
