use super::operand::Operand;
use super::operator::Operator;
use crate::error::EvaluationError;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Operand(Operand),
    Operator(Operator),
}

/// The left-to-right token stream typed so far.
///
/// Text is produced only by rendering, so edits to the operand being typed
/// never need to splice strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Expression {
    tokens: Vec<Token>,
}

impl Expression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_operand(operand: Operand) -> Self {
        Self {
            tokens: vec![Token::Operand(operand)],
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Replaces the operand being edited, or starts a new one after an
    /// operator (or on an empty expression).
    pub fn set_trailing_operand(&mut self, operand: Operand) {
        match self.tokens.last_mut() {
            Some(Token::Operand(current)) => *current = operand,
            _ => self.tokens.push(Token::Operand(operand)),
        }
    }

    /// Appends an operator; a pending trailing operator is replaced instead.
    pub fn push_operator(&mut self, op: Operator) {
        match self.tokens.last_mut() {
            Some(Token::Operator(pending)) => *pending = op,
            _ => self.tokens.push(Token::Operator(op)),
        }
    }

    /// Folds the tokens strictly in textual order: `2+3×4` is `(2+3)×4`.
    pub fn evaluate(&self) -> Result<Decimal, EvaluationError> {
        let mut tokens = self.tokens.iter();
        let mut acc = match tokens.next() {
            Some(Token::Operand(operand)) => operand.value()?,
            Some(Token::Operator(op)) => {
                return Err(EvaluationError::Malformed(format!(
                    "expression starts with operator {op}"
                )));
            }
            None => return Err(EvaluationError::Malformed("empty expression".to_string())),
        };

        while let Some(token) = tokens.next() {
            let op = match token {
                Token::Operator(op) => *op,
                Token::Operand(operand) => {
                    return Err(EvaluationError::Malformed(format!(
                        "missing operator before {operand}"
                    )));
                }
            };
            let rhs = match tokens.next() {
                Some(Token::Operand(operand)) => operand.value()?,
                _ => {
                    return Err(EvaluationError::Malformed(format!(
                        "missing operand after {op}"
                    )));
                }
            };
            acc = op.apply(acc, rhs)?;
        }

        Ok(acc)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            match token {
                Token::Operand(operand) => write!(f, "{operand}")?,
                Token::Operator(op) => write!(f, "{op}")?,
            }
        }
        Ok(())
    }
}

/// Tokenizes typed text such as `12.5×-3+4`.
///
/// A `-` directly before a number that is not preceded by an operand is a
/// sign; everywhere else it subtracts.
impl FromStr for Expression {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut literal = String::new();

        for c in s.chars().filter(|c| !c.is_whitespace()) {
            if c.is_ascii_digit() || c == '.' {
                literal.push(c);
                continue;
            }

            let expecting_operand = literal.is_empty()
                && matches!(tokens.last(), None | Some(Token::Operator(_)));
            if c == '-' && expecting_operand {
                literal.push(c);
                continue;
            }

            let op = Operator::from_glyph(c).ok_or_else(|| {
                EvaluationError::Malformed(format!("unexpected character {c:?}"))
            })?;
            flush_literal(&mut literal, &mut tokens)?;
            if !matches!(tokens.last(), Some(Token::Operand(_))) {
                return Err(EvaluationError::Malformed(format!(
                    "missing operand before {op}"
                )));
            }
            tokens.push(Token::Operator(op));
        }
        flush_literal(&mut literal, &mut tokens)?;

        Ok(Self { tokens })
    }
}

fn flush_literal(literal: &mut String, tokens: &mut Vec<Token>) -> Result<(), EvaluationError> {
    if literal.is_empty() {
        return Ok(());
    }
    let operand = Operand::new(std::mem::take(literal));
    operand.value()?;
    tokens.push(Token::Operand(operand));
    Ok(())
}
