use crate::domain::event::{Digit, InputEvent};
use crate::domain::expression::Expression;
use crate::domain::history::History;
use crate::domain::operand::{self, Operand};
use crate::domain::operator::Operator;
use crate::domain::screen::Screen;
use rust_decimal::Decimal;

/// Shown in place of a result when evaluation fails.
pub const ERROR_TOKEN: &str = "Error";

/// Once the entry has this many characters further digits are ignored.
pub const MAX_ENTRY_LEN: usize = 11;

/// The outcome of the most recent `=`, kept until the next edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Value(Decimal),
    Error,
}

impl Outcome {
    /// The numeric value, with the error outcome counting as zero.
    fn value_or_zero(self) -> Decimal {
        match self {
            Outcome::Value(value) => value,
            Outcome::Error => Decimal::ZERO,
        }
    }
}

/// The calculator's whole session state.
///
/// `ExpressionEngine` owns the entry being typed, the token stream built so
/// far and the short evaluation history. It is mutated only through
/// [`ExpressionEngine::apply_event`]; the presentation layer reads it through
/// the display accessors or a [`Screen`] snapshot.
#[derive(Debug, Clone)]
pub struct ExpressionEngine {
    entry: String,
    expression: Expression,
    active_operator: Option<Operator>,
    previous_operand: Option<String>,
    last_result: Option<Outcome>,
    history: History,
}

impl Default for ExpressionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionEngine {
    pub fn new() -> Self {
        Self {
            entry: "0".to_string(),
            expression: Expression::new(),
            active_operator: None,
            previous_operand: None,
            last_result: None,
            history: History::new(),
        }
    }

    /// Applies one keypad tap. Never fails: a bad evaluation shows up as
    /// [`ERROR_TOKEN`] on the display.
    pub fn apply_event(&mut self, event: InputEvent) {
        log::debug!("applying {event}");
        match event {
            InputEvent::Digit(d) => self.push_digit(d),
            InputEvent::Point => self.push_point(),
            InputEvent::Operator(op) => self.push_operator(op),
            InputEvent::Equals => self.evaluate(),
            InputEvent::Clear => self.clear(),
            InputEvent::ToggleSign => self.transform(|value| -value),
            InputEvent::Percent => self.transform(|value| value / Decimal::ONE_HUNDRED),
        }
    }

    /// The primary display line.
    pub fn display_expression(&self) -> String {
        if self.last_result == Some(Outcome::Error) {
            ERROR_TOKEN.to_string()
        } else if self.expression.is_empty() {
            self.entry.clone()
        } else {
            self.expression.to_string()
        }
    }

    /// Up to two `expr=result` lines, most recent first.
    pub fn display_history(&self) -> Vec<String> {
        self.history.to_vec()
    }

    pub fn screen(&self) -> Screen {
        Screen {
            expression: self.display_expression(),
            history: self.display_history(),
        }
    }

    pub fn current_entry(&self) -> &str {
        &self.entry
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn active_operator(&self) -> Option<Operator> {
        self.active_operator
    }

    pub fn previous_operand(&self) -> Option<&str> {
        self.previous_operand.as_deref()
    }

    pub fn last_result(&self) -> Option<Outcome> {
        self.last_result
    }

    fn in_result_mode(&self) -> bool {
        self.last_result.is_some()
    }

    fn in_error(&self) -> bool {
        self.last_result == Some(Outcome::Error)
    }

    fn push_digit(&mut self, d: Digit) {
        if self.entry.len() >= MAX_ENTRY_LEN {
            log::warn!("entry {} is full, ignoring digit {d}", self.entry);
            return;
        }

        let digit = d.as_char();
        if self.in_result_mode() {
            self.start_fresh(digit.to_string());
            return;
        }

        if self.entry == "0" {
            self.entry = digit.to_string();
        } else {
            self.entry.push(digit);
        }
        self.expression.set_trailing_operand(Operand::new(self.entry.clone()));
    }

    fn push_point(&mut self) {
        if self.entry.contains('.') {
            return;
        }

        if self.in_result_mode() {
            self.start_fresh("0.".to_string());
            return;
        }

        // Right after an operator the entry is "0" with no operand token yet.
        self.entry.push('.');
        self.expression.set_trailing_operand(Operand::new(self.entry.clone()));
    }

    fn push_operator(&mut self, op: Operator) {
        if self.in_error() {
            log::warn!("ignoring operator {op} after a failed evaluation");
            return;
        }

        if self.expression.is_empty() {
            self.expression.set_trailing_operand(Operand::new(self.entry.clone()));
        }
        self.expression.push_operator(op);

        self.active_operator = Some(op);
        self.previous_operand = Some(std::mem::replace(&mut self.entry, "0".to_string()));
        self.last_result = None;
    }

    fn evaluate(&mut self) {
        if self.expression.is_empty() {
            return;
        }

        let source = self.expression.to_string();
        let result = match self.expression.evaluate() {
            Ok(value) => {
                let result = Operand::from_value(value);
                self.entry = result.to_string();
                self.expression = Expression::from_operand(result);
                self.last_result = Some(Outcome::Value(value));
                self.entry.clone()
            }
            Err(e) => {
                log::warn!("evaluating {source} failed: {e}");
                self.entry = ERROR_TOKEN.to_string();
                self.expression = Expression::new();
                self.last_result = Some(Outcome::Error);
                ERROR_TOKEN.to_string()
            }
        };

        self.history.record(&source, &result);
        self.active_operator = None;
        self.previous_operand = None;
    }

    fn clear(&mut self) {
        self.entry = "0".to_string();
        self.expression = Expression::new();
        self.active_operator = None;
        self.previous_operand = None;
        self.last_result = None;
    }

    /// Rewrites the value under edit, or the last result when there is one.
    /// Text that does not parse as a number counts as zero.
    fn transform(&mut self, f: impl Fn(Decimal) -> Decimal) {
        if let Some(outcome) = self.last_result {
            let value = f(outcome.value_or_zero());
            let result = Operand::from_value(value);
            self.entry = result.to_string();
            self.expression = Expression::from_operand(result);
            self.last_result = Some(Outcome::Value(value));
            return;
        }

        let value = operand::parse_value(&self.entry).unwrap_or(Decimal::ZERO);
        self.entry = operand::format_value(f(value));
        self.expression.set_trailing_operand(Operand::new(self.entry.clone()));
    }

    fn start_fresh(&mut self, entry: String) {
        self.expression = Expression::from_operand(Operand::new(entry.clone()));
        self.entry = entry;
        self.active_operator = None;
        self.previous_operand = None;
        self.last_result = None;
    }
}
