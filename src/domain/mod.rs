//! Domain layer: the value objects the keypad engine is built from.
//!
//! Nothing here holds session state; `ExpressionEngine` in the application
//! layer owns that.

pub mod event;
pub mod expression;
pub mod history;
pub mod operand;
pub mod operator;
pub mod screen;
