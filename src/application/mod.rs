//! Application layer containing the calculator session.
//!
//! This module defines the `ExpressionEngine`, the single owner of calculator
//! state. The UI forwards taps to it one at a time and renders its display
//! accessors; there is no other shared state.

pub mod engine;
