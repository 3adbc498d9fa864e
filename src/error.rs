use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),
    #[error("Not a decimal digit: {0}")]
    InvalidDigit(u8),
    #[error("Evaluation error: {0}")]
    EvaluationError(#[from] EvaluationError),
}

/// Why an expression could not be reduced to a number.
///
/// The engine never surfaces this to its caller; it only decides that the
/// screen shows the error token instead of a result.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum EvaluationError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("numeric overflow")]
    Overflow,
    #[error("malformed expression: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;
