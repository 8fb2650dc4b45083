use thiserror::Error;

/// Errors raised by the pivot calculator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PivotError {
    /// The inputs are outside the calculator's domain: a previous close that
    /// is zero, negative or not finite, or a non-finite current price.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
