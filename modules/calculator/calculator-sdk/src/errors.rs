//! Error types for the calculator SDK.

use thiserror::Error;

use crate::Operation;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("attempted to divide by zero")]
    DivisionByZero,

    #[error("arithmetic overflow in {operation}")]
    Overflow { operation: Operation },

    #[error("unknown operation: {0}")]
    UnknownOperation(String),
}

impl CalculatorError {
    #[must_use]
    pub fn overflow(operation: Operation) -> Self {
        Self::Overflow { operation }
    }

    #[must_use]
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation(name.into())
    }

    /// Status code reported across the C boundary. `0` is reserved for success.
    #[must_use]
    pub fn status_code(&self) -> i32 {
        match self {
            Self::DivisionByZero => 1,
            Self::Overflow { .. } => 2,
            Self::UnknownOperation(_) => 3,
        }
    }
}
