//! Calculator API trait
//!
//! Contract trait for the calculator fixture.

use crate::{CalculatorError, Operation};

/// Calculator API trait
///
/// A load-notification hook and four integer operations. Implementations are
/// stateless; every call is independent.
pub trait CalculatorApi: Send + Sync {
    /// Receive the host's parameter string and write it to the diagnostic sink.
    ///
    /// Any string is accepted, including the empty one.
    fn load(&self, param: &str);

    /// `a` plus `b`, wrapping on overflow.
    fn add(&self, a: i32, b: i32) -> i32;

    /// Subtract `a` from `b`.
    ///
    /// The result is `b - a`, not `a - b`. Hosts already depend on this order.
    fn subtract(&self, a: i32, b: i32) -> i32;

    /// `a` times `b`, wrapping on overflow.
    fn multiply(&self, a: i32, b: i32) -> i32;

    /// `a` divided by `b`, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::DivisionByZero`] when `b == 0` and
    /// [`CalculatorError::Overflow`] for `i32::MIN / -1`.
    fn divide(&self, a: i32, b: i32) -> Result<i32, CalculatorError>;

    /// Invoke an operation by its exported name.
    ///
    /// # Errors
    ///
    /// Propagates the error of the dispatched operation.
    fn call(&self, op: Operation, a: i32, b: i32) -> Result<i32, CalculatorError> {
        match op {
            Operation::Add => Ok(self.add(a, b)),
            Operation::Subtract => Ok(self.subtract(a, b)),
            Operation::Multiply => Ok(self.multiply(a, b)),
            Operation::Divide => self.divide(a, b),
        }
    }
}
