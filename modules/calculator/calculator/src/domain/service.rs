//! Domain service for calculator
//!
//! Contains the core arithmetic and the load notification.

use calculator_sdk::{CalculatorApi, CalculatorError, EntryParam, Operation};
use tracing::{debug, info};

/// Domain service that performs the calculator operations.
///
/// Stateless; a single instance can be shared across threads or a fresh one
/// created per call.
#[derive(Clone, Debug, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CalculatorApi for Service {
    fn load(&self, param: &str) {
        info!("The parameter string was {param}.");

        if let Some(entry) = EntryParam::parse(param) {
            debug!(address = %entry, "decoded host entry parameter");
        } else {
            debug!(len = param.len(), "host parameter is opaque");
        }
    }

    fn add(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "performing addition");
        a.wrapping_add(b)
    }

    fn subtract(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "performing subtraction");
        b.wrapping_sub(a)
    }

    fn multiply(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "performing multiplication");
        a.wrapping_mul(b)
    }

    fn divide(&self, a: i32, b: i32) -> Result<i32, CalculatorError> {
        debug!(a, b, "performing division");
        if b == 0 {
            return Err(CalculatorError::DivisionByZero);
        }
        a.checked_div(b)
            .ok_or_else(|| CalculatorError::overflow(Operation::Divide))
    }
}
