use std::cell::Cell;

use calculator_sdk::CalculatorError;

/// Status reported when the last call on this thread succeeded.
pub const STATUS_OK: i32 = 0;

thread_local! {
    static LAST_STATUS: Cell<i32> = const { Cell::new(STATUS_OK) };
}

pub fn record(result: Result<i32, CalculatorError>) -> i32 {
    match result {
        Ok(value) => {
            LAST_STATUS.set(STATUS_OK);
            value
        }
        Err(err) => {
            tracing::warn!(error = %err, status = err.status_code(), "calculator call failed");
            LAST_STATUS.set(err.status_code());
            0
        }
    }
}

pub fn current() -> i32 {
    LAST_STATUS.get()
}
