//! Calculator C ABI
//!
//! Builds the fixture as a shared library a native host can inject and call.
//! Exported symbols keep the plain names hosts look up:
//!
//! | Symbol | Signature |
//! |---|---|
//! | `Load` | `void Load(const char *param)` |
//! | `Add` | `int Add(int a, int b)` |
//! | `Subtract` | `int Subtract(int a, int b)` (returns `b - a`) |
//! | `Multiply` | `int Multiply(int a, int b)` |
//! | `Divide` | `int Divide(int a, int b)` |
//! | `CalculatorLastError` | `int CalculatorLastError(void)` |
//!
//! `Divide` returns `0` on failure; the reason is read with
//! `CalculatorLastError` on the same thread.

#![deny(rust_2018_idioms)]

mod diagnostics;
mod exports;
mod status;

pub use diagnostics::LOG_ENV;
pub use exports::{add, divide, last_error, load, multiply, subtract};
pub use status::STATUS_OK;
