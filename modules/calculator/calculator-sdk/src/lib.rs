//! Calculator SDK
//!
//! This crate provides everything needed to drive the calculator fixture:
//! - API trait (`CalculatorApi`)
//! - Error type (`CalculatorError`)
//! - Exported function names (`Operation`)
//! - Entry parameter codec (`EntryParam`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorApi, Operation};
//!
//! let op: Operation = "Divide".parse()?;
//! let quotient = api.call(op, 20, 4)?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::CalculatorApi;

mod errors;
pub use errors::CalculatorError;

mod operation;
pub use operation::Operation;

mod entry_param;
pub use entry_param::EntryParam;

/// Assembly name a host resolves the fixture by.
pub const ASSEMBLY_NAME: &str = "Calculator";

/// Fully qualified type name that carries the entry point.
pub const TYPE_NAME: &str = "Calculator.Calculator";

/// Name of the load-notification entry point.
pub const LOAD_ENTRY_POINT: &str = "Load";
