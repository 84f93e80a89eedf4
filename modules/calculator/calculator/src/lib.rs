//! Calculator Module
//!
//! A trivial fixture that a hooking host loads into a target process to prove
//! library code can be reached: one `Load` notification and four integer
//! operations.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core arithmetic and the load notification
//!
//! Native hosts use the `calculator-ffi` crate, which exports the service
//! through the C ABI.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod domain;

pub use calculator_sdk::{CalculatorApi, CalculatorError, EntryParam, Operation};
pub use domain::Service;
