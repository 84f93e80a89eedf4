//! Domain layer for calculator module
//!
//! Contains the arithmetic and the load notification.

pub mod service;

pub use service::Service;
