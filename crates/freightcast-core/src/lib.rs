//! Freightcast Core - Domain models, errors, and configuration
//!
//! This crate contains the shared domain types for the freight pricing engine:
//! quote records, training rows, prediction results, the error taxonomy and the
//! layered configuration consumed by the API and CLI adapters.

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{FreightError, Result};
