//! Freightcast Store - Record store port and adapters
//!
//! This crate defines the port for manually entered same-day quotes and
//! provides a JSON-file adapter and an in-memory adapter, plus the loader for
//! the historical quote sheet.

pub mod history;
pub mod json;
pub mod memory;
pub mod ports;

mod ops;

pub use history::load_history;
pub use json::JsonRecordStore;
pub use memory::MemoryRecordStore;
pub use ports::RecordStore;
