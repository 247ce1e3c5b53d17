//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured `tracing` events with fields, not formatted strings
//! - `RUST_LOG` wins over the configured filter

pub mod logging;
