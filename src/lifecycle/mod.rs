//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Apply overrides → Validate → Bind listener
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Release listener → Exit
//!
//! Signals (signals.rs):
//!     Ctrl+C / SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: configuration and bind errors are fatal
//! - The connection in flight finishes before the loop stops

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
