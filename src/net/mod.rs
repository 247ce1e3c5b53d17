//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → listener.rs (bind with reuse, sequential accept loop)
//!     → connection.rs (one read, handle, write, close)
//!     → back to accept
//! ```
//!
//! # Design Decisions
//! - One connection at a time; no per-connection tasks
//! - Fixed read budget per connection
//! - Each connection tagged with an ID for tracing

pub mod connection;
pub mod listener;
