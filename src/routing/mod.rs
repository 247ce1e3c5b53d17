//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route registration (at startup):
//!     builder.add(path, method, handler)...
//!     → table.rs (uppercase methods, last write wins)
//!     → Freeze as immutable RoutingTable
//!
//! Incoming Request (method, path)
//!     → router.rs (exact path lookup)
//!     → Matched | NotFound | MethodMismatch
//!     → response text
//! ```
//!
//! # Design Decisions
//! - Routes built at startup, immutable at runtime
//! - Exact path match; no patterns, no normalization
//! - Deterministic: same input always yields the same response

pub mod router;
pub mod table;

pub use router::{Resolution, Router};
pub use table::{Handler, HandlerError, HandlerResult, RouteEntry, RoutingError, RoutingTable, RoutingTableBuilder};
