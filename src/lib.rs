//! Minimal HTTP/1.1 request dispatcher library.
//!
//! Parses raw request text, matches it against an immutable table of
//! (path, method) handlers, and serializes a plain-text response. A thin
//! sequential accept loop drives it over TCP.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod render;
pub mod routing;

pub use config::ServerConfig;
pub use http::{HttpServer, Request};
pub use lifecycle::Shutdown;
pub use render::render;
pub use routing::{HandlerResult, Router, RoutingTable};
