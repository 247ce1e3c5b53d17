//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! raw request text
//!     → parser.rs (request line tokenizer, header lines)
//!     → request.rs (immutable Request)
//!     → [routing layer resolves a handler]
//!     → response.rs (status line + body)
//!     → server.rs hands bytes back to the connection
//! ```

pub mod parser;
pub mod request;
pub mod response;
pub mod server;

pub use parser::{parse, ParseError};
pub use request::{Method, Request};
pub use response::{Response, Status};
pub use server::HttpServer;
