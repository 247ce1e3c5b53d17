//! Request dispatch.
//!
//! # Responsibilities
//! - Parse raw request text
//! - Resolve the request against the routing table
//! - Invoke the matched handler or a fallback and assemble the response
//!
//! # Design Decisions
//! - Stateless across calls; the table is immutable after construction
//! - Resolution is an explicit three-way outcome, not fallback objects
//! - Unparseable requests are answered as Not Found
//! - Handler errors become 500 responses at the entry point

use crate::http::parser::{self, ParseError};
use crate::http::request::{Method, Request};
use crate::http::response::{self, Response, Status};
use crate::routing::table::{HandlerError, RouteEntry, RoutingTable};

/// Outcome of looking a request up in the table.
#[derive(Debug)]
pub enum Resolution<'a> {
    /// Path and method both match.
    Matched(&'a RouteEntry),
    /// No entry for the path.
    NotFound,
    /// The path exists but only accepts `allowed`.
    MethodMismatch { allowed: &'a Method },
}

/// Dispatches raw requests against a frozen [`RoutingTable`].
#[derive(Debug, Clone)]
pub struct Router {
    table: RoutingTable,
}

impl Router {
    pub fn new(table: RoutingTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RoutingTable {
        &self.table
    }

    /// Decide how a parsed request should be answered.
    pub fn resolve(&self, request: &Request) -> Resolution<'_> {
        match self.table.get(request.path()) {
            None => Resolution::NotFound,
            Some(entry) if entry.method() != request.method() => Resolution::MethodMismatch {
                allowed: entry.method(),
            },
            Some(entry) => Resolution::Matched(entry),
        }
    }

    /// Build the response for a parsed request, surfacing handler failures.
    pub fn respond(&self, request: &Request) -> Result<Response, HandlerError> {
        let response = match self.resolve(request) {
            Resolution::Matched(entry) => Response::new(Status::Ok, entry.call(request)?),
            Resolution::NotFound => response::not_found(),
            Resolution::MethodMismatch { allowed } => {
                tracing::debug!(
                    method = %request.method(),
                    path = %request.path(),
                    allowed = %allowed,
                    "Method not allowed"
                );
                response::method_not_allowed(None)
            }
        };
        Ok(response)
    }

    /// Dispatch raw request text, returning handler failures to the caller.
    pub fn try_dispatch(&self, raw: &str) -> Result<String, HandlerError> {
        let request = match parser::parse(raw) {
            Ok(request) => request,
            Err(e) => return Ok(malformed(&e).into_text()),
        };

        let response = self.respond(&request)?;

        tracing::info!(
            method = %request.method(),
            path = %request.path(),
            status = response.status().code(),
            "Request dispatched"
        );

        Ok(response.into_text())
    }

    /// Dispatch raw request text. Handler failures become a 500 response.
    pub fn dispatch(&self, raw: &str) -> String {
        self.try_dispatch(raw).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Handler failed");
            response::internal_error().into_text()
        })
    }

    /// Bytes-in, bytes-out entry point for the connection loop.
    ///
    /// Input is decoded as UTF-8, replacing invalid sequences.
    pub fn handle(&self, bytes: &[u8]) -> Vec<u8> {
        let raw = String::from_utf8_lossy(bytes);
        self.dispatch(&raw).into_bytes()
    }
}

fn malformed(err: &ParseError) -> Response {
    tracing::debug!(error = %err, "Malformed request, answering as not found");
    response::not_found()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::table::HandlerResult;
    use std::io;

    fn hello(_req: &Request) -> HandlerResult {
        Ok("hello".to_string())
    }

    fn router() -> Router {
        let table = RoutingTable::builder()
            .get("/", hello)
            .route("/a", "get", |_req: &Request| -> HandlerResult { Ok("a".into()) })
            .route("/host", "GET", |req: &Request| -> HandlerResult {
                Ok(req.header("Host").unwrap_or("none").to_string())
            })
            .route("/broken", "GET", |_req: &Request| -> HandlerResult {
                Err(io::Error::new(io::ErrorKind::NotFound, "missing.html").into())
            })
            .build()
            .unwrap();
        Router::new(table)
    }

    #[test]
    fn matched_route_returns_200() {
        let out = router().dispatch("GET /a HTTP/1.1\r\n\r\n");
        assert!(out.starts_with("HTTP/1.1 200"));
        assert!(out.ends_with("\n\na"));
    }

    #[test]
    fn wrong_method_returns_405() {
        let out = router().dispatch("POST /a HTTP/1.1\r\n\r\n");
        assert!(out.starts_with("HTTP/1.1 405"));
    }

    #[test]
    fn unknown_path_returns_404() {
        let out = router().dispatch("GET /missing HTTP/1.1\r\n\r\n");
        assert_eq!(out, "HTTP/1.1 404 Not found\n\n<h1>404</h1><p>Page Not Found</p>");
    }

    #[test]
    fn exact_response_for_root() {
        let out = router().dispatch("GET / HTTP/1.1\nHost: x\n\n");
        assert_eq!(out, "HTTP/1.1 200 OK\n\nhello");
    }

    #[test]
    fn delete_on_root_is_405() {
        let out = router().dispatch("DELETE / HTTP/1.1\nHost: x\n\n");
        assert!(out.starts_with("HTTP/1.1 405 method not allowed\n\n<h1>405</h1>"));
    }

    #[test]
    fn handler_sees_headers() {
        let out = router().dispatch("GET /host HTTP/1.1\nHost: example.org\n\n");
        assert_eq!(out, "HTTP/1.1 200 OK\n\nexample.org");
    }

    #[test]
    fn malformed_request_is_not_found() {
        let router = router();
        assert!(router.dispatch("").starts_with("HTTP/1.1 404"));
        assert!(router.dispatch("garbage\r\n\r\n").starts_with("HTTP/1.1 404"));
        assert!(router.dispatch("get / HTTP/1.1\r\n\r\n").starts_with("HTTP/1.1 404"));
    }

    #[test]
    fn handler_failure_is_500() {
        let router = router();
        assert!(router.try_dispatch("GET /broken HTTP/1.1\n\n").is_err());
        assert!(router
            .dispatch("GET /broken HTTP/1.1\n\n")
            .starts_with("HTTP/1.1 500 Internal Server Error\n\n"));
    }

    #[test]
    fn resolution_outcomes() {
        let router = router();
        let get_a = parser::parse("GET /a HTTP/1.1\n\n").unwrap();
        let put_a = parser::parse("PUT /a HTTP/1.1\n\n").unwrap();
        let get_z = parser::parse("GET /z HTTP/1.1\n\n").unwrap();

        assert!(matches!(router.resolve(&get_a), Resolution::Matched(_)));
        assert!(matches!(router.resolve(&get_z), Resolution::NotFound));
        match router.resolve(&put_a) {
            Resolution::MethodMismatch { allowed } => assert_eq!(allowed, "GET"),
            other => panic!("unexpected resolution: {other:?}"),
        }
    }

    #[test]
    fn repeated_dispatch_is_identical() {
        let router = router();
        let raw = "GET /host HTTP/1.1\r\nHost: a\r\n\r\n";
        assert_eq!(router.dispatch(raw), router.dispatch(raw));
        assert_eq!(router.handle(raw.as_bytes()), router.handle(raw.as_bytes()));
    }

    #[test]
    fn handle_decodes_invalid_utf8_lossily() {
        let mut bytes = b"GET / HTTP/1.1\nX-Bin: ".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe]);
        bytes.extend_from_slice(b"\n\n");

        let out = router().handle(&bytes);
        assert_eq!(out, b"HTTP/1.1 200 OK\n\nhello".to_vec());
    }
}
