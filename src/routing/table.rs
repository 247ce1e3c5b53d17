//! Routing table and its builder.
//!
//! # Responsibilities
//! - Bind a path to one accepted method and one handler
//! - Normalize registered methods to uppercase
//! - Reject entries that would break table invariants at build time
//!
//! # Design Decisions
//! - Exact path match only: no wildcards, no trailing-slash folding
//! - Registering a path again replaces the previous entry
//! - Built once at startup, never mutated afterwards

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::http::request::{Method, Request};

/// Error a handler may return. Any `Error + Send + Sync` converts with `?`.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// What a handler produces: the response body, or a failure.
pub type HandlerResult = Result<String, HandlerError>;

/// Functions that can serve a matched request.
pub trait Handler: Fn(&Request) -> HandlerResult + Send + Sync + 'static {}

impl<H> Handler for H where H: Fn(&Request) -> HandlerResult + Send + Sync + 'static {}

/// Error returned when the table cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    #[error("route path must not be empty")]
    EmptyPath,

    #[error("route {path:?} has an empty method")]
    EmptyMethod { path: String },
}

/// The accepted method and handler bound to one path.
#[derive(Clone)]
pub struct RouteEntry {
    method: Method,
    handler: Arc<dyn Handler>,
}

impl RouteEntry {
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Run the bound handler.
    pub fn call(&self, request: &Request) -> HandlerResult {
        (self.handler)(request)
    }
}

impl fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("method", &self.method)
            .finish_non_exhaustive()
    }
}

/// Immutable map from exact path to [`RouteEntry`].
#[derive(Debug, Clone, Default)]
pub struct RoutingTable {
    routes: HashMap<String, RouteEntry>,
}

impl RoutingTable {
    pub fn builder() -> RoutingTableBuilder {
        RoutingTableBuilder::default()
    }

    /// Look up the entry registered for exactly this path.
    pub fn get(&self, path: &str) -> Option<&RouteEntry> {
        self.routes.get(path)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Collects registrations until [`RoutingTableBuilder::build`].
#[derive(Default)]
pub struct RoutingTableBuilder {
    pending: Vec<(String, String, Arc<dyn Handler>)>,
}

impl RoutingTableBuilder {
    /// Register `handler` for `path` under `method`. The method is uppercased.
    pub fn add<H: Handler>(&mut self, path: impl Into<String>, method: &str, handler: H) -> &mut Self {
        let handler: Arc<dyn Handler> = Arc::new(handler);
        self.pending.push((path.into(), method.to_string(), handler));
        self
    }

    /// Consuming form of [`add`](Self::add) for chained construction.
    #[must_use]
    pub fn route<H: Handler>(mut self, path: impl Into<String>, method: &str, handler: H) -> Self {
        self.add(path, method, handler);
        self
    }

    /// Register `handler` for `path` with the default `GET` method.
    #[must_use]
    pub fn get<H: Handler>(self, path: impl Into<String>, handler: H) -> Self {
        self.route(path, Method::get().as_str(), handler)
    }

    /// Register a copy of `handler` and hand the original back to the caller.
    pub fn register<H: Handler + Clone>(&mut self, path: impl Into<String>, method: &str, handler: H) -> H {
        self.add(path, method, handler.clone());
        handler
    }

    /// Freeze the registrations. Later registrations of a path win.
    pub fn build(self) -> Result<RoutingTable, RoutingError> {
        let mut routes = HashMap::with_capacity(self.pending.len());

        for (path, method, handler) in self.pending {
            if path.is_empty() {
                return Err(RoutingError::EmptyPath);
            }
            let method =
                Method::normalize(&method).ok_or_else(|| RoutingError::EmptyMethod { path: path.clone() })?;

            if routes.contains_key(&path) {
                tracing::debug!(path = %path, "Route re-registered, replacing previous entry");
            }
            routes.insert(path, RouteEntry { method, handler });
        }

        Ok(RoutingTable { routes })
    }
}
