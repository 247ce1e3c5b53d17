//! Parsed request model.
//!
//! # Responsibilities
//! - Hold the method, path and headers of one parsed request
//! - Keep the method uppercase (validated on parse, normalized on registration)
//!
//! # Design Decisions
//! - Immutable once built: fields are private, accessors only
//! - Header keys are stored as written; lookups are exact

use std::collections::HashMap;
use std::fmt;

/// An HTTP method token, always non-empty and uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Method(String);

impl Method {
    /// `GET`, the default method for registrations.
    pub fn get() -> Self {
        Self("GET".to_string())
    }

    /// Accept a method exactly as it appears on a request line.
    ///
    /// Returns `None` unless the token is one or more ASCII uppercase letters.
    pub fn from_request_token(token: &str) -> Option<Self> {
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_uppercase()) {
            Some(Self(token.to_string()))
        } else {
            None
        }
    }

    /// Normalize a caller-supplied method (`"get"`, `"Post"`) to uppercase.
    ///
    /// Returns `None` for an empty or blank token.
    pub fn normalize(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            None
        } else {
            Some(Self(token.to_ascii_uppercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Method {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Method {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A parsed request: method, path and headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    path: String,
    headers: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(method: Method, path: String, headers: HashMap<String, String>) -> Self {
        Self {
            method,
            path,
            headers,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The request target, always starting with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Look up a header value by its key as written in the request.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
