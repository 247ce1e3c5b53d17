//! Response assembly.
//!
//! # Responsibilities
//! - Map status codes to their reason phrases
//! - Produce the fallback documents for 404, 405 and 500
//! - Serialize a status line plus body into response text
//!
//! # Design Decisions
//! - Wire format is `HTTP/1.1 <code> <reason>\n\n<body>`
//! - No response headers are emitted (no Content-Length, no Content-Type)
//! - Reason phrases come from a fixed table unless a custom one is set

use std::fmt;

/// Status codes the dispatcher can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    NotFound,
    MethodNotAllowed,
    InternalServerError,
}

impl Status {
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::NotFound => 404,
            Status::MethodNotAllowed => 405,
            Status::InternalServerError => 500,
        }
    }

    /// Default reason phrase for the status line.
    pub fn reason(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::NotFound => "Not found",
            Status::MethodNotAllowed => "method not allowed",
            Status::InternalServerError => "Internal Server Error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

/// A response ready to be written back to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: Status,
    reason: Option<String>,
    body: String,
}

impl Response {
    pub fn new(status: Status, body: impl Into<String>) -> Self {
        Self {
            status,
            reason: None,
            body: body.into(),
        }
    }

    /// Replace the table reason phrase with a custom one.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// The status line followed by the blank separator line.
    pub fn head(&self) -> String {
        let reason = self.reason.as_deref().unwrap_or(self.status.reason());
        format!("HTTP/1.1 {} {}\n\n", self.status.code(), reason)
    }

    /// Full response text: head then body.
    pub fn into_text(self) -> String {
        let mut text = self.head();
        text.push_str(&self.body);
        text
    }
}

/// Body for a path with no registered route.
pub fn not_found() -> Response {
    Response::new(Status::NotFound, "<h1>404</h1><p>Page Not Found</p>")
}

/// Body for a registered path requested with the wrong method.
///
/// `note` names what the method is not allowed for; `this page` when omitted.
pub fn method_not_allowed(note: Option<&str>) -> Response {
    let note = note.unwrap_or("this page");
    Response::new(
        Status::MethodNotAllowed,
        format!("<h1>405</h1><p>Method not allowed for {note}</p>"),
    )
}

/// Body for a handler that failed or panicked.
pub fn internal_error() -> Response {
    Response::new(
        Status::InternalServerError,
        "<h1>500</h1><p>Internal Server Error</p>",
    )
}
