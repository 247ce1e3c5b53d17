//! Request text parsing.
//!
//! # Responsibilities
//! - Tokenize the request line into method and path
//! - Collect `Key: Value` header lines from the head section
//!
//! # Design Decisions
//! - Best effort, not a full HTTP/1.1 grammar
//! - The request line is the first non-empty line, split on whitespace
//! - Header parsing stops at the blank line; bodies are never read
//! - Lines that do not look like headers are skipped, not rejected

use std::collections::HashMap;
use thiserror::Error;

use crate::http::request::{Method, Request};

/// Reasons a request line could not be recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("request contains no request line")]
    Empty,

    #[error("request line has {0} tokens, expected 2 or 3")]
    TokenCount(usize),

    #[error("invalid method token: {0:?}")]
    InvalidMethod(String),

    #[error("request target must start with '/': {0:?}")]
    InvalidPath(String),

    #[error("unrecognized protocol version: {0:?}")]
    InvalidVersion(String),
}

/// Parse raw request text into a [`Request`].
pub fn parse(raw: &str) -> Result<Request, ParseError> {
    let mut lines = raw.split_inclusive('\n');

    let request_line = lines
        .by_ref()
        .map(trim_line_ending)
        .find(|line| !line.trim().is_empty())
        .ok_or(ParseError::Empty)?;

    let (method, path) = parse_request_line(request_line)?;

    let mut headers = HashMap::new();
    for line in lines {
        // An unterminated final line is a truncated read, not a header.
        if !line.ends_with('\n') {
            break;
        }
        let line = trim_line_ending(line);
        if line.is_empty() {
            break;
        }
        if let Some((key, value)) = parse_header_line(line) {
            headers.insert(key.to_string(), value.to_string());
        }
    }

    Ok(Request::new(method, path.to_string(), headers))
}

fn parse_request_line(line: &str) -> Result<(Method, &str), ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let (method, path, version) = match tokens.as_slice() {
        [method, path] => (*method, *path, None),
        [method, path, version] => (*method, *path, Some(*version)),
        other => return Err(ParseError::TokenCount(other.len())),
    };

    let method = Method::from_request_token(method)
        .ok_or_else(|| ParseError::InvalidMethod(method.to_string()))?;

    if !path.starts_with('/') {
        return Err(ParseError::InvalidPath(path.to_string()));
    }

    if let Some(version) = version {
        if !version.starts_with("HTTP/") {
            return Err(ParseError::InvalidVersion(version.to_string()));
        }
    }

    Ok((method, path))
}

/// Split a line containing `": "` on its first colon.
/// Requires a non-empty key and value.
fn parse_header_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if !line.contains(": ") {
        return None;
    }
    let (key, rest) = line.split_once(':')?;
    let value = rest.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_method_and_path() {
        let req = parse("GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n").unwrap();
        assert_eq!(req.method(), "GET");
        assert_eq!(req.path(), "/index.html");
    }

    #[test]
    fn accepts_bare_newlines_and_two_token_lines() {
        let req = parse("DELETE /items/7\n\n").unwrap();
        assert_eq!(req.method(), "DELETE");
        assert_eq!(req.path(), "/items/7");
        assert!(req.headers().is_empty());
    }

    #[test]
    fn skips_leading_blank_lines() {
        let req = parse("\r\n\r\nPOST /submit HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(req.method(), "POST");
        assert_eq!(req.path(), "/submit");
    }

    #[test]
    fn collects_trimmed_headers() {
        let raw = "GET / HTTP/1.1\r\nHost:  x  \r\nAccept: text/html\r\nUser-Agent: curl/8.0\r\n\r\n";
        let req = parse(raw).unwrap();

        assert_eq!(req.header("Host"), Some("x"));
        assert_eq!(req.header("Accept"), Some("text/html"));
        assert_eq!(req.header("User-Agent"), Some("curl/8.0"));
        assert_eq!(req.headers().len(), 3);
    }

    #[test]
    fn header_value_keeps_later_colons() {
        let req = parse("GET / HTTP/1.1\nHost: localhost:8080\n\n").unwrap();
        assert_eq!(req.header("Host"), Some("localhost:8080"));
    }

    #[test]
    fn splits_on_first_colon_when_colon_space_comes_later() {
        let req = parse("GET / HTTP/1.1\nX-Time:12: 30\n\n").unwrap();
        assert_eq!(req.header("X-Time"), Some("12: 30"));
    }

    #[test]
    fn duplicate_header_last_wins() {
        let req = parse("GET / HTTP/1.1\nX-Tag: one\nX-Tag: two\n\n").unwrap();
        assert_eq!(req.header("X-Tag"), Some("two"));
    }

    #[test]
    fn ignores_lines_without_colon_space() {
        let raw = "GET / HTTP/1.1\nnot a header\nX-Empty:\nX-Tight:value\nHost: x\n\n";
        let req = parse(raw).unwrap();

        assert_eq!(req.headers().len(), 1);
        assert_eq!(req.header("Host"), Some("x"));
    }

    #[test]
    fn body_lines_are_not_headers() {
        let req = parse("GET / HTTP/1.1\nHost: x\n\nKey: in-body\n").unwrap();
        assert_eq!(req.header("Key"), None);
    }

    #[test]
    fn unterminated_header_is_ignored() {
        let req = parse("GET / HTTP/1.1\nHost: x\nAccept: tru").unwrap();
        assert_eq!(req.header("Host"), Some("x"));
        assert_eq!(req.header("Accept"), None);
    }

    #[test]
    fn rejects_malformed_request_lines() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse("\r\n\r\n"), Err(ParseError::Empty));
        assert_eq!(parse("GET\r\n"), Err(ParseError::TokenCount(1)));
        assert_eq!(
            parse("GET / HTTP/1.1 extra\r\n"),
            Err(ParseError::TokenCount(4))
        );
        assert_eq!(
            parse("get / HTTP/1.1\r\n"),
            Err(ParseError::InvalidMethod("get".into()))
        );
        assert_eq!(
            parse("GET index HTTP/1.1\r\n"),
            Err(ParseError::InvalidPath("index".into()))
        );
        assert_eq!(
            parse("GET / SPDY/3\r\n"),
            Err(ParseError::InvalidVersion("SPDY/3".into()))
        );
    }
}
