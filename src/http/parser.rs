use crate::http::HTTP_VERSION;
use crate::http::request::{Method, Request};

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The request line is missing, empty, non-UTF-8, or has fewer than
    /// two tokens.
    InvalidRequest,
    /// The method token is syntactically present but not a method the
    /// server knows; answered with 405 rather than 400.
    UnknownMethod,
}

/// Parses one complete raw request into a [`Request`].
///
/// Only the request line matters: split the bytes on CRLF, decode the
/// first line as UTF-8, split on single spaces. The first token is the
/// method, the second the raw target. Every header line is ignored by
/// design; there is no Host validation and no body handling.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    let line_end = find_line_end(buf).unwrap_or(buf.len());
    let request_line =
        std::str::from_utf8(&buf[..line_end]).map_err(|_| ParseError::InvalidRequest)?;

    let mut parts = request_line.split(' ');

    let method_str = parts
        .next()
        .filter(|s| !s.is_empty())
        .ok_or(ParseError::InvalidRequest)?;
    let target = parts
        .next()
        .filter(|s| !s.is_empty())
        .ok_or(ParseError::InvalidRequest)?;

    let method = Method::from_str(method_str).ok_or(ParseError::UnknownMethod)?;

    Ok(Request {
        method,
        target: target.to_string(),
        version: HTTP_VERSION,
    })
}

fn find_line_end(buf: &[u8]) -> Option<usize> {
    buf.windows(2).position(|w| w == b"\r\n")
}
