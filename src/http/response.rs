use std::time::SystemTime;

use crate::config::Config;

/// HTTP status codes supported by the server.
///
/// Every response the server can produce uses one of these codes:
/// - `Ok` (200): File served
/// - `MovedPermanently` (301): Directory requested without a trailing slash
/// - `BadRequest` (400): Malformed request line
/// - `Forbidden` (403): File exists but could not be read
/// - `NotFound` (404): Missing file, or a target outside the document root
/// - `MethodNotAllowed` (405): Anything other than GET
/// - `InternalServerError` (500): Reserved; no current code path emits it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 301 Moved Permanently
    MovedPermanently,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::MovedPermanently => 301,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::MovedPermanently => "Moved Permanently",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// Response headers with insertion order preserved on output.
///
/// Keys have map semantics: setting an existing key replaces its value
/// in place (last write wins) without changing its position. Lookup is
/// exact-case, matching how keys are written on the wire.
#[derive(Debug, Clone, Default)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a header, or replaces the value of an existing key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Represents a complete HTTP response ready to be serialized.
///
/// Contains the HTTP status code, the full header block, and the body.
/// The body is never empty: when no payload was supplied the builder
/// substitutes a synthetic status page.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers in output order
    pub headers: Headers,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Builder for composing HTTP responses in a fluent style.
///
/// `build` applies the default header block (`Date`, `Server`,
/// `Content-Type: text/html`, `Connection: close`) and merges the extra
/// headers last, so extras win on key collision.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/css")
///     .body(file_bytes)
///     .build(&cfg);
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    extra_headers: Headers,
    body: Option<Vec<u8>>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            extra_headers: Headers::new(),
            body: None,
        }
    }

    /// Adds or replaces an extra header.
    ///
    /// Extra headers are merged after the defaults, so this is also how
    /// callers override `Content-Type`.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.set(key, value);
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the final Response.
    ///
    /// Header block, in insertion order: `Date` (RFC-1123 GMT), `Server`,
    /// `Content-Type: text/html`, `Connection: close`, then the extra
    /// headers (winning on collision), then `Content-Length` computed
    /// from the final body. A missing body is replaced with
    /// `<h1><code> <reason></h1>` so every response is self-describing.
    pub fn build(self, cfg: &Config) -> Response {
        let ResponseBuilder {
            status,
            extra_headers,
            body,
        } = self;

        let mut headers = Headers::new();
        headers.set("Date", httpdate::fmt_http_date(SystemTime::now()));
        headers.set("Server", cfg.server_name.as_str());
        headers.set("Content-Type", "text/html");
        headers.set("Connection", "close");

        for (key, value) in extra_headers.iter() {
            headers.set(key, value);
        }

        let body = body.unwrap_or_else(|| {
            format!("<h1>{} {}</h1>", status.as_u16(), status.reason_phrase()).into_bytes()
        });

        headers.set("Content-Length", body.len().to_string());

        Response {
            status,
            headers,
            body,
        }
    }
}

impl Response {
    /// Creates a response whose body is the synthetic status page for
    /// the given code (e.g. `<h1>404 Not Found</h1>`).
    pub fn from_status(status: StatusCode, cfg: &Config) -> Self {
        ResponseBuilder::new(status).build(cfg)
    }
}
