//! HTTP protocol implementation.
//!
//! This module implements a deliberately small HTTP/1.1 server core:
//! one request per connection, GET only, `Connection: close` on every
//! response.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: Per-connection collaborator; receives the raw
//!   request bytes and writes the finished response
//! - **`parser`**: Parses the request line out of the raw bytes
//! - **`request`**: HTTP request representation
//! - **`response`**: HTTP response representation with builder pattern
//! - **`handler`**: Routes by method and turns a path decision into a
//!   response
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Request lifecycle
//!
//! ```text
//!   receive (chunked read until short read)
//!        │
//!        ▼
//!   parse request line ──── malformed ──→ 400
//!        │
//!        ▼
//!   method switch ───── anything but GET ──→ 405
//!        │
//!        ▼
//!   resolve path against the document root
//!        │
//!        ├─ Forbidden / NotFound ──→ 404
//!        ├─ Redirect ─────────────→ 301 + Location
//!        └─ File ── read ok ──────→ 200 + guessed Content-Type
//!                └─ read failed ──→ 403
//! ```

pub mod connection;
pub mod handler;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;

/// Protocol version token; the server only speaks HTTP/1.1.
pub const HTTP_VERSION: &str = "HTTP/1.1";
