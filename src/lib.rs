//! staticd - Minimal Static File Server
//!
//! Core library for HTTP parsing, safe path resolution, and response
//! composition.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
