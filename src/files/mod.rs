//! Static file serving.
//!
//! This module decides how a request target maps onto the document
//! root: which file to serve, when to redirect, and when a target must
//! be refused because it points outside the root.

pub mod resolver;

pub use resolver::{PathDecision, PathResolver};
