//! MIME type detection based on file extensions.

use std::path::Path;

/// Returns the MIME type for a path's extension, or `None` when the
/// extension is unrecognized. The caller decides the fallback (the GET
/// handler uses `text/html`).
pub fn guess_content_type(path: &Path) -> Option<&'static str> {
    mime_guess::from_path(path).first_raw()
}
