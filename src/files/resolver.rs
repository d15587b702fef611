//! Safe mapping from request targets to filesystem paths.
//!
//! The document root is the security boundary: every served path must
//! resolve below it. `..` segments are resolved lexically *before* the
//! containment check, otherwise a traversal like `/../../etc/passwd`
//! would slip past a plain string comparison.

use std::io;
use std::path::{Component, Path, PathBuf};

/// The outcome of resolving one request target.
///
/// `Forbidden` is exposed as its own variant even though the dispatcher
/// answers it with 404: the call site owns that policy, not the
/// resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathDecision {
    /// Serve this regular file, provably inside the document root
    File(PathBuf),
    /// Directory requested without a trailing slash; redirect to this
    /// target instead
    Redirect(String),
    /// Nothing exists at the target
    NotFound,
    /// The target resolves outside the document root
    Forbidden,
}

/// Resolves percent-decoded request targets against the document root.
pub struct PathResolver {
    /// Canonical absolute document root; all containment checks compare
    /// against this
    root: PathBuf,
}

impl PathResolver {
    /// Anchors a resolver at `document_root`.
    ///
    /// The root is canonicalized once (it must exist) so that later
    /// checks compare absolute, symlink-free prefixes.
    pub async fn open(document_root: &Path) -> io::Result<Self> {
        let root = tokio::fs::canonicalize(document_root).await?;
        Ok(Self { root })
    }

    /// Decides how to serve `target`, a percent-decoded request target.
    ///
    /// 1. Forbidden when the lexically normalized path leaves the root.
    /// 2. NotFound when nothing exists there.
    /// 3. A regular file with no trailing slash on the target is served.
    /// 4. A directory with a trailing slash retries with `index.html`
    ///    appended; the retried target no longer ends in `/`, so a
    ///    second retry cannot occur even if `index.html` is itself a
    ///    directory.
    /// 5. A directory without a trailing slash redirects to `target/`.
    /// 6. Anything else (e.g. a file requested with a trailing slash)
    ///    is NotFound.
    pub async fn resolve(&self, target: &str) -> PathDecision {
        let mut target = target.to_string();

        loop {
            let candidate = self.absolute(&target);

            if !candidate.starts_with(&self.root) {
                return PathDecision::Forbidden;
            }

            let meta = match tokio::fs::metadata(&candidate).await {
                Ok(meta) => meta,
                Err(_) => return PathDecision::NotFound,
            };

            if meta.is_file() && !target.ends_with('/') {
                return PathDecision::File(candidate);
            }

            if meta.is_dir() {
                if target.ends_with('/') {
                    target.push_str("index.html");
                    continue;
                }
                return PathDecision::Redirect(format!("{}/", target));
            }

            return PathDecision::NotFound;
        }
    }

    /// Joins `target` onto the root and resolves `.`/`..` segments
    /// lexically, without touching the filesystem. The result may lie
    /// outside the root; that is exactly what the containment check in
    /// `resolve` looks for.
    fn absolute(&self, target: &str) -> PathBuf {
        let mut out = self.root.clone();

        for component in Path::new(target).components() {
            match component {
                Component::Normal(part) => out.push(part),
                Component::ParentDir => {
                    // PathBuf::pop stops at the filesystem root, the
                    // same clamping an OS abspath performs.
                    out.pop();
                }
                // The target is rooted at the document root, so a
                // leading `/` (and any `.`) contributes nothing.
                Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
            }
        }

        out
    }
}
