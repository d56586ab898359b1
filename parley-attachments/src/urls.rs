//! Absolute-URL resolution against the application root.

use url::Url;

use crate::error::ThumbnailError;

/// Resolves application-relative paths against the deployment's root URL.
#[derive(Debug, Clone)]
pub struct UrlResolver {
    root: Url,
}

impl UrlResolver {
    /// `root` must be the deployment root, e.g. `https://chat.example/`.
    pub fn new(root: Url) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Url {
        &self.root
    }

    /// Resolve a path or already-absolute link to a fully-qualified URL.
    pub fn absolute(&self, link: &str) -> Result<Url, url::ParseError> {
        self.root.join(link)
    }

    /// Location of the engine's background worker script, relative to the
    /// application root.
    pub fn worker_script(&self) -> Result<Url, ThumbnailError> {
        self.root
            .join("pdf.worker.min.js")
            .map_err(|e| ThumbnailError::Resolve(e.to_string()))
    }
}
