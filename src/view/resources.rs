//! Web resource provider
//!
//! Serves the bundled front-end files to the browser view. A missing file is
//! reported as not-found, never as an editor error.

use std::fs;
use std::path::{Path, PathBuf};

/// Root URL the browser view loads when no dev server is configured.
pub const RESOURCE_ROOT: &str = "oxide://ui/";

/// One resolved resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub data: Vec<u8>,
    pub mime_type: &'static str,
}

/// Resolves URL paths against the bundled web-asset directory.
pub struct ResourceProvider {
    root: PathBuf,
}

impl ResourceProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a requested URL path to file bytes plus a MIME type.
    ///
    /// `/` and the empty path resolve to `index.html`. Paths escaping the
    /// resource root and unreadable files resolve to `None`.
    pub fn fetch(&self, url_path: &str) -> Option<Resource> {
        let trimmed = url_path.trim_start_matches('/');
        let rel = if trimmed.is_empty() {
            "index.html"
        } else {
            trimmed
        };

        if rel.split('/').any(|segment| segment == "..") {
            log::warn!("resource request escapes root: {}", url_path);
            return None;
        }

        let file = self.root.join(rel);
        let data = fs::read(&file).ok()?;
        Some(Resource {
            data,
            mime_type: mime_for(rel),
        })
    }
}

/// MIME type for a resource path, by file extension.
pub fn mime_for(path: &str) -> &'static str {
    match Path::new(path).extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_table_by_extension() {
        assert_eq!(mime_for("index.html"), "text/html");
        assert_eq!(mime_for("app/main.css"), "text/css");
        assert_eq!(mime_for("bundle.js"), "application/javascript");
        assert_eq!(mime_for("presets.json"), "application/json");
        assert_eq!(mime_for("knob.png"), "image/png");
        assert_eq!(mime_for("logo.svg"), "image/svg+xml");
        assert_eq!(mime_for("mono.woff2"), "font/woff2");
        assert_eq!(mime_for("data.bin"), "application/octet-stream");
        assert_eq!(mime_for("no_extension"), "application/octet-stream");
    }
}
