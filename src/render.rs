//! File rendering helper for handlers.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A file could not be read as UTF-8 text.
#[derive(Debug, Error)]
#[error("failed to render {path}: {source}")]
pub struct RenderError {
    path: PathBuf,
    #[source]
    source: std::io::Error,
}

impl RenderError {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Read the whole file at `path` for use as a response body.
pub fn render(path: impl AsRef<Path>) -> Result<String, RenderError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| RenderError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_file_contents() {
        let path = std::env::temp_dir().join(format!("http-dispatch-render-{}.html", std::process::id()));
        fs::write(&path, "<h1>hi</h1>").unwrap();

        let body = render(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(body, "<h1>hi</h1>");
    }

    #[test]
    fn missing_file_names_path() {
        let err = render("/nonexistent/page.html").unwrap_err();
        assert_eq!(err.path(), Path::new("/nonexistent/page.html"));
        assert!(err.to_string().contains("/nonexistent/page.html"));
    }
}
