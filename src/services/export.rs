//! Saving results as files.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Kind of file written by [`save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// `.txt`
    PlainText,
    /// `.css`
    Css,
}

impl ContentKind {
    /// File extension without the dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::PlainText => "txt",
            Self::Css => "css",
        }
    }

    /// MIME type of the content.
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::PlainText => "text/plain",
            Self::Css => "text/css",
        }
    }
}

/// Appends the kind's extension unless `path` already ends with it.
pub fn with_extension(path: &Path, kind: ContentKind) -> PathBuf {
    let has_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(kind.extension()));
    if has_extension {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".");
        name.push(kind.extension());
        PathBuf::from(name)
    }
}

/// Writes `content` to `path`, creating parent directories, and returns
/// the final path.
pub fn save(path: &Path, content: &str, kind: ContentKind) -> Result<PathBuf> {
    let path = with_extension(path, kind);
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    fs::write(&path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    info!(path = %path.display(), mime = kind.mime_type(), "result saved");
    Ok(path)
}
