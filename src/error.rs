//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Per-file variants (`InvalidImage`, `UnsupportedFormat`, `Encode`) are skipped by the
//! batch driver; path-level variants (`PathNotFound`, `NoImagesFound`) abort the run.
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::SUPPORTED_EXTENSIONS;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid image {}: {reason}", label(.path))]
    InvalidImage { path: PathBuf, reason: String },

    #[error(
        "Unsupported format: {} (expected one of {})",
        .path.display(),
        SUPPORTED_EXTENSIONS.join(", ")
    )]
    UnsupportedFormat { path: PathBuf },

    #[error("Input path does not exist: {}", .path.display())]
    PathNotFound { path: PathBuf },

    #[error("No supported images found in: {}", .path.display())]
    NoImagesFound { path: PathBuf },

    #[error("Failed to encode {}: {source}", label(.path))]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// In-memory buffers carry an empty path until a caller attaches one.
fn label(path: &Path) -> String {
    if path.as_os_str().is_empty() {
        "<in-memory image>".to_string()
    } else {
        path.display().to_string()
    }
}

impl Error {
    /// Errors that abort a batch instead of skipping one file.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::PathNotFound { .. } | Error::NoImagesFound { .. } | Error::InvalidArgument { .. }
        )
    }

    pub fn invalid_image<E: std::fmt::Display>(path: &Path, e: E) -> Self {
        Error::InvalidImage {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    }

    /// Attach `path` to per-file errors raised on in-memory buffers.
    pub fn with_path(self, path: &Path) -> Self {
        match self {
            Error::InvalidImage { path: p, reason } if p.as_os_str().is_empty() => {
                Error::InvalidImage {
                    path: path.to_path_buf(),
                    reason,
                }
            }
            Error::Encode { path: p, source } if p.as_os_str().is_empty() => Error::Encode {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }
}
