use std::path::PathBuf;

use crate::types;

/// Every way a generate call can fail
///
/// Validation variants (`ImageNotFound`, `UnsupportedImageFormat`,
/// `EmptyImageData`) are raised before any network activity. Nothing is
/// logged or retried; each failure propagates straight to the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not decode response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not read image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("gemini error: {0}")]
    Gemini(types::ErrorDetail),

    #[error("image file not found: {}", .0.display())]
    ImageNotFound(PathBuf),

    #[error("unsupported image format: {0:?} (expected .png, .jpg, .jpeg, or .webp)")]
    UnsupportedImageFormat(String),

    #[error("base64 image data is empty")]
    EmptyImageData,
}
