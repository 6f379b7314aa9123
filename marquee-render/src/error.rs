//! Render errors

use thiserror::Error;

/// Error while producing a ticket artifact
#[derive(Debug, Error)]
pub enum RenderError {
    /// QR encoding failed (payload too large for the symbol)
    #[error("QR encoding failed: {0}")]
    Qr(String),

    /// Snapshot composition failed
    #[error("Rasterization failed: {0}")]
    Raster(String),

    /// Bitmap encode/decode failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Payload serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing the artifact failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;
