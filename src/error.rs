//! Error types for the renderer and exporter

use thiserror::Error;

/// Result type alias for renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or exporting the page
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to lay out or rasterize the page
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Failed to fetch or decode referenced image content
    #[error("Image capture failed: {0}")]
    Capture(String),

    /// Failed to encode the raster as an image
    #[error("Image encoding failed: {0}")]
    Encode(String),

    /// Failed to assemble or serialize the PDF document
    #[error("PDF assembly failed: {0}")]
    Pdf(String),

    /// An export was triggered while another one was still running
    #[error("An export is already in flight")]
    ExportInFlight,

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Filesystem error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
