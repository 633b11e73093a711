//! Error types for the screen preview pipeline

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for preview operations
pub type Result<T> = std::result::Result<T, PreviewError>;

/// Everything that can go wrong while producing a preview.
///
/// The thumbnail loader never lets these escape: each one is recorded in
/// [`crate::state::Diagnostics`] and the preview keeps showing its placeholder.
#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("No primary display surface available")]
    NoDisplaySurface,

    #[error("Display `{display}` has no background image")]
    NoBackgroundImage { display: String },

    #[error("Failed to decode {}: {source}", .path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image {width}x{height} has no drawable representation at width {target_width}")]
    NoDrawableRepresentation {
        width: u32,
        height: u32,
        target_width: u32,
    },

    #[error("Background task failed: {0}")]
    Join(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for PreviewError {
    fn from(err: serde_json::Error) -> Self {
        PreviewError::Config(err.to_string())
    }
}

impl From<tokio::task::JoinError> for PreviewError {
    fn from(err: tokio::task::JoinError) -> Self {
        PreviewError::Join(err.to_string())
    }
}
