//! Icon generation errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while rendering or writing icons
#[derive(Debug, Error)]
pub enum IconError {
    #[error("{capability} is not available in this build")]
    MissingCapability { capability: &'static str },

    #[error("Invalid icon size: {0}")]
    InvalidSize(u32),

    #[error("Failed to create {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
