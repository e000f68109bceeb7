use std::path::PathBuf;
use thiserror::Error;

/// The main error type for gridwarp operations.
#[derive(Debug, Error)]
pub enum WarpError {
    #[error("Invalid geometry: {message}")]
    InvalidGeometry { message: String },

    #[error(
        "Lattice dimensions differ: source is {}x{}, destination is {}x{}",
        .src.0, .src.1, .dst.0, .dst.1
    )]
    DimensionMismatch {
        src: (usize, usize),
        dst: (usize, usize),
    },

    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    #[error("Image error for {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to serialize mesh as JSON: {0}")]
    MeshJson(#[from] serde_json::Error),
}

impl WarpError {
    pub(crate) fn geometry(message: impl Into<String>) -> Self {
        WarpError::InvalidGeometry {
            message: message.into(),
        }
    }

    pub(crate) fn parameter(message: impl Into<String>) -> Self {
        WarpError::InvalidParameter {
            message: message.into(),
        }
    }
}
