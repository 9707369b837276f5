//! Error types for the convolution core and the tooling around it.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvolveError>;

/// Failures raised by the convolution engine and the gradient pipeline.
///
/// Every variant is detected before any output sample is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConvolveError {
    /// Kernel is not square or its side length is even.
    #[error("invalid kernel shape {height}×{width}: expected a square kernel with odd side")]
    InvalidKernelShape { height: usize, width: usize },

    /// Two buffers that must share dimensions do not. Dimensions are `(width, height)`.
    #[error("dimension mismatch: expected {}×{}, found {}×{}", .expected.0, .expected.1, .found.0, .found.1)]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// Input image has no pixels.
    #[error("empty image {width}×{height}")]
    EmptyImage { width: usize, height: usize },

    /// Coefficient buffer length does not match the declared kernel shape.
    #[error("kernel data holds {found} coefficients, shape requires {expected}")]
    KernelDataLength { expected: usize, found: usize },
}

/// Failures of the loader adapter and the `edge_maps` tool.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Convolve(#[from] ConvolveError),

    #[error("{0}")]
    Usage(String),
}

impl ToolError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        ToolError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
