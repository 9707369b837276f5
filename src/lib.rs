#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod convolve;
pub mod edges;
pub mod error;
pub mod image;
pub mod kernel;

// Tooling around the core: reports and the CLI configuration.
pub mod config;
pub mod diagnostics;

// --- High-level re-exports -------------------------------------------------

// Convolution engine.
pub use crate::convolve::{convolve, convolve_into, convolve_separable, pad_replicate};
pub use crate::kernel::{Kernel, SeparableKernel};

// Gradient pipeline + results.
pub use crate::edges::{compute_edges, EdgeMaps, GradientOperator, GradientPipeline};
pub use crate::error::ConvolveError;
pub use crate::image::ImageF32;

// Diagnostics returned by the pipeline.
pub use crate::diagnostics::EdgeReport;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use edge_maps::prelude::*;
///
/// let img = ImageF32::from_rows(&[[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]).unwrap();
/// let maps = compute_edges(&img).unwrap();
/// assert_eq!(maps.sobel_gy.get(1, 1), 4.0);
/// ```
pub mod prelude {
    pub use crate::image::ImageF32;
    pub use crate::{compute_edges, convolve, ConvolveError, EdgeMaps, GradientPipeline, Kernel};
}
