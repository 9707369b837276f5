//! Edge-strength maps from fixed gradient operators.
//!
//! - [`operators`]: Sobel and Prewitt kernel constants and their separable
//!   factors.
//! - [`grad`]: one operator's `(gx, gy)` pair and the Euclidean magnitude.
//! - [`pipeline`]: the full Sobel + Prewitt run returning six grids.
//!
//! Borders follow the convolution engine: edge replication, never zeros.

pub mod grad;
pub mod operators;
pub mod pipeline;

pub use grad::{gradient_pair, magnitude, ConvolutionStrategy, GradientPair};
pub use operators::{
    GradientOperator, PREWITT_KERNEL_X, PREWITT_KERNEL_Y, SOBEL_KERNEL_X, SOBEL_KERNEL_Y,
};
pub use pipeline::{compute_edges, EdgeMaps, GradientPipeline, PipelineOptions};
