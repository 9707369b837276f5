//! Image containers used by the convolution engine and the gradient pipeline.
//!
//! - [`ImageF32`]: owned row-major float buffer; input, intermediate and output
//!   of every numeric stage.
//! - [`ImageU8`]: borrowed 8-bit luminance view as handed over by a decoder.
//! - [`io`]: loader adapter and JSON writer used by the command-line tool.

pub mod f32;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::ImageU8;
