//! Gradient pairs and their Euclidean magnitude.
//!
//! - Convolves the X and Y kernels of one operator with the input, keeping
//!   the engine's edge-replication border.
//! - Magnitude is `sqrt(gx^2 + gy^2)` per pixel, without normalisation or
//!   clipping; mapping to a display range is left to the caller.
use crate::convolve::{convolve, convolve_separable, ensure_same_dims};
use crate::error::Result;
use crate::image::ImageF32;

use super::operators::GradientOperator;

use serde::{Deserialize, Serialize};

/// How a gradient kernel is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConvolutionStrategy {
    /// Dense `k × k` window per pixel; the reference definition.
    #[default]
    Direct,
    /// Row pass then column pass using the operator's rank-1 factors.
    Separable,
}

/// Horizontal and vertical responses of one operator.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientPair {
    /// Horizontal derivative (convolution with kernel X)
    pub gx: ImageF32,
    /// Vertical derivative (convolution with kernel Y)
    pub gy: ImageF32,
}

impl GradientPair {
    pub fn magnitude(&self) -> Result<ImageF32> {
        magnitude(&self.gx, &self.gy)
    }
}

/// Convolve `image` with both kernels of `operator`.
pub fn gradient_pair(
    image: &ImageF32,
    operator: GradientOperator,
    strategy: ConvolutionStrategy,
) -> Result<GradientPair> {
    let (gx, gy) = match strategy {
        ConvolutionStrategy::Direct => {
            let (kx, ky) = operator.dense();
            (convolve(image, &kx)?, convolve(image, &ky)?)
        }
        ConvolutionStrategy::Separable => {
            let (kx, ky) = operator.separable();
            (
                convolve_separable(image, &kx)?,
                convolve_separable(image, &ky)?,
            )
        }
    };
    Ok(GradientPair { gx, gy })
}

/// Elementwise `sqrt(gx^2 + gy^2)`.
pub fn magnitude(gx: &ImageF32, gy: &ImageF32) -> Result<ImageF32> {
    ensure_same_dims(gx, gy)?;
    let mut mag = ImageF32::new(gx.w, gx.h);
    for y in 0..gx.h {
        let start = y * mag.stride;
        let out = &mut mag.data[start..start + mag.w];
        let gx_row = &gx.data[y * gx.stride..y * gx.stride + gx.w];
        let gy_row = &gy.data[y * gy.stride..y * gy.stride + gy.w];
        for ((m, &sx), &sy) in out.iter_mut().zip(gx_row).zip(gy_row) {
            *m = (sx * sx + sy * sy).sqrt();
        }
    }
    Ok(mag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvolveError;

    fn step_right(w: usize, h: usize, at: usize, value: f32) -> ImageF32 {
        let mut img = ImageF32::new(w, h);
        for y in 0..h {
            for x in at..w {
                img.set(x, y, value);
            }
        }
        img
    }

    #[test]
    fn horizontal_step_gives_positive_gx() {
        let img = step_right(20, 10, 10, 100.0);
        let pair = gradient_pair(&img, GradientOperator::Sobel, ConvolutionStrategy::Direct).unwrap();
        // Column 10 sees 0 on the left and 100 on the right: 4 * 100.
        assert_eq!(pair.gx.get(10, 5), 400.0);
        assert_eq!(pair.gx.get(9, 5), 400.0);
        assert_eq!(pair.gx.get(5, 5), 0.0);
        assert!(pair.gy.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn prewitt_step_response() {
        let img = step_right(8, 4, 4, 1.0);
        let pair =
            gradient_pair(&img, GradientOperator::Prewitt, ConvolutionStrategy::Direct).unwrap();
        assert_eq!(pair.gx.get(4, 2), 3.0);
        assert_eq!(pair.gx.get(0, 0), 0.0);
    }

    #[test]
    fn magnitude_of_three_four_is_five() {
        let gx = ImageF32::filled(2, 2, 3.0);
        let gy = ImageF32::filled(2, 2, -4.0);
        let mag = magnitude(&gx, &gy).unwrap();
        assert!(mag.data.iter().all(|&v| v == 5.0));
    }

    #[test]
    fn magnitude_rejects_mismatched_pair() {
        let gx = ImageF32::new(3, 2);
        let gy = ImageF32::new(2, 3);
        assert_eq!(
            magnitude(&gx, &gy),
            Err(ConvolveError::DimensionMismatch {
                expected: (3, 2),
                found: (2, 3)
            })
        );
    }

    #[test]
    fn strategies_agree() {
        let mut img = ImageF32::new(9, 7);
        for y in 0..7 {
            for x in 0..9 {
                img.set(x, y, ((x * 7 + y * 13) % 11) as f32);
            }
        }
        for op in GradientOperator::ALL {
            let direct = gradient_pair(&img, op, ConvolutionStrategy::Direct).unwrap();
            let fast = gradient_pair(&img, op, ConvolutionStrategy::Separable).unwrap();
            for (a, b) in direct.gx.data.iter().zip(&fast.gx.data) {
                assert!((a - b).abs() < 1e-4);
            }
            for (a, b) in direct.gy.data.iter().zip(&fast.gy.data) {
                assert!((a - b).abs() < 1e-4);
            }
        }
    }
}
