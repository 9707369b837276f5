//! The fixed gradient operators: Sobel and Prewitt, X and Y.
//!
//! X kernels respond to intensity increasing to the right, Y kernels to
//! intensity increasing downward. Both families are rank-1:
//!
//! ```text
//! Sobel_x   = [1, 2, 1]^T * [-1, 0, 1]      Sobel_y   = [-1, 0, 1]^T * [1, 2, 1]
//! Prewitt_x = [1, 1, 1]^T * [-1, 0, 1]      Prewitt_y = [-1, 0, 1]^T * [1, 1, 1]
//! ```
use crate::kernel::{Kernel, Kernel3, SeparableKernel};

use serde::{Deserialize, Serialize};

pub const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
pub const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

pub const PREWITT_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-1.0, 0.0, 1.0], [-1.0, 0.0, 1.0]];
pub const PREWITT_KERNEL_Y: Kernel3 = [[-1.0, -1.0, -1.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];

const DERIV_TAPS: [f32; 3] = [-1.0, 0.0, 1.0];
const SOBEL_SMOOTH_TAPS: [f32; 3] = [1.0, 2.0, 1.0];
const PREWITT_SMOOTH_TAPS: [f32; 3] = [1.0, 1.0, 1.0];

/// Gradient kernel family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientOperator {
    Sobel,
    Prewitt,
}

impl GradientOperator {
    pub const ALL: [GradientOperator; 2] = [GradientOperator::Sobel, GradientOperator::Prewitt];

    /// `(X, Y)` kernel constants.
    pub const fn kernels(self) -> (&'static Kernel3, &'static Kernel3) {
        match self {
            GradientOperator::Sobel => (&SOBEL_KERNEL_X, &SOBEL_KERNEL_Y),
            GradientOperator::Prewitt => (&PREWITT_KERNEL_X, &PREWITT_KERNEL_Y),
        }
    }

    /// `(X, Y)` kernels as engine inputs.
    pub fn dense(self) -> (Kernel, Kernel) {
        let (kx, ky) = self.kernels();
        (Kernel::from(kx), Kernel::from(ky))
    }

    /// `(X, Y)` kernels factored into row and column taps.
    pub fn separable(self) -> (SeparableKernel, SeparableKernel) {
        let smooth = match self {
            GradientOperator::Sobel => SOBEL_SMOOTH_TAPS,
            GradientOperator::Prewitt => PREWITT_SMOOTH_TAPS,
        };
        (
            SeparableKernel::new(DERIV_TAPS, smooth),
            SeparableKernel::new(smooth, DERIV_TAPS),
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            GradientOperator::Sobel => "sobel",
            GradientOperator::Prewitt => "prewitt",
        }
    }
}

impl std::fmt::Display for GradientOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
