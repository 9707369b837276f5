//! Convolution kernels.
//!
//! A [`Kernel`] is any `height × width` grid of coefficients; the engine only
//! accepts square kernels with an odd side, and [`Kernel::side`] is the single
//! place that check lives. A [`SeparableKernel`] stores a rank-1 kernel as its
//! column and row taps so it can be applied in two 1D passes.

use crate::error::{ConvolveError, Result};

/// Fixed-size square kernel, as used for the gradient operator constants.
pub type Kernel3 = [[f32; 3]; 3];

/// Row-major grid of kernel coefficients.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl Kernel {
    /// Wrap `data` (row-major, `width * height` coefficients).
    ///
    /// Shape validity is *not* checked here so that callers can describe any
    /// grid; the engine rejects unusable shapes with `InvalidKernelShape`.
    pub fn new(data: Vec<f32>, width: usize, height: usize) -> Result<Self> {
        if data.len() != width * height {
            return Err(ConvolveError::KernelDataLength {
                expected: width * height,
                found: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a kernel from a fixed-size array of rows.
    pub fn from_array<const H: usize, const W: usize>(rows: &[[f32; W]; H]) -> Self {
        Self {
            width: W,
            height: H,
            data: rows.iter().flatten().copied().collect(),
        }
    }

    /// `k × k` kernel with every coefficient set to `value`.
    pub fn filled(side: usize, value: f32) -> Self {
        Self {
            width: side,
            height: side,
            data: vec![value; side * side],
        }
    }

    /// The 1×1 identity kernel `[1.0]`.
    pub fn identity() -> Self {
        Self::filled(1, 1.0)
    }

    /// Normalised `side × side` box filter.
    pub fn box_filter(side: usize) -> Self {
        let n = (side * side).max(1) as f32;
        Self::filled(side, 1.0 / n)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn coefficients(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }

    /// Side length of a square, odd kernel.
    pub fn side(&self) -> Result<usize> {
        if self.width != self.height || self.width % 2 == 0 {
            return Err(ConvolveError::InvalidKernelShape {
                height: self.height,
                width: self.width,
            });
        }
        Ok(self.width)
    }

    /// Padding needed on each side: `side / 2`.
    pub fn radius(&self) -> Result<usize> {
        self.side().map(|k| k / 2)
    }
}

impl From<&Kernel3> for Kernel {
    fn from(rows: &Kernel3) -> Self {
        Kernel::from_array(rows)
    }
}

/// Rank-1 kernel `K[r][c] = col[r] * row[c]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SeparableKernel {
    /// Horizontal taps, left to right.
    pub row: Vec<f32>,
    /// Vertical taps, top to bottom.
    pub col: Vec<f32>,
}

impl SeparableKernel {
    pub fn new(row: impl Into<Vec<f32>>, col: impl Into<Vec<f32>>) -> Self {
        Self {
            row: row.into(),
            col: col.into(),
        }
    }

    /// Side length of the composed kernel. Both tap vectors must share an odd length.
    pub fn side(&self) -> Result<usize> {
        let (w, h) = (self.row.len(), self.col.len());
        if w != h || w % 2 == 0 {
            return Err(ConvolveError::InvalidKernelShape {
                height: h,
                width: w,
            });
        }
        Ok(w)
    }

    /// Outer product `col * row^T` as a dense kernel.
    pub fn to_kernel(&self) -> Kernel {
        let data = self
            .col
            .iter()
            .flat_map(|&c| self.row.iter().map(move |&r| c * r))
            .collect();
        Kernel {
            width: self.row.len(),
            height: self.col.len(),
            data,
        }
    }
}
