//! Owned single-channel f32 image in row-major layout (stride == width).
//!
//! This is the numeric carrier for every stage of the edge pipeline: the
//! luminance input, the padded intermediate, the gradients and the
//! magnitudes. Values are unconstrained in range.
use super::ImageU8;
use crate::error::ConvolveError;

#[derive(Clone, Debug, PartialEq)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, 0.0)
    }

    /// Construct a buffer of size `w × h` with every sample set to `value`.
    pub fn filled(w: usize, h: usize, value: f32) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![value; w * h],
        }
    }

    /// Wrap an existing row-major buffer of exactly `w * h` samples.
    pub fn from_vec(w: usize, h: usize, data: Vec<f32>) -> Result<Self, ConvolveError> {
        if data.len() != w * h {
            return Err(ConvolveError::DimensionMismatch {
                expected: (w, h),
                found: (data.len(), 1),
            });
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Build an image from nested rows, e.g. `&[[0.0, 1.0], [2.0, 3.0]]`.
    ///
    /// Every row must have the same length.
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Self, ConvolveError> {
        let h = rows.len();
        let w = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(w * h);
        for row in rows {
            let row = row.as_ref();
            if row.len() != w {
                return Err(ConvolveError::DimensionMismatch {
                    expected: (w, h),
                    found: (row.len(), h),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(w, h, data)
    }

    /// Convert an 8-bit luminance view, multiplying every sample by `scale`.
    ///
    /// `scale = 1.0` keeps raw `0..255` intensities; `1.0 / 255.0` maps to `[0, 1]`.
    pub fn from_u8(gray: &ImageU8<'_>, scale: f32) -> Self {
        let mut out = ImageF32::new(gray.w, gray.h);
        for y in 0..gray.h {
            let src = gray.row_slice(y);
            let start = y * out.stride;
            for (dst, &px) in out.data[start..start + out.w].iter_mut().zip(src) {
                *dst = px as f32 * scale;
            }
        }
        out
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// `(width, height)` pair, handy for dimension checks and error payloads.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

impl crate::image::traits::ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[f32]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

impl crate::image::traits::ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }

    #[inline]
    fn as_mut_slice(&mut self) -> Option<&mut [f32]> {
        if self.stride == self.w {
            Some(&mut self.data[..self.w * self.h])
        } else {
            None
        }
    }
}
