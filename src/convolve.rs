//! 2D convolution with edge-replication padding.
//!
//! The engine pads the input by `k / 2` pixels on every side, replicating the
//! nearest edge sample (corners replicate the corner pixel), then slides the
//! `k × k` kernel over the padded buffer. Output pixel `(x, y)` is the sum of
//! the kernel coefficients times the padded window covering rows `y..y+k` and
//! columns `x..x+k`. The kernel is not flipped.
//!
//! - Output always has the input's dimensions.
//! - Accumulation is plain `f32` in row-major kernel order; no clamping and no
//!   rounding, so gradient kernels may produce negative or large values.
//! - Zero padding is never used: it would darken the borders of gradient maps.
//!
//! With the `parallel` feature enabled, output rows are distributed over the
//! rayon pool. Every row is written by exactly one worker and all workers
//! read the same immutable padded image, so results are bit-identical to the
//! serial path.
//!
//! [`convolve_separable`] is a two-pass fast path for rank-1 kernels (Sobel
//! and Prewitt both are). It clamps indices instead of materialising a padded
//! buffer, which is equivalent for edge replication.
//!
//! Complexity: `O(w·h·k²)` for the direct path, `O(w·h·2k)` for the separable one.
use crate::error::{ConvolveError, Result};
use crate::image::{ImageF32, ImageView, ImageViewMut};
use crate::kernel::{Kernel, SeparableKernel};

use log::trace;

/// Convolve `image` with a square, odd `kernel` into a newly allocated image.
pub fn convolve(image: &ImageF32, kernel: &Kernel) -> Result<ImageF32> {
    kernel.side()?;
    ensure_non_empty(image)?;
    let mut out = ImageF32::new(image.w, image.h);
    convolve_into(image, kernel, &mut out)?;
    Ok(out)
}

/// Convolve into a caller-provided buffer of the same dimensions as `image`.
///
/// The buffer is left untouched when any precondition fails.
pub fn convolve_into(image: &ImageF32, kernel: &Kernel, out: &mut ImageF32) -> Result<()> {
    let k = kernel.side()?;
    ensure_non_empty(image)?;
    ensure_same_dims(image, out)?;

    trace!(
        "convolve: {}x{} image, {}x{} kernel",
        image.w,
        image.h,
        k,
        k
    );

    let padded = pad_replicate(image, k / 2)?;
    let coeffs = kernel.coefficients();
    for_each_output_row(out, |y, dst| correlate_row(&padded, coeffs, k, y, dst));
    Ok(())
}

/// Extend `image` by `radius` pixels on each side, replicating edge samples.
pub fn pad_replicate(image: &ImageF32, radius: usize) -> Result<ImageF32> {
    ensure_non_empty(image)?;
    let (w, h) = image.dims();
    let mut padded = ImageF32::new(w + 2 * radius, h + 2 * radius);
    for py in 0..padded.h {
        let sy = py.saturating_sub(radius).min(h - 1);
        let src = image.row(sy);
        let dst = padded.row_mut(py);
        let (left, rest) = dst.split_at_mut(radius);
        let (middle, right) = rest.split_at_mut(w);
        left.fill(src[0]);
        middle.copy_from_slice(src);
        right.fill(src[w - 1]);
    }
    Ok(padded)
}

/// Two-pass convolution with a rank-1 kernel: horizontal taps, then vertical taps.
///
/// Matches `convolve(image, &kernel.to_kernel())` up to floating-point
/// reassociation.
pub fn convolve_separable(image: &ImageF32, kernel: &SeparableKernel) -> Result<ImageF32> {
    let k = kernel.side()?;
    ensure_non_empty(image)?;
    trace!(
        "convolve_separable: {}x{} image, {} taps",
        image.w,
        image.h,
        k
    );

    let radius = k / 2;
    let mut horiz = ImageF32::new(image.w, image.h);
    for_each_output_row(&mut horiz, |y, dst| {
        filter_row(image.row(y), &kernel.row, radius, dst)
    });

    let mut out = ImageF32::new(image.w, image.h);
    let max_y = image.h - 1;
    for_each_output_row(&mut out, |y, dst| {
        dst.fill(0.0);
        for (i, &tap) in kernel.col.iter().enumerate() {
            let sy = (y + i).saturating_sub(radius).min(max_y);
            for (d, &s) in dst.iter_mut().zip(horiz.row(sy)) {
                *d += tap * s;
            }
        }
    });
    Ok(out)
}

/// Reject inputs with no pixels.
pub(crate) fn ensure_non_empty(image: &ImageF32) -> Result<()> {
    if image.is_empty() {
        return Err(ConvolveError::EmptyImage {
            width: image.w,
            height: image.h,
        });
    }
    Ok(())
}

pub(crate) fn ensure_same_dims(expected: &ImageF32, found: &ImageF32) -> Result<()> {
    if expected.dims() != found.dims() {
        return Err(ConvolveError::DimensionMismatch {
            expected: expected.dims(),
            found: found.dims(),
        });
    }
    Ok(())
}

/// One output row of the direct path: row `y` reads padded rows `y..y+k`.
#[inline]
fn correlate_row(padded: &ImageF32, coeffs: &[f32], k: usize, y: usize, dst: &mut [f32]) {
    for (x, out_px) in dst.iter_mut().enumerate() {
        let mut acc = 0.0f32;
        for (ky, k_row) in coeffs.chunks_exact(k).enumerate() {
            let window = &padded.row(y + ky)[x..x + k];
            for (&sample, &weight) in window.iter().zip(k_row) {
                acc += sample * weight;
            }
        }
        *out_px = acc;
    }
}

/// Horizontal 1D pass with clamped (replicated) borders.
#[inline]
fn filter_row(src: &[f32], taps: &[f32], radius: usize, dst: &mut [f32]) {
    let max_x = src.len() - 1;
    for (x, out_px) in dst.iter_mut().enumerate() {
        let mut acc = 0.0f32;
        for (i, &tap) in taps.iter().enumerate() {
            let sx = (x + i).saturating_sub(radius).min(max_x);
            acc += tap * src[sx];
        }
        *out_px = acc;
    }
}

/// Run `f(y, row)` for every output row, in parallel when the feature is on.
#[cfg(feature = "parallel")]
fn for_each_output_row<F>(out: &mut ImageF32, f: F)
where
    F: Fn(usize, &mut [f32]) + Sync + Send,
{
    use rayon::prelude::*;

    let (w, h, stride) = (out.w, out.h, out.stride);
    out.data
        .par_chunks_mut(stride)
        .take(h)
        .enumerate()
        .for_each(|(y, row)| f(y, &mut row[..w]));
}

#[cfg(not(feature = "parallel"))]
fn for_each_output_row<F>(out: &mut ImageF32, f: F)
where
    F: Fn(usize, &mut [f32]) + Sync + Send,
{
    let (w, h, stride) = (out.w, out.h, out.stride);
    out.data
        .chunks_mut(stride)
        .take(h)
        .enumerate()
        .for_each(|(y, row)| f(y, &mut row[..w]));
}
