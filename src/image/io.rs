//! Loader adapter and JSON output for the command-line tool.
//!
//! - `load_grayscale_image`: read a PNG/JPEG into an owned 8-bit luma buffer.
//! - `load_luminance`: same, converted to `ImageF32` with a chosen scale.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! Nothing in the convolution core depends on this module.
use super::{ImageF32, ImageU8};
use crate::error::ToolError;

use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given tightly packed bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

/// Load an image from disk and convert to 8-bit luminance.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, ToolError> {
    let img = image::open(path)?.into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(GrayImageU8::new(width, height, img.into_raw()))
}

/// Load an image as float luminance.
///
/// With `normalize == false` samples keep their raw `0..255` values; with
/// `normalize == true` they are mapped to `[0, 1]`.
pub fn load_luminance(path: &Path, normalize: bool) -> Result<ImageF32, ToolError> {
    let gray = load_grayscale_image(path)?;
    let scale = if normalize { 1.0 / 255.0 } else { 1.0 };
    Ok(ImageF32::from_u8(&gray.as_view(), scale))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), ToolError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|e| ToolError::io(path, e))
}

fn ensure_parent_dir(path: &Path) -> Result<(), ToolError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ToolError::io(parent, e))?;
        }
    }
    Ok(())
}
