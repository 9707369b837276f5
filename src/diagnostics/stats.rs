//! Summary statistics of a float map.
use crate::image::{ImageF32, ImageView};

use serde::{Deserialize, Serialize};

/// Range and mean of one map. `min`/`max` describe the raw, unnormalised values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapStats {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
}

impl MapStats {
    /// Scan every pixel once. An empty image yields all zeros.
    pub fn from_image(image: &ImageF32) -> Self {
        let count = image.w * image.h;
        if count == 0 {
            return Self {
                min: 0.0,
                max: 0.0,
                mean: 0.0,
            };
        }
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        // f64 accumulator keeps the mean stable on large frames.
        let mut sum = 0.0f64;
        for row in image.rows() {
            for &v in row {
                min = min.min(v);
                max = max.max(v);
                sum += v as f64;
            }
        }
        Self {
            min,
            max,
            mean: (sum / count as f64) as f32,
        }
    }
}
