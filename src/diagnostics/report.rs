use super::stats::MapStats;
use super::timing::TimingBreakdown;
use crate::edges::ConvolutionStrategy;
use crate::image::ImageF32;

use serde::{Deserialize, Serialize};

/// Result of [`GradientPipeline::compute_with_diagnostics`](crate::GradientPipeline).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeReport {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub maps: Vec<MapSummary>,
}

impl EdgeReport {
    pub fn map(&self, name: &str) -> Option<&MapSummary> {
        self.maps.iter().find(|m| m.name == name)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub strategy: ConvolutionStrategy,
}

/// Statistics of one named output map.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSummary {
    pub name: String,
    pub stats: MapStats,
}

impl MapSummary {
    pub fn new(name: impl Into<String>, image: &ImageF32) -> Self {
        Self {
            name: name.into(),
            stats: MapStats::from_image(image),
        }
    }
}
