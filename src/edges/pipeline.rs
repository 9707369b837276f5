//! Sobel + Prewitt edge maps from one luminance image.
//!
//! Four convolutions (X and Y for each family) followed by two magnitude
//! passes. The pipeline holds only its options; kernels are the constants in
//! [`super::operators`].
use super::grad::{gradient_pair, ConvolutionStrategy, GradientPair};
use super::operators::GradientOperator;
use crate::diagnostics::{EdgeReport, InputDescriptor, MapSummary, TimingBreakdown};
use crate::error::Result;
use crate::image::ImageF32;

use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Knobs for [`GradientPipeline`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Direct window convolution (default) or the separable fast path.
    pub strategy: ConvolutionStrategy,
}

/// The six grids produced for one input, all with the input's dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeMaps {
    pub sobel_gx: ImageF32,
    pub sobel_gy: ImageF32,
    pub sobel_mag: ImageF32,
    pub prewitt_gx: ImageF32,
    pub prewitt_gy: ImageF32,
    pub prewitt_mag: ImageF32,
}

impl EdgeMaps {
    /// `(gx, gy)` of one family.
    pub fn gradients(&self, operator: GradientOperator) -> (&ImageF32, &ImageF32) {
        match operator {
            GradientOperator::Sobel => (&self.sobel_gx, &self.sobel_gy),
            GradientOperator::Prewitt => (&self.prewitt_gx, &self.prewitt_gy),
        }
    }

    pub fn magnitude(&self, operator: GradientOperator) -> &ImageF32 {
        match operator {
            GradientOperator::Sobel => &self.sobel_mag,
            GradientOperator::Prewitt => &self.prewitt_mag,
        }
    }

    /// All maps with stable labels, in output order.
    pub fn named(&self) -> [(&'static str, &ImageF32); 6] {
        [
            ("sobelGx", &self.sobel_gx),
            ("sobelGy", &self.sobel_gy),
            ("sobelMag", &self.sobel_mag),
            ("prewittGx", &self.prewitt_gx),
            ("prewittGy", &self.prewitt_gy),
            ("prewittMag", &self.prewitt_mag),
        ]
    }
}

/// Stateless Sobel/Prewitt edge-map pipeline.
#[derive(Clone, Debug, Default)]
pub struct GradientPipeline {
    options: PipelineOptions,
}

impl GradientPipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Compute all six maps.
    pub fn compute(&self, image: &ImageF32) -> Result<EdgeMaps> {
        let mut timings = TimingBreakdown::default();
        self.run(image, &mut timings)
    }

    /// Compute all six maps plus a serialisable report with timings and
    /// per-map statistics.
    pub fn compute_with_diagnostics(&self, image: &ImageF32) -> Result<(EdgeMaps, EdgeReport)> {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let maps = self.run(image, &mut timings)?;

        let stats_start = Instant::now();
        let summaries = maps
            .named()
            .iter()
            .map(|(name, img)| MapSummary::new(*name, img))
            .collect();
        timings.push("stats", elapsed_ms(stats_start));
        timings.total_ms = elapsed_ms(total_start);

        let report = EdgeReport {
            input: InputDescriptor {
                width: image.w,
                height: image.h,
                strategy: self.options.strategy,
            },
            timings,
            maps: summaries,
        };
        Ok((maps, report))
    }

    fn run(&self, image: &ImageF32, timings: &mut TimingBreakdown) -> Result<EdgeMaps> {
        let (sobel, sobel_mag) = self.family(image, GradientOperator::Sobel, timings)?;
        let (prewitt, prewitt_mag) = self.family(image, GradientOperator::Prewitt, timings)?;
        Ok(EdgeMaps {
            sobel_gx: sobel.gx,
            sobel_gy: sobel.gy,
            sobel_mag,
            prewitt_gx: prewitt.gx,
            prewitt_gy: prewitt.gy,
            prewitt_mag,
        })
    }

    fn family(
        &self,
        image: &ImageF32,
        operator: GradientOperator,
        timings: &mut TimingBreakdown,
    ) -> Result<(GradientPair, ImageF32)> {
        let grad_start = Instant::now();
        let pair = gradient_pair(image, operator, self.options.strategy)?;
        let grad_ms = elapsed_ms(grad_start);

        let mag_start = Instant::now();
        let mag = pair.magnitude()?;
        let mag_ms = elapsed_ms(mag_start);

        debug!(
            "GradientPipeline {operator}: {}x{} gradients {:.3} ms, magnitude {:.3} ms ({:?})",
            image.w, image.h, grad_ms, mag_ms, self.options.strategy
        );
        timings.push(format!("{operator}.gradients"), grad_ms);
        timings.push(format!("{operator}.magnitude"), mag_ms);
        Ok((pair, mag))
    }
}

/// Compute the six edge maps with default options.
pub fn compute_edges(image: &ImageF32) -> Result<EdgeMaps> {
    GradientPipeline::default().compute(image)
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
