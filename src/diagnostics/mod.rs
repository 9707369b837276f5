//! Diagnostics data model returned alongside the edge maps.
//!
//! `EdgeReport` bundles the input description, per-stage timings and the
//! range/mean of every output map. Everything serialises to camelCase JSON so
//! the command-line tool can dump it as-is.

pub mod report;
pub mod stats;
pub mod timing;

pub use report::{EdgeReport, InputDescriptor, MapSummary};
pub use stats::MapStats;
pub use timing::{StageTiming, TimingBreakdown};
