use crate::edges::PipelineOptions;
use crate::error::ToolError;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `edge_maps` tool.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeToolConfig {
    /// Image to load; converted to single-channel luminance.
    pub input: PathBuf,
    /// Map 8-bit samples to `[0, 1]` instead of keeping raw `0..255` values.
    #[serde(default)]
    pub normalize: bool,
    #[serde(default)]
    pub pipeline: PipelineOptions,
    #[serde(default)]
    pub output: EdgeOutputConfig,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeOutputConfig {
    /// Where to write the JSON report; printed to stdout when absent.
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig, ToolError> {
    let data = fs::read_to_string(path).map_err(|e| ToolError::io(path, e))?;
    Ok(serde_json::from_str(&data)?)
}
