//! JSON configuration for the demo binary.

use crate::generator::GenerationParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ToolConfig {
    /// Source image; decoded to 8-bit grayscale before the pipeline runs.
    pub input: PathBuf,
    #[serde(default)]
    pub params: GenerationParams,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Pattern result (pegs, connections, score, run flags) as pretty JSON.
    pub pattern_json: PathBuf,
    /// Optional edge-map dump for visual debugging.
    #[serde(default)]
    pub edge_map_png: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<ToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
