use serde::Deserialize;
use std::fs;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Canonical frame size every input frame is resized to. The lane
    /// boundary table is defined in this coordinate space.
    pub frame_width: i32,
    pub frame_height: i32,
    /// Ordered (start, end) x-intervals, one per lane, inclusive on both ends.
    pub lane_boundaries: Vec<(i32, i32)>,
    /// A lane with at least this many vehicles is flagged as congested.
    pub congestion_threshold: u32,
    /// Contours with area at or below this are discarded as noise.
    pub min_object_area: f64,
    pub history: i32,
    pub var_threshold: f64,
    pub detect_shadows: bool,
    /// Foreground mask values must exceed this to count as a vehicle pixel.
    /// 244 keeps only full-confidence foreground; MOG2 shadows (127) fall out.
    pub mask_cutoff: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_width: 1100,
            frame_height: 900,
            lane_boundaries: vec![(0, 300), (300, 600), (600, 900)],
            congestion_threshold: 10,
            min_object_area: 500.0,
            history: 500,
            var_threshold: 16.0,
            detect_shadows: true,
            mask_cutoff: 244.0,
        }
    }
}

impl Config {
    /// Load from a JSON file. Fields left out fall back to the defaults.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        let cfg: Config = serde_json::from_str(&data)?;
        Ok(cfg)
    }
}
