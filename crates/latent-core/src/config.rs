// File: crates/latent-core/src/config.rs
// Summary: Serializable visualization settings and output path resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::animation::FrameTiming;
use crate::error::{Result, VizError};
use crate::theme;

/// Environment variable consulted when no output directory is given explicitly.
pub const OUTPUT_DIR_ENV: &str = "LATENT_ATLAS_OUT";

const DEFAULT_OUTPUT_DIR: &str = "figs";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    /// Falls back to [`resolve_output_dir`] when a config file leaves it out.
    #[serde(default = "env_output_dir")]
    pub output_dir: PathBuf,
    pub grid: GridConfig,
    pub spread: SpreadConfig,
    pub figure: FigureConfig,
    pub animation: AnimationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Samples per latent axis.
    pub n: usize,
    /// Grid spans `[-bound, bound]` on both axes.
    pub bound: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpreadConfig {
    pub n_test: usize,
    pub batch_size: usize,
    pub num_classes: usize,
    /// Scatter axes span `[-limit, limit]`.
    pub limit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub size_px: i32,
    pub theme: String,
    pub draw_labels: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub canvas_fps: u32,
    pub canvas_log_offset: f64,
    pub spread_fps: u32,
    /// GIF quantiser speed, 1 (best) to 30 (fastest).
    pub encoder_speed: i32,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            grid: GridConfig::default(),
            spread: SpreadConfig::default(),
            figure: FigureConfig::default(),
            animation: AnimationConfig::default(),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self { Self { n: 15, bound: 2.0 } }
}

impl Default for SpreadConfig {
    fn default() -> Self {
        Self { n_test: 5000, batch_size: 100, num_classes: 10, limit: 5.0 }
    }
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self { size_px: crate::types::FIGURE_SIZE, theme: "light".to_string(), draw_labels: true }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { canvas_fps: 25, canvas_log_offset: 4.0, spread_fps: 5, encoder_speed: 10 }
    }
}

impl VizConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid.n == 0 {
            return Err(VizError::invalid("grid.n", "must be at least 1"));
        }
        if !(self.grid.bound.is_finite() && self.grid.bound > 0.0) {
            return Err(VizError::invalid("grid.bound", format!("{} is not a positive finite value", self.grid.bound)));
        }
        if self.spread.batch_size == 0 {
            return Err(VizError::invalid("spread.batch_size", "must be at least 1"));
        }
        if self.spread.num_classes == 0 {
            return Err(VizError::invalid("spread.num_classes", "must be at least 1"));
        }
        if !(self.spread.limit.is_finite() && self.spread.limit > 0.0) {
            return Err(VizError::invalid("spread.limit", format!("{} is not a positive finite value", self.spread.limit)));
        }
        if !theme::presets().iter().any(|t| t.name.eq_ignore_ascii_case(&self.figure.theme)) {
            let known: Vec<&str> = theme::presets().iter().map(|t| t.name).collect();
            return Err(VizError::invalid(
                "figure.theme",
                format!("unknown theme '{}' (known: {})", self.figure.theme, known.join(", ")),
            ));
        }
        if self.figure.size_px <= 0 {
            return Err(VizError::invalid("figure.size_px", "must be positive"));
        }
        if self.animation.canvas_fps == 0 || self.animation.spread_fps == 0 {
            return Err(VizError::invalid("animation fps", "must be at least 1"));
        }
        if !(self.animation.canvas_log_offset.is_finite() && self.animation.canvas_log_offset > 0.0) {
            return Err(VizError::invalid("animation.canvas_log_offset", "must be a positive finite value"));
        }
        Ok(())
    }

    pub fn canvas_dir(&self) -> PathBuf { self.output_dir.join("canvas") }
    pub fn spread_dir(&self) -> PathBuf { self.output_dir.join("spread") }
    pub fn canvas_gif_path(&self) -> PathBuf { self.output_dir.join("canvas.gif") }
    pub fn spread_gif_path(&self) -> PathBuf { self.output_dir.join("spread.gif") }

    pub fn canvas_timing(&self) -> FrameTiming {
        FrameTiming::LogTime { offset: self.animation.canvas_log_offset, fps: self.animation.canvas_fps }
    }

    pub fn spread_timing(&self) -> FrameTiming {
        FrameTiming::Fixed { fps: self.animation.spread_fps }
    }
}

/// File name of the frame recorded for `epoch`; padding to the width of `u32::MAX`
/// keeps lexical order equal to epoch order.
pub fn frame_file_name(epoch: u32) -> String {
    format!("{epoch:010}.png")
}

fn env_output_dir() -> PathBuf {
    resolve_output_dir(None)
}

/// Resolve the output directory: explicit value, then `LATENT_ATLAS_OUT`, then `figs`.
pub fn resolve_output_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Ok(env_path) = std::env::var(OUTPUT_DIR_ENV) {
        if !env_path.is_empty() {
            return PathBuf::from(env_path);
        }
    }
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}
