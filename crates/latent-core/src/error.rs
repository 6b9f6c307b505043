// File: crates/latent-core/src/error.rs
// Summary: Crate error type; capability failures ride along as anyhow sources.

use std::path::PathBuf;

/// Errors raised while sampling, aggregating, rendering or animating.
#[derive(thiserror::Error, Debug)]
pub enum VizError {
    #[error("invalid {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("tile shape mismatch: expected {expected}x{expected} tile, got {got} pixels")]
    TileShape { expected: usize, got: usize },

    #[error("batch shape mismatch: {0}")]
    BatchShape(String),

    #[error("decode failed at z = ({z1}, {z2})")]
    Decode {
        z1: f64,
        z2: f64,
        #[source]
        source: anyhow::Error,
    },

    #[error("encode failed")]
    Encode(#[source] anyhow::Error),

    #[error("data provider failed")]
    Provider(#[source] anyhow::Error),

    #[error("render failed: {0}")]
    Render(&'static str),

    #[error("frame {path} is {got:?}, expected {expected:?}")]
    FrameSize {
        path: PathBuf,
        expected: (u32, u32),
        got: (u32, u32),
    },

    #[error("no frames found in {0}")]
    NoFrames(PathBuf),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl VizError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter { name, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, VizError>;
