// File: crates/latent-core/src/lib.rs
// Summary: Core library entry point; latent grid canvases, spread plots and training animations for 2-D VAEs.

pub mod animation;
pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod model;
pub mod recorder;
pub mod render;
pub mod scale;
pub mod spread;
pub mod text;
pub mod theme;
pub mod types;

pub use animation::{animate_dir, collect_frames, write_gif, FrameTiming};
pub use canvas::{build_canvas, decode_canvas, Canvas};
pub use config::{resolve_output_dir, VizConfig};
pub use error::{Result, VizError};
pub use grid::{linspace, LatentGrid};
pub use model::{Batch, DataProvider, Decoder, Encoder, LatentPoint, Tile};
pub use recorder::EpochRecorder;
pub use render::{CanvasFigure, Figure, RenderOptions, SpreadFigure};
pub use spread::{class_means, class_means_for, encode_test_set, ClassMean, LatentSpread};
pub use theme::{Colormap, Theme};
