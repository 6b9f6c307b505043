// File: crates/latent-core/src/recorder.rs
// Summary: Per-epoch frame recording and GIF assembly driven by a VizConfig.

use std::path::PathBuf;

use crate::animation::animate_dir;
use crate::canvas::decode_canvas;
use crate::config::{frame_file_name, VizConfig};
use crate::error::Result;
use crate::model::{DataProvider, Decoder, Encoder};
use crate::render::{CanvasFigure, Figure, RenderOptions, SpreadFigure};
use crate::spread::{class_means_for, encode_test_set};
use crate::theme;
use crate::types::Insets;

pub struct EpochRecorder {
    config: VizConfig,
}

impl EpochRecorder {
    pub fn new(config: VizConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &VizConfig { &self.config }

    fn render_options(&self) -> RenderOptions {
        let fig = &self.config.figure;
        RenderOptions {
            width: fig.size_px,
            height: fig.size_px,
            insets: Insets::default(),
            theme: theme::find(&fig.theme),
            draw_labels: fig.draw_labels,
        }
    }

    /// Decode the configured latent grid and write `canvas/<epoch>.png`.
    pub fn record_canvas<D: Decoder + ?Sized>(&self, decoder: &D, epoch: u32) -> Result<PathBuf> {
        let grid = &self.config.grid;
        let canvas = decode_canvas(decoder, grid.n, grid.bound)?;
        let path = self.config.canvas_dir().join(frame_file_name(epoch));
        CanvasFigure::new(&canvas).render_to_png(&self.render_options(), &path)?;
        Ok(path)
    }

    /// Encode the test set, annotate class means and write `spread/<epoch>.png`.
    pub fn record_spread<E, P>(&self, encoder: &E, provider: &mut P, epoch: u32) -> Result<PathBuf>
    where
        E: Encoder + ?Sized,
        P: DataProvider + ?Sized,
    {
        let cfg = &self.config.spread;
        let spread = encode_test_set(encoder, provider, cfg.n_test, cfg.batch_size)?;
        let means = class_means_for(&spread.points, &spread.labels, cfg.num_classes)?;
        let figure = SpreadFigure {
            spread: &spread,
            means: &means,
            epoch,
            num_classes: cfg.num_classes,
            limit: cfg.limit,
        };
        let path = self.config.spread_dir().join(frame_file_name(epoch));
        figure.render_to_png(&self.render_options(), &path)?;
        Ok(path)
    }

    /// Both frames for one epoch, canvas first.
    pub fn record_epoch<M, P>(&self, model: &M, provider: &mut P, epoch: u32) -> Result<(PathBuf, PathBuf)>
    where
        M: Decoder + Encoder + ?Sized,
        P: DataProvider + ?Sized,
    {
        let canvas = self.record_canvas(model, epoch)?;
        let spread = self.record_spread(model, provider, epoch)?;
        tracing::info!(epoch, "recorded epoch frames");
        Ok((canvas, spread))
    }

    pub fn write_canvas_gif(&self) -> Result<PathBuf> {
        let path = self.config.canvas_gif_path();
        animate_dir(&self.config.canvas_dir(), self.config.canvas_timing(), self.config.animation.encoder_speed, &path)?;
        Ok(path)
    }

    pub fn write_spread_gif(&self) -> Result<PathBuf> {
        let path = self.config.spread_gif_path();
        animate_dir(&self.config.spread_dir(), self.config.spread_timing(), self.config.animation.encoder_speed, &path)?;
        Ok(path)
    }
}
