// File: crates/latent-core/src/render.rs
// Summary: Canvas and spread figures with a headless PNG pipeline using Skia CPU raster surfaces.

use std::path::Path;

use skia_safe as skia;

use crate::canvas::Canvas;
use crate::error::{Result, VizError};
use crate::scale::LatentView;
use crate::spread::{ClassMean, LatentSpread};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, CLASS_LABEL_SIZE, EPOCH_LABEL_SIZE, FIGURE_SIZE, POINT_RADIUS};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text depends on installed fonts; turn off for pixel-stable output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: FIGURE_SIZE,
            height: FIGURE_SIZE,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Largest square plot area centred inside the insets.
    fn plot_rect(&self) -> skia::Rect {
        let avail_w = (self.width - self.insets.hsum() as i32).max(1) as f32;
        let avail_h = (self.height - self.insets.vsum() as i32).max(1) as f32;
        let side = avail_w.min(avail_h);
        let left = self.insets.left as f32 + (avail_w - side) * 0.5;
        let top = self.insets.top as f32 + (avail_h - side) * 0.5;
        skia::Rect::from_xywh(left, top, side, side)
    }
}

/// Something that paints itself onto a Skia canvas and can be exported.
pub trait Figure {
    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) -> Result<()>;

    /// Render the figure to a PNG at `output_png_path`, creating parent directories.
    fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()>
    where
        Self: Sized,
    {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        tracing::info!(path = %path.display(), "wrote figure");
        Ok(())
    }

    fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = rasterize(self, opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(VizError::Render("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render into a tightly packed RGBA8 buffer: `(pixels, width, height, stride)`.
    fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = rasterize(self, opts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(VizError::Render("read pixels failed"));
        }
        Ok((pixels, w as u32, h as u32, stride))
    }
}

fn rasterize<F: Figure + ?Sized>(figure: &F, opts: &RenderOptions) -> Result<skia::Surface> {
    if opts.width <= 0 || opts.height <= 0 {
        return Err(VizError::invalid("figure size", format!("{}x{}", opts.width, opts.height)));
    }
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or(VizError::Render("failed to create raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(opts.theme.background);
    figure.draw(canvas, opts)?;
    Ok(surface)
}

// ---- canvas figure ----------------------------------------------------------

/// Decoded latent grid shown as a single image without ticks.
pub struct CanvasFigure<'a> {
    pub canvas: &'a Canvas,
}

impl<'a> CanvasFigure<'a> {
    pub fn new(canvas: &'a Canvas) -> Self { Self { canvas } }
}

impl Figure for CanvasFigure<'_> {
    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) -> Result<()> {
        let (w, h) = (self.canvas.width(), self.canvas.height());
        let info = skia::ImageInfo::new((w as i32, h as i32), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let rgba = self.canvas.to_rgba8(&opts.theme.colormap);
        let image = skia::images::raster_from_data(&info, skia::Data::new_copy(&rgba), w * 4)
            .ok_or(VizError::Render("failed to wrap canvas pixels"))?;

        let plot = opts.plot_rect();
        let sampling = skia::SamplingOptions::new(skia::FilterMode::Nearest, skia::MipmapMode::None);
        canvas.draw_image_rect_with_sampling_options(&image, None, plot, sampling, &skia::Paint::default());
        draw_frame(canvas, plot, &opts.theme);
        Ok(())
    }
}

// ---- spread figure ----------------------------------------------------------

/// Scatter of encoded test points with class-mean and epoch annotations.
pub struct SpreadFigure<'a> {
    pub spread: &'a LatentSpread,
    pub means: &'a [ClassMean],
    pub epoch: u32,
    pub num_classes: usize,
    /// Both axes show `[-limit, limit]`.
    pub limit: f64,
}

impl Figure for SpreadFigure<'_> {
    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) -> Result<()> {
        if !(self.limit.is_finite() && self.limit > 0.0) {
            return Err(VizError::invalid("spread limit", self.limit.to_string()));
        }
        let plot = opts.plot_rect();
        let view = LatentView::new(self.limit, plot.left, plot.top, plot.right, plot.bottom);
        let theme = &opts.theme;

        canvas.save();
        canvas.clip_rect(plot, None, Some(true));

        let mut dot = skia::Paint::default();
        dot.set_anti_alias(true);
        dot.set_style(skia::paint::Style::Fill);
        for (z, &label) in self.spread.points.iter().zip(&self.spread.labels) {
            dot.set_color(theme.colormap.class_color(label, self.num_classes));
            canvas.draw_circle(view.to_px(*z), POINT_RADIUS, &dot);
        }

        if opts.draw_labels {
            let shaper = TextShaper::new();
            for m in self.means {
                shaper.draw_boxed(
                    canvas,
                    &m.label.to_string(),
                    view.to_px(m.mean),
                    CLASS_LABEL_SIZE,
                    theme.annotation_fill,
                    theme.annotation_text,
                );
            }
            let banner_at = view.to_px([0.62 * self.limit, 0.88 * self.limit]);
            let banner_fill = theme.annotation_fill.with_a(255);
            shaper.draw_boxed(
                canvas,
                &format!("Epoch {}", self.epoch),
                banner_at,
                EPOCH_LABEL_SIZE,
                banner_fill,
                theme.annotation_text,
            );
        }

        canvas.restore();
        draw_frame(canvas, plot, theme);
        tracing::debug!(points = self.spread.len(), classes = self.means.len(), epoch = self.epoch, "spread drawn");
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_frame(canvas: &skia::Canvas, plot: skia::Rect, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.frame);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    canvas.draw_rect(plot, &paint);
}
