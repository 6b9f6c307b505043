// File: crates/latent-core/tests/render.rs
// Purpose: End-to-end render smoke tests for canvas and spread figures.

use latent_core::{build_canvas, CanvasFigure, Figure, LatentSpread, RenderOptions, SpreadFigure, Tile};

fn small_opts() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.width = 200;
    opts.height = 200;
    opts.draw_labels = false; // avoid font variance
    opts
}

fn sample_spread() -> LatentSpread {
    LatentSpread {
        points: vec![[-3.0, -3.0], [-2.5, -3.2], [3.0, 3.0], [2.8, 3.1], [0.0, 0.0]],
        labels: vec![0, 0, 1, 1, 2],
    }
}

#[test]
fn canvas_png_smoke() {
    let canvas = build_canvas(|z1, z2| Ok(Tile::filled(4, (z1 - z2) as f32)), 5, 2.0, 4).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested/canvas.png");

    CanvasFigure::new(&canvas).render_to_png(&small_opts(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = CanvasFigure::new(&canvas).render_to_png_bytes(&small_opts()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn canvas_rgba_buffer_shape() {
    let canvas = build_canvas(|_, _| Ok(Tile::filled(2, 0.5)), 3, 1.0, 2).unwrap();
    let (px, w, h, stride) = CanvasFigure::new(&canvas).render_to_rgba8(&small_opts()).expect("rgba render");
    assert_eq!((w, h), (200, 200));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // top-left pixel sits in the margin: opaque white background
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
    // centre pixel is a constant canvas, which maps to the low end of the colormap
    let c = (100 * stride) + 100 * 4;
    assert_eq!(&px[c..c + 4], &latent_core::Colormap::viridis().rgba(0.0));
}

#[test]
fn spread_png_smoke() {
    let spread = sample_spread();
    let means = spread.class_means().unwrap();
    let figure = SpreadFigure { spread: &spread, means: &means, epoch: 3, num_classes: 3, limit: 5.0 };
    let bytes = figure.render_to_png_bytes(&small_opts()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));

    let decoded = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(decoded.dimensions(), (200, 200));
}

#[test]
fn spread_points_are_colored_by_class() {
    let spread = LatentSpread { points: vec![[0.0, 0.0]], labels: vec![0] };
    let figure = SpreadFigure { spread: &spread, means: &[], epoch: 0, num_classes: 10, limit: 5.0 };
    let (px, _, _, stride) = figure.render_to_rgba8(&small_opts()).unwrap();
    // latent origin maps to the figure centre
    let c = (100 * stride) + 100 * 4;
    assert_eq!(&px[c..c + 4], &latent_core::Colormap::viridis().rgba(0.0));
}

#[test]
fn spread_with_labels_renders() {
    let spread = sample_spread();
    let means = spread.class_means().unwrap();
    let figure = SpreadFigure { spread: &spread, means: &means, epoch: 12, num_classes: 3, limit: 5.0 };
    let mut opts = small_opts();
    opts.draw_labels = true;
    assert!(figure.render_to_png_bytes(&opts).is_ok());
}

#[test]
fn invalid_limit_is_rejected() {
    let spread = sample_spread();
    let figure = SpreadFigure { spread: &spread, means: &[], epoch: 0, num_classes: 3, limit: 0.0 };
    assert!(figure.render_to_png_bytes(&small_opts()).is_err());
}

#[test]
fn latent_view_puts_positive_z2_at_the_top() {
    let view = latent_core::scale::LatentView::new(5.0, 10.0, 20.0, 110.0, 120.0);
    assert_eq!(view.to_px([-5.0, -5.0]), (10.0, 120.0));
    assert_eq!(view.to_px([5.0, 5.0]), (110.0, 20.0));
    assert_eq!(view.to_px([0.0, 0.0]), (60.0, 70.0));
}
