// File: crates/latent-core/src/canvas.rs
// Summary: Decode the latent grid tile by tile into one square canvas buffer.

use crate::error::{Result, VizError};
use crate::geometry::tile_rect;
use crate::grid::LatentGrid;
use crate::model::{Decoder, Tile};
use crate::theme::Colormap;

/// Tiled decoder output, `(tile_size * n)` pixels on each side, row-major.
///
/// Pixels start as NaN and every tile band is written exactly once by
/// [`build_canvas`], so a returned canvas never contains NaN unless the
/// decoder itself produced it.
#[derive(Clone, Debug)]
pub struct Canvas {
    n: usize,
    tile_size: usize,
    pixels: Vec<f32>,
}

impl Canvas {
    fn unwritten(n: usize, tile_size: usize) -> Self {
        let side = n * tile_size;
        Self { n, tile_size, pixels: vec![f32::NAN; side * side] }
    }

    pub fn width(&self) -> usize { self.n * self.tile_size }
    pub fn height(&self) -> usize { self.n * self.tile_size }
    pub fn grid_len(&self) -> usize { self.n }
    pub fn tile_size(&self) -> usize { self.tile_size }
    pub fn pixels(&self) -> &[f32] { &self.pixels }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.pixels[row * self.width() + col]
    }

    /// Copy of the tile stored in row band `band_row` (0 = top) and column band `band_col`.
    pub fn tile_pixels(&self, band_row: usize, band_col: usize) -> Vec<f32> {
        let ts = self.tile_size;
        let w = self.width();
        let mut out = Vec::with_capacity(ts * ts);
        for r in band_row * ts..(band_row + 1) * ts {
            let start = r * w + band_col * ts;
            out.extend_from_slice(&self.pixels[start..start + ts]);
        }
        out
    }

    pub fn is_fully_written(&self) -> bool {
        self.pixels.iter().all(|p| !p.is_nan())
    }

    /// `(min, max)` over finite pixels, or `None` when there are none.
    pub fn value_range(&self) -> Option<(f32, f32)> {
        let mut lo = f32::INFINITY;
        let mut hi = f32::NEG_INFINITY;
        for &p in self.pixels.iter().filter(|p| p.is_finite()) {
            lo = lo.min(p);
            hi = hi.max(p);
        }
        if lo <= hi { Some((lo, hi)) } else { None }
    }

    /// Colour-map the canvas into RGBA8, normalising to the canvas value range.
    pub fn to_rgba8(&self, cmap: &Colormap) -> Vec<u8> {
        let (lo, hi) = self.value_range().unwrap_or((0.0, 1.0));
        let span = hi - lo;
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for &p in &self.pixels {
            let t = if span > 0.0 && p.is_finite() { (p - lo) / span } else { 0.0 };
            out.extend_from_slice(&cmap.rgba(t as f64));
        }
        out
    }

    fn write_tile(&mut self, i: usize, j: usize, tile: &Tile) {
        let rect = tile_rect(i, j, self.n, self.tile_size);
        let w = self.width();
        for (dy, r) in (rect.top..rect.bottom).enumerate() {
            let start = r * w + rect.left;
            self.pixels[start..start + rect.width()].copy_from_slice(tile.row(dy));
        }
    }
}

/// Sample an `n x n` grid over `[-bound, bound]^2` and tile the decoded images.
///
/// `decode_fn` is called once per grid point with `(z1, z2)`, z1 in the outer
/// loop. The first decoder error or mis-sized tile aborts the whole call.
pub fn build_canvas<F>(mut decode_fn: F, n: usize, bound: f64, tile_size: usize) -> Result<Canvas>
where
    F: FnMut(f64, f64) -> anyhow::Result<Tile>,
{
    if tile_size == 0 {
        return Err(VizError::invalid("tile size", "must be at least 1"));
    }
    let grid = LatentGrid::new(n, bound)?;
    let mut canvas = Canvas::unwritten(n, tile_size);

    for (i, z1, j, z2) in grid.samples() {
        let tile = decode_fn(z1, z2).map_err(|source| VizError::Decode { z1, z2, source })?;
        if tile.size() != tile_size {
            return Err(VizError::TileShape { expected: tile_size, got: tile.pixels().len() });
        }
        canvas.write_tile(i, j, &tile);
    }

    tracing::debug!(n, bound, tile_size, "latent canvas assembled");
    Ok(canvas)
}

/// [`build_canvas`] driven by a [`Decoder`], whose declared tile size is read once.
pub fn decode_canvas<D: Decoder + ?Sized>(decoder: &D, n: usize, bound: f64) -> Result<Canvas> {
    let tile_size = decoder.tile_size();
    build_canvas(|z1, z2| decoder.decode([z1, z2]), n, bound, tile_size)
}
