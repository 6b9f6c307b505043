// File: crates/latent-core/src/geometry.rs
// Summary: Pixel regions for canvas tiles and figure plot areas.

/// Half-open pixel rectangle `[left, right) x [top, bottom)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl PixelRect {
    pub const fn from_ltwh(left: usize, top: usize, width: usize, height: usize) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> usize { self.right - self.left }
    pub const fn height(&self) -> usize { self.bottom - self.top }
}

/// Canvas region of the tile decoded at grid position `(i, j)`.
///
/// The row band is inverted: `i = 0` (smallest z1) maps to the bottom band,
/// `i = n - 1` to the top band. Columns follow `j` left to right.
#[inline]
pub fn tile_rect(i: usize, j: usize, n: usize, tile_size: usize) -> PixelRect {
    debug_assert!(i < n && j < n);
    PixelRect::from_ltwh(j * tile_size, (n - i - 1) * tile_size, tile_size, tile_size)
}
