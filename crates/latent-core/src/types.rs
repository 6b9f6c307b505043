// File: crates/latent-core/src/types.rs
// Summary: Shared figure constants and margins.

/// Default square figure edge in pixels (10in at 100dpi).
pub const FIGURE_SIZE: i32 = 1000;

/// Radius of a spread scatter dot, in pixels.
pub const POINT_RADIUS: f32 = 3.0;

/// Font size for class-mean labels.
pub const CLASS_LABEL_SIZE: f32 = 16.0;

/// Font size for the epoch banner.
pub const EPOCH_LABEL_SIZE: f32 = 25.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn uniform(v: u32) -> Self {
        Self { left: v, right: v, top: v, bottom: v }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    // tight layout, no tick labels to make room for
    fn default() -> Self {
        Self::uniform(12)
    }
}
