// File: crates/latent-core/src/theme.rs
// Summary: Figure themes and the viridis colormap shared by canvas and spread plots.

use skia_safe as skia;

/// Perceptually uniform purple -> teal -> yellow ramp (viridis control points).
const VIRIDIS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [71, 44, 122],
    [59, 81, 139],
    [44, 113, 142],
    [33, 144, 141],
    [39, 173, 129],
    [92, 200, 99],
    [170, 220, 50],
    [253, 231, 37],
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Colormap;

impl Colormap {
    pub fn viridis() -> Self { Self }

    /// Colour at `t` in `[0, 1]`; out-of-range and NaN inputs clamp to the ends.
    pub fn rgba(&self, t: f64) -> [u8; 4] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let pos = t * (VIRIDIS.len() - 1) as f64;
        let k = (pos.floor() as usize).min(VIRIDIS.len() - 2);
        let f = pos - k as f64;
        let (a, b) = (VIRIDIS[k], VIRIDIS[k + 1]);
        let lerp = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * f).round() as u8;
        [lerp(a[0], b[0]), lerp(a[1], b[1]), lerp(a[2], b[2]), 255]
    }

    pub fn color(&self, t: f64) -> skia::Color {
        let [r, g, b, a] = self.rgba(t);
        skia::Color::from_argb(a, r, g, b)
    }

    /// Colour for `label` out of `num_classes`, spread evenly over the ramp.
    pub fn class_color(&self, label: u32, num_classes: usize) -> skia::Color {
        let t = if num_classes > 1 { label as f64 / (num_classes - 1) as f64 } else { 0.0 };
        self.color(t)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub frame: skia::Color,
    pub annotation_fill: skia::Color,
    pub annotation_text: skia::Color,
    pub colormap: Colormap,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            frame: skia::Color::from_argb(255, 38, 38, 38),
            annotation_fill: skia::Color::from_argb(230, 255, 255, 255), // ~0.9 alpha
            annotation_text: skia::Color::from_argb(255, 20, 20, 30),
            colormap: Colormap::viridis(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            frame: skia::Color::from_argb(255, 180, 180, 190),
            annotation_fill: skia::Color::from_argb(230, 235, 235, 245),
            annotation_text: skia::Color::from_argb(255, 18, 18, 20),
            colormap: Colormap::viridis(),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light. `VizConfig::validate` rejects unknown names.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
