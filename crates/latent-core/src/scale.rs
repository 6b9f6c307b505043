// File: crates/latent-core/src/scale.rs
// Summary: World (latent) to screen transforms for the spread scatter plot.

/// Linear map from a world interval onto a pixel interval.
///
/// `px_at_min` may exceed `px_at_max`, which is how the Y axis flips so larger
/// latent values draw higher on screen.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub min: f64,
    pub max: f64,
    pub px_at_min: f32,
    pub px_at_max: f32,
}

impl LinearScale {
    pub fn new(min: f64, max: f64, px_at_min: f32, px_at_max: f32) -> Self {
        let max = if (max - min).abs() < 1e-12 { min + 1.0 } else { max };
        Self { min, max, px_at_min, px_at_max }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = ((v - self.min) / (self.max - self.min)) as f32;
        self.px_at_min + t * (self.px_at_max - self.px_at_min)
    }
}

/// Square latent window `[-limit, limit]^2` mapped into a plot rectangle.
#[derive(Clone, Copy, Debug)]
pub struct LatentView {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl LatentView {
    pub fn new(limit: f64, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            x: LinearScale::new(-limit, limit, left, right),
            y: LinearScale::new(-limit, limit, bottom, top),
        }
    }

    #[inline]
    pub fn to_px(&self, z: [f64; 2]) -> (f32, f32) {
        (self.x.to_px(z[0]), self.y.to_px(z[1]))
    }
}
