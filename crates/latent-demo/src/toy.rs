// File: crates/latent-demo/src/toy.rs
// Summary: Analytic stand-in for a trained 2-D VAE whose latent layout sharpens over epochs.

use latent_core::{Decoder, Encoder, LatentPoint, Tile};

/// Latent radius the decoder maps onto the tile edge.
const DECODE_RANGE: f64 = 3.0;

/// Decoder draws a soft blob that follows `z`; encoder pulls inputs apart
/// more with every epoch, so successive frames look like training progress.
#[derive(Clone, Copy, Debug)]
pub struct ToyVae {
    pub epoch: u32,
    pub tile_size: usize,
}

impl ToyVae {
    pub fn new(epoch: u32) -> Self {
        Self { epoch, tile_size: 28 }
    }

    /// 0 at epoch 0, approaching 1 as training goes on.
    pub fn progress(&self) -> f64 {
        1.0 - (-(self.epoch as f64) / 4.0).exp()
    }
}

impl Decoder for ToyVae {
    fn tile_size(&self) -> usize { self.tile_size }

    fn decode(&self, z: LatentPoint) -> anyhow::Result<Tile> {
        if !(z[0].is_finite() && z[1].is_finite()) {
            anyhow::bail!("non-finite latent coordinate {z:?}");
        }
        let ts = self.tile_size as f64;
        let half = (ts - 1.0) / 2.0;
        // z1 moves the blob up, z2 moves it right
        let cy = half - (z[0] / DECODE_RANGE).clamp(-1.0, 1.0) * half * 0.8;
        let cx = half + (z[1] / DECODE_RANGE).clamp(-1.0, 1.0) * half * 0.8;
        let sigma = ts * (0.25 - 0.12 * self.progress());
        let denom = 2.0 * sigma * sigma;

        let mut pixels = Vec::with_capacity(self.tile_size * self.tile_size);
        for r in 0..self.tile_size {
            for c in 0..self.tile_size {
                let (dy, dx) = (r as f64 - cy, c as f64 - cx);
                pixels.push((-(dx * dx + dy * dy) / denom).exp() as f32);
            }
        }
        Ok(Tile::new(self.tile_size, pixels)?)
    }
}

impl Encoder for ToyVae {
    fn encode(&self, inputs: &[Vec<f32>]) -> anyhow::Result<Vec<LatentPoint>> {
        let gain = 0.2 + 0.8 * self.progress();
        inputs
            .iter()
            .enumerate()
            .map(|(k, x)| match x.as_slice() {
                [a, b, ..] => Ok([gain * *a as f64, gain * *b as f64]),
                _ => anyhow::bail!("sample {k} has {} features, need at least 2", x.len()),
            })
            .collect()
    }
}
