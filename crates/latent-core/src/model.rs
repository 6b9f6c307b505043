// File: crates/latent-core/src/model.rs
// Summary: Capability traits for the external VAE and test-data provider.

use crate::error::{Result, VizError};

/// A point in the 2-D latent space, `[z1, z2]`.
pub type LatentPoint = [f64; 2];

/// Square grayscale image produced by a decoder, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    size: usize,
    pixels: Vec<f32>,
}

impl Tile {
    /// Wrap `pixels` as a `size x size` tile; the length must match exactly.
    pub fn new(size: usize, pixels: Vec<f32>) -> Result<Self> {
        if size == 0 {
            return Err(VizError::invalid("tile size", "must be at least 1"));
        }
        if pixels.len() != size * size {
            return Err(VizError::TileShape { expected: size, got: pixels.len() });
        }
        Ok(Self { size, pixels })
    }

    pub fn filled(size: usize, value: f32) -> Self {
        Self { size, pixels: vec![value; size * size] }
    }

    pub fn size(&self) -> usize { self.size }
    pub fn pixels(&self) -> &[f32] { &self.pixels }

    pub fn row(&self, r: usize) -> &[f32] {
        &self.pixels[r * self.size..(r + 1) * self.size]
    }
}

/// Labelled slice of test data handed out by a [`DataProvider`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Batch {
    pub inputs: Vec<Vec<f32>>,
    pub labels: Vec<u32>,
}

impl Batch {
    pub fn len(&self) -> usize { self.labels.len() }
    pub fn is_empty(&self) -> bool { self.labels.is_empty() }
}

/// Maps latent coordinates back to image space (z -> x).
pub trait Decoder {
    /// Edge length of every tile returned by [`Decoder::decode`].
    fn tile_size(&self) -> usize;
    fn decode(&self, z: LatentPoint) -> anyhow::Result<Tile>;
}

/// Maps input samples into the latent space (x -> z), one point per input.
pub trait Encoder {
    fn encode(&self, inputs: &[Vec<f32>]) -> anyhow::Result<Vec<LatentPoint>>;
}

/// Source of labelled test samples.
pub trait DataProvider {
    fn next_batch(&mut self, size: usize) -> anyhow::Result<Batch>;
}

impl<D: Decoder + ?Sized> Decoder for &D {
    fn tile_size(&self) -> usize { (**self).tile_size() }
    fn decode(&self, z: LatentPoint) -> anyhow::Result<Tile> { (**self).decode(z) }
}

impl<E: Encoder + ?Sized> Encoder for &E {
    fn encode(&self, inputs: &[Vec<f32>]) -> anyhow::Result<Vec<LatentPoint>> { (**self).encode(inputs) }
}

impl<P: DataProvider + ?Sized> DataProvider for &mut P {
    fn next_batch(&mut self, size: usize) -> anyhow::Result<Batch> { (**self).next_batch(size) }
}
