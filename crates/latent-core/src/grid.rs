// File: crates/latent-core/src/grid.rs
// Summary: Symmetric latent grid sampling over [-bound, bound].

use crate::error::{Result, VizError};

/// Evenly spaced values from `start` to `end` inclusive.
///
/// The last element is pinned to `end` so accumulated rounding never moves the
/// endpoint. A single step yields `[start]`, zero steps yield an empty vec.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => return Vec::new(),
        1 => return vec![start],
        _ => {}
    }
    let step = (end - start) / (steps as f64 - 1.0);
    let mut out: Vec<f64> = (0..steps).map(|i| start + step * i as f64).collect();
    out[steps - 1] = end;
    out
}

/// Sample axes of the 2-D latent grid.
///
/// Both axes hold the same `n` values, strictly increasing and mirrored about
/// zero: `values[k] == -values[n - 1 - k]` holds bit-for-bit.
#[derive(Clone, Debug, PartialEq)]
pub struct LatentGrid {
    bound: f64,
    values: Vec<f64>,
}

impl LatentGrid {
    pub fn new(n: usize, bound: f64) -> Result<Self> {
        if n == 0 {
            return Err(VizError::invalid("grid resolution", "n must be at least 1"));
        }
        if !bound.is_finite() || bound <= 0.0 {
            return Err(VizError::invalid("bound", format!("expected a positive finite value, got {bound}")));
        }
        Ok(Self { bound, values: symmetric_linspace(bound, n) })
    }

    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
    pub fn bound(&self) -> f64 { self.bound }

    /// Values along the first latent axis (rows of the canvas).
    pub fn z1(&self) -> &[f64] { &self.values }

    /// Values along the second latent axis (columns of the canvas).
    pub fn z2(&self) -> &[f64] { &self.values }

    /// All `(i, z1, j, z2)` samples, `i` outer and `j` inner.
    pub fn samples(&self) -> impl Iterator<Item = (usize, f64, usize, f64)> + '_ {
        self.z1().iter().enumerate().flat_map(move |(i, &z1)| {
            self.z2().iter().enumerate().map(move |(j, &z2)| (i, z1, j, z2))
        })
    }
}

fn symmetric_linspace(bound: f64, n: usize) -> Vec<f64> {
    let mut values = linspace(-bound, bound, n);
    if n < 2 {
        return values;
    }
    // mirror the upper half from the lower half; odd n gets an exact zero
    for k in (n + 1) / 2..n {
        values[k] = -values[n - 1 - k];
    }
    if n % 2 == 1 {
        values[n / 2] = 0.0;
    }
    values
}
