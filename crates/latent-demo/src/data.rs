// File: crates/latent-demo/src/data.rs
// Summary: Labelled test-data providers: synthetic rings and CSV files.

use std::path::Path;

use anyhow::{Context, Result};
use latent_core::{Batch, DataProvider};

/// Deterministic synthetic data: class `k` sits on a ring at angle `2πk / classes`.
pub struct RingProvider {
    classes: u32,
    radius: f32,
    cursor: u64,
}

impl RingProvider {
    pub fn new(classes: u32) -> Self {
        Self { classes: classes.max(1), radius: 3.5, cursor: 0 }
    }

    fn sample(&self, i: u64) -> (Vec<f32>, u32) {
        let label = (i % self.classes as u64) as u32;
        let angle = std::f32::consts::TAU * label as f32 / self.classes as f32;
        // low-discrepancy jitter so clusters have some width
        let u = ((i as f64 * 0.618_033_988_75).fract() - 0.5) as f32;
        let v = ((i as f64 * 0.754_877_666_2).fract() - 0.5) as f32;
        let r = self.radius + 1.2 * u;
        let a = angle + 0.5 * v;
        (vec![r * a.cos(), r * a.sin()], label)
    }
}

impl DataProvider for RingProvider {
    fn next_batch(&mut self, size: usize) -> Result<Batch> {
        let mut batch = Batch::default();
        for _ in 0..size {
            let (x, y) = self.sample(self.cursor);
            batch.inputs.push(x);
            batch.labels.push(y);
            self.cursor += 1;
        }
        Ok(batch)
    }
}

/// Rows of `label,f0,f1,...` read once and served cyclically.
pub struct CsvProvider {
    rows: Vec<(Vec<f32>, u32)>,
    cursor: usize,
}

impl CsvProvider {
    pub fn from_path(path: &Path) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .with_context(|| format!("opening {}", path.display()))?;

        let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
        let label_ix = headers
            .iter()
            .position(|h| h == "label" || h == "y" || h == "class")
            .unwrap_or(0);
        tracing::debug!(?headers, label_ix, "csv headers");

        let mut rows = Vec::new();
        for (line, rec) in rdr.records().enumerate() {
            let rec = rec?;
            let label = rec
                .get(label_ix)
                .and_then(|s| s.parse::<u32>().ok())
                .with_context(|| format!("row {}: missing or non-integer label", line + 1))?;
            let features = rec
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != label_ix)
                .map(|(i, s)| {
                    s.parse::<f32>()
                        .with_context(|| format!("row {}, column {}: '{}' is not a number", line + 1, i, s))
                })
                .collect::<Result<Vec<f32>>>()?;
            rows.push((features, label));
        }
        if rows.is_empty() {
            anyhow::bail!("no samples in {}", path.display());
        }
        tracing::info!(rows = rows.len(), path = %path.display(), "loaded test data");
        Ok(Self { rows, cursor: 0 })
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

impl DataProvider for CsvProvider {
    fn next_batch(&mut self, size: usize) -> Result<Batch> {
        let mut batch = Batch::default();
        for _ in 0..size {
            let (x, y) = &self.rows[self.cursor];
            batch.inputs.push(x.clone());
            batch.labels.push(*y);
            self.cursor = (self.cursor + 1) % self.rows.len();
        }
        Ok(batch)
    }
}
