// File: crates/latent-core/src/spread.rs
// Summary: Batched encoding of test data and per-class latent means.

use std::collections::BTreeMap;

use crate::error::{Result, VizError};
use crate::model::{DataProvider, Encoder, LatentPoint};

/// Encoded test points with their class labels (same length, same order).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LatentSpread {
    pub points: Vec<LatentPoint>,
    pub labels: Vec<u32>,
}

impl LatentSpread {
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn class_means(&self) -> Result<Vec<ClassMean>> {
        class_means(&self.points, &self.labels)
    }
}

/// Arithmetic mean of all points carrying `label`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassMean {
    pub label: u32,
    pub mean: LatentPoint,
    pub count: usize,
}

/// Pull `n_test` samples from `provider` in batches of `batch_size` and encode them.
///
/// The final batch is shortened when `batch_size` does not divide `n_test`.
pub fn encode_test_set<E, P>(encoder: &E, provider: &mut P, n_test: usize, batch_size: usize) -> Result<LatentSpread>
where
    E: Encoder + ?Sized,
    P: DataProvider + ?Sized,
{
    if batch_size == 0 {
        return Err(VizError::invalid("batch size", "must be at least 1"));
    }
    let mut spread = LatentSpread {
        points: Vec::with_capacity(n_test),
        labels: Vec::with_capacity(n_test),
    };

    while spread.len() < n_test {
        let want = batch_size.min(n_test - spread.len());
        let batch = provider.next_batch(want).map_err(VizError::Provider)?;
        if batch.labels.len() != want || batch.inputs.len() != want {
            return Err(VizError::BatchShape(format!(
                "requested {want} samples, provider returned {} inputs and {} labels",
                batch.inputs.len(),
                batch.labels.len()
            )));
        }
        let zs = encoder.encode(&batch.inputs).map_err(VizError::Encode)?;
        if zs.len() != want {
            return Err(VizError::BatchShape(format!("encoded {} points for {want} inputs", zs.len())));
        }
        spread.points.extend(zs);
        spread.labels.extend(batch.labels);
    }

    tracing::debug!(n_test, batch_size, "encoded test set");
    Ok(spread)
}

/// Per-class means, sorted by label. Labels with no points are absent.
pub fn class_means(points: &[LatentPoint], labels: &[u32]) -> Result<Vec<ClassMean>> {
    if points.len() != labels.len() {
        return Err(VizError::BatchShape(format!(
            "{} points but {} labels",
            points.len(),
            labels.len()
        )));
    }
    let mut sums: BTreeMap<u32, ([f64; 2], usize)> = BTreeMap::new();
    for (p, &label) in points.iter().zip(labels) {
        let entry = sums.entry(label).or_insert(([0.0, 0.0], 0));
        entry.0[0] += p[0];
        entry.0[1] += p[1];
        entry.1 += 1;
    }
    Ok(sums
        .into_iter()
        .map(|(label, (sum, count))| ClassMean {
            label,
            mean: [sum[0] / count as f64, sum[1] / count as f64],
            count,
        })
        .collect())
}

/// [`class_means`] that also rejects labels outside `0..num_classes`.
pub fn class_means_for(points: &[LatentPoint], labels: &[u32], num_classes: usize) -> Result<Vec<ClassMean>> {
    if let Some(&bad) = labels.iter().find(|&&l| l as usize >= num_classes) {
        return Err(VizError::invalid("label", format!("{bad} is outside 0..{num_classes}")));
    }
    class_means(points, labels)
}
