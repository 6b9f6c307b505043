// File: crates/latent-core/tests/spread.rs
// Purpose: Batched test-set encoding and per-class latent means.

use latent_core::{class_means, class_means_for, encode_test_set, Batch, DataProvider, Encoder, LatentPoint, VizError};

/// Hands out samples `k = 0, 1, 2, ...` with input `[k]` and label `k % classes`.
struct Counting {
    next: usize,
    classes: u32,
    requests: Vec<usize>,
}

impl Counting {
    fn new(classes: u32) -> Self { Self { next: 0, classes, requests: Vec::new() } }
}

impl DataProvider for Counting {
    fn next_batch(&mut self, size: usize) -> anyhow::Result<Batch> {
        self.requests.push(size);
        let mut batch = Batch::default();
        for _ in 0..size {
            batch.inputs.push(vec![self.next as f32]);
            batch.labels.push(self.next as u32 % self.classes);
            self.next += 1;
        }
        Ok(batch)
    }
}

/// z = (x, -x)
struct Diagonal;

impl Encoder for Diagonal {
    fn encode(&self, inputs: &[Vec<f32>]) -> anyhow::Result<Vec<LatentPoint>> {
        Ok(inputs.iter().map(|x| [x[0] as f64, -(x[0] as f64)]).collect())
    }
}

#[test]
fn mean_of_two_points() {
    let means = class_means(&[[1.0, 1.0], [3.0, 3.0]], &[0, 0]).unwrap();
    assert_eq!(means.len(), 1);
    assert_eq!(means[0].label, 0);
    assert_eq!(means[0].mean, [2.0, 2.0]);
    assert_eq!(means[0].count, 2);
}

#[test]
fn missing_classes_are_skipped() {
    let points = [[0.0, 0.0], [2.0, 4.0], [10.0, 10.0]];
    let means = class_means(&points, &[7, 7, 2]).unwrap();
    let labels: Vec<u32> = means.iter().map(|m| m.label).collect();
    assert_eq!(labels, vec![2, 7]);
    assert_eq!(means[1].mean, [1.0, 2.0]);
    assert!(means.iter().all(|m| m.mean.iter().all(|v| v.is_finite())));
    assert!(class_means(&[], &[]).unwrap().is_empty());
}

#[test]
fn mismatched_lengths_fail() {
    assert!(matches!(class_means(&[[0.0, 0.0]], &[0, 1]), Err(VizError::BatchShape(_))));
}

#[test]
fn labels_outside_class_count_fail() {
    let res = class_means_for(&[[0.0, 0.0]], &[10], 10);
    assert!(matches!(res, Err(VizError::InvalidParameter { .. })));
    assert!(class_means_for(&[[0.0, 0.0]], &[9], 10).is_ok());
}

#[test]
fn encodes_in_fixed_batches() {
    let mut provider = Counting::new(10);
    let spread = encode_test_set(&Diagonal, &mut provider, 500, 100).unwrap();
    assert_eq!(provider.requests, vec![100; 5]);
    assert_eq!(spread.len(), 500);
    assert_eq!(spread.labels.len(), 500);
    assert_eq!(spread.points[123], [123.0, -123.0]);
    assert_eq!(spread.labels[123], 3);
}

#[test]
fn remainder_gets_a_short_batch() {
    let mut provider = Counting::new(3);
    let spread = encode_test_set(&Diagonal, &mut provider, 250, 100).unwrap();
    assert_eq!(provider.requests, vec![100, 100, 50]);
    assert_eq!(spread.len(), 250);
}

#[test]
fn spread_means_match_direct_computation() {
    let mut provider = Counting::new(2);
    let spread = encode_test_set(&Diagonal, &mut provider, 4, 3).unwrap();
    // points 0..4: class 0 -> {0, 2}, class 1 -> {1, 3}
    let means = spread.class_means().unwrap();
    assert_eq!(means[0].mean, [1.0, -1.0]);
    assert_eq!(means[1].mean, [2.0, -2.0]);
}

struct Failing;

impl Encoder for Failing {
    fn encode(&self, _inputs: &[Vec<f32>]) -> anyhow::Result<Vec<LatentPoint>> {
        anyhow::bail!("no weights loaded")
    }
}

#[test]
fn encoder_failure_propagates() {
    let mut provider = Counting::new(10);
    let res = encode_test_set(&Failing, &mut provider, 10, 5);
    assert!(matches!(res, Err(VizError::Encode(_))));
    assert_eq!(provider.requests, vec![5]);
}

struct Short;

impl DataProvider for Short {
    fn next_batch(&mut self, size: usize) -> anyhow::Result<Batch> {
        Ok(Batch { inputs: vec![vec![0.0]; size - 1], labels: vec![0; size - 1] })
    }
}

#[test]
fn short_batches_are_rejected() {
    let res = encode_test_set(&Diagonal, &mut Short, 10, 5);
    assert!(matches!(res, Err(VizError::BatchShape(_))));
}

#[test]
fn zero_batch_size_is_invalid() {
    let mut provider = Counting::new(10);
    assert!(encode_test_set(&Diagonal, &mut provider, 10, 0).is_err());
    assert!(provider.requests.is_empty());
}
