// File: crates/latent-demo/src/lib.rs
// Summary: Toy VAE and data providers used by the latent-demo binary.

pub mod data;
pub mod toy;

pub use data::{CsvProvider, RingProvider};
pub use toy::ToyVae;
