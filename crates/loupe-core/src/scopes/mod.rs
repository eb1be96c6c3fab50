//! Scope computation over the whole image.

pub mod histogram;

pub use histogram::{BarLayer, HistogramData};
