//! ELECTRE module - Weight normalization and performance data entry.

mod normalizer;
mod worksheet;

pub use normalizer::WeightNormalizer;
pub use worksheet::{ElectreWorksheet, PerformanceGrid};
