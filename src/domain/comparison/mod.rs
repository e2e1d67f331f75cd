//! Pairwise comparison module - Reciprocal matrices and AHP hierarchy state.

mod assembler;
mod hierarchy;
mod reciprocal_matrix;

pub use assembler::{DenseMatrix, MatrixAssembler};
pub use hierarchy::{AhpHierarchy, AssembledHierarchy};
pub use reciprocal_matrix::ReciprocalMatrix;
