//! Matrix Assembler - Densification of sparse comparison stores.

use super::ReciprocalMatrix;

/// A dense row-major matrix of reals, ready for the wire.
pub type DenseMatrix = Vec<Vec<f64>>;

/// Assembly functions turning sparse edit stores into solver-ready matrices.
pub struct MatrixAssembler;

impl MatrixAssembler {
    /// Densifies a comparison store into an `n x n` matrix.
    ///
    /// The diagonal is `1.0`, entered cells are copied verbatim, and cells
    /// never entered become `0.0`, an explicit "incomplete input" sentinel.
    /// The assembler does not fail on incomplete matrices; rejecting zero
    /// comparisons is the solver's responsibility. The output depends only
    /// on the store's current contents, not on edit order.
    pub fn densify(matrix: &ReciprocalMatrix) -> DenseMatrix {
        let n = matrix.size();
        (0..n)
            .map(|i| (0..n).map(|j| matrix.get(i, j).unwrap_or(0.0)).collect())
            .collect()
    }
}
