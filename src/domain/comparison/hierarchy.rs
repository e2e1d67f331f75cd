//! Hierarchy Coordinator - Full AHP input state.
//!
//! A full AHP submission needs one criteria-vs-criteria matrix and one
//! alternatives-vs-alternatives matrix per criterion. Only one alternative
//! matrix is on screen at a time (the "active" criterion), but edits made
//! under any criterion must survive switching focus and all of them must be
//! read back at submit time.

use crate::domain::foundation::GroupSize;

use super::{DenseMatrix, MatrixAssembler, ReciprocalMatrix};

/// The densified payload of a full AHP hierarchy, index-aligned with the
/// criteria: `alternatives[k]` compares the alternatives under criterion `k`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledHierarchy {
    pub criteria: DenseMatrix,
    pub alternatives: Vec<DenseMatrix>,
}

/// Editable state for a full AHP hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct AhpHierarchy {
    criteria: ReciprocalMatrix,
    alternatives: Vec<ReciprocalMatrix>,
    alternative_count: usize,
    active_criterion: usize,
}

impl AhpHierarchy {
    /// Creates a hierarchy with empty comparison stores.
    ///
    /// Allocates one `criteria x criteria` store plus `criteria` stores of
    /// `alternatives x alternatives` each, all empty until first edit.
    pub fn new(criteria: GroupSize, alternatives: GroupSize) -> Self {
        let criteria_count = criteria.as_usize();
        let alternative_count = alternatives.as_usize();
        Self {
            criteria: ReciprocalMatrix::new(criteria_count),
            alternatives: (0..criteria_count)
                .map(|_| ReciprocalMatrix::new(alternative_count))
                .collect(),
            alternative_count,
            active_criterion: 0,
        }
    }

    /// Number of criteria being compared.
    pub fn criteria_count(&self) -> usize {
        self.criteria.size()
    }

    /// Number of alternatives compared under each criterion.
    pub fn alternative_count(&self) -> usize {
        self.alternative_count
    }

    /// The criterion whose alternative matrix is currently being edited.
    pub fn active_criterion(&self) -> usize {
        self.active_criterion
    }

    /// Selects which criterion's alternative matrix receives edits.
    ///
    /// Returns `false` without changing focus when `k` is out of range.
    pub fn set_active_criterion(&mut self, k: usize) -> bool {
        if k >= self.criteria_count() {
            return false;
        }
        self.active_criterion = k;
        true
    }

    /// Applies new counts, discarding all entered data when either changes.
    ///
    /// With both counts unchanged this is a no-op. Otherwise every store is
    /// rebuilt empty; the active criterion is kept when still in range and
    /// clamped back to `0` when the criteria count shrank below it.
    pub fn resize(&mut self, criteria: GroupSize, alternatives: GroupSize) {
        let criteria_count = criteria.as_usize();
        let alternative_count = alternatives.as_usize();
        if criteria_count == self.criteria_count() && alternative_count == self.alternative_count {
            return;
        }
        self.criteria = ReciprocalMatrix::new(criteria_count);
        self.alternatives = (0..criteria_count)
            .map(|_| ReciprocalMatrix::new(alternative_count))
            .collect();
        self.alternative_count = alternative_count;
        if self.active_criterion >= criteria_count {
            self.active_criterion = 0;
        }
    }

    /// Records an edit in the criteria-vs-criteria matrix.
    pub fn enter_criteria_comparison(&mut self, row: usize, col: usize, input: &str) -> bool {
        self.criteria.enter(row, col, input)
    }

    /// Records an edit in the active criterion's alternative matrix.
    pub fn enter_alternative_comparison(&mut self, row: usize, col: usize, input: &str) -> bool {
        self.alternatives[self.active_criterion].enter(row, col, input)
    }

    /// Read-only view of the criteria matrix.
    pub fn criteria_matrix(&self) -> &ReciprocalMatrix {
        &self.criteria
    }

    /// Read-only view of the alternative matrix for criterion `k`.
    pub fn alternative_matrix(&self, k: usize) -> Option<&ReciprocalMatrix> {
        self.alternatives.get(k)
    }

    /// Densifies the whole hierarchy for submission.
    ///
    /// Reads every stored alternative matrix, not only the active one, so
    /// edits made while a different criterion had focus are included.
    pub fn assemble(&self) -> AssembledHierarchy {
        AssembledHierarchy {
            criteria: MatrixAssembler::densify(&self.criteria),
            alternatives: self
                .alternatives
                .iter()
                .map(MatrixAssembler::densify)
                .collect(),
        }
    }
}
