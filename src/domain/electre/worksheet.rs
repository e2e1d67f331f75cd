//! ELECTRE worksheet - Criterion weights and raw performance data.
//!
//! Unlike the pairwise tables, performance data is entered directly: one row
//! per option, one column per criterion, no reciprocity constraint. Weights
//! and cells are kept sparse while editing and densified to 0 at submit
//! time, matching the "missing input reads as zero" convention of the
//! comparison stores.

use std::collections::HashMap;

use crate::domain::comparison::DenseMatrix;
use crate::domain::foundation::GroupSize;

use super::WeightNormalizer;

/// Sparse grid of directly entered real values.
///
/// Shared between the ELECTRE worksheet and the combined pipeline; any
/// finite real is accepted, bad keystrokes are quietly ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceGrid {
    rows: usize,
    cols: usize,
    cells: HashMap<(usize, usize), f64>,
}

impl PerformanceGrid {
    /// Creates an empty `rows x cols` grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: HashMap::new(),
        }
    }

    /// Number of rows (options).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (criteria).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Records a raw text edit; returns `true` when applied.
    ///
    /// Out-of-range cells and input that does not parse to a finite number
    /// are ignored. Zero is a legitimate performance value here.
    pub fn enter(&mut self, row: usize, col: usize, input: &str) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        match input.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => {
                self.cells.insert((row, col), value);
                true
            }
            _ => false,
        }
    }

    /// Returns the entered value, if any.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.cells.get(&(row, col)).copied()
    }

    /// Densifies the grid, reading unset cells as `0.0`.
    pub fn to_dense(&self) -> DenseMatrix {
        (0..self.rows)
            .map(|i| {
                (0..self.cols)
                    .map(|j| self.get(i, j).unwrap_or(0.0))
                    .collect()
            })
            .collect()
    }
}

/// Editable state for one ELECTRE ranking request.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectreWorksheet {
    weights: HashMap<usize, f64>,
    performance: PerformanceGrid,
}

impl ElectreWorksheet {
    /// Creates a worksheet for `options` alternatives over `criteria`.
    pub fn new(criteria: GroupSize, options: GroupSize) -> Self {
        Self {
            weights: HashMap::new(),
            performance: PerformanceGrid::new(options.as_usize(), criteria.as_usize()),
        }
    }

    /// Number of criteria columns.
    pub fn criteria_count(&self) -> usize {
        self.performance.cols()
    }

    /// Number of option rows.
    pub fn option_count(&self) -> usize {
        self.performance.rows()
    }

    /// Records a raw weight edit for one criterion; returns `true` when applied.
    ///
    /// Weights must parse to a finite, non-negative number; anything else is
    /// quietly ignored.
    pub fn enter_weight(&mut self, criterion: usize, input: &str) -> bool {
        if criterion >= self.criteria_count() {
            return false;
        }
        match input.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => {
                self.weights.insert(criterion, value);
                true
            }
            _ => false,
        }
    }

    /// Records a performance cell edit; returns `true` when applied.
    pub fn enter_performance(&mut self, option: usize, criterion: usize, input: &str) -> bool {
        self.performance.enter(option, criterion, input)
    }

    /// Raw weight vector, with unentered criteria reading `0.0`.
    pub fn raw_weights(&self) -> Vec<f64> {
        (0..self.criteria_count())
            .map(|i| self.weights.get(&i).copied().unwrap_or(0.0))
            .collect()
    }

    /// Normalized weight vector.
    ///
    /// Indeterminate (all NaN) when no positive weight has been entered;
    /// see [`WeightNormalizer::normalize`].
    pub fn normalized_weights(&self) -> Vec<f64> {
        WeightNormalizer::normalize(&self.raw_weights())
    }

    /// Dense `options x criteria` performance matrix.
    pub fn performance_matrix(&self) -> DenseMatrix {
        self.performance.to_dense()
    }
}
