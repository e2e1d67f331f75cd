//! Reciprocal Matrix Store - Editable pairwise comparison matrix.
//!
//! Stores the upper-triangle judgments a user has entered so far and keeps
//! the lower triangle reciprocal on every accepted write. The diagonal is
//! implicitly 1 and is never stored.
//!
//! # Edit policy
//!
//! Edits are accepted only for upper-triangle cells (`row < col`) with a
//! finite, strictly positive value. Anything else is a quiet no-op: bad
//! keystrokes are ignored rather than surfaced as errors. The store performs
//! no transitive-consistency repair beyond exact reciprocity; judging
//! coherence is the solver's job (consistency ratio).

use std::collections::HashMap;

/// Number of decimal digits kept on computed reciprocal entries.
const RECIPROCAL_PRECISION: f64 = 10_000.0;

/// A sparse `size x size` pairwise reciprocal matrix.
///
/// Every stored `(i, j)` entry has its reciprocal stored at `(j, i)`;
/// cells that have not been entered yet are absent from the map and
/// densify to the `0.0` "missing input" sentinel. Direct zero entry is
/// rejected at the edit boundary, which keeps that sentinel unambiguous.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReciprocalMatrix {
    size: usize,
    cells: HashMap<(usize, usize), f64>,
}

impl ReciprocalMatrix {
    /// Creates an empty matrix of the given logical size.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: HashMap::new(),
        }
    }

    /// Returns the logical size `n` of the `n x n` matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of entered comparisons (upper-triangle cells).
    pub fn entered_count(&self) -> usize {
        self.cells.len() / 2
    }

    /// Returns true if no comparison has been entered yet.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Records a raw text edit for the cell at `(row, col)`.
    ///
    /// Returns `true` when the edit was applied. The edit is ignored when
    /// the cell is not an in-range upper-triangle cell or when `input` does
    /// not parse to a finite number greater than zero.
    pub fn enter(&mut self, row: usize, col: usize, input: &str) -> bool {
        match input.trim().parse::<f64>() {
            Ok(value) => self.set_value(row, col, value),
            Err(_) => false,
        }
    }

    /// Records an already-parsed comparison value for `(row, col)`.
    ///
    /// Same acceptance rules as [`enter`](Self::enter): upper triangle only,
    /// finite and strictly positive. On acceptance the reciprocal is stored
    /// at `(col, row)`, rounded to four decimal digits.
    pub fn set_value(&mut self, row: usize, col: usize, value: f64) -> bool {
        if row >= col || col >= self.size {
            return false;
        }
        if !value.is_finite() || value <= 0.0 {
            return false;
        }
        self.cells.insert((row, col), value);
        self.cells.insert((col, row), round_reciprocal(value));
        true
    }

    /// Returns the entry at `(row, col)`.
    ///
    /// The in-range diagonal always reads `1.0`. Cells that have not been
    /// entered yet read `None`; callers treat that as "not yet provided".
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.size || col >= self.size {
            return None;
        }
        if row == col {
            return Some(1.0);
        }
        self.cells.get(&(row, col)).copied()
    }

    /// Removes every entered comparison, keeping the size.
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

/// Fixed-precision reciprocal, matching what a user would see echoed back
/// in the read-only half of the entry table.
fn round_reciprocal(value: f64) -> f64 {
    ((1.0 / value) * RECIPROCAL_PRECISION).round() / RECIPROCAL_PRECISION
}
