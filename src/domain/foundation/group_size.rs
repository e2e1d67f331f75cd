//! Group size value object (criteria/alternative counts, 2-10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Number of criteria, alternatives, or options in a comparison table.
///
/// Pairwise comparison only makes sense for at least two items, and the
/// entry tables cap out at ten, so the value is bounded to `2..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupSize(u8);

impl GroupSize {
    /// Smallest meaningful comparison group.
    pub const MIN: u8 = 2;

    /// Largest supported comparison group.
    pub const MAX: u8 = 10;

    /// Creates a GroupSize, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "group size",
                Self::MIN as i32,
                Self::MAX as i32,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a usize, for indexing.
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for GroupSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
