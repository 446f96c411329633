use std::ops::Range;

use crate::error::{Result, SplitError};

/// Row arithmetic for one split: every part gets the same number of rows and
/// the remainder is dropped from the tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPlan {
    total_rows: usize,
    parts: usize,
    rows_per_part: usize,
}

impl SplitPlan {
    pub fn new(total_rows: usize, parts: usize) -> Result<Self> {
        let rows_per_part = if parts == 0 { 0 } else { total_rows / parts };
        if rows_per_part == 0 {
            return Err(SplitError::InvalidSplitCount {
                requested: i64::try_from(parts).unwrap_or(i64::MAX),
                available: Some(total_rows),
            });
        }

        Ok(Self {
            total_rows,
            parts,
            rows_per_part,
        })
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn parts(&self) -> usize {
        self.parts
    }

    pub fn rows_per_part(&self) -> usize {
        self.rows_per_part
    }

    /// Rows that end up in some part.
    pub fn used_rows(&self) -> usize {
        self.rows_per_part * self.parts
    }

    /// Trailing rows left out, always fewer than `parts`.
    pub fn discarded(&self) -> usize {
        self.total_rows - self.used_rows()
    }

    /// Positions (in the possibly shuffled order) covered by part `index`.
    pub fn range(&self, index: usize) -> Range<usize> {
        let start = index * self.rows_per_part;
        start..start + self.rows_per_part
    }
}
