use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::splitter::Split;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartSummary {
    pub path: PathBuf,
    pub rows: usize,
}

/// What a split did, suitable for printing or serialising.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    pub source: PathBuf,
    pub total_rows: usize,
    pub rows_per_part: usize,
    pub discarded: usize,
    pub parts: Vec<PartSummary>,
}

impl SplitReport {
    pub fn new(source: &Path, split: &Split<'_>) -> Self {
        Self {
            source: source.to_path_buf(),
            total_rows: split.plan.total_rows(),
            rows_per_part: split.plan.rows_per_part(),
            discarded: split.plan.discarded(),
            parts: split
                .parts
                .iter()
                .map(|p| PartSummary {
                    path: p.path.clone(),
                    rows: p.rows.len(),
                })
                .collect(),
        }
    }
}
