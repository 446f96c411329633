use std::collections::HashSet;

use crate::error::{Result, SplitError};

/// Characters that may not appear in an explicit output name.
const RESERVED_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// How the number of parts, and their names, are decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitMode {
    /// Split into `n` parts named after the source file stem and a 1-based index.
    ByCount(usize),
    /// One part per name, in order.
    ByNames(Vec<String>),
}

impl SplitMode {
    /// Build a mode from two mutually exclusive optional inputs.
    ///
    /// Exactly one must be present; anything else is [`SplitError::AmbiguousMode`].
    pub fn from_options(split_count: Option<usize>, rename: Option<Vec<String>>) -> Result<Self> {
        match (split_count, rename) {
            (Some(n), None) => Ok(SplitMode::ByCount(n)),
            (None, Some(names)) => Ok(SplitMode::ByNames(names)),
            _ => Err(SplitError::AmbiguousMode),
        }
    }

    /// Number of parts this mode asks for.
    pub fn part_count(&self) -> usize {
        match self {
            SplitMode::ByCount(n) => *n,
            SplitMode::ByNames(names) => names.len(),
        }
    }

    /// Checks the rename list; count bounds are checked against the row count by the plan.
    pub fn validate(&self) -> Result<()> {
        let names = match self {
            SplitMode::ByCount(_) => return Ok(()),
            SplitMode::ByNames(names) => names,
        };

        if names.len() < 2 {
            return Err(SplitError::InvalidRenameList(format!(
                "at least 2 names are required, got {}",
                names.len()
            )));
        }

        let mut seen = HashSet::new();
        for name in names {
            if name.is_empty() || name == "null" {
                return Err(SplitError::InvalidRenameList(format!(
                    "{:?} is not a usable file name",
                    name
                )));
            }
            if name.contains(RESERVED_CHARS) {
                return Err(SplitError::InvalidRenameList(format!(
                    "{:?} contains a reserved character",
                    name
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(SplitError::InvalidRenameList(format!(
                    "{:?} is given more than once",
                    name
                )));
            }
        }
        Ok(())
    }
}
