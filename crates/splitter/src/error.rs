use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Invalid split count {requested}: {}", count_bounds(.available))]
    InvalidSplitCount {
        requested: i64,
        /// Row count, when the source had been read before the check.
        available: Option<usize>,
    },

    #[error("Invalid rename list: {0}")]
    InvalidRenameList(String),

    #[error("Exactly one of a split count or a rename list must be given")]
    AmbiguousMode,

    #[error("Failed to read {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("No header row in {}", .0.display())]
    MissingHeader(PathBuf),

    #[error("Output directory {} does not exist or is not a directory", .0.display())]
    OutputDir(PathBuf),

    #[error("Failed to write {}: {source}", .path.display())]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

fn count_bounds(available: &Option<usize>) -> String {
    match available {
        Some(rows) => format!("must be between 1 and the {} available rows", rows),
        None => "must be at least 1".to_string(),
    }
}

impl SplitError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            SplitError::SourceRead { .. } | SplitError::MissingHeader(_) => 1,
            SplitError::OutputDir(_) | SplitError::DestinationWrite { .. } => 2,
            SplitError::InvalidRenameList(_) => 3,
            SplitError::InvalidSplitCount { .. } => 4,
            SplitError::AmbiguousMode => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, SplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = SplitError::OutputDir(PathBuf::from("/no/such/dir"));
        assert_eq!(
            err.to_string(),
            "Output directory /no/such/dir does not exist or is not a directory"
        );

        let err = SplitError::InvalidSplitCount { requested: 5, available: Some(4) };
        assert!(err.to_string().contains("5"));
        assert!(err.to_string().contains("4 available rows"));

        let err = SplitError::InvalidSplitCount { requested: -1, available: None };
        assert_eq!(err.to_string(), "Invalid split count -1: must be at least 1");
    }

    #[test]
    fn test_exit_codes_are_distinct_per_category() {
        assert_eq!(SplitError::AmbiguousMode.exit_code(), 5);
        assert_eq!(SplitError::InvalidRenameList("x".into()).exit_code(), 3);
        assert_eq!(
            SplitError::InvalidSplitCount { requested: 0, available: Some(1) }.exit_code(),
            4
        );
        assert_eq!(SplitError::MissingHeader(PathBuf::from("a.csv")).exit_code(), 1);
    }
}
