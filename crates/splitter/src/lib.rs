pub mod error;
pub mod mode;
pub mod naming;
pub mod plan;
pub mod reader;
pub mod report;
pub mod splitter;
pub mod writer;

pub use error::SplitError;
pub use mode::SplitMode;
pub use plan::SplitPlan;
pub use reader::{read_table, Table};
pub use report::{PartSummary, SplitReport};
pub use splitter::{split_csv, Part, Split, SplitOptions, Splitter};
pub use writer::{CsvPartWriter, DryRun, PartSink};
