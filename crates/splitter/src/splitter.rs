use std::path::{Path, PathBuf};

use csv::ByteRecord;
use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, SplitError};
use crate::mode::SplitMode;
use crate::naming;
use crate::plan::SplitPlan;
use crate::reader::{self, Table};
use crate::report::SplitReport;
use crate::writer::PartSink;

#[derive(Debug, Clone)]
pub struct SplitOptions {
    pub mode: SplitMode,
    /// Shuffle the whole row sequence before partitioning.
    pub shuffle: bool,
    /// Prepended to every output file name.
    pub prefix: String,
    /// Defaults to the source file's directory.
    pub outdir: Option<PathBuf>,
    /// Field delimiter for reading and writing.
    pub delimiter: u8,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            mode: SplitMode::ByCount(2),
            shuffle: false,
            prefix: String::new(),
            outdir: None,
            delimiter: b',',
        }
    }
}

impl SplitOptions {
    pub fn resolved_outdir(&self, source: &Path) -> PathBuf {
        self.outdir
            .clone()
            .unwrap_or_else(|| naming::default_outdir(source))
    }
}

/// One output file's worth of rows, borrowed from the source table.
#[derive(Debug, Clone, PartialEq)]
pub struct Part<'t> {
    pub path: PathBuf,
    pub rows: Vec<&'t ByteRecord>,
}

/// The result of planning a split: the arithmetic and the parts it produced.
#[derive(Debug, Clone)]
pub struct Split<'t> {
    pub plan: SplitPlan,
    pub parts: Vec<Part<'t>>,
}

/// Decides which rows go to which output file. Does no I/O.
pub struct Splitter {
    options: SplitOptions,
}

impl Splitter {
    pub fn new(options: SplitOptions) -> Self {
        Self { options }
    }

    /// Partition `table` into equally sized parts.
    ///
    /// Every check happens before any row is assigned, so an error means no
    /// part was produced. Remainder rows are dropped from the end of the
    /// (possibly shuffled) order.
    pub fn split<'t, R: Rng + ?Sized>(
        &self,
        source: &Path,
        table: &'t Table,
        rng: &mut R,
    ) -> Result<Split<'t>> {
        let mode = &self.options.mode;
        mode.validate()?;
        let plan = SplitPlan::new(table.len(), mode.part_count())?;

        let mut order: Vec<usize> = (0..table.len()).collect();
        if self.options.shuffle {
            order.shuffle(rng);
        }

        if plan.discarded() > 0 {
            warn!(
                "{} rows do not divide evenly into {} parts, discarding the last {}",
                plan.total_rows(),
                plan.parts(),
                plan.discarded()
            );
        }

        let outdir = self.options.resolved_outdir(source);
        let paths = naming::output_paths(mode, source, &outdir, &self.options.prefix);
        debug!(
            "Splitting {} rows into {} parts of {} rows",
            plan.total_rows(),
            plan.parts(),
            plan.rows_per_part()
        );

        let parts = paths
            .into_iter()
            .enumerate()
            .map(|(i, path)| Part {
                path,
                rows: order[plan.range(i)].iter().map(|&r| &table.rows[r]).collect(),
            })
            .collect();

        Ok(Split { plan, parts })
    }
}

/// Read `source`, split it and hand every part to `sink`.
///
/// The source is read first, then the output directory and all split
/// parameters are checked before the sink sees anything.
pub fn split_csv<R, S>(source: &Path, options: &SplitOptions, rng: &mut R, sink: &mut S) -> Result<SplitReport>
where
    R: Rng + ?Sized,
    S: PartSink + ?Sized,
{
    let table = reader::read_table(source, options.delimiter)?;

    let outdir = options.resolved_outdir(source);
    if !outdir.is_dir() {
        return Err(SplitError::OutputDir(outdir));
    }
    let splitter = Splitter::new(options.clone());
    let split = splitter.split(source, &table, rng)?;

    for part in &split.parts {
        sink.write_part(&part.path, &table, &part.rows)?;
    }

    Ok(SplitReport::new(source, &split))
}
