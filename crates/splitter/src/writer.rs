use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{ByteRecord, WriterBuilder};
use log::info;

use crate::error::{Result, SplitError};
use crate::reader::{Table, UTF8_BOM};

/// Receives each finished part: where it goes, the source table (for its
/// header) and the part's rows.
pub trait PartSink {
    fn write_part(&mut self, path: &Path, source: &Table, rows: &[&ByteRecord]) -> Result<()>;
}

/// Writes each part as a delimited text file, replacing anything already there.
#[derive(Debug, Clone, Copy)]
pub struct CsvPartWriter {
    delimiter: u8,
}

impl CsvPartWriter {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl Default for CsvPartWriter {
    fn default() -> Self {
        Self::new(b',')
    }
}

impl PartSink for CsvPartWriter {
    fn write_part(&mut self, path: &Path, table: &Table, rows: &[&ByteRecord]) -> Result<()> {
        let dest_err = |source| SplitError::DestinationWrite {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::create(path).map_err(|e| dest_err(e.into()))?;
        if table.bom {
            file.write_all(UTF8_BOM).map_err(|e| dest_err(e.into()))?;
        }

        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_writer(file);

        writer.write_byte_record(&table.header).map_err(dest_err)?;
        for row in rows {
            writer.write_byte_record(row).map_err(dest_err)?;
        }
        writer.flush().map_err(|e| dest_err(e.into()))?;

        info!("Wrote {} rows to {:?}", rows.len(), path);
        Ok(())
    }
}

/// Sink for `--dry-run`: reports what would be written and touches nothing.
#[derive(Debug, Default)]
pub struct DryRun;

impl PartSink for DryRun {
    fn write_part(&mut self, path: &Path, _source: &Table, rows: &[&ByteRecord]) -> Result<()> {
        info!("Would write {} rows to {:?}", rows.len(), path);
        Ok(())
    }
}
