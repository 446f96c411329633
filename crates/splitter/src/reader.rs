use std::fs;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use log::debug;

use crate::error::{Result, SplitError};

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Header plus every data row of a source file, loaded once and left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub header: ByteRecord,
    pub rows: Vec<ByteRecord>,
    /// The source started with a UTF-8 byte order mark, which the csv reader drops from the header.
    pub bom: bool,
}

impl Table {
    pub fn new(header: ByteRecord, rows: Vec<ByteRecord>) -> Self {
        Self {
            header,
            rows,
            bom: false,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read the header and all rows from `path`.
///
/// Rows are kept as opaque records: their field count is not checked against
/// the header. Blank lines are skipped by the reader.
pub fn read_table<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Table> {
    let path = path.as_ref();
    let source_err = |source| SplitError::SourceRead {
        path: path.to_path_buf(),
        source,
    };

    let data = fs::read(path).map_err(|e| source_err(e.into()))?;
    let bom = data.starts_with(UTF8_BOM);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(data.as_slice());

    let header = reader.byte_headers().map_err(source_err)?.clone();
    if header.is_empty() {
        return Err(SplitError::MissingHeader(path.to_path_buf()));
    }

    let rows = reader
        .byte_records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(source_err)?;

    debug!("Read {} rows with {} columns from {:?}", rows.len(), header.len(), path);
    Ok(Table { header, rows, bom })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_reads_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "t.csv", "id,name\n1,a\n2,b\n3,c\n");

        let table = read_table(&path, b',').unwrap();
        assert_eq!(table.header, ByteRecord::from(vec!["id", "name"]));
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows[2], ByteRecord::from(vec!["3", "c"]));
    }

    #[test]
    fn test_blank_lines_are_not_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "t.csv", "id\n1\n\n2\n\n");
        assert_eq!(read_table(&path, b',').unwrap().len(), 2);
    }

    #[test]
    fn test_detects_byte_order_mark() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "bom.csv", "\u{feff}id,name\n1,a\n");

        let table = read_table(&path, b',').unwrap();
        assert!(table.bom);
        assert_eq!(&table.header[0], b"id");

        let plain = write_file(&dir, "plain.csv", "id,name\n1,a\n");
        assert!(!read_table(&plain, b',').unwrap().bom);
    }

    #[test]
    fn test_ragged_rows_pass_through() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "t.csv", "a,b,c\n1,2\n4,5,6,7\n");

        let table = read_table(&path, b',').unwrap();
        assert_eq!(table.rows[0].len(), 2);
        assert_eq!(table.rows[1].len(), 4);
    }

    #[test]
    fn test_quoted_fields_survive() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "t.csv", "k,v\n1,\"x, with comma\"\n2,\"multi\nline\"\n");

        let table = read_table(&path, b',').unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(&table.rows[0][1], b"x, with comma");
        assert_eq!(&table.rows[1][1], b"multi\nline");
    }

    #[test]
    fn test_custom_delimiter() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "t.tsv", "a\tb\n1\t2\n");
        let table = read_table(&path, b'\t').unwrap();
        assert_eq!(table.header.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_table(dir.path().join("nope.csv"), b',').unwrap_err();
        assert!(matches!(err, SplitError::SourceRead { .. }));
    }

    #[test]
    fn test_empty_file_has_no_header() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty.csv", "");
        assert!(matches!(
            read_table(&path, b','),
            Err(SplitError::MissingHeader(_))
        ));
    }
}
