//! Writing selected records to the output file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::record::Record;

/// Write each record's display form on its own line.
pub fn write_to<W: Write>(records: &[Record], mut out: W) -> io::Result<()> {
    for record in records {
        writeln!(out, "{record}")?;
    }
    out.flush()
}

/// Create or truncate `path` and write `records` to it.
///
/// The handle is closed when this returns, on success or failure.
pub fn write_records(records: &[Record], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let unwritable = |source| Error::OutputUnwritable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(unwritable)?;
    write_to(records, BufWriter::new(file)).map_err(unwritable)?;

    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_write_to_one_line_per_record() {
        let records = vec![
            Record::new("Joe", "Doe", 96.5),
            Record::new("Jack", "Daniels", 96.5),
        ];
        let mut buf = Vec::new();
        write_to(&records, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Joe Doe\nJack Daniels\n");
    }

    #[test]
    fn test_write_to_empty_slice_writes_nothing() {
        let mut buf = Vec::new();
        write_to(&[], &mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_write_records_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "old line 1\nold line 2\nold line 3\n").unwrap();

        write_records(&[Record::new("John", "Doe", 96.0)], &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "John Doe\n");
    }

    #[test]
    fn test_write_records_missing_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.txt");

        let err = write_records(&[Record::new("John", "Doe", 96.0)], &path).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::OutputUnwritable);
        assert!(!path.exists());
    }
}
