//! Reading records from the input file.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::record::Record;

/// Lazily parses records from a buffered reader, one per non-blank line.
///
/// Blank lines are skipped but still counted, so the line numbers reported
/// in [`Error::MalformedRecord`] match what an editor shows.
pub struct RecordReader<R> {
    lines: Lines<R>,
    path: PathBuf,
    line: usize,
}

impl<R: BufRead> RecordReader<R> {
    /// `path` is only used to label read errors.
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            lines: reader.lines(),
            path: path.into(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = match self.lines.next()? {
                Ok(text) => text,
                Err(source) => {
                    return Some(Err(Error::InputUnreadable {
                        path: self.path.clone(),
                        source,
                    }));
                }
            };
            self.line += 1;

            if text.trim().is_empty() {
                continue;
            }

            let line = self.line;
            return Some(
                text.parse::<Record>()
                    .map_err(|source| Error::MalformedRecord { line, source }),
            );
        }
    }
}

/// Parse every record from `reader`, stopping at the first bad line.
pub fn parse_reader<R: BufRead>(reader: R, path: impl Into<PathBuf>) -> Result<Vec<Record>> {
    RecordReader::new(reader, path).collect()
}

/// Open `path` and parse every record in it, in file order.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::from_input_io(path.to_path_buf(), e))?;

    let records = parse_reader(BufReader::new(file), path)?;
    debug!("Parsed {} records from {}", records.len(), path.display());
    Ok(records)
}
