//! Parse, select and write in one call.

use std::path::Path;

use tracing::info;

use crate::aggregate::top_group;
use crate::error::Result;
use crate::parser::parse_file;
use crate::writer::write_records;

/// Figures from a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub records_read: usize,
    pub top_score: f64,
    pub selected: usize,
}

/// Read `input`, pick the top-scoring records and write them to `output`.
///
/// The output file is only opened once the input has been fully parsed and
/// a top group found, so a bad input never touches it.
pub fn run(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<Summary> {
    let input = input.as_ref();
    let output = output.as_ref();

    let records = parse_file(input)?;
    let records_read = records.len();
    let group = top_group(records)?;
    write_records(&group.records, output)?;

    let summary = Summary {
        records_read,
        top_score: group.score,
        selected: group.records.len(),
    };
    info!(
        "Wrote {} of {} records (top score {}) to {}",
        summary.selected,
        summary.records_read,
        summary.top_score,
        output.display()
    );
    Ok(summary)
}
