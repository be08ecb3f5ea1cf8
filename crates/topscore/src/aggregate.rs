//! Selection of the top-scoring group.

use std::cmp::Ordering;

use tracing::debug;

use crate::error::{Error, Result};
use crate::record::Record;

/// The records sharing the highest score, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct TopGroup {
    pub score: f64,
    pub records: Vec<Record>,
}

/// Find the highest score and every record that has it.
///
/// Single pass: a strictly higher score starts a new group, an equal score
/// joins the current one. Scores compare with `f64::total_cmp`, so `-0.0`
/// ranks below `0.0` and the two never share a group. NaN is rejected when
/// parsing and never reaches this point.
pub fn top_group(records: impl IntoIterator<Item = Record>) -> Result<TopGroup> {
    let mut records = records.into_iter();
    let first = records.next().ok_or(Error::EmptyDataset)?;

    let mut group = TopGroup {
        score: first.score(),
        records: vec![first],
    };

    for record in records {
        match record.score().total_cmp(&group.score) {
            Ordering::Greater => {
                group.score = record.score();
                group.records.clear();
                group.records.push(record);
            }
            Ordering::Equal => group.records.push(record),
            Ordering::Less => {}
        }
    }

    debug!(
        "Top score {} shared by {} record(s)",
        group.score,
        group.records.len()
    );
    Ok(group)
}

/// Records sharing the highest score, in input order.
pub fn top_scorers(records: impl IntoIterator<Item = Record>) -> Result<Vec<Record>> {
    top_group(records).map(|group| group.records)
}
