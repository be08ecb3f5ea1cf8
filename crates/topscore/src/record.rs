use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use thiserror::Error;

use crate::config::{FIELD_DELIMITER, MIN_FIELDS, OUTPUT_SEPARATOR};

/// A single scored entry read from the input file.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    name: String,
    surname: String,
    score: f64,
}

impl Record {
    pub fn new(name: impl Into<String>, surname: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            score,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

/// Renders `name surname`. The score is not part of the output form.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, OUTPUT_SEPARATOR, self.surname)
    }
}

#[derive(Debug, Error)]
pub enum RecordParseError {
    #[error("missing {field} field (expected {expected} fields, found {found})", expected = MIN_FIELDS)]
    MissingField { field: &'static str, found: usize },

    #[error("invalid score {value:?}: {source}")]
    InvalidScore {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("score is NaN")]
    NanScore,
}

impl FromStr for Record {
    type Err = RecordParseError;

    /// Parse `name,surname,score`. Name and surname are taken verbatim,
    /// the score is trimmed before parsing.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut fields = line.split(FIELD_DELIMITER);
        // split always yields at least one item
        let name = fields.next().unwrap_or_default();
        let surname = fields.next().ok_or(RecordParseError::MissingField {
            field: "surname",
            found: 1,
        })?;
        let raw_score = fields.next().ok_or(RecordParseError::MissingField {
            field: "score",
            found: 2,
        })?;

        let score: f64 = raw_score
            .trim()
            .parse()
            .map_err(|source| RecordParseError::InvalidScore {
                value: raw_score.to_string(),
                source,
            })?;
        if score.is_nan() {
            return Err(RecordParseError::NanScore);
        }

        Ok(Self::new(name, surname, score))
    }
}
