use std::io;
use std::path::PathBuf;

use strum::IntoStaticStr;
use thiserror::Error;

use crate::record::RecordParseError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to read input file {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed record on line {line}: {source}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: RecordParseError,
    },

    #[error("No records found in input")]
    EmptyDataset,

    #[error("Failed to write output file {}: {source}", path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of a failed run.
///
/// `MissingArguments` never comes out of the library. The CLI logs it when
/// the input or output path is absent, before any file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ErrorKind {
    MissingArguments,
    InputNotFound,
    InputUnreadable,
    MalformedRecord,
    EmptyDataset,
    OutputUnwritable,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InputNotFound { .. } => ErrorKind::InputNotFound,
            Self::InputUnreadable { .. } => ErrorKind::InputUnreadable,
            Self::MalformedRecord { .. } => ErrorKind::MalformedRecord,
            Self::EmptyDataset => ErrorKind::EmptyDataset,
            Self::OutputUnwritable { .. } => ErrorKind::OutputUnwritable,
        }
    }

    /// Map a failure to open the input into the right variant.
    pub(crate) fn from_input_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::InputNotFound { path }
        } else {
            Self::InputUnreadable { path, source }
        }
    }
}
