//! # topscore
//!
//! Picks the top-scoring entries out of a `name,surname,score` file.
//!
//! This crate provides:
//! - `Record` and its line parser
//! - Input reading (`parse_file`, `RecordReader`)
//! - Top group selection with stable tie order (`top_scorers`)
//! - Output writing (`write_records`)
//! - `run`, which chains the three

pub mod aggregate;
pub mod config;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod record;
pub mod writer;

pub use aggregate::{TopGroup, top_group, top_scorers};
pub use error::{Error, ErrorKind, Result};
pub use parser::{RecordReader, parse_file, parse_reader};
pub use pipeline::{Summary, run};
pub use record::{Record, RecordParseError};
pub use writer::{write_records, write_to};
