//! CLI argument definitions for topscore.

use std::path::PathBuf;

use clap::Parser;

/// Log filter used when neither RUST_LOG nor a verbosity flag is given.
pub const DEFAULT_LOG_FILTER: &str = "topscore=info";

#[derive(Parser)]
#[command(name = "topscore")]
#[command(about = "Write the top-scoring entries of a name,surname,score file", version)]
pub struct Args {
    /// Input file (name,surname,score per line)
    pub input: PathBuf,

    /// Output file (created or overwritten)
    pub output: PathBuf,

    /// Log debug details (RUST_LOG takes precedence)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Default log filter when RUST_LOG is not set.
    ///
    /// The binary and the library both log under the `topscore` target.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "topscore=debug"
        } else if self.quiet {
            "topscore=error"
        } else {
            DEFAULT_LOG_FILTER
        }
    }
}
