mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind as ClapErrorKind;
use cli::{Args, DEFAULT_LOG_FILTER};
use topscore::ErrorKind;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn init_logging(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also end up here; only usage errors are logged
            if e.kind() == ClapErrorKind::MissingRequiredArgument {
                init_logging(DEFAULT_LOG_FILTER);
                error!(
                    kind = ErrorKind::MissingArguments.as_str(),
                    "Input or output file path missing, both are required"
                );
            }
            // Exits with status 2 before any file is touched
            e.exit();
        }
    };

    init_logging(args.default_log_filter());

    topscore::run(&args.input, &args.output)
        .inspect_err(|e| error!(kind = e.kind().as_str(), "{}", e))
        .with_context(|| {
            format!(
                "Failed to select top scores from {} into {}",
                args.input.display(),
                args.output.display()
            )
        })?;

    Ok(())
}
