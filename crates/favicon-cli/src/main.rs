use clap::Parser;
use favicon_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Logging level depends on --verbose, so it starts right after parsing.
    if let Err(err) = logging::init_logging(cli.verbose) {
        eprintln!("favicon: {:#}", err);
    }

    // Failures are reported, not turned into exit codes.
    if let Err(err) = cli.run() {
        tracing::error!("{:#}", err);
    }
}
