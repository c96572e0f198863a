use discoverer_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; stderr if the log file is unavailable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = Cli::run_from_args() {
        tracing::error!("discoverer error: {:#}", err);
        eprintln!("discoverer error: {:#}", err);
        std::process::exit(1);
    }
}
