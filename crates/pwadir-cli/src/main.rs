use pwadir_core::config::{self, PwadirConfig};
use pwadir_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    let cfg = config::load_or_init().unwrap_or_else(|err| {
        eprintln!("pwadir warning: using default config: {:#}", err);
        PwadirConfig::default()
    });

    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if logging::init_logging(cfg.log_filter.as_deref()).is_err() {
        logging::init_logging_stderr(cfg.log_filter.as_deref());
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args(&cfg) {
        eprintln!("pwadir error: {:#}", err);
        std::process::exit(1);
    }
}
