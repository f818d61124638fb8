use std::process::ExitCode;

use clap::Parser;
use coin_candles::{Cli, exit_status, failure_message, run_interactive};

fn main() -> ExitCode {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    // Warn by default so prompts and tables own the terminal; RUST_LOG overrides
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Interactive session (blocks until the chart window closes)
    let outcome = run_interactive(&args);
    if let Err(err) = &outcome {
        log::debug!("Session failed: {:?}", err);
        eprintln!("{}", failure_message(err));
    }

    ExitCode::from(exit_status(&outcome))
}
