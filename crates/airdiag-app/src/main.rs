//! Main application entry point.

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting AirDiag");

    let cli = airdiag_app::Cli::parse();
    match airdiag_app::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
