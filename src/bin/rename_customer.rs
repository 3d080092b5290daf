//! `rename-customer`: show that a rename through a shared handle is visible
//! to the caller.

use perf_primer::config::{ConfigLoader, DEFAULT_CONFIG_FILE};
use perf_primer::customer::run_rename_demo;
use perf_primer::{logging, PrimerResult};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> PrimerResult<()> {
    let config = ConfigLoader::new().load_or_default(DEFAULT_CONFIG_FILE)?;
    logging::init(&config.logging);

    let stdout = std::io::stdout();
    let outcome = run_rename_demo(&mut stdout.lock())?;
    tracing::debug!(
        registry_entries = outcome.registry.len(),
        shares = outcome.customer.share_count(),
        "Rename demo finished"
    );
    Ok(())
}
