//! `perf-primer <bound>`: time prime generation up to `bound`.

use perf_primer::config::{ConfigLoader, DEFAULT_CONFIG_FILE};
use perf_primer::harness::{parse_bound, TimedHarness};
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

    let bound = parse_bound(std::env::args())?;
    let harness = TimedHarness::new(config.harness);
    let stdout = std::io::stdout();
    harness.run(bound, &mut stdout.lock())?;
    Ok(())
}
