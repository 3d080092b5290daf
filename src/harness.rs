//! Timed prime-generation harness.
//!
//! Brackets one [`PrimeNumbers::generate_numbers`] call with a
//! [`Stopwatch`] and writes a single `Elapsed time was <N> ms.` line.

use crate::config::HarnessConfig;
use crate::error::{PrimerError, PrimerResult};
use crate::perf::{Elapsed, Stopwatch};
use crate::primes::PrimeNumbers;
use std::io::Write;
use std::str::FromStr;
use tracing::{debug, info};

/// Upper limit for prime generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Bound(u32);

impl Bound {
    /// Wrap a raw bound.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Raw bound value.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl FromStr for Bound {
    type Err = PrimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .map(Self)
            .map_err(|source| PrimerError::InvalidBound {
                input: s.to_string(),
                source,
            })
    }
}

/// Parse the bound from process arguments, program name included.
///
/// Only the first positional argument is read.
///
/// # Errors
///
/// Returns [`PrimerError::MissingBound`] when no argument is given and
/// [`PrimerError::InvalidBound`] when it is not a non-negative integer.
pub fn parse_bound<I>(args: I) -> PrimerResult<Bound>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .nth(1)
        .ok_or(PrimerError::MissingBound)?
        .parse()
}

/// Outcome of one harness run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessReport {
    /// Bound the generator ran with.
    pub bound: Bound,
    /// Number of primes found.
    pub primes_found: usize,
    /// Time spent generating.
    pub elapsed: Elapsed,
}

/// Single-shot timing harness.
#[derive(Debug, Clone, Default)]
pub struct TimedHarness {
    config: HarnessConfig,
}

impl TimedHarness {
    /// Create a harness.
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    /// Generate primes up to `bound` and write the elapsed-time line to `out`.
    ///
    /// The configured startup delay runs before the stopwatch starts and is
    /// not part of the reported time.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn run<W: Write>(&self, bound: Bound, out: &mut W) -> PrimerResult<HarnessReport> {
        let delay = self.config.startup_delay();
        if !delay.is_zero() {
            info!(delay_ms = self.config.startup_delay_ms, "Pausing before timing");
            std::thread::sleep(delay);
        }

        let stopwatch = Stopwatch::start();
        let mut generator = PrimeNumbers::new();
        generator.generate_numbers(bound.get());
        let elapsed = stopwatch.stop();

        writeln!(out, "{}", elapsed.report())?;
        out.flush()?;

        debug!(
            bound = bound.get(),
            primes = generator.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Harness run complete"
        );

        Ok(HarnessReport {
            bound,
            primes_found: generator.len(),
            elapsed,
        })
    }
}
