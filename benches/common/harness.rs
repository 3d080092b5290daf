//! Benchmark harness utilities.

use perf_primer::harness::{Bound, TimedHarness};
use std::time::Duration;

/// Standard prime-generation bounds.
pub struct BenchBounds;

impl BenchBounds {
    /// Small bound; generation finishes in microseconds.
    pub const SMALL: u32 = 1_000;
    /// Medium bound.
    pub const MEDIUM: u32 = 10_000;
    /// Large bound, close to the sizes used when profiling.
    pub const LARGE: u32 = 100_000;

    /// All bounds, ascending.
    pub const ALL: [u32; 3] = [Self::SMALL, Self::MEDIUM, Self::LARGE];
}

/// Run the full harness once, discarding its report line, and return the
/// elapsed time it measured.
pub fn harness_once(bound: u32) -> Duration {
    let report = TimedHarness::default()
        .run(Bound::new(bound), &mut std::io::sink())
        .expect("writing to a sink cannot fail");
    report.elapsed.as_duration()
}
