//! Stopwatch and elapsed-time reporting.

use std::fmt;
use std::time::{Duration, Instant};

/// A started stopwatch.
///
/// Uses [`Instant`], so readings are monotonic and never negative.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started_at: Instant,
}

impl Stopwatch {
    /// Capture the start timestamp.
    #[must_use]
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Instant the stopwatch was started.
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Capture the end timestamp.
    pub fn stop(self) -> Elapsed {
        Elapsed::new(self.started_at.elapsed())
    }
}

/// Duration between a start and an end timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Elapsed(Duration);

impl Elapsed {
    /// Wrap a duration.
    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }

    /// Elapsed time in whole milliseconds, truncated.
    #[inline]
    pub fn as_millis(&self) -> u128 {
        self.0.as_millis()
    }

    /// Underlying duration.
    #[inline]
    pub fn as_duration(&self) -> Duration {
        self.0
    }

    /// Report line for this reading.
    pub fn report(&self) -> ElapsedReport {
        ElapsedReport { elapsed: *self }
    }
}

impl From<Duration> for Elapsed {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

/// The `Elapsed time was <N> ms.` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedReport {
    elapsed: Elapsed,
}

impl fmt::Display for ElapsedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Elapsed time was {} ms.", self.elapsed.as_millis())
    }
}

/// Measure wall-clock time for a synchronous operation.
pub fn measure<F, R>(f: F) -> (R, Elapsed)
where
    F: FnOnce() -> R,
{
    let stopwatch = Stopwatch::start();
    let result = f();
    (result, stopwatch.stop())
}
