//! # Timing
//!
//! Wall-clock timing primitives used by the harness: a monotonic
//! [`Stopwatch`], a [`measure`] helper, and the [`ElapsedReport`] line the
//! harness prints.

pub mod stopwatch;

pub use stopwatch::{measure, Elapsed, ElapsedReport, Stopwatch};
