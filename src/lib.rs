//! # perf-primer
//!
//! Two small programs for studying runtime cost and memory semantics:
//!
//! - a timing harness that measures prime generation up to a bound
//!   ([`harness`], [`primes`], [`perf`]);
//! - a walkthrough showing that a rename done through a shared handle is
//!   visible to every holder of that handle ([`customer`]).
//!
//! Both binaries read an optional `perf-primer.toml` from the working
//! directory ([`config`]) and log to stderr ([`logging`]).

pub mod config;
pub mod customer;
pub mod error;
pub mod harness;
pub mod logging;
pub mod perf;
pub mod primes;

pub use error::{PrimerError, PrimerResult};
