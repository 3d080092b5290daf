//! Prime number generation.
//!
//! Plain trial division. The workload exists to be timed and profiled, so it
//! favors a predictable cost over speed.

use tracing::debug;

/// Generator holding the primes found by the last run.
#[derive(Debug, Clone, Default)]
pub struct PrimeNumbers {
    primes: Vec<u32>,
}

impl PrimeNumbers {
    /// Create an empty generator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate every prime `p` with `2 <= p <= max`, replacing any earlier
    /// result.
    pub fn generate_numbers(&mut self, max: u32) {
        self.primes.clear();

        for candidate in 2..=max {
            if self.is_prime_against_found(candidate) {
                self.primes.push(candidate);
            }
        }

        debug!(bound = max, found = self.primes.len(), "Generated primes");
    }

    /// Primes from the last run, ascending.
    pub fn primes(&self) -> &[u32] {
        &self.primes
    }

    /// Number of primes from the last run.
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    /// Whether the last run found no primes.
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    // Every composite below `candidate` has a prime factor already in `primes`.
    fn is_prime_against_found(&self, candidate: u32) -> bool {
        let candidate = u64::from(candidate);
        self.primes
            .iter()
            .map(|&p| u64::from(p))
            .take_while(|p| p * p <= candidate)
            .all(|p| candidate % p != 0)
    }
}

/// Check a single number by trial division.
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let n = u64::from(n);
    (2..).take_while(|d: &u64| d * d <= n).all(|d| n % d != 0)
}
