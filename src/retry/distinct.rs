//! Consecutive-repeat avoidance with a guarded last-value cell

use crate::generator::Generator;
use rand::RngCore;
use std::sync::{Mutex, PoisonError};

/// Avoids producing the same value on two consecutive runs
///
/// The crate's only stateful combinator: a private cell remembers the
/// previous run's value, and subsequent runs resample while the candidate is
/// equivalent to it, up to a bounded attempt count. On exhaustion the final
/// sample is accepted anyway, trading the strict no-repeat guarantee for
/// liveness. The cell is mutex-guarded, so one instance may be shared across
/// threads; the cell resets only when a new instance is constructed.
pub struct Distinct<G: Generator, P> {
    upstream: G,
    equivalent: P,
    max_attempts: usize,
    last: Mutex<Option<G::Output>>,
}

impl<G: Generator, P> Distinct<G, P> {
    /// Avoid repeats of `upstream` under `equivalent`, within `max_attempts`
    /// samples per run
    ///
    /// # Panics
    ///
    /// Panics if `max_attempts` is zero.
    pub fn new(upstream: G, max_attempts: usize, equivalent: P) -> Self {
        assert!(max_attempts > 0, "attempt bound must be at least one");
        Self {
            upstream,
            equivalent,
            max_attempts,
            last: Mutex::new(None),
        }
    }
}

impl<G, P> Generator for Distinct<G, P>
where
    G: Generator,
    G::Output: Clone,
    P: Fn(&G::Output, &G::Output) -> bool,
{
    type Output = G::Output;

    fn run(&self, source: &mut dyn RngCore) -> G::Output {
        let mut last = self
            .last
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let value = match last.take() {
            None => self.upstream.run(source),
            Some(previous) => {
                let mut candidate = self.upstream.run(source);
                let mut attempts = 1;
                while attempts < self.max_attempts && (self.equivalent)(&candidate, &previous) {
                    candidate = self.upstream.run(source);
                    attempts += 1;
                }
                candidate
            }
        };
        *last = Some(value.clone());
        value
    }
}
