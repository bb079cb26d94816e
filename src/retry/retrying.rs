//! Retry-until specialization

use crate::generator::Generator;
use crate::retry::attempt::{AttemptBounded, Fallback};
use rand::RngCore;

/// Resamples until a condition holds, within an attempt budget
///
/// The same machine as [`AttemptBounded`] under its intention-revealing
/// name: the condition describes success rather than membership. The default
/// budget on [`Generator::retry`] is small because retry conditions are
/// usually expected to hold quickly.
pub struct Retry<G: Generator, P> {
    attempter: AttemptBounded<G, P>,
}

impl<G: Generator, P> Retry<G, P> {
    /// Retry `upstream` until `until` holds, within `max_attempts` samples
    ///
    /// # Panics
    ///
    /// Panics if `max_attempts` is zero.
    pub fn new(upstream: G, max_attempts: usize, until: P, fallback: Fallback<G::Output>) -> Self {
        Self {
            attempter: AttemptBounded::new(upstream, max_attempts, until, fallback),
        }
    }
}

impl<G, P> Generator for Retry<G, P>
where
    G: Generator,
    G::Output: Clone,
    P: Fn(&G::Output) -> bool,
{
    type Output = G::Output;

    fn run(&self, source: &mut dyn RngCore) -> G::Output {
        self.attempter.run(source)
    }
}
