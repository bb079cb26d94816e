//! Predicate filtering specialization

use crate::generator::Generator;
use crate::retry::attempt::{AttemptBounded, Fallback};
use rand::RngCore;

/// Keeps only values satisfying a predicate, within an attempt budget
///
/// A naming of [`AttemptBounded`] for the common keep-or-redraw case. The
/// default budget on [`Generator::filter`] is generous because filters
/// usually pass most samples; tight predicates deserve an explicit budget
/// and fallback via [`Generator::filter_with`].
pub struct Filter<G: Generator, P> {
    attempter: AttemptBounded<G, P>,
}

impl<G: Generator, P> Filter<G, P> {
    /// Filter `upstream` through `predicate` within `max_attempts` samples
    ///
    /// # Panics
    ///
    /// Panics if `max_attempts` is zero.
    pub fn new(
        upstream: G,
        max_attempts: usize,
        predicate: P,
        fallback: Fallback<G::Output>,
    ) -> Self {
        Self {
            attempter: AttemptBounded::new(upstream, max_attempts, predicate, fallback),
        }
    }
}

impl<G, P> Generator for Filter<G, P>
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

#[cfg(test)]
mod tests {
    use crate::generator::Generator as _;
    use crate::generator::int_range::int_in;
    use crate::source::lcg::Lcg;
    use rand::SeedableRng;

    #[test]
    fn test_misses_are_skipped() {
        let mut source = Lcg::seed_from_u64(42);
        // Draws run 6, 10, 6, 8, 2, 3, 7, ...
        let small = int_in(1_u32, 10).filter(|value| *value <= 5);
        assert_eq!(small.run(&mut source), 2);
        assert_eq!(small.run(&mut source), 3);
    }
}
