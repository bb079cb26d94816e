//! Hash-set construction

use crate::collection::clamp_count;
use crate::generator::Generator;
use num_traits::ToPrimitive;
use rand::RngCore;
use std::collections::HashSet;
use std::hash::Hash;

/// Collects a generated number of samples into a `HashSet`
///
/// The count is drawn first, then the upstream runs that many times;
/// duplicate samples collapse, so the set may end up smaller than the drawn
/// count. Counts at or below zero yield an empty set.
#[derive(Clone, Copy, Debug)]
pub struct SetOf<G, C> {
    upstream: G,
    count: C,
}

impl<G, C> SetOf<G, C> {
    /// Insert a `count`-drawn number of samples per run
    pub const fn new(upstream: G, count: C) -> Self {
        Self { upstream, count }
    }
}

impl<G, C> Generator for SetOf<G, C>
where
    G: Generator,
    G::Output: Eq + Hash,
    C: Generator,
    C::Output: ToPrimitive,
{
    type Output = HashSet<G::Output>;

    fn run(&self, source: &mut dyn RngCore) -> HashSet<G::Output> {
        let draws = clamp_count(&self.count.run(source));
        (0..draws).map(|_| self.upstream.run(source)).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::generator::Generator as _;
    use crate::generator::always::always;
    use crate::generator::int_range::int_in;
    use crate::source::lcg::Lcg;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_duplicates_collapse() {
        let mut source = Lcg::seed_from_u64(42);
        // Five draws over 1..=3 land on every value at least once.
        let trio = int_in(1_u32, 3).set(always(5));
        assert_eq!(trio.run(&mut source), HashSet::from([1, 2, 3]));
    }

    #[test]
    fn test_non_positive_count_yields_empty() {
        let mut source = Lcg::seed_from_u64(9);
        let nothing = int_in(1_u32, 3).set(always(0));
        assert!(nothing.run(&mut source).is_empty());
    }
}
