//! Fisher-Yates permutation of generated sequences

use crate::generator::Generator;
use crate::source::uniform::draw_below;
use rand::RngCore;

/// Permutes each generated sequence with a Fisher-Yates shuffle
///
/// The collection is generated first, then one bounded draw per remaining
/// position walks the sequence front to back, swapping each slot with a
/// uniformly chosen later one. All permutations are equally likely.
#[derive(Clone, Copy, Debug)]
pub struct Shuffled<G> {
    upstream: G,
}

impl<G> Shuffled<G> {
    /// Permute `upstream`'s output on every run
    pub const fn new(upstream: G) -> Self {
        Self { upstream }
    }
}

impl<G, T> Generator for Shuffled<G>
where
    G: Generator<Output = Vec<T>>,
{
    type Output = Vec<T>;

    fn run(&self, source: &mut dyn RngCore) -> Vec<T> {
        let mut items = self.upstream.run(source);
        let mut remaining = items.len();
        let mut position = 0;
        while remaining > 1 {
            let offset = draw_below(source, remaining as u64) as usize;
            items.swap(position, position + offset);
            remaining -= 1;
            position += 1;
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use crate::generator::Generator as _;
    use crate::generator::always::always;
    use crate::source::lcg::Lcg;
    use rand::SeedableRng;

    #[test]
    fn test_permutation_is_deterministic_under_a_seed() {
        let mut source = Lcg::seed_from_u64(42);
        let deck = always(vec![1, 2, 3, 4, 5]).shuffled();
        assert_eq!(deck.run(&mut source), vec![3, 5, 4, 2, 1]);
    }

    #[test]
    fn test_permutation_preserves_the_multiset() {
        let mut source = Lcg::seed_from_u64(7);
        let deck = always(vec![1, 2, 2, 3, 3, 3]).shuffled();
        for _ in 0..20 {
            let mut shuffled = deck.run(&mut source);
            shuffled.sort_unstable();
            assert_eq!(shuffled, vec![1, 2, 2, 3, 3, 3]);
        }
    }

    #[test]
    fn test_short_sequences_draw_no_entropy() {
        let mut source = Lcg::seed_from_u64(5);
        let single = always(vec![1]).shuffled();
        assert_eq!(single.run(&mut source), vec![1]);
        assert_eq!(source, Lcg::seed_from_u64(5));
    }
}
