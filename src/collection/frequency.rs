//! Weighted choice across generators

use crate::generator::Generator;
use crate::source::uniform::draw_below;
use rand::RngCore;

/// Chooses among generators with probability proportional to integer weights
///
/// Conceptually the entries expand into a flat pool holding each generator
/// `weight` times; every run draws one uniformly random index into that pool
/// with a single bounded draw and then samples the selected generator.
/// Zero-weight entries occupy no pool slots and are never chosen.
#[derive(Clone, Debug)]
pub struct Frequency<G> {
    entries: Vec<(usize, G)>,
    total_weight: u64,
}

impl<G> Frequency<G> {
    /// Choose among `entries` proportionally to their weights
    ///
    /// # Panics
    ///
    /// Panics if `entries` is empty or every weight is zero.
    pub fn new(entries: Vec<(usize, G)>) -> Self {
        let total_weight: u64 = entries.iter().map(|(weight, _)| *weight as u64).sum();
        assert!(
            total_weight > 0,
            "weighted choice requires at least one positive weight"
        );
        Self {
            entries,
            total_weight,
        }
    }
}

impl<G: Generator> Generator for Frequency<G> {
    type Output = G::Output;

    fn run(&self, source: &mut dyn RngCore) -> G::Output {
        let mut index = draw_below(source, self.total_weight);
        for (weight, generator) in &self.entries {
            if index < *weight as u64 {
                return generator.run(source);
            }
            index -= *weight as u64;
        }
        // The draw is bounded by the summed weights, so the walk always
        // lands inside an entry.
        unreachable!("weighted index exceeded the total weight")
    }
}

/// Choose among `entries` proportionally to their weights
///
/// # Panics
///
/// Panics if `entries` is empty or every weight is zero.
pub fn frequency<G: Generator>(entries: Vec<(usize, G)>) -> Frequency<G> {
    Frequency::new(entries)
}
