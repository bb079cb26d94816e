//! Key-value map construction

use crate::collection::clamp_count;
use crate::generator::Generator;
use num_traits::ToPrimitive;
use rand::RngCore;
use std::collections::HashMap;
use std::hash::Hash;

/// Collects a generated number of key-value samples into a `HashMap`
///
/// Pairs are generated in order and inserted as they come, so a key drawn
/// twice keeps its last-generated value. Counts at or below zero yield an
/// empty map.
#[derive(Clone, Copy, Debug)]
pub struct Dictionary<G, C> {
    upstream: G,
    count: C,
}

impl<G, C> Dictionary<G, C> {
    /// Insert a `count`-drawn number of pairs per run
    pub const fn new(upstream: G, count: C) -> Self {
        Self { upstream, count }
    }
}

impl<G, C, K, V> Generator for Dictionary<G, C>
where
    G: Generator<Output = (K, V)>,
    K: Eq + Hash,
    C: Generator,
    C::Output: ToPrimitive,
{
    type Output = HashMap<K, V>;

    fn run(&self, source: &mut dyn RngCore) -> HashMap<K, V> {
        let draws = clamp_count(&self.count.run(source));
        let mut map = HashMap::with_capacity(draws);
        for _ in 0..draws {
            let (key, value) = self.upstream.run(source);
            map.insert(key, value);
        }
        map
    }
}
