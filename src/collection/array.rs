//! Fixed- and variable-length sequences

use crate::collection::clamp_count;
use crate::generator::Generator;
use num_traits::ToPrimitive;
use rand::RngCore;

/// Samples an upstream generator exactly `count` times, preserving order
#[derive(Clone, Copy, Debug)]
pub struct Array<G> {
    upstream: G,
    count: usize,
}

impl<G> Array<G> {
    /// Collect exactly `count` samples per run
    pub const fn new(upstream: G, count: usize) -> Self {
        Self { upstream, count }
    }
}

impl<G: Generator> Generator for Array<G> {
    type Output = Vec<G::Output>;

    fn run(&self, source: &mut dyn RngCore) -> Vec<G::Output> {
        (0..self.count)
            .map(|_| self.upstream.run(source))
            .collect()
    }
}

/// Samples an upstream generator a generated number of times
///
/// The count generator is sampled first on every run; counts at or below
/// zero yield an empty vector.
#[derive(Clone, Copy, Debug)]
pub struct ArrayWith<G, C> {
    upstream: G,
    count: C,
}

impl<G, C> ArrayWith<G, C> {
    /// Collect a `count`-drawn number of samples per run
    pub const fn new(upstream: G, count: C) -> Self {
        Self { upstream, count }
    }
}

impl<G, C> Generator for ArrayWith<G, C>
where
    G: Generator,
    C: Generator,
    C::Output: ToPrimitive,
{
    type Output = Vec<G::Output>;

    fn run(&self, source: &mut dyn RngCore) -> Vec<G::Output> {
        let length = clamp_count(&self.count.run(source));
        (0..length).map(|_| self.upstream.run(source)).collect()
    }
}
