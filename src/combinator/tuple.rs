//! Independent self-pairing

use crate::generator::Generator;
use rand::RngCore;

/// Samples the same generator twice, pairing two independent results
///
/// Both draws run against the same source in order, so the two components
/// are distinct draws, not copies.
#[derive(Clone, Copy, Debug)]
pub struct Pair<G> {
    upstream: G,
}

impl<G> Pair<G> {
    /// Sample `upstream` twice per run
    pub const fn new(upstream: G) -> Self {
        Self { upstream }
    }
}

impl<G: Generator> Generator for Pair<G> {
    type Output = (G::Output, G::Output);

    fn run(&self, source: &mut dyn RngCore) -> Self::Output {
        (self.upstream.run(source), self.upstream.run(source))
    }
}
