//! Resample until a declining transform accepts

use crate::generator::Generator;
use rand::RngCore;

/// Applies a transform that may decline, resampling until it accepts
///
/// Unbounded: if the transform declines every producible value, `run` never
/// returns. Callers that need a cap compose [`Generator::filter`] with
/// [`Generator::map`] instead.
#[derive(Clone, Copy, Debug)]
pub struct CompactMap<G, F> {
    upstream: G,
    transform: F,
}

impl<G, F> CompactMap<G, F> {
    /// Wrap `upstream`, keeping only accepted transformations
    pub const fn new(upstream: G, transform: F) -> Self {
        Self { upstream, transform }
    }
}

impl<G, F, T> Generator for CompactMap<G, F>
where
    G: Generator,
    F: Fn(G::Output) -> Option<T>,
{
    type Output = T;

    fn run(&self, source: &mut dyn RngCore) -> T {
        loop {
            if let Some(value) = (self.transform)(self.upstream.run(source)) {
                return value;
            }
        }
    }
}
