//! Pure value transformation

use crate::generator::Generator;
use rand::RngCore;

/// Applies a transform to every value of an upstream generator
///
/// Sampling order and entropy consumption are exactly the upstream's; the
/// transform itself draws nothing.
#[derive(Clone, Copy, Debug)]
pub struct Map<G, F> {
    upstream: G,
    transform: F,
}

impl<G, F> Map<G, F> {
    /// Wrap `upstream`, transforming each produced value
    pub const fn new(upstream: G, transform: F) -> Self {
        Self { upstream, transform }
    }

    /// Chain another transform, collapsing both into a single stage
    ///
    /// Shadows [`Generator::map`] for map-over-map chains so the composed
    /// pipeline holds one transform instead of nesting. Behavior is
    /// indistinguishable from the nested form.
    pub fn map<T, U, S>(self, transform: S) -> Map<G, impl Fn(G::Output) -> U>
    where
        G: Generator,
        F: Fn(G::Output) -> T,
        S: Fn(T) -> U,
    {
        let first = self.transform;
        Map::new(self.upstream, move |value| transform(first(value)))
    }
}

impl<G, F, T> Generator for Map<G, F>
where
    G: Generator,
    F: Fn(G::Output) -> T,
{
    type Output = T;

    fn run(&self, source: &mut dyn RngCore) -> T {
        (self.transform)(self.upstream.run(source))
    }
}
