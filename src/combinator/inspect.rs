//! Observe values without changing them

use crate::generator::Generator;
use rand::RngCore;

/// Calls an observer on each produced value, passing it through unchanged
///
/// Useful for wiring counters or debug probes into the middle of a pipeline
/// without disturbing its draw sequence.
#[derive(Clone, Copy, Debug)]
pub struct Inspect<G, F> {
    upstream: G,
    observer: F,
}

impl<G, F> Inspect<G, F> {
    /// Wrap `upstream`, observing each produced value
    pub const fn new(upstream: G, observer: F) -> Self {
        Self { upstream, observer }
    }
}

impl<G, F> Generator for Inspect<G, F>
where
    G: Generator,
    F: Fn(&G::Output),
{
    type Output = G::Output;

    fn run(&self, source: &mut dyn RngCore) -> G::Output {
        let value = self.upstream.run(source);
        (self.observer)(&value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::int_range::int_in;
    use crate::source::lcg::Lcg;
    use rand::SeedableRng;
    use std::cell::Cell;

    #[test]
    fn test_observer_sees_every_value_in_order() {
        let mut source = Lcg::seed_from_u64(42);
        let seen = Cell::new(0_u32);
        let watched = int_in(1_u32, 10).inspect(|value| seen.set(seen.get() + value));
        assert_eq!(watched.run(&mut source), 6);
        assert_eq!(watched.run(&mut source), 10);
        assert_eq!(seen.get(), 16);
    }
}
