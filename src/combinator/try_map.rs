//! Fallible transformation into `Result` values

use crate::generator::Generator;
use rand::RngCore;

/// Applies a fallible transform once, yielding the `Result` itself
///
/// No retry and no unwinding: a failing transform is an ordinary value for
/// downstream stages to route or inspect.
#[derive(Clone, Copy, Debug)]
pub struct TryMap<G, F> {
    upstream: G,
    transform: F,
}

impl<G, F> TryMap<G, F> {
    /// Wrap `upstream`, surfacing transform failures as values
    pub const fn new(upstream: G, transform: F) -> Self {
        Self { upstream, transform }
    }
}

impl<G, F, T, E> Generator for TryMap<G, F>
where
    G: Generator,
    F: Fn(G::Output) -> Result<T, E>,
{
    type Output = Result<T, E>;

    fn run(&self, source: &mut dyn RngCore) -> Result<T, E> {
        (self.transform)(self.upstream.run(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::int_range::int_in;
    use crate::source::lcg::Lcg;
    use rand::SeedableRng;

    #[test]
    fn test_failures_surface_as_values() {
        let mut source = Lcg::seed_from_u64(42);
        let checked = int_in(1_u32, 10).try_map(|value| {
            if value > 5 { Err("too large") } else { Ok(value) }
        });
        // Draws 6 then 10 then 6 then 8 then 2.
        assert_eq!(checked.run(&mut source), Err("too large"));
        assert_eq!(checked.run(&mut source), Err("too large"));
        assert_eq!(checked.run(&mut source), Err("too large"));
        assert_eq!(checked.run(&mut source), Err("too large"));
        assert_eq!(checked.run(&mut source), Ok(2));
    }
}
