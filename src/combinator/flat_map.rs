//! Dependent generation via generator-producing transforms

use crate::generator::Generator;
use rand::RngCore;

/// Builds a brand-new generator from each upstream value, then samples it
///
/// The monadic bind of the algebra: the upstream is sampled first, the
/// derived generator second, both against the same source in that order.
#[derive(Clone, Copy, Debug)]
pub struct FlatMap<G, F> {
    upstream: G,
    transform: F,
}

impl<G, F> FlatMap<G, F> {
    /// Wrap `upstream`, deriving a follow-up generator from each value
    pub const fn new(upstream: G, transform: F) -> Self {
        Self { upstream, transform }
    }
}

impl<G, H, F> Generator for FlatMap<G, F>
where
    G: Generator,
    H: Generator,
    F: Fn(G::Output) -> H,
{
    type Output = H::Output;

    fn run(&self, source: &mut dyn RngCore) -> H::Output {
        (self.transform)(self.upstream.run(source)).run(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::int_range::int_in;
    use crate::source::lcg::Lcg;
    use rand::SeedableRng;

    #[test]
    fn test_output_shape_depends_on_first_draw() {
        let mut source = Lcg::seed_from_u64(42);
        // First draw picks a length, the dependent stage fills it.
        let sized = int_in(0_i64, 4).flat_map(|len| int_in(1_u32, 10).array(len as usize));
        let values = sized.run(&mut source);
        assert_eq!(values, vec![10, 6]);
    }
}
