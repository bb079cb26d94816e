//! Constant generator

use crate::generator::Generator;
use rand::RngCore;

/// A generator that produces the same value on every run
///
/// Draws no entropy. Mostly useful as a building block: a fixed count for a
/// collection combinator, a fixed collection for [`crate::element_of`]-style
/// selection, or a constant arm of a weighted choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Always<T> {
    value: T,
}

impl<T> Always<T> {
    /// Create a generator that always produces `value`
    pub const fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Clone> Generator for Always<T> {
    type Output = T;

    fn run(&self, _source: &mut dyn RngCore) -> T {
        self.value.clone()
    }
}

/// A generator that always produces `value`
pub const fn always<T: Clone>(value: T) -> Always<T> {
    Always::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::lcg::Lcg;
    use rand::SeedableRng;

    #[test]
    fn test_always_ignores_the_source() {
        let mut source = Lcg::seed_from_u64(42);
        let constant = always(7);
        assert_eq!(constant.run(&mut source), 7);
        assert_eq!(source, Lcg::seed_from_u64(42));
    }
}
