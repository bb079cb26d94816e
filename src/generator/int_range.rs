//! Integer-in-range primitive

use crate::generator::Generator;
use crate::source::uniform::draw_below;
use num_traits::{AsPrimitive, PrimInt, WrappingAdd, WrappingSub};
use rand::RngCore;

/// A uniform integer draw from a closed-inclusive range
///
/// Works for every primitive integer type up to 64 bits wide, signed or
/// unsigned. The span is computed in two's complement and mapped through the
/// shared bounded draw, so the produced sequence for a given seeded source is
/// identical regardless of where the range sits in the type's domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntRange<T> {
    low: T,
    high: T,
}

impl<T: PartialOrd + Copy> IntRange<T> {
    /// Create a generator over `low..=high`
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    pub fn new(low: T, high: T) -> Self {
        assert!(low <= high, "integer range bounds are reversed");
        Self { low, high }
    }
}

impl<T> Generator for IntRange<T>
where
    T: PrimInt + WrappingAdd + WrappingSub + AsPrimitive<u64>,
    u64: AsPrimitive<T>,
{
    type Output = T;

    fn run(&self, source: &mut dyn RngCore) -> T {
        let span: u64 = self.high.wrapping_sub(&self.low).as_();
        let offset = match span.checked_add(1) {
            Some(bound) => draw_below(source, bound),
            // The range covers the whole 64-bit domain; the raw draw is it.
            None => source.next_u64(),
        };
        self.low.wrapping_add(&offset.as_())
    }
}

/// A uniform integer generator over `low..=high`
///
/// # Panics
///
/// Panics if `low > high`.
pub fn int_in<T: PartialOrd + Copy>(low: T, high: T) -> IntRange<T> {
    IntRange::new(low, high)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::lcg::Lcg;
    use rand::SeedableRng;

    #[test]
    fn test_single_value_range_draws_entropy_but_is_constant() {
        let mut source = Lcg::seed_from_u64(5);
        let constant = int_in(3_u8, 3);
        for _ in 0..10 {
            assert_eq!(constant.run(&mut source), 3);
        }
    }

    #[test]
    fn test_full_u64_domain_does_not_overflow() {
        let mut source = Lcg::seed_from_u64(42);
        let anything = int_in(u64::MIN, u64::MAX);
        assert_eq!(anything.run(&mut source), 9_562_744_903_453_244_591);
    }

    #[test]
    fn test_negative_bounds_stay_in_range() {
        let mut source = Lcg::seed_from_u64(13);
        let balanced = int_in(-5_i32, 5);
        for _ in 0..200 {
            let value = balanced.run(&mut source);
            assert!((-5..=5).contains(&value));
        }
    }

    #[test]
    #[should_panic(expected = "integer range bounds are reversed")]
    fn test_reversed_bounds_panic() {
        let _ = int_in(10_u32, 1);
    }
}
