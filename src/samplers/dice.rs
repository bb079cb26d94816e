//! Die rolls and dice-pool sums

use crate::generator::Generator;
use crate::generator::boxed::BoxedGenerator;
use crate::generator::int_range::{IntRange, int_in};

/// A single six-sided die
pub fn die() -> IntRange<u32> {
    int_in(1, 6)
}

/// The summed roll of `count` six-sided dice
pub fn dice(count: usize) -> BoxedGenerator<u32> {
    fn total(rolls: Vec<u32>) -> u32 {
        rolls.into_iter().sum()
    }
    die().array(count).map(total as fn(Vec<u32>) -> u32).boxed()
}
