//! Coin-flip generator

use crate::generator::Generator;
use crate::source::uniform::draw_below;
use rand::RngCore;

/// A fair coin flip
///
/// Consumes one bounded draw per run, so it sequences deterministically with
/// the rest of a pipeline under a seeded source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Boolean;

impl Generator for Boolean {
    type Output = bool;

    fn run(&self, source: &mut dyn RngCore) -> bool {
        draw_below(source, 2) == 1
    }
}

/// A generator of fair coin flips
pub const fn boolean() -> Boolean {
    Boolean
}
