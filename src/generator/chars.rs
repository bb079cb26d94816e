//! Character ranges and text presets
//!
//! Everything here is composed from the public combinator surface: a scalar
//! range with gap rejection, and a handful of presets for the alphabets that
//! keep coming up in identifiers, passwords, and test strings.

use crate::collection::frequency::{Frequency, frequency};
use crate::generator::Generator;
use crate::generator::boxed::BoxedGenerator;
use crate::generator::int_range::IntRange;
use rand::RngCore;

/// A uniform character draw from a closed-inclusive scalar range
///
/// Scalar values that fall into the surrogate gap are rejected and redrawn,
/// so the output is always a valid `char`. Ranges that lie entirely below
/// the gap never reject.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharRange {
    scalars: IntRange<u32>,
}

impl CharRange {
    /// Create a generator over `low..=high`
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    pub fn new(low: char, high: char) -> Self {
        Self {
            scalars: IntRange::new(low as u32, high as u32),
        }
    }
}

impl Generator for CharRange {
    type Output = char;

    fn run(&self, source: &mut dyn RngCore) -> char {
        loop {
            if let Some(scalar) = char::from_u32(self.scalars.run(source)) {
                return scalar;
            }
        }
    }
}

/// A uniform character generator over `low..=high`
///
/// # Panics
///
/// Panics if `low > high`.
pub fn char_in(low: char, high: char) -> CharRange {
    CharRange::new(low, high)
}

/// Decimal digits `'0'..='9'`
pub fn digit() -> CharRange {
    char_in('0', '9')
}

/// Uppercase ASCII letters
pub fn uppercase() -> CharRange {
    char_in('A', 'Z')
}

/// Lowercase ASCII letters
pub fn lowercase() -> CharRange {
    char_in('a', 'z')
}

/// The full ASCII range, control characters included
pub fn ascii() -> CharRange {
    char_in('\0', '\x7f')
}

/// Uppercase and lowercase ASCII letters, uniformly
///
/// The two cases are weighted by their alphabet sizes, which makes the
/// overall draw uniform across all 52 letters.
pub fn letter() -> Frequency<CharRange> {
    frequency(vec![(26, uppercase()), (26, lowercase())])
}

/// Letters and digits, uniformly across all 62 characters
pub fn alphanumeric() -> Frequency<BoxedGenerator<char>> {
    frequency(vec![(52, letter().boxed()), (10, digit().boxed())])
}
