//! Bounded uniform draws via widening multiplication
//!
//! Both range primitives funnel through [`draw_below`], so the exact mapping
//! from raw 64-bit draws onto a bounded domain is fixed in one place. The
//! mapping is load-bearing: replaying a recorded sequence against a seeded
//! source must reproduce it bit for bit.

use num_traits::Float;
use rand::RngCore;

/// Draw a uniform value in `0..bound` consuming at least one raw 64-bit draw
///
/// Multiplies a raw draw by `bound` and keeps the high 64-bit word, rejecting
/// the low word below `2^64 mod bound` so every residue is equally likely.
/// The rejection loop terminates with probability 1; for any `bound` that
/// fits in 64 bits the acceptance chance per draw is at least one half.
///
/// `bound` must be non-zero; callers guarantee this at construction time.
pub(crate) fn draw_below(source: &mut dyn RngCore, bound: u64) -> u64 {
    let mut product = u128::from(source.next_u64()) * u128::from(bound);
    let low = product as u64;
    if low < bound {
        let threshold = bound.wrapping_neg() % bound;
        while (product as u64) < threshold {
            product = u128::from(source.next_u64()) * u128::from(bound);
        }
    }
    (product >> 64) as u64
}

/// Floating-point types that can draw a uniform value from the closed unit
/// interval
///
/// The draw uses one more bit than the significand width, matching the
/// resolution the type can represent exactly, then scales by half an ulp of
/// one. Both endpoints of `[0, 1]` are reachable.
pub trait UnitFloat: Float {
    /// Draw a uniform value in `[0, 1]`, both endpoints included
    fn unit_sample(source: &mut dyn RngCore) -> Self;
}

impl UnitFloat for f64 {
    fn unit_sample(source: &mut dyn RngCore) -> Self {
        // 53 significand bits; bound 2^53 + 1 keeps 1.0 reachable.
        let raw = draw_below(source, (1_u64 << 53) + 1);
        (raw as f64) * (f64::EPSILON / 2.0)
    }
}

impl UnitFloat for f32 {
    fn unit_sample(source: &mut dyn RngCore) -> Self {
        // 24 significand bits for binary32.
        let raw = draw_below(source, (1_u64 << 24) + 1);
        (raw as f32) * (f32::EPSILON / 2.0)
    }
}
