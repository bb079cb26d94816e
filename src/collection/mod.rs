//! Collection construction, element selection, shuffling, and weighted choice
//!
//! The collection builders share one pattern: draw a count (fixed or from a
//! count generator, clamped at zero), then sample the upstream that many
//! times in order. Selection, shuffling, and weighted choice consume their
//! own bounded draws from the same source, so whole collection pipelines
//! replay under a seed.

/// Fixed- and variable-length sequences
pub mod array;
/// Key-value map construction
pub mod dictionary;
/// Uniform element selection from generated collections
pub mod element;
/// Weighted choice across generators
pub mod frequency;
/// Hash-set construction
pub mod set;
/// Fisher-Yates permutation of generated sequences
pub mod shuffle;

use num_traits::ToPrimitive;

/// Clamp a count-generator draw to a usable length
///
/// Counts at or below zero become zero, so undersized requests yield empty
/// collections instead of errors.
fn clamp_count<T: ToPrimitive>(count: &T) -> usize {
    count.to_usize().unwrap_or(0)
}
