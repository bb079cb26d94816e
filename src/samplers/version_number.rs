//! Semantic version strings

use crate::combinator::zip::zip3;
use crate::generator::Generator;
use crate::generator::boxed::BoxedGenerator;
use crate::generator::int_range::int_in;

/// A `major.minor.patch` version with the default component ranges
///
/// Majors run 0..=5, minors 0..=15, patches 0..=30, drawn in that order.
pub fn version_number() -> BoxedGenerator<String> {
    version_in(5, 15, 30)
}

/// A `major.minor.patch` version with caller-chosen component maxima
pub fn version_in(major_max: u32, minor_max: u32, patch_max: u32) -> BoxedGenerator<String> {
    zip3(
        int_in(0, major_max),
        int_in(0, minor_max),
        int_in(0, patch_max),
    )
    .map(|(major, minor, patch)| format!("{major}.{minor}.{patch}"))
    .boxed()
}
