//! Geographic coordinate pairs

use crate::generator::Generator;
use crate::generator::boxed::BoxedGenerator;
use crate::generator::float_range::float_in;

/// A uniformly random coordinate across the whole globe
///
/// Latitude in `[-90, 90]` is drawn before longitude in `[-180, 180]`.
pub fn lat_long() -> BoxedGenerator<(f64, f64)> {
    coordinate_in(-90.0, 90.0, -180.0, 180.0)
}

/// A uniformly random coordinate within the given closed ranges
///
/// # Panics
///
/// Panics if either range is reversed or has a non-finite bound.
pub fn coordinate_in(
    latitude_low: f64,
    latitude_high: f64,
    longitude_low: f64,
    longitude_high: f64,
) -> BoxedGenerator<(f64, f64)> {
    float_in(latitude_low, latitude_high)
        .zip(float_in(longitude_low, longitude_high))
        .boxed()
}
