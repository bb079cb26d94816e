//! RGB color sampling

use crate::combinator::zip::zip3;
use crate::generator::Generator;
use crate::generator::boxed::BoxedGenerator;
use crate::generator::float_range::float_in;

/// A color with unit-interval channels and a fixed alpha
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// Red channel in `[0, 1]`
    pub red: f64,
    /// Green channel in `[0, 1]`
    pub green: f64,
    /// Blue channel in `[0, 1]`
    pub blue: f64,
    /// Opacity in `[0, 1]`
    pub alpha: f64,
}

impl Rgba {
    /// Lowercase `#rrggbb` rendering of the color channels
    pub fn to_hex(&self) -> String {
        let quantize = |channel: f64| (channel * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            quantize(self.red),
            quantize(self.green),
            quantize(self.blue)
        )
    }
}

/// A uniformly random color with the given fixed alpha
///
/// Channels are drawn red, green, blue, in that order.
///
/// # Panics
///
/// Panics if `alpha` is outside `[0, 1]`.
pub fn color(alpha: f64) -> BoxedGenerator<Rgba> {
    assert!((0.0..=1.0).contains(&alpha), "alpha must lie in [0, 1]");
    zip3(
        float_in(0.0_f64, 1.0),
        float_in(0.0_f64, 1.0),
        float_in(0.0_f64, 1.0),
    )
    .map(move |(red, green, blue)| Rgba {
        red,
        green,
        blue,
        alpha,
    })
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::lcg::Lcg;
    use rand::SeedableRng;

    #[test]
    fn test_channels_stay_in_the_unit_interval() {
        let mut source = Lcg::seed_from_u64(42);
        for _ in 0..50 {
            let value = color(0.5).run(&mut source);
            assert!((0.0..=1.0).contains(&value.red));
            assert!((0.0..=1.0).contains(&value.green));
            assert!((0.0..=1.0).contains(&value.blue));
            assert!((value.alpha - 0.5).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_hex_rendering_shape() {
        let mut source = Lcg::seed_from_u64(11);
        let rendered = color(1.0).run(&mut source).to_hex();
        assert_eq!(rendered.len(), 7);
        assert!(rendered.starts_with('#'));
        assert!(
            rendered
                .chars()
                .skip(1)
                .all(|digit| digit.is_ascii_hexdigit())
        );
    }
}
