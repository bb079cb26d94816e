//! Dotted-quad and colon-hex address strings

use crate::generator::Generator;
use crate::generator::boxed::BoxedGenerator;
use crate::generator::int_range::int_in;

/// A random IPv4 address in dotted-quad notation
pub fn ipv4() -> BoxedGenerator<String> {
    fn join(octets: Vec<u16>) -> String {
        octets
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
    int_in(0_u16, 255)
        .array(4)
        .map(join as fn(Vec<u16>) -> String)
        .boxed()
}

/// A random IPv6 address as eight colon-separated hex quads
pub fn ipv6() -> BoxedGenerator<String> {
    fn join(segments: Vec<u32>) -> String {
        segments
            .iter()
            .map(|segment| format!("{segment:04x}"))
            .collect::<Vec<_>>()
            .join(":")
    }
    int_in(0_u32, 0xffff)
        .array(8)
        .map(join as fn(Vec<u32>) -> String)
        .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::lcg::Lcg;
    use rand::SeedableRng;

    #[test]
    fn test_ipv4_octets_parse_in_range() {
        let mut source = Lcg::seed_from_u64(42);
        for _ in 0..20 {
            let address = ipv4().run(&mut source);
            let octets: Vec<&str> = address.split('.').collect();
            assert_eq!(octets.len(), 4);
            for octet in octets {
                assert!(octet.parse::<u16>().is_ok_and(|value| value <= 255));
            }
        }
    }

    #[test]
    fn test_ipv6_segments_are_fixed_width_hex() {
        let mut source = Lcg::seed_from_u64(7);
        let address = ipv6().run(&mut source);
        let segments: Vec<&str> = address.split(':').collect();
        assert_eq!(segments.len(), 8);
        for segment in segments {
            assert_eq!(segment.len(), 4);
            assert!(u32::from_str_radix(segment, 16).is_ok());
        }
    }
}
