//! Card-network numbers with a Luhn check digit

use crate::collection::element::element_of;
use crate::generator::Generator;
use crate::generator::boxed::BoxedGenerator;
use crate::generator::chars::digit;

/// Card networks with their issuing prefixes and number lengths
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Network {
    /// 16 digits, prefix 4
    Visa,
    /// 16 digits, prefixes 51-55
    Mastercard,
    /// 15 digits, prefixes 34 and 37
    Amex,
    /// 16 digits, the 6011/64x/65 prefix family
    Discover,
}

impl Network {
    fn prefixes(self) -> Vec<String> {
        let prefixes: &[&str] = match self {
            Self::Visa => &["4"],
            Self::Mastercard => &["51", "52", "53", "54", "55"],
            Self::Amex => &["34", "37"],
            Self::Discover => &["6011", "644", "645", "646", "647", "648", "649", "65"],
        };
        prefixes.iter().map(|&prefix| prefix.to_owned()).collect()
    }

    const fn length(self) -> usize {
        match self {
            Self::Amex => 15,
            Self::Visa | Self::Mastercard | Self::Discover => 16,
        }
    }
}

/// A card number for `network`: random prefix, random body, Luhn check digit
///
/// The prefix draw happens first, then one digit draw per body position.
pub fn credit_card(network: Network) -> BoxedGenerator<String> {
    let length = network.length();
    element_of(network.prefixes())
        .flat_map(move |choice| {
            let prefix = choice.unwrap_or_default();
            let body_length = length - prefix.len() - 1;
            crate::generator::always::always(prefix).concat(digit().string(body_length), String::new())
        })
        .map(append_check_digit)
        .boxed()
}

/// Append the digit that makes `payload` pass the Luhn checksum
fn append_check_digit(mut payload: String) -> String {
    let sum: u32 = payload
        .chars()
        .rev()
        .enumerate()
        .map(|(position, ch)| {
            let value = ch.to_digit(10).unwrap_or(0);
            if position % 2 == 0 {
                let doubled = value * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                value
            }
        })
        .sum();
    let check = (10 - sum % 10) % 10;
    payload.push_str(&check.to_string());
    payload
}

/// Whether `number` passes the Luhn checksum
pub fn passes_luhn(number: &str) -> bool {
    let sum: u32 = number
        .chars()
        .rev()
        .enumerate()
        .map(|(position, ch)| {
            let value = ch.to_digit(10).unwrap_or(0);
            if position % 2 == 1 {
                let doubled = value * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                value
            }
        })
        .sum();
    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::lcg::Lcg;
    use rand::SeedableRng;

    #[test]
    fn test_numbers_have_network_shape_and_pass_luhn() {
        let mut source = Lcg::seed_from_u64(42);
        let cases = [
            (Network::Visa, 16, "4"),
            (Network::Mastercard, 16, "5"),
            (Network::Amex, 15, "3"),
        ];
        for (network, length, leading) in cases {
            for _ in 0..20 {
                let number = credit_card(network).run(&mut source);
                assert_eq!(number.len(), length);
                assert!(number.starts_with(leading));
                assert!(number.chars().all(|ch| ch.is_ascii_digit()));
                assert!(passes_luhn(&number));
            }
        }
    }
}
