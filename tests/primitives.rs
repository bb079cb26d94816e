//! Validates the primitive generators and the character presets

use rand::SeedableRng;
use randkit::generator::chars::{alphanumeric, digit, letter, lowercase, uppercase};
use randkit::{Generator, Lcg, always, boolean, char_in, float_in, int_in};

#[test]
fn test_always_produces_the_constant() {
    let mut source = Lcg::seed_from_u64(42);
    let constant = always("fixed");
    for _ in 0..5 {
        assert_eq!(constant.run(&mut source), "fixed");
    }
}

#[test]
fn test_sample_uses_the_system_source() {
    for _ in 0..20 {
        assert!((1..=6).contains(&int_in(1_u32, 6).sample()));
    }
}

#[test]
fn test_boolean_is_replayable() {
    let mut first = Lcg::seed_from_u64(1234);
    let mut second = Lcg::seed_from_u64(1234);
    for _ in 0..50 {
        assert_eq!(boolean().run(&mut first), boolean().run(&mut second));
    }
}

#[test]
fn test_int_bounds_are_inclusive() {
    let mut source = Lcg::seed_from_u64(42);
    let narrow = int_in(1_u32, 2);
    let mut saw_low = false;
    let mut saw_high = false;
    for _ in 0..100 {
        match narrow.run(&mut source) {
            1 => saw_low = true,
            2 => saw_high = true,
            other => unreachable!("value {other} outside 1..=2"),
        }
    }
    assert!(saw_low && saw_high);
}

#[test]
fn test_int_golden_sequence_seed_42() {
    let mut source = Lcg::seed_from_u64(42);
    let die = int_in(1_i64, 10);
    let drawn: Vec<i64> = (0..10).map(|_| die.run(&mut source)).collect();
    assert_eq!(drawn, vec![6, 10, 6, 8, 2, 3, 7, 9, 10, 1]);
}

#[test]
fn test_int_signed_range_spans_zero() {
    let mut source = Lcg::seed_from_u64(17);
    let balanced = int_in(-3_i8, 3);
    let mut seen_negative = false;
    let mut seen_positive = false;
    for _ in 0..200 {
        let value = balanced.run(&mut source);
        assert!((-3..=3).contains(&value));
        seen_negative |= value < 0;
        seen_positive |= value > 0;
    }
    assert!(seen_negative && seen_positive);
}

#[test]
fn test_float_bounds_are_inclusive_and_finite() {
    let mut source = Lcg::seed_from_u64(42);
    let span = float_in(-2.5_f64, 2.5);
    for _ in 0..500 {
        let value = span.run(&mut source);
        assert!(value.is_finite());
        assert!((-2.5..=2.5).contains(&value));
    }
}

#[test]
fn test_float_single_width_works_too() {
    let mut source = Lcg::seed_from_u64(42);
    let span = float_in(0.0_f32, 1.0);
    for _ in 0..100 {
        assert!((0.0..=1.0).contains(&span.run(&mut source)));
    }
}

#[test]
fn test_char_range_is_inclusive() {
    let mut source = Lcg::seed_from_u64(42);
    let hex_digit = char_in('a', 'f');
    for _ in 0..100 {
        let value = hex_digit.run(&mut source);
        assert!(('a'..='f').contains(&value));
    }
}

#[test]
fn test_char_presets_cover_their_alphabets() {
    let mut source = Lcg::seed_from_u64(42);
    for _ in 0..200 {
        assert!(digit().run(&mut source).is_ascii_digit());
        assert!(uppercase().run(&mut source).is_ascii_uppercase());
        assert!(lowercase().run(&mut source).is_ascii_lowercase());
        assert!(letter().run(&mut source).is_ascii_alphabetic());
        assert!(alphanumeric().run(&mut source).is_ascii_alphanumeric());
    }
}

#[test]
fn test_string_assembles_exact_length() {
    let mut source = Lcg::seed_from_u64(42);
    assert_eq!(lowercase().string(8).run(&mut source), "nzptdgrw");
    assert_eq!(lowercase().string(0).run(&mut source), "");
}
