//! Validates collection construction, selection, shuffling, and weighting

use rand::SeedableRng;
use randkit::{Generator, Lcg, always, element_of, frequency, int_in};
use std::collections::HashMap;

#[test]
fn test_fixed_arrays_have_exact_length() {
    let mut source = Lcg::seed_from_u64(42);
    for length in [0_usize, 1, 5, 64] {
        let batch = int_in(1_u32, 10).array(length).run(&mut source);
        assert_eq!(batch.len(), length);
    }
}

#[test]
fn test_variable_length_follows_the_count_draw() {
    let mut sized_source = Lcg::seed_from_u64(42);
    let mut count_source = Lcg::seed_from_u64(42);
    let sized = int_in(1_u32, 10).array_with(int_in(0_i64, 8));
    for _ in 0..50 {
        let values = sized.run(&mut sized_source);
        let expected_length = int_in(0_i64, 8).run(&mut count_source);
        // Skip the element draws so the manual source stays aligned.
        let _ = int_in(1_u32, 10)
            .array(expected_length as usize)
            .run(&mut count_source);
        assert_eq!(values.len(), expected_length as usize);
    }
}

#[test]
fn test_negative_counts_clamp_to_empty() {
    let mut source = Lcg::seed_from_u64(42);
    let clamped = int_in(1_u32, 10).array_with(int_in(-5_i64, -1));
    for _ in 0..20 {
        assert!(clamped.run(&mut source).is_empty());
    }
}

#[test]
fn test_sets_collapse_duplicates() {
    let mut source = Lcg::seed_from_u64(42);
    let narrow = int_in(1_u32, 3).set(always(10));
    let value = narrow.run(&mut source);
    assert!(!value.is_empty());
    assert!(value.len() <= 3);
    assert!(value.iter().all(|member| (1..=3).contains(member)));
}

#[test]
fn test_dictionary_keeps_the_last_value_per_key() {
    // A constant key with a fixed count of three collapses to one entry
    // holding the last-generated value.
    let entries = always("only").zip(int_in(1_u32, 100)).dictionary(always(3));
    let mut source = Lcg::seed_from_u64(42);
    // Values drawn are 52, 100, 59 in generation order.
    assert_eq!(
        entries.run(&mut source),
        HashMap::from([("only", 59_u32)])
    );
}

#[test]
fn test_dictionary_size_is_bounded_by_the_count() {
    let keys = element_of(vec!["a", "b", "c", "d"]).map(|key| key.unwrap_or("a"));
    let entries = keys.zip(int_in(1_u32, 100)).dictionary(int_in(1_i64, 4));
    let mut source = Lcg::seed_from_u64(5);
    for _ in 0..50 {
        let map = entries.run(&mut source);
        assert!((1..=4).contains(&map.len()));
    }
}

#[test]
fn test_element_selection_is_uniformly_sourced() {
    let mut source = Lcg::seed_from_u64(42);
    let pick = element_of(vec!["red", "green", "blue"]);
    assert_eq!(pick.run(&mut source), Some("green"));
    assert_eq!(pick.run(&mut source), Some("blue"));
}

#[test]
fn test_element_of_empty_yields_none() {
    let mut source = Lcg::seed_from_u64(42);
    assert_eq!(element_of(Vec::<u32>::new()).run(&mut source), None);
}

#[test]
fn test_element_from_generated_collection() {
    let mut source = Lcg::seed_from_u64(42);
    let pool = int_in(1_u32, 10).array(4).element();
    for _ in 0..20 {
        let picked = pool.run(&mut source);
        assert!(picked.is_some_and(|value| (1..=10).contains(&value)));
    }
}

#[test]
fn test_shuffle_golden_permutation() {
    let mut source = Lcg::seed_from_u64(42);
    let deck = always(vec![1, 2, 3, 4, 5]).shuffled();
    assert_eq!(deck.run(&mut source), vec![3, 5, 4, 2, 1]);
}

#[test]
fn test_weighted_choice_orders_frequencies() {
    let mut source = Lcg::seed_from_u64(42);
    let skewed = frequency(vec![(1, always(1_u8)), (3, always(3)), (6, always(6))]);
    let mut counts: HashMap<u8, u32> = HashMap::new();
    for _ in 0..1000 {
        *counts.entry(skewed.run(&mut source)).or_insert(0) += 1;
    }
    let of = |key: u8| counts.get(&key).copied().unwrap_or(0);
    assert!(of(6) > of(3));
    assert!(of(3) > of(1));
}

#[test]
fn test_weighted_choice_consumes_one_index_draw() {
    use rand::RngCore;

    let mut weighted_source = Lcg::seed_from_u64(42);
    let weighted = frequency(vec![(1, int_in(1_u32, 10))]);
    let chosen = weighted.run(&mut weighted_source);

    // One index draw into the pool, then the selected generator samples.
    let mut manual_source = Lcg::seed_from_u64(42);
    let _ = manual_source.next_u64();
    assert_eq!(chosen, int_in(1_u32, 10).run(&mut manual_source));
}
