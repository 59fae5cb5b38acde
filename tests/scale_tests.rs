use polysort::prelude::*;
use rand::Rng;
use std::time::Instant;

fn assert_sorted(keys: &[i64]) {
    for i in 0..keys.len().saturating_sub(1) {
        assert!(keys[i] <= keys[i + 1], "Sort failed at index {}", i);
    }
}

#[test]
fn test_sort_1m_random() {
    let count = 1_000_000;
    println!("Generating {} random keys...", count);

    let mut rng = rand::rng();
    let mut input: Vec<i64> = (0..count).map(|_| rng.random()).collect();

    let sorter = AdaptiveSorter::default();
    println!("Plan: {:?}", sorter.plan(&input));

    let start = Instant::now();
    sorter.sort(&mut input).unwrap();
    println!("Sorted 1M keys in {:?}", start.elapsed());

    assert_eq!(input.len(), count);
    assert_sorted(&input);
}

#[test]
fn test_sort_1m_non_negative() {
    let count = 1_000_000;
    let mut rng = rand::rng();
    let mut input: Vec<i64> = (0..count)
        .map(|_| rng.random_range(0..1_000_000_000))
        .collect();

    assert_eq!(
        AdaptiveSorter::default().plan(&input),
        Plan::Analyzed(Strategy::RadixEligible)
    );

    let start = Instant::now();
    adaptive_sort(&mut input).unwrap();
    println!("Radix sorted 1M keys in {:?}", start.elapsed());

    assert_sorted(&input);
}

#[test]
fn test_sort_1m_nearly_sorted() {
    let count = 1_000_000;
    let mut rng = rand::rng();
    let mut input: Vec<i64> = (0..count as i64).map(|i| i - 500_000).collect();
    for _ in 0..1_000 {
        let a = rng.random_range(0..count);
        let b = rng.random_range(0..count);
        input.swap(a, b);
    }

    let start = Instant::now();
    adaptive_sort(&mut input).unwrap();
    println!("Sorted 1M nearly sorted keys in {:?}", start.elapsed());

    assert_sorted(&input);
}
