use polysort::SortError;
use polysort::backend::{Insertion, Merge, Quick, Radix, SortBackend};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn check_against_std<B: SortBackend>(backend: &B, mut input: Vec<i32>) {
    let mut expected = input.clone();
    expected.sort();

    backend.sort(&mut input).unwrap();
    assert_eq!(input, expected, "{} backend", backend.name());
}

fn random_keys(rng: &mut StdRng, len: usize, lo: i32, hi: i32) -> Vec<i32> {
    (0..len).map(|_| rng.random_range(lo..hi)).collect()
}

#[test]
fn test_comparison_backends_random() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let len = rng.random_range(0..600);
        let input = random_keys(&mut rng, len, -50_000, 50_000);

        check_against_std(&Insertion, input.clone());
        check_against_std(&Quick::default(), input.clone());
        check_against_std(&Quick { small_threshold: 0 }, input.clone());
        check_against_std(&Merge, input);
    }
}

#[test]
fn test_radix_random_non_negative() {
    let mut rng = StdRng::seed_from_u64(43);

    for _ in 0..200 {
        let len = rng.random_range(0..600);
        let input = random_keys(&mut rng, len, 0, i32::MAX);
        check_against_std(&Radix, input);
    }
}

#[test]
fn test_duplicate_heavy_input() {
    let mut rng = StdRng::seed_from_u64(44);
    let input = random_keys(&mut rng, 3_000, -3, 4);

    check_against_std(&Quick::default(), input.clone());
    check_against_std(&Merge, input.clone());

    let non_negative = input.iter().map(|k| k.abs()).collect();
    check_against_std(&Radix, non_negative);
}

#[test]
fn test_quicksort_on_sorted_and_equal_input() {
    // Last-element pivots degrade to quadratic time here, the stack stays shallow.
    check_against_std(&Quick::default(), (0..5_000).collect());
    check_against_std(&Quick::default(), (0..5_000).rev().collect());
    check_against_std(&Quick::default(), vec![9; 5_000]);
}

#[test]
fn test_radix_digit_counts() {
    // Zero only, single digit, and keys with many more digits than the rest.
    check_against_std(&Radix, vec![0; 50]);
    check_against_std(&Radix, vec![3, 1, 2, 0, 9, 5]);
    check_against_std(&Radix, vec![1_000_000_000, 7, 0, 42, 999_999_999, 10]);
    check_against_std(&Radix, vec![i32::MAX, 0, i32::MAX - 1, 1]);

    let mut wide = vec![i64::MAX, 0, 10_000_000_000_000_000, 1, i64::MAX - 1];
    Radix.sort(&mut wide).unwrap();
    assert_eq!(
        wide,
        vec![0, 1, 10_000_000_000_000_000, i64::MAX - 1, i64::MAX]
    );
}

#[test]
fn test_radix_rejects_negative_untouched() {
    let mut input = vec![5, 3, 8, -2, 7];
    let before = input.clone();

    match Radix.sort(&mut input) {
        Err(SortError::NegativeKey { index, value }) => {
            assert_eq!(index, 3);
            assert_eq!(value, -2);
        }
        other => panic!("expected NegativeKey, got {:?}", other),
    }
    assert_eq!(input, before);
}

#[test]
fn test_backends_on_tiny_inputs() {
    for input in [vec![], vec![1], vec![2, 1], vec![1, 1]] {
        check_against_std(&Insertion, input.clone());
        check_against_std(&Quick::default(), input.clone());
        check_against_std(&Merge, input.clone());
        check_against_std(&Radix, input);
    }
}

#[test]
fn test_narrow_keys() {
    let mut rng = StdRng::seed_from_u64(45);
    let input: Vec<i8> = (0..1_000).map(|_| rng.random()).collect();

    let mut expected = input.clone();
    expected.sort();

    let mut quick = input.clone();
    Quick::default().sort(&mut quick).unwrap();
    assert_eq!(quick, expected);

    let mut merged = input.clone();
    Merge.sort(&mut merged).unwrap();
    assert_eq!(merged, expected);

    let mut radix: Vec<i8> = input.iter().map(|k| k.saturating_abs()).collect();
    let mut radix_expected = radix.clone();
    radix_expected.sort();
    Radix.sort(&mut radix).unwrap();
    assert_eq!(radix, radix_expected);
}
