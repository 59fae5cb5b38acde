//! Core types shared by the analysis engine, the dispatcher and the backends.
//!
//! This module defines:
//! - [`SortKey`]: the integer key types the sorter accepts.
//! - [`Thresholds`]: the tuning constants, bundled as configuration.
//! - [`Strategy`] and [`Plan`]: what the dispatcher decided to run.

use crate::error::ConfigError;
use std::fmt::Debug;

/// Inputs shorter than this are insertion sorted without analysis. Quicksort
/// partitions shorter than this are finished by insertion sort as well.
pub const INSERTION_THRESHOLD: usize = 32;

/// Maximum number of leading keys inspected by the analysis engine.
pub const SAMPLE_CAP: usize = 100;

/// Share of ascending adjacent pairs at or above which a sample counts as nearly sorted.
pub const NEARLY_SORTED_RATIO: f64 = 0.85;

/// Share of distinct values at or below which a sample counts as low cardinality.
pub const LOW_CARDINALITY_RATIO: f64 = 0.20;

/// Tuning constants used by [`AdaptiveSorter`](crate::algo::AdaptiveSorter).
///
/// The [`Default`] value is [`Thresholds::REFERENCE`]. Custom values are
/// checked by [`Thresholds::validate`] when a sorter is built.
///
/// # Examples
///
/// ```
/// use polysort::{AdaptiveSorter, Thresholds};
///
/// let sorter = AdaptiveSorter::new(Thresholds {
///     insertion_threshold: 8,
///     ..Thresholds::default()
/// })
/// .unwrap();
///
/// let mut data = vec![9, 3, 7, 1, 8, 2, 6, 4, 5, 0];
/// sorter.sort(&mut data).unwrap();
/// assert_eq!(data, (0..10).collect::<Vec<i32>>());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Thresholds {
    pub insertion_threshold: usize,
    pub sample_cap: usize,
    pub nearly_sorted_ratio: f64,
    pub low_cardinality_ratio: f64,
}

impl Thresholds {
    pub const REFERENCE: Thresholds = Thresholds {
        insertion_threshold: INSERTION_THRESHOLD,
        sample_cap: SAMPLE_CAP,
        nearly_sorted_ratio: NEARLY_SORTED_RATIO,
        low_cardinality_ratio: LOW_CARDINALITY_RATIO,
    };

    /// Checks that the sample cap is non-zero and both ratios lie in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_cap == 0 {
            return Err(ConfigError::ZeroSampleCap);
        }
        check_ratio("nearly_sorted_ratio", self.nearly_sorted_ratio)?;
        check_ratio("low_cardinality_ratio", self.low_cardinality_ratio)
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::REFERENCE
    }
}

fn check_ratio(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RatioOutOfRange { name, value })
    }
}

/// Backend family chosen by the analysis engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// The sample is nearly sorted: merge sort.
    MergeLean,
    /// The sample holds no negative keys: LSD radix sort.
    RadixEligible,
    /// Everything else: quicksort.
    QuickDefault,
}

/// What the dispatcher will do with a given slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Plan {
    /// Zero or one key, nothing to do.
    Trivial,
    /// Below the insertion threshold, sorted without analysis.
    Insertion,
    /// The analysis engine was consulted and picked this strategy.
    Analyzed(Strategy),
}

mod sealed {
    pub trait Sealed {}
}

/// Fixed-width signed integers accepted by the sorter.
///
/// This trait is sealed. It is implemented for `i8`, `i16`, `i32`, `i64` and `isize`.
pub trait SortKey: sealed::Sealed + Copy + Ord + Debug {
    fn is_negative(self) -> bool;

    /// The key as an unsigned radix value, or `None` if it is negative.
    fn radix_key(self) -> Option<u64>;

    /// Lossless widening, used in error reports.
    fn widen(self) -> i128;
}

macro_rules! impl_sort_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl SortKey for $ty {
                #[inline(always)]
                fn is_negative(self) -> bool {
                    self < 0
                }

                #[inline(always)]
                fn radix_key(self) -> Option<u64> {
                    u64::try_from(self).ok()
                }

                #[inline(always)]
                fn widen(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_sort_key!(i8, i16, i32, i64, isize);
