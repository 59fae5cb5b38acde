//! Strategy dispatcher.
//!
//! [`AdaptiveSorter`] decides a [`Plan`] for a slice and runs the matching
//! backend:
//!
//! - zero or one key: nothing to do;
//! - fewer keys than the insertion threshold: insertion sort, no analysis;
//! - otherwise the analysis engine inspects a leading [`Sample`] and its
//!   [`Strategy`] selects merge, radix or quicksort.
//!
//! The main entry points are [`adaptive_sort`] and [`adaptive_sorted`].

use crate::analysis::{Sample, analyze};
use crate::backend::{Insertion, Merge, Quick, Radix, SortBackend};
use crate::core::{Plan, SortKey, Strategy, Thresholds};
use crate::error::{ConfigError, Result, SortError};
use log::{debug, warn};

/// Sorts `keys` in place with the reference thresholds.
///
/// # Examples
///
/// ```
/// use polysort::adaptive_sort;
///
/// let mut data = vec![170, 45, 75, 90, 802, 24, 2, 66];
/// adaptive_sort(&mut data).unwrap();
///
/// assert_eq!(data, vec![2, 24, 45, 66, 75, 90, 170, 802]);
/// ```
pub fn adaptive_sort<K: SortKey>(keys: &mut [K]) -> Result<()> {
    AdaptiveSorter::default().sort(keys)
}

/// By-value form of [`adaptive_sort`].
///
/// ```
/// use polysort::adaptive_sorted;
///
/// let sorted = adaptive_sorted(vec![3i64, -1, 2]).unwrap();
/// assert_eq!(sorted, vec![-1, 2, 3]);
/// ```
pub fn adaptive_sorted<K: SortKey>(mut keys: Vec<K>) -> Result<Vec<K>> {
    adaptive_sort(&mut keys)?;
    Ok(keys)
}

/// Sample-driven sorter over a fixed set of [`Thresholds`].
///
/// The sorter holds no state besides its thresholds. Each call decides its
/// plan from the slice it is given and nothing else.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdaptiveSorter {
    thresholds: Thresholds,
}

impl AdaptiveSorter {
    pub fn new(thresholds: Thresholds) -> Result<Self, ConfigError> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Decides how `keys` would be sorted, without touching them.
    ///
    /// The analysis engine is only consulted once the slice reaches the
    /// insertion threshold.
    pub fn plan<K: SortKey>(&self, keys: &[K]) -> Plan {
        let len = keys.len();
        if len <= 1 {
            return Plan::Trivial;
        }
        if len < self.thresholds.insertion_threshold {
            return Plan::Insertion;
        }

        match Sample::take(keys, self.thresholds.sample_cap) {
            Some(sample) => Plan::Analyzed(analyze(&sample, &self.thresholds)),
            // Unreachable with validated thresholds: the slice and the cap are non-empty.
            None => Plan::Analyzed(Strategy::QuickDefault),
        }
    }

    /// Sorts `keys` in place according to [`plan`](Self::plan).
    ///
    /// A radix plan is not trusted blindly: the sample may have missed negative
    /// keys further into the slice. The radix backend rejects those before
    /// moving anything, and the sort falls back to quicksort.
    pub fn sort<K: SortKey>(&self, keys: &mut [K]) -> Result<()> {
        let plan = self.plan(keys);
        debug!("sorting {} keys, plan {plan:?}", keys.len());

        match plan {
            Plan::Trivial => Ok(()),
            Plan::Insertion => run(&Insertion, keys),
            Plan::Analyzed(Strategy::MergeLean) => run(&Merge, keys),
            Plan::Analyzed(Strategy::RadixEligible) => match run(&Radix, keys) {
                Err(SortError::NegativeKey { index, value }) => {
                    warn!(
                        "negative key {value} at index {index} outside the sample, \
                         falling back to quicksort"
                    );
                    run(&self.quick(), keys)
                }
                other => other,
            },
            Plan::Analyzed(Strategy::QuickDefault) => run(&self.quick(), keys),
        }
    }

    fn quick(&self) -> Quick {
        Quick {
            small_threshold: self.thresholds.insertion_threshold,
        }
    }
}

fn run<B: SortBackend, K: SortKey>(backend: &B, keys: &mut [K]) -> Result<()> {
    debug!("running {} backend over {} keys", backend.name(), keys.len());
    backend.sort(keys)
}
