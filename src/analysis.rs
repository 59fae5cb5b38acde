//! Heuristic analysis engine.
//!
//! The engine looks at a bounded prefix of the input ([`Sample`]) and picks a
//! [`Strategy`] using three heuristics, evaluated in order. The first one that
//! fires wins:
//!
//! 1. **Sortedness**: enough ascending adjacent pairs selects [`Strategy::MergeLean`].
//! 2. **Sign**: no negative key in the sample selects [`Strategy::RadixEligible`].
//! 3. **Cardinality**: few distinct values selects [`Strategy::QuickDefault`].
//!
//! Anything left over also gets [`Strategy::QuickDefault`].

use crate::core::{SortKey, Strategy, Thresholds};
use log::trace;

/// Read-only view of the first `min(n, cap)` keys of a slice.
#[derive(Clone, Copy, Debug)]
pub struct Sample<'a, K> {
    keys: &'a [K],
}

impl<'a, K: SortKey> Sample<'a, K> {
    /// Takes the leading `min(keys.len(), cap)` keys.
    ///
    /// Returns `None` if that would be empty.
    pub fn take(keys: &'a [K], cap: usize) -> Option<Self> {
        let len = keys.len().min(cap);
        if len == 0 {
            return None;
        }
        Some(Self { keys: &keys[..len] })
    }

    pub fn as_slice(&self) -> &'a [K] {
        self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always `false`, a sample holds at least one key.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Raw observations gathered from a [`Sample`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleProfile {
    pub len: usize,
    /// Adjacent pairs with `s[i] <= s[i + 1]`.
    pub ascending_pairs: usize,
    pub has_negative: bool,
    /// Number of distinct values. [`profile`] always fills this in.
    pub distinct: Option<usize>,
}

impl SampleProfile {
    /// `ascending_pairs / (len - 1)`, undefined for a single key.
    pub fn ascending_ratio(&self) -> Option<f64> {
        if self.len < 2 {
            return None;
        }
        Some(self.ascending_pairs as f64 / (self.len - 1) as f64)
    }

    /// `distinct / len`, if distinct values were counted.
    pub fn distinct_ratio(&self) -> Option<f64> {
        self.distinct.map(|d| d as f64 / self.len as f64)
    }
}

/// Picks the strategy for a sample.
///
/// The result depends only on the sample contents and `thresholds`.
pub fn analyze<K: SortKey>(sample: &Sample<'_, K>, thresholds: &Thresholds) -> Strategy {
    let mut profile = scan(sample.as_slice());

    if profile
        .ascending_ratio()
        .is_some_and(|r| r >= thresholds.nearly_sorted_ratio)
    {
        trace!("nearly sorted sample: {profile:?}");
        return Strategy::MergeLean;
    }

    if !profile.has_negative {
        trace!("non-negative sample: {profile:?}");
        return Strategy::RadixEligible;
    }

    profile.distinct = Some(count_distinct(sample.as_slice()));
    if profile
        .distinct_ratio()
        .is_some_and(|r| r <= thresholds.low_cardinality_ratio)
    {
        trace!("low cardinality sample: {profile:?}");
        return Strategy::QuickDefault;
    }

    trace!("no heuristic matched: {profile:?}");
    Strategy::QuickDefault
}

/// Gathers every observation the engine can make about a sample.
///
/// Unlike [`analyze`], which stops at the first heuristic that fires, this
/// always counts distinct values.
pub fn profile<K: SortKey>(sample: &Sample<'_, K>) -> SampleProfile {
    let mut profile = scan(sample.as_slice());
    profile.distinct = Some(count_distinct(sample.as_slice()));
    profile
}

/// Single pass over the sample for the sortedness and sign heuristics.
fn scan<K: SortKey>(keys: &[K]) -> SampleProfile {
    let mut ascending_pairs = 0;
    let mut has_negative = false;

    for (i, &key) in keys.iter().enumerate() {
        has_negative |= key.is_negative();
        if keys.get(i + 1).is_some_and(|&next| key <= next) {
            ascending_pairs += 1;
        }
    }

    SampleProfile {
        len: keys.len(),
        ascending_pairs,
        has_negative,
        distinct: None,
    }
}

fn count_distinct<K: SortKey>(keys: &[K]) -> usize {
    let mut sorted = keys.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    sorted.len()
}
