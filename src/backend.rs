//! Sorting backends the dispatcher chooses between.
//!
//! Every backend implements [`SortBackend`]: sort the whole slice
//! non-decreasingly, as a permutation of its input. None of them is stable.
//!
//! - [`Insertion`]: in place, quadratic, linear on sorted input.
//! - [`Quick`]: Lomuto quicksort (last element as pivot) with an insertion sort
//!   fallback for small partitions.
//! - [`Merge`]: top-down merge sort with per-merge scratch buffers.
//! - [`Radix`]: LSD radix sort over decimal digits, non-negative keys only.

use crate::core::{INSERTION_THRESHOLD, SortKey};
use crate::error::{Result, SortError};
use cuneiform::cuneiform;

/// A routine that sorts a slice of keys in place.
pub trait SortBackend {
    /// Short name used in log records.
    fn name(&self) -> &'static str;

    fn sort<K: SortKey>(&self, keys: &mut [K]) -> Result<()>;
}

/// Insertion sort.
#[derive(Clone, Copy, Debug, Default)]
pub struct Insertion;

impl SortBackend for Insertion {
    fn name(&self) -> &'static str {
        "insertion"
    }

    fn sort<K: SortKey>(&self, keys: &mut [K]) -> Result<()> {
        insertion_sort(keys);
        Ok(())
    }
}

fn insertion_sort<K: SortKey>(keys: &mut [K]) {
    for i in 1..keys.len() {
        let key = keys[i];
        let mut j = i;
        while j > 0 && keys[j - 1] > key {
            keys[j] = keys[j - 1];
            j -= 1;
        }
        keys[j] = key;
    }
}

/// Quicksort with Lomuto partitioning.
///
/// Partitions shorter than `small_threshold` are finished by insertion sort.
/// Only the smaller side of each partition is sorted recursively, the larger
/// side is handled by the loop, so the stack stays logarithmic even on inputs
/// that drive the pivot choice into its quadratic worst case.
#[derive(Clone, Copy, Debug)]
pub struct Quick {
    pub small_threshold: usize,
}

impl Default for Quick {
    fn default() -> Self {
        Self {
            small_threshold: INSERTION_THRESHOLD,
        }
    }
}

impl SortBackend for Quick {
    fn name(&self) -> &'static str {
        "quicksort"
    }

    fn sort<K: SortKey>(&self, keys: &mut [K]) -> Result<()> {
        quicksort(keys, self.small_threshold);
        Ok(())
    }
}

fn quicksort<K: SortKey>(mut keys: &mut [K], small_threshold: usize) {
    loop {
        let len = keys.len();
        if len <= 1 {
            return;
        }
        if len < small_threshold {
            insertion_sort(keys);
            return;
        }

        let pivot = lomuto_partition(keys);
        let (left, rest) = std::mem::take(&mut keys).split_at_mut(pivot);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quicksort(left, small_threshold);
            keys = right;
        } else {
            quicksort(right, small_threshold);
            keys = left;
        }
    }
}

/// Partitions around the last key and returns its final position.
///
/// Keys strictly less than the pivot end up to its left.
fn lomuto_partition<K: SortKey>(keys: &mut [K]) -> usize {
    let last = keys.len() - 1;
    let pivot = keys[last];
    let mut store = 0;

    for j in 0..last {
        if keys[j] < pivot {
            keys.swap(store, j);
            store += 1;
        }
    }

    keys.swap(store, last);
    store
}

/// Top-down merge sort.
///
/// Each merge copies both halves into freshly reserved buffers, which are
/// dropped before the merge returns. Fails with [`SortError::Allocation`] if
/// a buffer cannot be reserved.
#[derive(Clone, Copy, Debug, Default)]
pub struct Merge;

impl SortBackend for Merge {
    fn name(&self) -> &'static str {
        "merge"
    }

    fn sort<K: SortKey>(&self, keys: &mut [K]) -> Result<()> {
        merge_sort(keys)
    }
}

fn merge_sort<K: SortKey>(keys: &mut [K]) -> Result<()> {
    if keys.len() <= 1 {
        return Ok(());
    }

    let mid = keys.len().div_ceil(2);
    merge_sort(&mut keys[..mid])?;
    merge_sort(&mut keys[mid..])?;
    merge(keys, mid)
}

fn merge<K: SortKey>(keys: &mut [K], mid: usize) -> Result<()> {
    let left = scratch_copy(&keys[..mid])?;
    let right = scratch_copy(&keys[mid..])?;

    let (mut i, mut j) = (0, 0);
    for slot in keys.iter_mut() {
        // Ties take from the left run.
        let take_left = j == right.len() || (i < left.len() && left[i] <= right[j]);
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }

    Ok(())
}

/// LSD radix sort over decimal digits.
///
/// Makes one stable counting pass per decimal digit of the largest key. Keys
/// are checked for negativity while the maximum is located. A negative key
/// fails the sort with [`SortError::NegativeKey`] before anything is moved.
#[derive(Clone, Copy, Debug, Default)]
pub struct Radix;

impl SortBackend for Radix {
    fn name(&self) -> &'static str {
        "radix"
    }

    fn sort<K: SortKey>(&self, keys: &mut [K]) -> Result<()> {
        let max = max_radix_key(keys)?;

        let mut exp: u64 = 1;
        while max / exp > 0 {
            counting_pass(keys, exp)?;
            match exp.checked_mul(RADIX_BASE) {
                Some(next) => exp = next,
                None => break,
            }
        }

        Ok(())
    }
}

const RADIX_BASE: u64 = 10;

/// Number of buckets per pass, one per decimal digit.
const RADIX_BUCKETS: usize = RADIX_BASE as usize;

// Cache-aligned digit histogram.
#[cuneiform]
struct DigitCounts {
    data: [usize; RADIX_BUCKETS],
}

/// Largest key as a radix value, or the first negative key as an error.
fn max_radix_key<K: SortKey>(keys: &[K]) -> Result<u64> {
    let mut max = 0;
    for (index, &key) in keys.iter().enumerate() {
        match key.radix_key() {
            Some(value) => max = max.max(value),
            None => {
                return Err(SortError::NegativeKey {
                    index,
                    value: key.widen(),
                });
            }
        }
    }
    Ok(max)
}

#[inline(always)]
fn digit<K: SortKey>(key: K, exp: u64) -> usize {
    // Negative keys were rejected by `max_radix_key`.
    key.radix_key().map_or(0, |k| (k / exp % RADIX_BASE) as usize)
}

/// Stable counting sort on the digit selected by `exp`.
fn counting_pass<K: SortKey>(keys: &mut [K], exp: u64) -> Result<()> {
    let mut counts = DigitCounts {
        data: [0; RADIX_BUCKETS],
    };
    let counts = &mut counts.data;

    keys.iter().for_each(|&k| counts[digit(k, exp)] += 1);

    // Turn counts into exclusive end positions.
    for d in 1..RADIX_BUCKETS {
        counts[d] += counts[d - 1];
    }

    let mut output = scratch_copy(keys)?;
    keys.iter().rev().for_each(|&k| {
        let d = digit(k, exp);
        counts[d] -= 1;
        output[counts[d]] = k;
    });

    keys.copy_from_slice(&output);
    Ok(())
}

/// Copies `src` into a buffer reserved without aborting on failure.
fn scratch_copy<K: SortKey>(src: &[K]) -> Result<Vec<K>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(src.len())
        .map_err(|source| SortError::Allocation {
            len: src.len(),
            source,
        })?;
    buf.extend_from_slice(src);
    Ok(buf)
}
