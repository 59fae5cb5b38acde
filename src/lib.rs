//! # Polysort
//!
//! `polysort` sorts slices of signed integers by looking before it leaps. It inspects
//! a short prefix of the input and picks the sorting algorithm best suited to
//! what it saw there.
//!
//! ## How it decides
//!
//! - **Small inputs** (fewer than [`INSERTION_THRESHOLD`] keys) are insertion sorted
//!   straight away. At this size analysis costs more than it saves.
//! - Otherwise up to [`SAMPLE_CAP`] leading keys are analysed:
//!   - a **nearly sorted** sample (at least [`NEARLY_SORTED_RATIO`] of adjacent pairs
//!     ascending) selects **merge sort**;
//!   - a sample with **no negative keys** selects **LSD radix sort**;
//!   - anything else, including **low cardinality** samples, selects **quicksort**.
//!
//! The sample may not represent the whole slice. In particular, negative keys
//! past the sample would break radix sort. The radix backend checks every key
//! before moving any, and the sorter falls back to quicksort when it finds a
//! negative one.
//!
//! ## Usage
//!
//! ```rust
//! use polysort::adaptive_sort;
//!
//! let mut data = vec![1, 2, 3, 10, 5, 6, 7, 8, 9, 4, 11, 12];
//! adaptive_sort(&mut data).unwrap();
//!
//! assert_eq!(data, (1..=12).collect::<Vec<i32>>());
//! ```
//!
//! ### Inspecting the decision
//!
//! [`AdaptiveSorter::plan`] reports what [`AdaptiveSorter::sort`] would do, without sorting.
//!
//! ```rust
//! use polysort::{AdaptiveSorter, Plan, Strategy};
//!
//! let data: Vec<i32> = (0..40).map(|i| if i % 2 == 0 { 1000 - i } else { i }).collect();
//! let sorter = AdaptiveSorter::default();
//!
//! assert_eq!(sorter.plan(&data), Plan::Analyzed(Strategy::RadixEligible));
//! ```
//!
//! ## Logging
//!
//! Decisions are reported through the [`log`](https://docs.rs/log) facade, at `debug`
//! (plan and backend) and `trace` (sample statistics) level. A radix fallback is
//! reported at `warn`.

pub mod algo;
pub mod analysis;
pub mod backend;
pub mod core;
pub mod error;

pub use crate::algo::{AdaptiveSorter, adaptive_sort, adaptive_sorted};
pub use crate::core::{
    INSERTION_THRESHOLD, LOW_CARDINALITY_RATIO, NEARLY_SORTED_RATIO, Plan, SAMPLE_CAP, SortKey,
    Strategy, Thresholds,
};
pub use crate::error::{ConfigError, SortError};

pub mod prelude {
    pub use crate::algo::{AdaptiveSorter, adaptive_sort, adaptive_sorted};
    pub use crate::core::{Plan, SortKey, Strategy, Thresholds};
    pub use crate::error::{ConfigError, SortError};
}
