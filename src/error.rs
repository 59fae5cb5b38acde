//! Error types returned by the sorter and its backends.

use std::collections::TryReserveError;
use thiserror::Error;

pub type Result<T, E = SortError> = std::result::Result<T, E>;

/// Failure of a single sort operation.
///
/// When a sort returns an error the slice still holds a permutation of its
/// original keys, but their order is not guaranteed.
#[derive(Debug, Error)]
pub enum SortError {
    /// A scratch buffer for the merge or radix backend could not be reserved.
    #[error("failed to reserve a scratch buffer for {len} keys")]
    Allocation {
        len: usize,
        #[source]
        source: TryReserveError,
    },

    /// The radix backend only orders non-negative keys. The slice is left
    /// untouched when this is returned.
    #[error("radix sort requires non-negative keys, found {value} at index {index}")]
    NegativeKey { index: usize, value: i128 },
}

/// Rejected [`Thresholds`](crate::core::Thresholds).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("sample cap must be at least 1")]
    ZeroSampleCap,

    #[error("{name} must be a finite ratio within [0, 1], got {value}")]
    RatioOutOfRange { name: &'static str, value: f64 },
}
