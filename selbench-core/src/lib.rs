#![warn(missing_docs)]
//! Selbench Core - Instrumented Sorting Engine
//!
//! This crate provides the measured side of selbench:
//! - `SortingMetrics` counters (comparisons, swaps, accesses, iterations, allocations)
//!   with a start/stop timing state
//! - `SelectionSort` engine with ascending, early-exit and descending variants
//! - `InputDistribution` generators for benchmark inputs
//! - Validation helpers shared by the harness and the CLI

mod error;
mod format;
mod generate;
mod measure;
mod metrics;
mod sorter;
pub mod validation;

pub use error::{Result, SortError};
pub use format::{thousands, thousands_signed};
pub use generate::{GeneratorParams, InputDistribution, nearly_sorted_swap_count};
pub use measure::TimingState;
pub use metrics::{METRICS_CSV_HEADER, MetricsSummary, SortingMetrics};
pub use sorter::{ALGORITHM_INFO, MetricsMode, SelectionSort, SortVariant};

/// Closed-form comparison count of an unoptimized selection sort: `n·(n-1)/2`
///
/// Saturates at `u64::MAX` for sizes whose count does not fit.
pub fn theoretical_comparisons(n: usize) -> u64 {
    let n = n as u128;
    let count = n * n.saturating_sub(1) / 2;
    u64::try_from(count).unwrap_or(u64::MAX)
}

/// Upper bound on swaps performed by selection sort: `n-1` (0 for empty input)
pub fn theoretical_max_swaps(n: usize) -> u64 {
    (n as u64).saturating_sub(1)
}
