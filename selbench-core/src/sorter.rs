//! Selection Sort Engine
//!
//! In-place selection sort over `i32` slices. Every variant shares one
//! scan/swap routine, generic over a [`Recorder`], so counter semantics are
//! identical across variants and the disabled path compiles to the bare sort.
//!
//! Per boundary index `i`:
//! - 1 access for the initial candidate at `i`
//! - 1 comparison and 2 accesses per scanned element in `i+1..n`
//! - 1 swap and 4 accesses when the selected index differs from `i`
//! - 1 iteration

use crate::error::{Result, SortError};
use crate::metrics::SortingMetrics;
use serde::{Deserialize, Serialize};

/// Human-readable algorithm characteristics
pub const ALGORITHM_INFO: &str = "SelectionSort [Time: O(n²), Space: O(1), Stable: No, In-place: Yes]";

/// Which selection sort variant to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortVariant {
    /// Ascending, always `n-1` boundary passes
    #[default]
    Ascending,
    /// Ascending, stops once no swap is needed and the remaining suffix is sorted
    AscendingOptimized,
    /// Descending (selects the maximum at each boundary)
    Descending,
}

impl SortVariant {
    /// Whether the variant produces a non-increasing sequence
    pub fn is_descending(self) -> bool {
        matches!(self, SortVariant::Descending)
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            SortVariant::Ascending => "ascending",
            SortVariant::AscendingOptimized => "ascending (early exit)",
            SortVariant::Descending => "descending",
        }
    }
}

/// Metrics collection state of a [`SelectionSort`]
#[derive(Debug, Clone)]
pub enum MetricsMode {
    /// No counter exists; sorting skips all bookkeeping
    Disabled,
    /// Counter owned by the engine, reset at the start of every sort
    Enabled(SortingMetrics),
}

/// Sink for the operations performed by the sort routine
trait Recorder {
    fn comparison(&mut self);
    fn accesses(&mut self, count: u64);
    fn swap(&mut self);
    fn iteration(&mut self);
}

impl Recorder for SortingMetrics {
    #[inline(always)]
    fn comparison(&mut self) {
        self.increment_comparisons(1);
    }

    #[inline(always)]
    fn accesses(&mut self, count: u64) {
        self.increment_array_accesses(count);
    }

    #[inline(always)]
    fn swap(&mut self) {
        self.increment_swaps(1);
    }

    #[inline(always)]
    fn iteration(&mut self) {
        self.increment_iterations(1);
    }
}

/// Recorder used when metrics are disabled
struct Unrecorded;

impl Recorder for Unrecorded {
    #[inline(always)]
    fn comparison(&mut self) {}
    #[inline(always)]
    fn accesses(&mut self, _count: u64) {}
    #[inline(always)]
    fn swap(&mut self) {}
    #[inline(always)]
    fn iteration(&mut self) {}
}

/// Selection sort with optional operation counting
#[derive(Debug, Clone)]
pub struct SelectionSort {
    metrics: MetricsMode,
}

impl Default for SelectionSort {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionSort {
    /// Create an engine with metrics enabled
    pub fn new() -> Self {
        Self::with_metrics(true)
    }

    /// Create an engine with metrics enabled or disabled
    pub fn with_metrics(enabled: bool) -> Self {
        let metrics = if enabled {
            MetricsMode::Enabled(SortingMetrics::new())
        } else {
            MetricsMode::Disabled
        };
        Self { metrics }
    }

    /// Sort ascending. Always performs `n-1` boundary passes.
    pub fn sort(&mut self, data: &mut [i32]) {
        self.run(data, SortVariant::Ascending);
    }

    /// Sort ascending, terminating early once the remaining suffix is already sorted
    pub fn sort_optimized(&mut self, data: &mut [i32]) {
        self.run(data, SortVariant::AscendingOptimized);
    }

    /// Sort descending
    pub fn sort_descending(&mut self, data: &mut [i32]) {
        self.run(data, SortVariant::Descending);
    }

    /// Sort with an explicit variant
    pub fn sort_with(&mut self, data: &mut [i32], variant: SortVariant) {
        self.run(data, variant);
    }

    /// Counters from the most recent sort.
    ///
    /// Fails with [`SortError::IllegalState`] when metrics are disabled.
    pub fn metrics(&self) -> Result<&SortingMetrics> {
        match &self.metrics {
            MetricsMode::Enabled(m) => Ok(m),
            MetricsMode::Disabled => Err(SortError::IllegalState(
                "Metrics collection is disabled".to_string(),
            )),
        }
    }

    /// Zero the counters (no-op when disabled)
    pub fn reset_metrics(&mut self) {
        if let MetricsMode::Enabled(m) = &mut self.metrics {
            m.reset();
        }
    }

    /// Enable or disable metrics. Enabling a disabled engine creates a fresh counter;
    /// enabling an enabled engine keeps the current one.
    pub fn set_metrics_enabled(&mut self, enabled: bool) {
        match (&self.metrics, enabled) {
            (MetricsMode::Disabled, true) => {
                self.metrics = MetricsMode::Enabled(SortingMetrics::new());
            }
            (MetricsMode::Enabled(_), false) => {
                self.metrics = MetricsMode::Disabled;
            }
            _ => {}
        }
    }

    /// Whether metrics are being collected
    pub fn is_metrics_enabled(&self) -> bool {
        matches!(self.metrics, MetricsMode::Enabled(_))
    }

    /// Current metrics mode
    pub fn metrics_mode(&self) -> &MetricsMode {
        &self.metrics
    }

    fn run(&mut self, data: &mut [i32], variant: SortVariant) {
        match &mut self.metrics {
            MetricsMode::Enabled(m) => {
                m.reset();
                m.start_timing();
                selection_sort(data, variant, m);
                m.stop_timing();
            }
            MetricsMode::Disabled => selection_sort(data, variant, &mut Unrecorded),
        }
    }
}

impl std::fmt::Display for SelectionSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(ALGORITHM_INFO)
    }
}

fn selection_sort<R: Recorder>(data: &mut [i32], variant: SortVariant, rec: &mut R) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    for i in 0..n - 1 {
        let selected = if variant.is_descending() {
            select_index(data, i, rec, |candidate, best| candidate > best)
        } else {
            select_index(data, i, rec, |candidate, best| candidate < best)
        };

        if variant == SortVariant::AscendingOptimized
            && selected == i
            && is_sorted_ascending(&data[i..])
        {
            break;
        }

        if selected != i {
            swap(data, i, selected, rec);
        }

        rec.iteration();
    }
}

/// Index of the element in `data[start..]` preferred by `better`; ties keep the earliest index
#[inline(always)]
fn select_index<R, F>(data: &[i32], start: usize, rec: &mut R, better: F) -> usize
where
    R: Recorder,
    F: Fn(i32, i32) -> bool,
{
    let mut best = start;
    rec.accesses(1);

    for j in start + 1..data.len() {
        rec.comparison();
        rec.accesses(2);
        if better(data[j], data[best]) {
            best = j;
        }
    }

    best
}

#[inline(always)]
fn swap<R: Recorder>(data: &mut [i32], i: usize, j: usize, rec: &mut R) {
    rec.swap();
    rec.accesses(4);
    data.swap(i, j);
}

fn is_sorted_ascending(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
