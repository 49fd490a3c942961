//! Sorting Metrics
//!
//! Mutable record of the operations a sort performs plus a start/stop timer.
//! Counters only grow between two `reset` calls; additions wrap at `u64::MAX`.

use crate::format::thousands;
use crate::measure::TimingState;
use crate::{theoretical_comparisons, theoretical_max_swaps};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Header matching [`SortingMetrics::to_csv`]
pub const METRICS_CSV_HEADER: &str =
    "Comparisons,Swaps,ArrayAccesses,Iterations,MemoryAllocations,TimeMillis";

/// Operation counters and timing for one measured sort
#[derive(Debug, Clone, Default)]
pub struct SortingMetrics {
    comparisons: u64,
    swaps: u64,
    array_accesses: u64,
    iterations: u64,
    memory_allocations: u64,
    timing: TimingState,
}

/// Serializable copy of the counters with the elapsed time resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Element comparisons
    pub comparisons: u64,
    /// Element swaps
    pub swaps: u64,
    /// Logical element reads and writes
    pub array_accesses: u64,
    /// Outer-loop boundary passes
    pub iterations: u64,
    /// Heap allocations attributed to the sort
    pub memory_allocations: u64,
    /// Elapsed wall-clock time in nanoseconds
    pub elapsed_ns: u64,
}

impl SortingMetrics {
    /// Create a zeroed counter with an idle timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every counter and return the timer to idle
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Start (or restart) timing
    pub fn start_timing(&mut self) {
        self.timing.start();
    }

    /// Stop timing
    pub fn stop_timing(&mut self) {
        self.timing.stop();
    }

    /// Current timing state
    pub fn timing_state(&self) -> TimingState {
        self.timing
    }

    /// Whether the timer is running
    pub fn is_timing_active(&self) -> bool {
        self.timing.is_running()
    }

    // ─── Increments ──────────────────────────────────────────────────────────

    /// Add `count` comparisons
    #[inline]
    pub fn increment_comparisons(&mut self, count: u64) {
        self.comparisons = self.comparisons.wrapping_add(count);
    }

    /// Add `count` swaps
    #[inline]
    pub fn increment_swaps(&mut self, count: u64) {
        self.swaps = self.swaps.wrapping_add(count);
    }

    /// Add `count` array accesses
    #[inline]
    pub fn increment_array_accesses(&mut self, count: u64) {
        self.array_accesses = self.array_accesses.wrapping_add(count);
    }

    /// Add `count` iterations
    #[inline]
    pub fn increment_iterations(&mut self, count: u64) {
        self.iterations = self.iterations.wrapping_add(count);
    }

    /// Add `count` memory allocations
    #[inline]
    pub fn increment_memory_allocations(&mut self, count: u64) {
        self.memory_allocations = self.memory_allocations.wrapping_add(count);
    }

    // ─── Accessors ───────────────────────────────────────────────────────────

    /// Comparisons recorded
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Swaps recorded
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Array accesses recorded
    pub fn array_accesses(&self) -> u64 {
        self.array_accesses
    }

    /// Iterations recorded
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Memory allocations recorded
    pub fn memory_allocations(&self) -> u64 {
        self.memory_allocations
    }

    /// Elapsed time derived from the timing state
    pub fn elapsed(&self) -> Duration {
        self.timing.elapsed()
    }

    /// Elapsed time in nanoseconds
    pub fn elapsed_nanos(&self) -> u64 {
        self.elapsed().as_nanos() as u64
    }

    /// Elapsed time in milliseconds
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed_nanos() as f64 / 1_000_000.0
    }

    /// Elapsed time in seconds
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_nanos() as f64 / 1_000_000_000.0
    }

    /// Independent copy of the counters and timing state
    pub fn snapshot(&self) -> SortingMetrics {
        self.clone()
    }

    /// Serializable summary of the current values
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            comparisons: self.comparisons,
            swaps: self.swaps,
            array_accesses: self.array_accesses,
            iterations: self.iterations,
            memory_allocations: self.memory_allocations,
            elapsed_ns: self.elapsed_nanos(),
        }
    }

    // ─── Reports ─────────────────────────────────────────────────────────────

    /// Multi-line human-readable report
    pub fn generate_report(&self) -> String {
        let mut out = String::new();
        out.push_str("====== Sorting Metrics Report ======\n");
        out.push_str(&format!("Comparisons:        {}\n", thousands(self.comparisons)));
        out.push_str(&format!("Swaps:              {}\n", thousands(self.swaps)));
        out.push_str(&format!("Array Accesses:     {}\n", thousands(self.array_accesses)));
        out.push_str(&format!("Iterations:         {}\n", thousands(self.iterations)));
        out.push_str(&format!(
            "Memory Allocations: {}\n",
            thousands(self.memory_allocations)
        ));
        out.push_str(&format!("Elapsed Time:       {:.3} ms\n", self.elapsed_millis()));
        out.push_str("====================================");
        out
    }

    /// One-line summary: `C:<n> S:<n> A:<n> I:<n> T:<ms>ms`
    pub fn compact_report(&self) -> String {
        format!(
            "C:{} S:{} A:{} I:{} T:{:.3}ms",
            self.comparisons,
            self.swaps,
            self.array_accesses,
            self.iterations,
            self.elapsed_millis()
        )
    }

    /// CSV line in [`METRICS_CSV_HEADER`] column order
    pub fn to_csv(&self) -> String {
        format!(
            "{},{},{},{},{},{:.6}",
            self.comparisons,
            self.swaps,
            self.array_accesses,
            self.iterations,
            self.memory_allocations,
            self.elapsed_millis()
        )
    }

    /// Side-by-side comparison of the recorded counts with the closed-form predictions
    pub fn compare_with_theoretical(&self, array_size: usize) -> String {
        let expected_comparisons = theoretical_comparisons(array_size);
        let max_swaps = theoretical_max_swaps(array_size);
        let comparison_diff = self.comparisons as i64 - expected_comparisons as i64;
        let swap_diff = self.swaps as i64 - max_swaps as i64;

        let mut out = String::new();
        out.push_str("=== Theoretical vs Actual ===\n");
        out.push_str(&format!(
            "Comparisons - Theoretical: {}, Actual: {}, Diff: {:+}\n",
            thousands(expected_comparisons),
            thousands(self.comparisons),
            comparison_diff
        ));
        out.push_str(&format!(
            "Max Swaps   - Theoretical: {}, Actual: {}, Diff: {:+}\n",
            thousands(max_swaps),
            thousands(self.swaps),
            swap_diff
        ));
        out.push_str("=============================");
        out
    }
}

impl fmt::Display for SortingMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compact_report())
    }
}
