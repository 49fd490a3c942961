//! Report Data Structures

use chrono::{DateTime, Utc};
use selbench_core::{InputDistribution, theoretical_comparisons, thousands};
use selbench_stats::GrowthPoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Averaged measurements for one input size, built once from a full trial set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Input size
    pub array_size: usize,
    /// Mean sort time in milliseconds
    pub avg_time_ms: f64,
    /// Mean comparisons (truncated)
    pub avg_comparisons: u64,
    /// Mean swaps (truncated)
    pub avg_swaps: u64,
    /// Mean array accesses (truncated)
    pub avg_array_accesses: u64,
    /// Population standard deviation of the sort time in milliseconds
    pub std_dev_time_ms: f64,
}

impl BenchmarkResult {
    /// `n·(n-1)/2` for this result's size
    pub fn theoretical_comparisons(&self) -> u64 {
        theoretical_comparisons(self.array_size)
    }

    /// Mean time divided by `size²`; 0.0 for an empty size
    pub fn ratio_tn2(&self) -> f64 {
        if self.array_size == 0 {
            return 0.0;
        }
        let n = self.array_size as f64;
        self.avg_time_ms / (n * n)
    }

    /// Signed difference between measured and theoretical comparisons
    pub fn comparison_diff(&self) -> i64 {
        self.avg_comparisons as i64 - self.theoretical_comparisons() as i64
    }
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Size: {} | Time: {:.3} ms | Comparisons: {} | Swaps: {}",
            thousands(self.array_size as u64),
            self.avg_time_ms,
            thousands(self.avg_comparisons),
            thousands(self.avg_swaps)
        )
    }
}

/// A benchmark result tagged with the input distribution that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionResult {
    /// Input shape
    pub distribution: InputDistribution,
    /// Averaged measurements
    pub result: BenchmarkResult,
}

/// Single-trial timings across a geometric size progression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityReport {
    /// One point per size, in measurement order
    pub points: Vec<GrowthPoint>,
}

impl fmt::Display for ComplexityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Complexity Verification Report")?;
        writeln!(f, "==============================")?;
        writeln!(f)?;
        writeln!(
            f,
            "If algorithm is O(n²), the ratio t/(n²) should be approximately constant."
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<10} {:<15} {:<20} {:<15}",
            "Size", "Time (ms)", "Ratio (t/n²)", "Growth Factor"
        )?;
        writeln!(f, "{}", "-".repeat(65))?;

        for point in &self.points {
            let growth = match point.growth_factor {
                Some(g) => format!("{:.2}x", g),
                None => "N/A".to_string(),
            };
            writeln!(
                f,
                "{:<10} {:<15.3} {:<20.9} {:<15}",
                point.size, point.time_ms, point.ratio, growth
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Expected behavior for O(n²):")?;
        writeln!(f, "- Doubling n should approximately quadruple time")?;
        writeln!(f, "- Ratio t/n² should remain relatively constant")
    }
}

/// Run configuration captured in report metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Discarded warm-up trials per configuration
    pub warmup_trials: usize,
    /// Averaged trials per configuration
    pub measured_trials: usize,
    /// RNG seed
    pub seed: u64,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Tool version
    pub version: String,
    /// Generation time
    pub timestamp: DateTime<Utc>,
    /// Operating system
    pub os: String,
    /// CPU architecture
    pub arch: String,
    /// Harness configuration
    pub config: RunConfig,
}

/// Complete benchmark report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata
    pub meta: ReportMeta,
    /// Per-size results on random input
    pub results: Vec<BenchmarkResult>,
    /// Per-distribution results at a single size
    #[serde(default)]
    pub distributions: Vec<DistributionResult>,
    /// Optional complexity verification
    #[serde(default)]
    pub complexity: Option<ComplexityReport>,
}
