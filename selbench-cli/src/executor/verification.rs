//! Complexity Verification
//!
//! Checks measured results against the closed-form behavior of selection sort.
//!
//! ```text
//! GrowthPoint[]
//!      │
//!      ▼
//! observed growth (t₂/t₁) ──┐
//! expected growth (n₂/n₁)² ─┼──► GrowthAssessment
//! ratio spread max/min(t/n²)┘
//! ```
//!
//! Timing is noisy at small sizes, so the assessment is a summary for the
//! reader rather than a pass/fail gate. The comparison count on the other
//! hand is exact.

use selbench_report::BenchmarkResult;
use selbench_stats::{GrowthPoint, expected_growth_factor, mean};
use std::fmt;

/// Summary of how closely a growth series follows O(n²)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthAssessment {
    /// Mean of the observed growth factors (0.0 when none are available)
    pub mean_observed_growth: f64,
    /// Mean of the growth factors predicted by O(n²)
    pub mean_expected_growth: f64,
    /// Largest `t/n²` divided by the smallest positive one (1.0 is perfectly flat)
    pub ratio_spread: f64,
    /// Number of consecutive size steps with a growth factor
    pub steps: usize,
}

impl GrowthAssessment {
    /// Observed mean growth within `tolerance` (relative) of the expected mean
    pub fn is_quadratic(&self, tolerance: f64) -> bool {
        if self.steps == 0 || self.mean_expected_growth <= 0.0 {
            return false;
        }
        let deviation =
            (self.mean_observed_growth - self.mean_expected_growth).abs() / self.mean_expected_growth;
        deviation <= tolerance
    }
}

impl fmt::Display for GrowthAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Average growth: {:.2}x observed vs {:.2}x expected over {} steps (t/n² spread {:.2}x)",
            self.mean_observed_growth, self.mean_expected_growth, self.steps, self.ratio_spread
        )
    }
}

/// Summarize a growth series
pub fn assess_growth(points: &[GrowthPoint]) -> GrowthAssessment {
    let mut observed = Vec::new();
    let mut expected = Vec::new();

    for pair in points.windows(2) {
        if let Some(growth) = pair[1].growth_factor {
            observed.push(growth);
            expected.push(expected_growth_factor(pair[0].size, pair[1].size));
        }
    }

    let positive_ratios: Vec<f64> = points
        .iter()
        .map(|p| p.ratio)
        .filter(|&r| r > 0.0)
        .collect();
    let ratio_spread = match (
        positive_ratios.iter().copied().reduce(f64::min),
        positive_ratios.iter().copied().reduce(f64::max),
    ) {
        (Some(min), Some(max)) => max / min,
        _ => 1.0,
    };

    GrowthAssessment {
        mean_observed_growth: mean(&observed),
        mean_expected_growth: mean(&expected),
        ratio_spread,
        steps: observed.len(),
    }
}

/// Whether the mean comparison count equals `n·(n-1)/2`.
///
/// Holds for every unoptimized variant regardless of input shape.
pub fn comparison_identity_holds(result: &BenchmarkResult) -> bool {
    result.comparison_diff() == 0
}
