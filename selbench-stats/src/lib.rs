#![warn(missing_docs)]
//! Selbench Statistical Engine
//!
//! Aggregates repeated trial measurements:
//! - Arithmetic mean and population standard deviation (no Bessel correction)
//! - Coefficient of variation for run stability
//! - Quadratic growth analysis (`t/n²` ratio and per-step growth factor)
//!
//! There is no outlier rejection: every measured trial contributes.

mod growth;
mod summary;

pub use growth::{GrowthPoint, analyze_growth, expected_growth_factor};
pub use summary::{SummaryStatistics, compute_summary, mean, mean_u64, population_std_dev};

/// Warm-up trials discarded before measuring a configuration
pub const DEFAULT_WARMUP_TRIALS: usize = 5;

/// Measured trials averaged per configuration
pub const DEFAULT_MEASURED_TRIALS: usize = 10;

/// Coefficient of variation (percent) above which trial times count as unstable
pub const UNSTABLE_CV_PERCENT: f64 = 25.0;
