//! Statistics Computation
//!
//! Collapses a set of measured trials into one `BenchmarkResult`:
//! - arithmetic mean of time and of every counter
//! - population standard deviation of time
//!
//! Counter means are truncated to integers; time stays in fractional milliseconds.

use selbench_core::SortingMetrics;
use selbench_report::BenchmarkResult;
use selbench_stats::{UNSTABLE_CV_PERCENT, compute_summary, mean_u64};

/// Raw per-trial measurements for one configuration
#[derive(Debug, Clone, Default)]
pub struct TrialSamples {
    /// Sort time per trial in milliseconds
    pub times_ms: Vec<f64>,
    /// Comparisons per trial
    pub comparisons: Vec<u64>,
    /// Swaps per trial
    pub swaps: Vec<u64>,
    /// Array accesses per trial
    pub array_accesses: Vec<u64>,
}

impl TrialSamples {
    /// Pre-allocate for `trials` measurements
    pub fn with_capacity(trials: usize) -> Self {
        Self {
            times_ms: Vec::with_capacity(trials),
            comparisons: Vec::with_capacity(trials),
            swaps: Vec::with_capacity(trials),
            array_accesses: Vec::with_capacity(trials),
        }
    }

    /// Record the counters of one finished trial
    pub fn record(&mut self, metrics: &SortingMetrics) {
        self.times_ms.push(metrics.elapsed_millis());
        self.comparisons.push(metrics.comparisons());
        self.swaps.push(metrics.swaps());
        self.array_accesses.push(metrics.array_accesses());
    }

    /// Number of recorded trials
    pub fn len(&self) -> usize {
        self.times_ms.len()
    }

    /// Whether no trial was recorded
    pub fn is_empty(&self) -> bool {
        self.times_ms.is_empty()
    }

    /// Coefficient of variation of trial times when it exceeds [`UNSTABLE_CV_PERCENT`].
    ///
    /// `None` for stable trials and for fewer than two samples.
    pub fn time_instability(&self) -> Option<f64> {
        if self.times_ms.len() < 2 {
            return None;
        }
        let time = compute_summary(&self.times_ms);
        if time.is_stable(UNSTABLE_CV_PERCENT) {
            None
        } else {
            Some(time.coefficient_of_variation())
        }
    }
}

/// Aggregate trials for `array_size` into an immutable result
pub fn aggregate_trials(array_size: usize, samples: &TrialSamples) -> BenchmarkResult {
    let time = compute_summary(&samples.times_ms);

    BenchmarkResult {
        array_size,
        avg_time_ms: time.mean,
        avg_comparisons: mean_u64(&samples.comparisons) as u64,
        avg_swaps: mean_u64(&samples.swaps) as u64,
        avg_array_accesses: mean_u64(&samples.array_accesses) as u64,
        std_dev_time_ms: time.std_dev,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_means_and_population_std_dev() {
        let samples = TrialSamples {
            times_ms: vec![1.0, 3.0],
            comparisons: vec![10, 10],
            swaps: vec![3, 4],
            array_accesses: vec![100, 105],
        };
        let result = aggregate_trials(5, &samples);

        assert_eq!(result.array_size, 5);
        assert!((result.avg_time_ms - 2.0).abs() < f64::EPSILON);
        assert!((result.std_dev_time_ms - 1.0).abs() < f64::EPSILON);
        assert_eq!(result.avg_comparisons, 10);
        // 3.5 truncates
        assert_eq!(result.avg_swaps, 3);
        assert_eq!(result.avg_array_accesses, 102);
    }

    #[test]
    fn test_record_from_metrics() {
        let mut metrics = SortingMetrics::new();
        metrics.increment_comparisons(45);
        metrics.increment_swaps(9);
        metrics.increment_array_accesses(136);

        let mut samples = TrialSamples::with_capacity(2);
        assert!(samples.is_empty());
        samples.record(&metrics);
        samples.record(&metrics);

        assert_eq!(samples.len(), 2);
        assert_eq!(samples.comparisons, vec![45, 45]);
        assert_eq!(samples.times_ms, vec![0.0, 0.0]);
    }

    #[test]
    fn test_time_instability() {
        let steady = TrialSamples {
            times_ms: vec![2.0, 2.0, 2.0],
            ..Default::default()
        };
        assert_eq!(steady.time_instability(), None);

        let noisy = TrialSamples {
            times_ms: vec![1.0, 9.0],
            ..Default::default()
        };
        // mean 5, population std dev 4
        let cv = noisy.time_instability().unwrap();
        assert!((cv - 80.0).abs() < 1e-9);

        let single = TrialSamples {
            times_ms: vec![1.0],
            ..Default::default()
        };
        assert_eq!(single.time_instability(), None);
    }

    #[test]
    fn test_aggregate_empty() {
        let result = aggregate_trials(10, &TrialSamples::default());
        assert_eq!(result.avg_comparisons, 0);
        assert_eq!(result.avg_time_ms, 0.0);
    }
}
