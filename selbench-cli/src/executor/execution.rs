//! Benchmark Execution
//!
//! The trial protocol shared by every harness entry point:
//!
//! ```text
//! for each configuration (size, distribution):
//!     warm-up trials   → run and discard
//!     measured trials  → generate input (untimed)
//!                        reset counters
//!                        sort (timed inside the engine)
//!                        read counters back
//!     aggregate        → BenchmarkResult
//! ```
//!
//! Everything runs on the calling thread. The engine's counter is the only
//! state shared across trials and is reset before each one.

use super::statistics::{TrialSamples, aggregate_trials};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use selbench_core::validation::validate_positive;
use selbench_core::{GeneratorParams, InputDistribution, Result, SelectionSort, SortVariant};
use selbench_report::{BenchmarkResult, ComplexityReport, DistributionResult};
use selbench_stats::{DEFAULT_MEASURED_TRIALS, DEFAULT_WARMUP_TRIALS, analyze_growth};
use tracing::{debug, info, warn};

/// Configuration for the benchmark harness
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Discarded trials before each measured configuration
    pub warmup_trials: usize,
    /// Averaged trials per configuration
    pub measured_trials: usize,
    /// RNG seed for input generation
    pub seed: u64,
    /// Generator parameters
    pub generator: GeneratorParams,
    /// Sort variant under measurement
    pub variant: SortVariant,
    /// Sizes measured by [`Harness::verify_complexity`]
    pub complexity_sizes: Vec<usize>,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            warmup_trials: DEFAULT_WARMUP_TRIALS,
            measured_trials: DEFAULT_MEASURED_TRIALS,
            seed: 42,
            generator: GeneratorParams::default(),
            variant: SortVariant::Ascending,
            complexity_sizes: vec![100, 200, 400, 800, 1600],
            show_progress: false,
        }
    }
}

/// Repeated, comparable measurements of the selection sort engine
pub struct Harness {
    config: HarnessConfig,
    sorter: SelectionSort,
    rng: StdRng,
}

impl Harness {
    /// Create a harness with its own metrics-enabled engine and seeded RNG
    pub fn new(config: HarnessConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            config,
            sorter: SelectionSort::new(),
            rng,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Measure random input at each size.
    ///
    /// Fails with `InvalidInput` before running anything if a size is zero.
    pub fn run_benchmarks(&mut self, sizes: &[usize]) -> Result<Vec<BenchmarkResult>> {
        for &size in sizes {
            validate_positive(size as i64, "Array size")?;
        }

        info!(
            warmup = self.config.warmup_trials,
            trials = self.config.measured_trials,
            "Starting performance benchmarks"
        );

        let pb = self.progress_bar(sizes.len());
        let mut results = Vec::with_capacity(sizes.len());

        for &size in sizes {
            pb.set_message(format!("size {}", size));
            info!(size, "Benchmarking size");
            results.push(self.measure_configuration(size, InputDistribution::Random)?);
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(results)
    }

    /// Measure one size under every input distribution, in [`InputDistribution::ALL`] order
    pub fn benchmark_distributions(&mut self, size: usize) -> Result<Vec<DistributionResult>> {
        validate_positive(size as i64, "Array size")?;

        let pb = self.progress_bar(InputDistribution::ALL.len());
        let mut results = Vec::with_capacity(InputDistribution::ALL.len());

        for distribution in InputDistribution::ALL {
            pb.set_message(distribution.name());
            results.push(DistributionResult {
                distribution,
                result: self.benchmark_distribution(size, distribution)?,
            });
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(results)
    }

    /// Measure one size under a single input distribution
    pub fn benchmark_distribution(
        &mut self,
        size: usize,
        distribution: InputDistribution,
    ) -> Result<BenchmarkResult> {
        validate_positive(size as i64, "Array size")?;
        info!(size, %distribution, "Benchmarking distribution");
        self.measure_configuration(size, distribution)
    }

    /// Single un-averaged trials over the configured size progression
    pub fn verify_complexity(&mut self) -> Result<ComplexityReport> {
        let sizes = self.config.complexity_sizes.clone();
        for &size in &sizes {
            validate_positive(size as i64, "Array size")?;
        }

        info!(sizes = ?sizes, "Verifying O(n²) time complexity");

        let mut times_ms = Vec::with_capacity(sizes.len());
        for &size in &sizes {
            let samples = self.run_trials(size, InputDistribution::Random, 1)?;
            times_ms.push(samples.times_ms.first().copied().unwrap_or(0.0));
        }

        Ok(ComplexityReport {
            points: analyze_growth(&sizes, &times_ms),
        })
    }

    /// Warm-up then measured trials for one configuration
    fn measure_configuration(
        &mut self,
        size: usize,
        distribution: InputDistribution,
    ) -> Result<BenchmarkResult> {
        if self.config.warmup_trials > 0 {
            debug!(size, trials = self.config.warmup_trials, "Warm-up");
            self.run_trials(size, distribution, self.config.warmup_trials)?;
        }

        let samples = self.run_trials(size, distribution, self.config.measured_trials)?;
        let result = aggregate_trials(size, &samples);

        if let Some(cv) = samples.time_instability() {
            warn!(size, %distribution, cv_percent = cv, "Unstable trial times");
        }

        debug!(
            size,
            %distribution,
            avg_time_ms = result.avg_time_ms,
            std_dev_ms = result.std_dev_time_ms,
            avg_comparisons = result.avg_comparisons,
            "Configuration complete"
        );
        Ok(result)
    }

    fn run_trials(
        &mut self,
        size: usize,
        distribution: InputDistribution,
        trials: usize,
    ) -> Result<TrialSamples> {
        let mut samples = TrialSamples::with_capacity(trials);

        for trial in 0..trials {
            let mut data = distribution.generate(size, &mut self.rng, &self.config.generator);

            self.sorter.reset_metrics();
            self.sorter.sort_with(&mut data, self.config.variant);

            let metrics = self.sorter.metrics()?;
            if metrics.elapsed_nanos() == 0 {
                warn!(size, trial, "Trial reported zero elapsed time");
            }
            debug!(
                size,
                trial,
                time_ms = metrics.elapsed_millis(),
                comparisons = metrics.comparisons(),
                swaps = metrics.swaps(),
                "Trial"
            );
            samples.record(metrics);
        }

        Ok(samples)
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selbench_core::{SortError, theoretical_comparisons};

    fn quick_config() -> HarnessConfig {
        HarnessConfig {
            warmup_trials: 1,
            measured_trials: 3,
            complexity_sizes: vec![20, 40, 80],
            ..Default::default()
        }
    }

    #[test]
    fn test_run_benchmarks_counts() {
        let mut harness = Harness::new(quick_config());
        let results = harness.run_benchmarks(&[10, 50]).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].array_size, 10);
        assert_eq!(results[0].avg_comparisons, theoretical_comparisons(10));
        assert_eq!(results[1].avg_comparisons, theoretical_comparisons(50));
        assert!(results[1].avg_swaps <= 49);
        assert!(results[1].std_dev_time_ms >= 0.0);
    }

    #[test]
    fn test_zero_size_rejected() {
        let mut harness = Harness::new(quick_config());
        assert!(matches!(
            harness.run_benchmarks(&[10, 0]),
            Err(SortError::InvalidInput(_))
        ));
        assert!(harness.benchmark_distributions(0).is_err());
    }

    #[test]
    fn test_distributions() {
        let mut harness = Harness::new(quick_config());
        let results = harness.benchmark_distributions(100).unwrap();

        let order: Vec<_> = results.iter().map(|r| r.distribution).collect();
        assert_eq!(order, InputDistribution::ALL);

        // Comparisons do not depend on input shape for the unoptimized sort
        for r in &results {
            assert_eq!(r.result.avg_comparisons, 4950);
        }
        let sorted = &results[1].result;
        let reverse = &results[2].result;
        assert_eq!(sorted.avg_swaps, 0);
        assert_eq!(reverse.avg_swaps, 50);
    }

    #[test]
    fn test_optimized_distributions_vary() {
        let mut harness = Harness::new(HarnessConfig {
            variant: SortVariant::AscendingOptimized,
            ..quick_config()
        });
        let results = harness.benchmark_distributions(100).unwrap();
        let random = &results[0].result;
        let sorted = &results[1].result;
        assert_eq!(sorted.avg_comparisons, 99);
        assert!(random.avg_comparisons > sorted.avg_comparisons);
    }

    #[test]
    fn test_verify_complexity_points() {
        let mut harness = Harness::new(quick_config());
        let report = harness.verify_complexity().unwrap();
        let sizes: Vec<_> = report.points.iter().map(|p| p.size).collect();
        assert_eq!(sizes, vec![20, 40, 80]);
        assert!(report.points[0].growth_factor.is_none());
    }

    #[test]
    fn test_same_seed_same_counts() {
        let mut a = Harness::new(quick_config());
        let mut b = Harness::new(quick_config());
        let ra = a.run_benchmarks(&[64]).unwrap();
        let rb = b.run_benchmarks(&[64]).unwrap();
        assert_eq!(ra[0].avg_swaps, rb[0].avg_swaps);
        assert_eq!(ra[0].avg_array_accesses, rb[0].avg_array_accesses);
    }
}
