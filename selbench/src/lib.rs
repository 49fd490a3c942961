#![warn(missing_docs)]
//! # Selbench
//!
//! Instrumented selection sort with empirical O(n²) verification.
//!
//! - **Operation Counting**: comparisons, swaps, array accesses and boundary passes
//!   recorded during the sort, with a start/stop timer around the sort call
//! - **Three Variants**: ascending, early-exit ascending and descending, sharing one routine
//! - **Benchmark Harness**: warm-up and measured trials over random, sorted,
//!   reverse and nearly sorted inputs
//! - **Complexity Verification**: `t/n²` ratio and growth factor across a size progression
//! - **Reports**: human-readable tables, CSV export and JSON with run metadata
//!
//! ## Quick Start
//!
//! ```
//! use selbench::prelude::*;
//!
//! let mut sorter = SelectionSort::new();
//! let mut data = vec![9, 7, 5, 3, 1];
//! sorter.sort(&mut data);
//!
//! assert_eq!(data, vec![1, 3, 5, 7, 9]);
//! assert_eq!(sorter.metrics().unwrap().comparisons(), 10);
//! ```
//!
//! ## Benchmarking
//!
//! ```no_run
//! use selbench::{Harness, HarnessConfig};
//!
//! let mut harness = Harness::new(HarnessConfig::default());
//! for result in harness.run_benchmarks(&[1000, 5000]).unwrap() {
//!     println!("{}", result);
//! }
//! ```

// Re-export core types
pub use selbench_core::{
    ALGORITHM_INFO, GeneratorParams, InputDistribution, METRICS_CSV_HEADER, MetricsMode,
    MetricsSummary, Result, SelectionSort, SortError, SortVariant, SortingMetrics, TimingState,
    theoretical_comparisons, theoretical_max_swaps, validation,
};

// Re-export stats
pub use selbench_stats::{GrowthPoint, SummaryStatistics, analyze_growth, compute_summary};

// Re-export report types
pub use selbench_report::{
    BENCHMARK_CSV_HEADER, BenchmarkResult, ComplexityReport, DistributionResult, OutputFormat,
    Report, generate_csv_report, generate_json_report, generate_text_report,
};

// Re-export harness and CLI entry points
pub use selbench_cli::{
    Cli, Commands, GrowthAssessment, Harness, HarnessConfig, SelbenchConfig, assess_growth,
    build_report_meta, export_csv, format_human_output, run, run_with_cli,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BenchmarkResult, Harness, HarnessConfig, InputDistribution, SelectionSort, SortError,
        SortVariant, SortingMetrics,
    };
}
