//! CSV Output
//!
//! Column order and header text are fixed; downstream consumers parse them
//! positionally.

use crate::report::BenchmarkResult;

/// Header row for [`generate_csv_report`]
pub const BENCHMARK_CSV_HEADER: &str = "ArraySize,AvgTimeMs,AvgComparisons,AvgSwaps,AvgArrayAccesses,StdDevTime,TheoreticalComparisons,RatioTN2";

impl BenchmarkResult {
    /// One CSV row (no trailing newline)
    pub fn csv_row(&self) -> String {
        format!(
            "{},{:.6},{},{},{},{:.6},{},{:.9}",
            self.array_size,
            self.avg_time_ms,
            self.avg_comparisons,
            self.avg_swaps,
            self.avg_array_accesses,
            self.std_dev_time_ms,
            self.theoretical_comparisons(),
            self.ratio_tn2()
        )
    }
}

/// Header plus one row per result, each line terminated by `\n`
pub fn generate_csv_report(results: &[BenchmarkResult]) -> String {
    let mut output = String::new();
    output.push_str(BENCHMARK_CSV_HEADER);
    output.push('\n');

    for result in results {
        output.push_str(&result.csv_row());
        output.push('\n');
    }

    output
}
