//! Human-Readable Tables

use crate::report::{BenchmarkResult, DistributionResult};
use selbench_core::{thousands, thousands_signed};

/// Boxed benchmark summary table followed by the theoretical analysis
pub fn generate_text_report(results: &[BenchmarkResult]) -> String {
    let mut output = String::new();
    output.push_str("╔════════════════════════════════════════════════════════════════╗\n");
    output.push_str("║          Selection Sort Performance Benchmark Report           ║\n");
    output.push_str("╚════════════════════════════════════════════════════════════════╝\n\n");

    output.push_str(&format!(
        "{:<12} {:<15} {:<15} {:<12} {:<15}\n",
        "Size", "Time (ms)", "Comparisons", "Swaps", "Std Dev (ms)"
    ));
    output.push_str(&"-".repeat(75));
    output.push('\n');

    for result in results {
        output.push_str(&format!(
            "{:<12} {:<15.3} {:<15} {:<12} {:<15.3}\n",
            thousands(result.array_size as u64),
            result.avg_time_ms,
            thousands(result.avg_comparisons),
            thousands(result.avg_swaps),
            result.std_dev_time_ms
        ));
    }

    output.push('\n');
    output.push_str(&format_theoretical_analysis(results));
    output
}

/// Theoretical-vs-actual comparison count for each result
pub fn format_theoretical_analysis(results: &[BenchmarkResult]) -> String {
    let mut output = String::new();
    output.push_str("Theoretical Analysis:\n");
    output.push_str(&"-".repeat(75));
    output.push('\n');

    for result in results {
        output.push_str(&format!(
            "Size {}: Theoretical={}, Actual={}, Diff={:+}\n",
            thousands(result.array_size as u64),
            thousands(result.theoretical_comparisons()),
            thousands(result.avg_comparisons),
            result.comparison_diff()
        ));
    }

    output
}

/// Side-by-side table of one size measured under each input distribution
pub fn format_distribution_table(results: &[DistributionResult]) -> String {
    let mut output = String::new();
    let size = results.first().map(|r| r.result.array_size).unwrap_or(0);

    output.push_str(&format!(
        "Input Distribution Comparison (size {})\n",
        thousands(size as u64)
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');
    output.push_str(&format!(
        "{:<15} {:<12} {:<15} {:<12} {:<15} {:<10}\n",
        "Distribution", "Time (ms)", "Comparisons", "Swaps", "Accesses", "vs n(n-1)/2"
    ));

    for entry in results {
        let r = &entry.result;
        output.push_str(&format!(
            "{:<15} {:<12.3} {:<15} {:<12} {:<15} {:<10}\n",
            entry.distribution.name(),
            r.avg_time_ms,
            thousands(r.avg_comparisons),
            thousands(r.avg_swaps),
            thousands(r.avg_array_accesses),
            thousands_signed(r.comparison_diff())
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use selbench_core::InputDistribution;

    fn result(size: usize, comparisons: u64, swaps: u64) -> BenchmarkResult {
        BenchmarkResult {
            array_size: size,
            avg_time_ms: 12.3456,
            avg_comparisons: comparisons,
            avg_swaps: swaps,
            avg_array_accesses: 2_000_000,
            std_dev_time_ms: 0.5,
        }
    }

    #[test]
    fn test_text_report_rows() {
        let report = generate_text_report(&[result(1000, 499_500, 993)]);
        assert!(report.contains("Selection Sort Performance Benchmark Report"));
        assert!(report.contains("1,000        12.346          499,500         993          0.500"));
        assert!(report.contains("Size 1,000: Theoretical=499,500, Actual=499,500, Diff=+0\n"));
    }

    #[test]
    fn test_theoretical_negative_diff() {
        let text = format_theoretical_analysis(&[result(10, 40, 3)]);
        assert!(text.contains("Size 10: Theoretical=45, Actual=40, Diff=-5"));
    }

    #[test]
    fn test_distribution_table() {
        let rows = vec![
            DistributionResult {
                distribution: InputDistribution::Random,
                result: result(1000, 499_500, 990),
            },
            DistributionResult {
                distribution: InputDistribution::NearlySorted,
                result: result(1000, 499_500, 48),
            },
        ];
        let table = format_distribution_table(&rows);
        assert!(table.starts_with("Input Distribution Comparison (size 1,000)\n"));
        assert!(table.contains("Random "));
        assert!(table.contains("Nearly Sorted "));
        assert_eq!(table.lines().count(), 5);
    }
}
