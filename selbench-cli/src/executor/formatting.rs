//! Output Formatting
//!
//! Human-readable rendering of a full report:
//! - run header with configuration
//! - benchmark table and theoretical analysis
//! - distribution comparison (when measured)
//! - complexity verification with a growth summary (when measured)

use super::verification::{assess_growth, comparison_identity_holds};
use selbench_report::{Report, format_distribution_table, generate_text_report};

/// Format a report for human-readable terminal display
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();
    let config = &report.meta.config;

    output.push_str(&format!(
        "selbench {} | {}/{} | warm-up {} | trials {} | seed {}\n\n",
        report.meta.version,
        report.meta.os,
        report.meta.arch,
        config.warmup_trials,
        config.measured_trials,
        config.seed
    ));

    if !report.results.is_empty() {
        output.push_str(&generate_text_report(&report.results));

        let mismatched = report
            .results
            .iter()
            .filter(|r| !comparison_identity_holds(r))
            .count();
        if mismatched > 0 {
            output.push_str(&format!(
                "\nNote: {} of {} sizes deviate from n(n-1)/2 comparisons\n",
                mismatched,
                report.results.len()
            ));
        }
    }

    if !report.distributions.is_empty() {
        if !report.results.is_empty() {
            output.push('\n');
        }
        output.push_str(&format_distribution_table(&report.distributions));
    }

    if let Some(complexity) = &report.complexity {
        if !report.results.is_empty() || !report.distributions.is_empty() {
            output.push('\n');
        }
        output.push_str(&complexity.to_string());
        output.push('\n');
        output.push_str(&assess_growth(&complexity.points).to_string());
        output.push('\n');
    }

    output
}
