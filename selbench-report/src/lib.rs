#![warn(missing_docs)]
//! Selbench Report - Result Records and Output Formats
//!
//! Generates:
//! - CSV (one row per benchmark result, fixed column layout)
//! - Human-readable tables (benchmark summary, distribution comparison,
//!   complexity verification)
//! - JSON (full report with run metadata)

mod csv;
mod json;
mod report;
mod text;

pub use csv::{BENCHMARK_CSV_HEADER, generate_csv_report};
pub use json::generate_json_report;
pub use report::{
    BenchmarkResult, ComplexityReport, DistributionResult, Report, ReportMeta, RunConfig,
};
pub use text::{format_distribution_table, format_theoretical_analysis, generate_text_report};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON with run metadata
    Json,
    /// CSV rows with the benchmark header
    Csv,
    /// Human-readable terminal output
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
