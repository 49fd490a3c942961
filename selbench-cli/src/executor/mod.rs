//! Benchmark Harness
//!
//! Drives the sorting engine over generated inputs and turns raw counters
//! into summary statistics.
//!
//! ## Pipeline Overview
//!
//! ```text
//! sizes / distributions
//!       │
//!       ▼
//! ┌─────────────┐
//! │  execution  │  Warm-up → measured trials (reset before each)
//! └──────┬──────┘
//!        │  TrialSamples
//!        ▼
//! ┌─────────────┐
//! │ statistics  │  Mean + population std dev → BenchmarkResult
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │verification │  Growth analysis for O(n²)
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output
//! └─────────────┘
//! ```

mod execution;
mod formatting;
mod metadata;
mod statistics;
mod verification;

// Re-export public API
pub use execution::{Harness, HarnessConfig};
pub use formatting::format_human_output;
pub use metadata::build_report_meta;
pub use statistics::{TrialSamples, aggregate_trials};
pub use verification::{GrowthAssessment, assess_growth, comparison_identity_holds};
