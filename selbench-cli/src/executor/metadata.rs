//! Report Metadata
//!
//! Tool version, UTC generation time, target OS/architecture and the trial
//! protocol the numbers were produced with.

use super::execution::HarnessConfig;
use chrono::Utc;
use selbench_report::{ReportMeta, RunConfig};

/// Build report metadata for a run with `config`
pub fn build_report_meta(config: &HarnessConfig) -> ReportMeta {
    ReportMeta {
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        config: RunConfig {
            warmup_trials: config.warmup_trials,
            measured_trials: config.measured_trials,
            seed: config.seed,
        },
    }
}
