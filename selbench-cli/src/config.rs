//! Configuration loading from selbench.toml
//!
//! The configuration is discovered by walking up from the current directory,
//! unless an explicit path is given. Every field has a default, so a partial
//! file (or none at all) is valid.

use crate::executor::HarnessConfig;
use anyhow::Context;
use selbench_core::{GeneratorParams, SortVariant};
use selbench_stats::{DEFAULT_MEASURED_TRIALS, DEFAULT_WARMUP_TRIALS};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up by [`SelbenchConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "selbench.toml";

/// Selbench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SelbenchConfig {
    /// Trial protocol and input generation
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Complexity verification sizes
    #[serde(default)]
    pub complexity: ComplexityConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Trial protocol and input generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Discarded trials before measuring each configuration
    #[serde(default = "default_warmup_trials")]
    pub warmup_trials: usize,
    /// Averaged trials per configuration
    #[serde(default = "default_measured_trials")]
    pub measured_trials: usize,
    /// RNG seed for input generation
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Exclusive upper bound for random values
    #[serde(default = "default_value_bound")]
    pub value_bound: i32,
    /// Fraction of the size used as random swaps for nearly sorted input
    #[serde(default = "default_nearly_sorted_fraction")]
    pub nearly_sorted_fraction: f64,
    /// Sizes measured by `benchmark`
    #[serde(default = "default_sizes")]
    pub sizes: Vec<usize>,
    /// Size measured by `distributions`
    #[serde(default = "default_distribution_size")]
    pub distribution_size: usize,
    /// Sort variant used by the harness
    #[serde(default)]
    pub variant: SortVariant,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            warmup_trials: default_warmup_trials(),
            measured_trials: default_measured_trials(),
            seed: default_seed(),
            value_bound: default_value_bound(),
            nearly_sorted_fraction: default_nearly_sorted_fraction(),
            sizes: default_sizes(),
            distribution_size: default_distribution_size(),
            variant: SortVariant::default(),
        }
    }
}

fn default_warmup_trials() -> usize {
    DEFAULT_WARMUP_TRIALS
}
fn default_measured_trials() -> usize {
    DEFAULT_MEASURED_TRIALS
}
fn default_seed() -> u64 {
    42
}
fn default_value_bound() -> i32 {
    10_000
}
fn default_nearly_sorted_fraction() -> f64 {
    0.05
}
fn default_sizes() -> Vec<usize> {
    vec![1000, 5000, 10_000]
}
fn default_distribution_size() -> usize {
    1000
}

/// Complexity verification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexityConfig {
    /// Sizes measured once each, in order
    #[serde(default = "default_complexity_sizes")]
    pub sizes: Vec<usize>,
}

impl Default for ComplexityConfig {
    fn default() -> Self {
        Self {
            sizes: default_complexity_sizes(),
        }
    }
}

fn default_complexity_sizes() -> Vec<usize> {
    vec![100, 200, 400, 800, 1600]
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human", "json", "csv"
    #[serde(default = "default_format")]
    pub format: String,
    /// File written by `export`
    #[serde(default = "default_csv_path")]
    pub csv_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            csv_path: default_csv_path(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}
fn default_csv_path() -> String {
    "selection_sort_benchmark.csv".to_string()
}

impl SelbenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Discover and load configuration by walking up from the current directory.
    ///
    /// `Ok(None)` when no file exists; a file that exists but fails to parse is an error.
    pub fn discover() -> anyhow::Result<Option<Self>> {
        let dir = std::env::current_dir().context("Failed to read current directory")?;
        Self::discover_from(&dir)
    }

    /// Discover and load configuration by walking up from `start`
    pub fn discover_from(start: &Path) -> anyhow::Result<Option<Self>> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                let config = Self::load(&config_path)
                    .with_context(|| format!("Failed to load config {}", config_path.display()))?;
                return Ok(Some(config));
            }
            if !dir.pop() {
                return Ok(None);
            }
        }
    }

    /// Harness settings derived from this configuration
    pub fn harness_config(&self) -> HarnessConfig {
        HarnessConfig {
            warmup_trials: self.runner.warmup_trials,
            measured_trials: self.runner.measured_trials,
            seed: self.runner.seed,
            generator: GeneratorParams {
                value_bound: self.runner.value_bound,
                nearly_sorted_fraction: self.runner.nearly_sorted_fraction,
            },
            variant: self.runner.variant,
            complexity_sizes: self.complexity.sizes.clone(),
            show_progress: false,
        }
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# Selbench Configuration

[runner]
# Discarded warm-up trials before each measured configuration
warmup_trials = 5
# Measured trials averaged per configuration
measured_trials = 10
# Seed for input generation (same seed, same inputs)
seed = 42
# Random values are drawn from 0..value_bound
value_bound = 10000
# Nearly sorted input gets ceil(fraction * size) random swaps
nearly_sorted_fraction = 0.05
# Sizes measured by `selbench benchmark`
sizes = [1000, 5000, 10000]
# Size measured by `selbench distributions`
distribution_size = 1000
# Sort variant: "ascending", "ascending-optimized" or "descending"
variant = "ascending"

[complexity]
# Sizes measured once each by `selbench verify`
sizes = [100, 200, 400, 800, 1600]

[output]
# Default output format: human, json, csv
format = "human"
# File written by `selbench export`
csv_path = "selection_sort_benchmark.csv"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SelbenchConfig::default();
        assert_eq!(config.runner.warmup_trials, 5);
        assert_eq!(config.runner.measured_trials, 10);
        assert_eq!(config.runner.seed, 42);
        assert_eq!(config.complexity.sizes, vec![100, 200, 400, 800, 1600]);
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_str = r#"
            [runner]
            measured_trials = 3
            variant = "ascending-optimized"

            [complexity]
            sizes = [50, 100]
        "#;

        let config: SelbenchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.runner.measured_trials, 3);
        assert_eq!(config.runner.variant, SortVariant::AscendingOptimized);
        assert_eq!(config.complexity.sizes, vec![50, 100]);
        // Defaults should still apply
        assert_eq!(config.runner.warmup_trials, 5);
        assert_eq!(config.output.csv_path, "selection_sort_benchmark.csv");
    }

    #[test]
    fn test_default_toml_parses() {
        let config: SelbenchConfig = toml::from_str(&SelbenchConfig::default_toml()).unwrap();
        let defaults = SelbenchConfig::default();
        assert_eq!(config.runner.sizes, defaults.runner.sizes);
        assert_eq!(config.runner.variant, defaults.runner.variant);
        assert_eq!(config.runner.value_bound, defaults.runner.value_bound);
        assert_eq!(config.complexity.sizes, defaults.complexity.sizes);
        assert_eq!(config.output.format, defaults.output.format);
    }

    #[test]
    fn test_harness_config_mapping() {
        let mut config = SelbenchConfig::default();
        config.runner.seed = 7;
        config.runner.value_bound = 100;
        let harness = config.harness_config();
        assert_eq!(harness.seed, 7);
        assert_eq!(harness.generator.value_bound, 100);
        assert!(!harness.show_progress);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[runner]\nseed = 9\n").unwrap();

        let config = SelbenchConfig::load(&path).unwrap();
        assert_eq!(config.runner.seed, 9);
    }

    #[test]
    fn test_discover_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[runner]\nseed = 11\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = SelbenchConfig::discover_from(&nested).unwrap().unwrap();
        assert_eq!(config.runner.seed, 11);
    }

    #[test]
    fn test_discover_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[runner]\nmeasured_trials = \"ten\"\n").unwrap();

        let err = SelbenchConfig::discover_from(dir.path()).unwrap_err();
        assert!(format!("{:#}", err).contains(CONFIG_FILE_NAME));
    }
}
