#![warn(missing_docs)]
//! Selbench CLI Library
//!
//! Benchmark harness, configuration file and the `selbench` command line.
//! Use `selbench::run()` (or `selbench_cli::run()`) in a main function to get
//! the full CLI.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     selbench_cli::run()
//! }
//! ```

mod config;
mod executor;

pub use config::*;
pub use executor::{
    GrowthAssessment, Harness, HarnessConfig, TrialSamples, aggregate_trials, assess_growth,
    build_report_meta, comparison_identity_holds, format_human_output,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use selbench_core::validation::{is_sorted, is_sorted_descending, parse_input, validate_positive};
use selbench_core::{
    ALGORITHM_INFO, InputDistribution, SelectionSort, SortVariant, theoretical_comparisons,
    theoretical_max_swaps, thousands,
};
use selbench_report::{
    BenchmarkResult, OutputFormat, Report, format_distribution_table, generate_csv_report,
    generate_json_report, generate_text_report,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Selbench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "selbench")]
#[command(author, version, about = "Selbench - instrumented selection sort with O(n²) verification")]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: human, json, csv (defaults to selbench.toml, then human)
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Configuration file (discovered from the current directory if not specified)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// RNG seed for generated inputs
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Warm-up trials per configuration
    #[arg(long, global = true)]
    pub warmup: Option<usize>,

    /// Measured trials per configuration
    #[arg(long, global = true)]
    pub trials: Option<usize>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sort integers given on the command line
    Sort {
        /// Integers separated by spaces and/or commas
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
        /// Sort in descending order
        #[arg(long, conflicts_with = "optimized")]
        descending: bool,
        /// Stop early once the remaining suffix is sorted
        #[arg(long)]
        optimized: bool,
        /// Skip operation counting
        #[arg(long)]
        no_metrics: bool,
    },
    /// Sort a random array of the given size and report its metrics
    Random {
        /// Number of elements
        size: usize,
    },
    /// Benchmark random input across sizes
    Benchmark {
        /// Sizes to measure (comma separated)
        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,
        /// Also measure input distributions and verify complexity
        #[arg(long)]
        all: bool,
    },
    /// Compare input distributions at one size
    Distributions {
        /// Size to measure
        #[arg(long)]
        size: Option<usize>,
        /// Measure the early-exit variant
        #[arg(long)]
        optimized: bool,
    },
    /// Verify O(n²) growth with single trials over a size progression
    Verify,
    /// Benchmark and write the results as CSV
    Export {
        /// Destination file
        #[arg(long)]
        path: Option<PathBuf>,
        /// Sizes to measure (comma separated)
        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,
    },
    /// Show algorithm characteristics
    Info,
    /// Sort the built-in demo inputs
    Demo,
    /// Print a default selbench.toml
    Init,
}

impl Commands {
    /// Subcommand name as typed on the command line
    fn name(&self) -> &'static str {
        match self {
            Commands::Sort { .. } => "sort",
            Commands::Random { .. } => "random",
            Commands::Benchmark { .. } => "benchmark",
            Commands::Distributions { .. } => "distributions",
            Commands::Verify => "verify",
            Commands::Export { .. } => "export",
            Commands::Info => "info",
            Commands::Demo => "demo",
            Commands::Init => "init",
        }
    }

    /// Output formats this command can render
    fn supported_formats(&self) -> &'static [OutputFormat] {
        match self {
            Commands::Benchmark { .. } => {
                &[OutputFormat::Human, OutputFormat::Json, OutputFormat::Csv]
            }
            Commands::Sort { .. } | Commands::Distributions { .. } | Commands::Verify => {
                &[OutputFormat::Human, OutputFormat::Json]
            }
            Commands::Random { .. }
            | Commands::Export { .. }
            | Commands::Info
            | Commands::Demo
            | Commands::Init => &[OutputFormat::Human],
        }
    }
}

/// Run the Selbench CLI with the process arguments.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if something goes wrong.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the Selbench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => SelbenchConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SelbenchConfig::discover()?.unwrap_or_default(),
    };

    let output = execute(&cli, &config)?;
    emit(cli.output.as_deref(), &output)
}

/// Execute the selected command and return what it would print
pub fn execute(cli: &Cli, config: &SelbenchConfig) -> anyhow::Result<String> {
    let format = resolve_format(cli, config)?;
    let harness_config = build_harness_config(cli, config);

    match &cli.command {
        Commands::Sort {
            values,
            descending,
            optimized,
            no_metrics,
        } => {
            let variant = if *descending {
                SortVariant::Descending
            } else if *optimized {
                SortVariant::AscendingOptimized
            } else {
                SortVariant::Ascending
            };
            sort_values(&values.join(" "), variant, !*no_metrics, format)
        }
        Commands::Random { size } => sort_random(*size, &harness_config),
        Commands::Benchmark { sizes, all } => {
            let sizes = sizes.clone().unwrap_or_else(|| config.runner.sizes.clone());
            let mut harness = Harness::new(harness_config);
            let results = harness.run_benchmarks(&sizes)?;

            let (distributions, complexity) = if *all {
                let distributions =
                    harness.benchmark_distributions(config.runner.distribution_size)?;
                (distributions, Some(harness.verify_complexity()?))
            } else {
                (Vec::new(), None)
            };

            let report = Report {
                meta: build_report_meta(harness.config()),
                results,
                distributions,
                complexity,
            };
            render_report(&report, format)
        }
        Commands::Distributions { size, optimized } => {
            let size = size.unwrap_or(config.runner.distribution_size);
            let mut harness_config = harness_config;
            if *optimized {
                harness_config.variant = SortVariant::AscendingOptimized;
            }
            let mut harness = Harness::new(harness_config);
            let distributions = harness.benchmark_distributions(size)?;

            match format {
                OutputFormat::Human => Ok(format_distribution_table(&distributions)),
                _ => render_report(
                    &Report {
                        meta: build_report_meta(harness.config()),
                        results: Vec::new(),
                        distributions,
                        complexity: None,
                    },
                    format,
                ),
            }
        }
        Commands::Verify => {
            let mut harness = Harness::new(harness_config);
            let complexity = harness.verify_complexity()?;

            match format {
                OutputFormat::Human => Ok(format!(
                    "{}\n{}\n",
                    complexity,
                    assess_growth(&complexity.points)
                )),
                _ => render_report(
                    &Report {
                        meta: build_report_meta(harness.config()),
                        results: Vec::new(),
                        distributions: Vec::new(),
                        complexity: Some(complexity),
                    },
                    format,
                ),
            }
        }
        Commands::Export { path, sizes } => {
            let sizes = sizes.clone().unwrap_or_else(|| config.runner.sizes.clone());
            let path = path
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.output.csv_path));

            let mut harness = Harness::new(harness_config);
            let results = harness.run_benchmarks(&sizes)?;
            export_csv(&path, &results)?;

            Ok(format!(
                "{}\nResults exported to: {}\n",
                generate_text_report(&results),
                path.display()
            ))
        }
        Commands::Info => Ok(algorithm_info(&config.runner.sizes)),
        Commands::Demo => demo(),
        Commands::Init => Ok(SelbenchConfig::default_toml()),
    }
}

/// Write benchmark results as CSV to `path`
pub fn export_csv(path: &Path, results: &[BenchmarkResult]) -> anyhow::Result<()> {
    std::fs::write(path, generate_csv_report(results))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), rows = results.len(), "CSV exported");
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "selbench=debug" } else { "selbench=info" };
    // A subscriber may already be installed when embedded or under test
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Pick the output format for the command.
///
/// An explicit `--format` the command cannot render is an error. A configured
/// default it cannot render falls back to human output.
fn resolve_format(cli: &Cli, config: &SelbenchConfig) -> anyhow::Result<OutputFormat> {
    let requested = cli.format.as_deref().unwrap_or(&config.output.format);
    let format: OutputFormat = requested.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let supported = cli.command.supported_formats();
    if supported.contains(&format) {
        return Ok(format);
    }
    if cli.format.is_some() {
        anyhow::bail!(
            "Output format '{}' is not supported by '{}'",
            requested,
            cli.command.name()
        );
    }
    debug!(
        format = requested,
        command = cli.command.name(),
        "Configured format unsupported, using human output"
    );
    Ok(OutputFormat::Human)
}

/// Layer selbench.toml values with CLI overrides
fn build_harness_config(cli: &Cli, config: &SelbenchConfig) -> HarnessConfig {
    let mut harness = config.harness_config();
    if let Some(seed) = cli.seed {
        harness.seed = seed;
    }
    if let Some(warmup) = cli.warmup {
        harness.warmup_trials = warmup;
    }
    if let Some(trials) = cli.trials {
        harness.measured_trials = trials;
    }
    harness.show_progress = !cli.verbose;
    harness
}

fn render_report(report: &Report, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Human => format_human_output(report),
        OutputFormat::Json => generate_json_report(report)?,
        OutputFormat::Csv => generate_csv_report(&report.results),
    })
}

fn emit(path: Option<&Path>, output: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Output written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

// ─── Commands ────────────────────────────────────────────────────────────────

fn sort_values(
    input: &str,
    variant: SortVariant,
    collect_metrics: bool,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let original = parse_input(input)?;
    let mut data = original.clone();
    let mut sorter = SelectionSort::with_metrics(collect_metrics);
    sorter.sort_with(&mut data, variant);

    let ordered = if variant.is_descending() {
        is_sorted_descending(&data)
    } else {
        is_sorted(&data)
    };
    anyhow::ensure!(ordered, "Sort produced an unordered result");

    if format == OutputFormat::Json {
        let metrics = if collect_metrics {
            Some(sorter.metrics()?.summary())
        } else {
            None
        };
        let value = serde_json::json!({
            "variant": variant,
            "input": original,
            "output": data,
            "metrics": metrics,
        });
        return Ok(format!("{}\n", serde_json::to_string_pretty(&value)?));
    }

    let mut out = String::new();
    out.push_str(&format!("Variant:  {}\n", variant.name()));
    out.push_str(&format!("Original: {:?}\n", original));
    out.push_str(&format!("Sorted:   {:?}\n", data));
    if collect_metrics {
        let metrics = sorter.metrics()?;
        out.push('\n');
        out.push_str(&metrics.generate_report());
        out.push_str("\n\n");
        out.push_str(&metrics.compare_with_theoretical(data.len()));
        out.push('\n');
    }
    Ok(out)
}

fn sort_random(size: usize, config: &HarnessConfig) -> anyhow::Result<String> {
    validate_positive(size as i64, "Array size")?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut data = InputDistribution::Random.generate(size, &mut rng, &config.generator);
    let mut sorter = SelectionSort::new();
    sorter.sort_with(&mut data, config.variant);
    let metrics = sorter.metrics()?;

    const PREVIEW: usize = 20;
    let mut out = format!(
        "Sorted {} random values (seed {})\n",
        thousands(size as u64),
        config.seed
    );
    if size <= PREVIEW {
        out.push_str(&format!("{:?}\n", data));
    } else {
        out.push_str(&format!("first {}: {:?}\n", PREVIEW, &data[..PREVIEW]));
    }
    out.push('\n');
    out.push_str(&metrics.generate_report());
    out.push_str("\n\n");
    out.push_str(&metrics.compare_with_theoretical(size));
    out.push('\n');
    Ok(out)
}

fn algorithm_info(sizes: &[usize]) -> String {
    let mut out = String::new();
    out.push_str(ALGORITHM_INFO);
    out.push_str("\n\n");
    out.push_str(&format!(
        "{:<12} {:<18} {:<12}\n",
        "Size", "Comparisons", "Max Swaps"
    ));
    out.push_str(&"-".repeat(42));
    out.push('\n');
    for &size in sizes {
        out.push_str(&format!(
            "{:<12} {:<18} {:<12}\n",
            thousands(size as u64),
            thousands(theoretical_comparisons(size)),
            thousands(theoretical_max_swaps(size))
        ));
    }
    out
}

/// Inputs sorted by `selbench demo`
const DEMO_INPUTS: [&[i32]; 5] = [
    &[29, 10, 14, 37, 14],
    &[1, 2, 3, 4, 5, 6],
    &[9, 7, 5, 3, 1],
    &[5, 2, 8, 2, 5, 2],
    &[42],
];

fn demo() -> anyhow::Result<String> {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", ALGORITHM_INFO));

    let mut sorter = SelectionSort::new();
    for input in DEMO_INPUTS {
        for variant in [SortVariant::Ascending, SortVariant::AscendingOptimized] {
            let mut data = input.to_vec();
            sorter.sort_with(&mut data, variant);
            out.push_str(&format!(
                "{:<24} {:?} -> {:?}\n{:<24} {}\n",
                variant.name(),
                input,
                data,
                "",
                sorter.metrics()?
            ));
        }
    }

    let mut data = DEMO_INPUTS[0].to_vec();
    sorter.sort_descending(&mut data);
    out.push_str(&format!(
        "{:<24} {:?} -> {:?}\n{:<24} {}\n",
        SortVariant::Descending.name(),
        DEMO_INPUTS[0],
        data,
        "",
        sorter.metrics()?
    ));

    let mut unmetered = SelectionSort::with_metrics(false);
    let mut data = DEMO_INPUTS[0].to_vec();
    unmetered.sort(&mut data);
    if let Err(e) = unmetered.metrics() {
        out.push_str(&format!("\nWithout metrics: {:?} ({})\n", data, e));
    }

    Ok(out)
}
