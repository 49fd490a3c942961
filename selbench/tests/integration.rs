//! Integration tests for Selbench
//!
//! These tests exercise the engine, harness and report pipeline end to end.

use clap::Parser;
use proptest::prelude::*;
use selbench::prelude::*;
use selbench::validation::{is_sorted, verify_sort_correctness};
use selbench::{
    BENCHMARK_CSV_HEADER, Cli, Report, SelbenchConfig, assess_growth, build_report_meta,
    export_csv, generate_json_report, run_with_cli, theoretical_comparisons,
};

fn quick_config() -> HarnessConfig {
    HarnessConfig {
        warmup_trials: 1,
        measured_trials: 2,
        complexity_sizes: vec![50, 100, 200],
        ..Default::default()
    }
}

// ─── Engine scenarios ────────────────────────────────────────────────────────

#[test]
fn test_sort_with_duplicates() {
    let mut sorter = SelectionSort::new();
    let mut data = vec![29, 10, 14, 37, 14];
    sorter.sort(&mut data);
    assert_eq!(data, vec![10, 14, 14, 29, 37]);
}

#[test]
fn test_reverse_five_exact_counts() {
    let mut sorter = SelectionSort::new();
    let mut data = vec![9, 7, 5, 3, 1];
    sorter.sort(&mut data);

    let metrics = sorter.metrics().unwrap();
    assert_eq!(data, vec![1, 3, 5, 7, 9]);
    assert_eq!(metrics.comparisons(), 10);
    assert_eq!(metrics.swaps(), 2);
    assert_eq!(metrics.iterations(), 4);
}

#[test]
fn test_metrics_disabled_is_illegal_state() {
    let mut sorter = SelectionSort::new();
    sorter.set_metrics_enabled(false);

    let mut data = vec![3, 1, 2];
    sorter.sort(&mut data);
    assert_eq!(data, vec![1, 2, 3]);
    assert!(matches!(sorter.metrics(), Err(SortError::IllegalState(_))));
}

#[test]
fn test_thousand_elements_match_theory() {
    assert_eq!(theoretical_comparisons(1000), 499_500);

    let mut data: Vec<i32> = (0..1000).map(|i| (i * 7919) % 1000).collect();
    let original = data.clone();
    let mut sorter = SelectionSort::new();
    sorter.sort(&mut data);

    assert!(verify_sort_correctness(&original, &data));
    assert_eq!(sorter.metrics().unwrap().comparisons(), 499_500);
}

#[test]
fn test_optimized_sorted_input_stops_early() {
    let mut sorter = SelectionSort::new();
    let mut data: Vec<i32> = (0..100).collect();
    sorter.sort_optimized(&mut data);

    let metrics = sorter.metrics().unwrap();
    assert_eq!(metrics.comparisons(), 99);
    assert!(metrics.comparisons() < theoretical_comparisons(100));
    assert_eq!(metrics.swaps(), 0);
}

// ─── Harness ─────────────────────────────────────────────────────────────────

#[test]
fn test_harness_is_deterministic_per_seed() {
    let mut a = Harness::new(quick_config());
    let mut b = Harness::new(quick_config());

    let ra = a.benchmark_distributions(64).unwrap();
    let rb = b.benchmark_distributions(64).unwrap();
    for (x, y) in ra.iter().zip(&rb) {
        assert_eq!(x.distribution, y.distribution);
        assert_eq!(x.result.avg_swaps, y.result.avg_swaps);
        assert_eq!(x.result.avg_array_accesses, y.result.avg_array_accesses);
    }
}

#[test]
fn test_comparisons_independent_of_distribution() {
    let mut harness = Harness::new(quick_config());
    let results = harness.benchmark_distributions(200).unwrap();

    assert_eq!(results.len(), 4);
    for entry in &results {
        assert_eq!(entry.result.avg_comparisons, theoretical_comparisons(200));
    }
}

#[test]
fn test_zero_size_is_invalid_input() {
    let mut harness = Harness::new(quick_config());
    assert!(matches!(
        harness.run_benchmarks(&[0]),
        Err(SortError::InvalidInput(_))
    ));
}

#[test]
fn test_verify_complexity_report() {
    let mut harness = Harness::new(quick_config());
    let report = harness.verify_complexity().unwrap();

    assert_eq!(report.points.len(), 3);
    let text = report.to_string();
    assert!(text.contains("Ratio (t/n²)"));
    assert!(text.contains("N/A"));

    let assessment = assess_growth(&report.points);
    assert!(assessment.steps <= 2);
    assert!((assessment.mean_expected_growth - 4.0).abs() < 1e-9 || assessment.steps == 0);
}

// ─── Reports ─────────────────────────────────────────────────────────────────

#[test]
fn test_csv_export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench.csv");

    let mut harness = Harness::new(quick_config());
    let results = harness.run_benchmarks(&[10, 20]).unwrap();
    export_csv(&path, &results).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], BENCHMARK_CSV_HEADER);
    assert_eq!(lines.len(), 3);

    let fields: Vec<&str> = lines[2].split(',').collect();
    assert_eq!(fields.len(), 8);
    assert_eq!(fields[0], "20");
    assert_eq!(fields[3].parse::<u64>().unwrap(), results[1].avg_swaps);
    assert_eq!(fields[6], "190");
}

#[test]
fn test_json_report_roundtrip() {
    let config = quick_config();
    let mut harness = Harness::new(config.clone());
    let report = Report {
        meta: build_report_meta(&config),
        results: harness.run_benchmarks(&[16]).unwrap(),
        distributions: harness.benchmark_distributions(16).unwrap(),
        complexity: Some(harness.verify_complexity().unwrap()),
    };

    let json = generate_json_report(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["results"][0]["array_size"], 16);
    assert_eq!(value["distributions"][3]["distribution"], "nearly-sorted");
    assert_eq!(value["meta"]["config"]["seed"], 42);
}

// ─── CLI ─────────────────────────────────────────────────────────────────────

#[test]
fn test_cli_export_writes_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let config_path = dir.path().join("selbench.toml");
    std::fs::write(&config_path, "[runner]\nwarmup_trials = 0\nmeasured_trials = 1\n").unwrap();

    let cli = Cli::parse_from([
        "selbench",
        "--config",
        config_path.to_str().unwrap(),
        "--output",
        dir.path().join("stdout.txt").to_str().unwrap(),
        "export",
        "--sizes",
        "8,16",
        "--path",
        path.to_str().unwrap(),
    ]);
    run_with_cli(cli).unwrap();

    let csv = std::fs::read_to_string(&path).unwrap();
    assert!(csv.starts_with(BENCHMARK_CSV_HEADER));
    assert_eq!(csv.lines().count(), 3);

    let printed = std::fs::read_to_string(dir.path().join("stdout.txt")).unwrap();
    assert!(printed.contains("Results exported to:"));
}

#[test]
fn test_cli_init_output_parses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("selbench.toml");

    let cli = Cli::parse_from(["selbench", "--output", path.to_str().unwrap(), "init"]);
    run_with_cli(cli).unwrap();

    let config = SelbenchConfig::load(&path).unwrap();
    assert_eq!(config.runner.measured_trials, 10);
    assert_eq!(config.complexity.sizes, vec![100, 200, 400, 800, 1600]);
}

#[test]
fn test_cli_missing_config_fails() {
    let cli = Cli::parse_from(["selbench", "--config", "/nonexistent/selbench.toml", "info"]);
    assert!(run_with_cli(cli).is_err());
}

// ─── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_every_variant_sorts_and_permutes(data in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut sorter = SelectionSort::new();

        let mut ascending = data.clone();
        sorter.sort(&mut ascending);
        prop_assert!(is_sorted(&ascending));
        prop_assert!(verify_sort_correctness(&data, &ascending));

        let mut optimized = data.clone();
        sorter.sort_optimized(&mut optimized);
        prop_assert_eq!(&optimized, &ascending);

        let mut descending = data.clone();
        sorter.sort_descending(&mut descending);
        let mut reversed = ascending.clone();
        reversed.reverse();
        prop_assert_eq!(descending, reversed);
    }

    #[test]
    fn prop_swaps_bounded(data in prop::collection::vec(0i32..100, 1..64)) {
        let mut sorter = SelectionSort::new();
        let mut sorted = data.clone();
        sorter.sort(&mut sorted);

        let metrics = sorter.metrics().unwrap();
        prop_assert!(metrics.swaps() <= data.len() as u64 - 1);
        prop_assert_eq!(metrics.comparisons(), theoretical_comparisons(data.len()));
    }
}
