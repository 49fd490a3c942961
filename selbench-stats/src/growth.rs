//! Quadratic Growth Analysis
//!
//! For an O(n²) algorithm the ratio `t/n²` stays roughly constant across
//! sizes, and each size step multiplies time by about `(n₂/n₁)²`.

use serde::{Deserialize, Serialize};

/// One measured size in a growth series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    /// Input size
    pub size: usize,
    /// Measured time in milliseconds
    pub time_ms: f64,
    /// `time_ms / size²`
    pub ratio: f64,
    /// `time_ms / previous time_ms`; `None` for the first point or a zero previous time
    pub growth_factor: Option<f64>,
}

/// Build a growth series from parallel size/time slices (extra elements are ignored)
pub fn analyze_growth(sizes: &[usize], times_ms: &[f64]) -> Vec<GrowthPoint> {
    let mut points: Vec<GrowthPoint> = Vec::with_capacity(sizes.len().min(times_ms.len()));
    let mut previous: Option<f64> = None;

    for (&size, &time_ms) in sizes.iter().zip(times_ms) {
        let n = size as f64;
        let ratio = if size == 0 { 0.0 } else { time_ms / (n * n) };
        let growth_factor = previous.filter(|&p| p > 0.0).map(|p| time_ms / p);

        points.push(GrowthPoint {
            size,
            time_ms,
            ratio,
            growth_factor,
        });
        previous = Some(time_ms);
    }

    points
}

/// Growth factor predicted by O(n²) for a step from `from` to `to`
pub fn expected_growth_factor(from: usize, to: usize) -> f64 {
    if from == 0 {
        return 0.0;
    }
    let step = to as f64 / from as f64;
    step * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_quadratic() {
        let sizes = [100, 200, 400];
        let times: Vec<f64> = sizes.iter().map(|&n| (n * n) as f64 * 1e-6).collect();
        let points = analyze_growth(&sizes, &times);

        assert_eq!(points.len(), 3);
        assert!(points[0].growth_factor.is_none());
        for p in &points {
            assert!((p.ratio - 1e-6).abs() < 1e-15);
        }
        for p in &points[1..] {
            assert!((p.growth_factor.unwrap() - 4.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_previous_time() {
        let points = analyze_growth(&[10, 20], &[0.0, 1.0]);
        assert!(points[1].growth_factor.is_none());
    }

    #[test]
    fn test_mismatched_lengths() {
        let points = analyze_growth(&[10, 20, 40], &[1.0]);
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_expected_growth_factor() {
        assert!((expected_growth_factor(100, 200) - 4.0).abs() < f64::EPSILON);
        assert!((expected_growth_factor(100, 300) - 9.0).abs() < 1e-12);
        assert_eq!(expected_growth_factor(0, 10), 0.0);
    }
}
