//! Input Generators
//!
//! Benchmark input shapes. All randomness is drawn from the caller's RNG so a
//! seeded generator reproduces the same inputs run after run.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters shared by the generators
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorParams {
    /// Exclusive upper bound for uniformly random values (`0..value_bound`)
    pub value_bound: i32,
    /// Fraction of the size used as the number of random swaps in `NearlySorted`
    pub nearly_sorted_fraction: f64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            value_bound: 10_000,
            nearly_sorted_fraction: 0.05,
        }
    }
}

/// Shape of a generated input sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputDistribution {
    /// Uniform random values in `0..value_bound`
    Random,
    /// `0, 1, .., n-1`
    Sorted,
    /// `n, n-1, .., 1`
    Reverse,
    /// Sorted with `ceil(fraction·n)` random pairwise swaps
    NearlySorted,
}

impl InputDistribution {
    /// Every distribution, in report order
    pub const ALL: [InputDistribution; 4] = [
        InputDistribution::Random,
        InputDistribution::Sorted,
        InputDistribution::Reverse,
        InputDistribution::NearlySorted,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            InputDistribution::Random => "Random",
            InputDistribution::Sorted => "Sorted",
            InputDistribution::Reverse => "Reverse",
            InputDistribution::NearlySorted => "Nearly Sorted",
        }
    }

    /// Generate a sequence of `size` elements
    pub fn generate<R: Rng>(
        self,
        size: usize,
        rng: &mut R,
        params: &GeneratorParams,
    ) -> Vec<i32> {
        match self {
            InputDistribution::Random => {
                let bound = params.value_bound.max(1);
                (0..size).map(|_| rng.gen_range(0..bound)).collect()
            }
            InputDistribution::Sorted => (0..size).map(|i| i as i32).collect(),
            InputDistribution::Reverse => (0..size).map(|i| (size - i) as i32).collect(),
            InputDistribution::NearlySorted => {
                let mut data: Vec<i32> = (0..size).map(|i| i as i32).collect();
                if size > 1 {
                    for _ in 0..nearly_sorted_swap_count(size, params.nearly_sorted_fraction) {
                        let a = rng.gen_range(0..size);
                        let b = rng.gen_range(0..size);
                        data.swap(a, b);
                    }
                }
                data
            }
        }
    }
}

impl fmt::Display for InputDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of random swaps injected into a nearly sorted input: `ceil(fraction·size)`
pub fn nearly_sorted_swap_count(size: usize, fraction: f64) -> usize {
    if fraction <= 0.0 {
        return 0;
    }
    (size as f64 * fraction).ceil() as usize
}
