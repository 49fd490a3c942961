//! Input validation and sortedness checks.
//!
//! Every check fails synchronously with a [`SortError`] naming the violated
//! precondition; none of them is on the sorting hot path.

use crate::error::{Result, SortError};

/// Fail with `InvalidInput` when the sequence is absent
pub fn validate_array(data: Option<&[i32]>) -> Result<&[i32]> {
    data.ok_or_else(|| SortError::InvalidInput("Array cannot be null".to_string()))
}

/// Fail with `InvalidInput` when the sequence is absent or empty
pub fn validate_non_empty(data: Option<&[i32]>) -> Result<&[i32]> {
    let data = validate_array(data)?;
    if data.is_empty() {
        return Err(SortError::InvalidInput("Array cannot be empty".to_string()));
    }
    Ok(data)
}

/// Fail with `InvalidInput` when the sequence is shorter than `min`
pub fn validate_size(data: &[i32], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(SortError::InvalidInput(format!(
            "Array size must be at least {}, got {}",
            min,
            data.len()
        )));
    }
    Ok(())
}

/// Fail with `InvalidInput` when the length lies outside `min..=max`
pub fn validate_size_range(data: &[i32], min: usize, max: usize) -> Result<()> {
    if data.len() < min || data.len() > max {
        return Err(SortError::InvalidInput(format!(
            "Array size must be between {} and {}, got {}",
            min,
            max,
            data.len()
        )));
    }
    Ok(())
}

/// Fail with `IndexOutOfRange` when `index` is not a valid position
pub fn validate_index(data: &[i32], index: usize) -> Result<()> {
    if index >= data.len() {
        return Err(SortError::IndexOutOfRange {
            index,
            len: data.len(),
        });
    }
    Ok(())
}

/// Validate a half-open range `start..end` against the sequence
pub fn validate_range(data: &[i32], start: usize, end: usize) -> Result<()> {
    if end > data.len() {
        return Err(SortError::InvalidInput(format!(
            "End index {} exceeds array length {}",
            end,
            data.len()
        )));
    }
    if start > end {
        return Err(SortError::InvalidInput(format!(
            "Start index {} cannot exceed end index {}",
            start, end
        )));
    }
    Ok(())
}

/// Fail with `InvalidInput` unless `value > 0`
pub fn validate_positive(value: i64, name: &str) -> Result<()> {
    if value <= 0 {
        return Err(SortError::InvalidInput(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Fail with `InvalidInput` when `value < 0`
pub fn validate_non_negative(value: i64, name: &str) -> Result<()> {
    if value < 0 {
        return Err(SortError::InvalidInput(format!(
            "{} cannot be negative, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Non-decreasing check; empty and single-element sequences are sorted
pub fn is_sorted(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Non-increasing check; empty and single-element sequences are sorted
pub fn is_sorted_descending(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] >= w[1])
}

/// True iff `sorted` is non-decreasing and holds the same multiset of values as `original`
pub fn verify_sort_correctness(original: &[i32], sorted: &[i32]) -> bool {
    if original.len() != sorted.len() || !is_sorted(sorted) {
        return false;
    }
    let mut expected = original.to_vec();
    expected.sort_unstable();
    expected == sorted
}

/// Parse integers separated by whitespace and/or commas.
///
/// Empty input and any token that is not an `i32` fail with `InvalidInput`.
pub fn parse_input(input: &str) -> Result<Vec<i32>> {
    let tokens: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(SortError::InvalidInput("Input cannot be empty".to_string()));
    }

    tokens
        .into_iter()
        .map(|t| {
            t.parse::<i32>()
                .map_err(|_| SortError::InvalidInput(format!("Invalid integer: '{}'", t)))
        })
        .collect()
}
