//! Digit grouping for human-readable counters.

/// Format an unsigned count with comma thousands separators (`1234567` → `1,234,567`)
pub fn thousands(value: u64) -> String {
    group(&value.to_string())
}

/// Signed variant of [`thousands`] (`-1234` → `-1,234`)
pub fn thousands_signed(value: i64) -> String {
    if value < 0 {
        format!("-{}", group(&value.unsigned_abs().to_string()))
    } else {
        group(&value.to_string())
    }
}

fn group(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
