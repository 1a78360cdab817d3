//! Byte count and transfer rate formatting.
//!
//! Units are binary (1 KiB = 1024 B) but promotion to the next unit happens
//! once the scaled value would reach 1000, so `1024 * 1000` bytes already
//! renders in MiB. Every rendering is right-aligned so consecutive frames do
//! not jitter.

use std::time::Duration;

const KIB: f64 = 1024.0;
const MIB: f64 = KIB * 1024.0;
const GIB: f64 = MIB * 1024.0;

/// Format a byte count with an automatically scaled unit.
///
/// ```rust
/// use progressline::utils::format_bytes;
///
/// assert_eq!(format_bytes(999), "   999B");
/// assert_eq!(format_bytes(1500), "  1.5KiB");
/// assert!(format_bytes(1024 * 1000).ends_with("MiB"));
/// ```
pub fn format_bytes(value: u64) -> String {
    scaled(value as f64)
}

/// Format a transfer rate, `bytes` moved over `elapsed`, as `<bytes>/s`.
///
/// A zero elapsed time yields a rate of zero.
pub fn format_rate(bytes: u64, elapsed: Duration) -> String {
    let seconds = elapsed.as_secs_f64();
    let per_second = if seconds > 0.0 {
        bytes as f64 / seconds
    } else {
        0.0
    };
    format!("{}/s", scaled(per_second))
}

fn scaled(value: f64) -> String {
    if value < KIB {
        // Whole bytes only; fractional rates are truncated.
        format!("{:>6}B", value as u64)
    } else if value < KIB * 1000.0 {
        format!("{:>5.1}KiB", value / KIB)
    } else if value < MIB * 1000.0 {
        format!("{:>5.1}MiB", value / MIB)
    } else {
        format!("{:>5.1}GiB", value / GIB)
    }
}
