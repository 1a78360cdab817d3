//! Clock strings for the status segment.

use std::time::Duration;

/// Status text shown while no progress has been made yet.
pub const ETA_UNKNOWN: &str = "ETA: --:--:--";

/// Format a duration as `HH:MM:SS`.
///
/// Hours are not wrapped at 24 and fractional seconds are truncated.
///
/// ```rust
/// use progressline::utils::format_time;
/// use std::time::Duration;
///
/// assert_eq!(format_time(Duration::from_secs(90_061)), "25:01:01");
/// ```
pub fn format_time(time: Duration) -> String {
    let total = time.as_secs();
    let second = total % 60;
    let minute = (total / 60) % 60;
    let hour = total / 3600;
    format!("{:02}:{:02}:{:02}", hour, minute, second)
}

/// Linear extrapolation of the time left, or `None` without any progress.
///
/// `elapsed * total / current - elapsed`
pub fn estimate_remaining(elapsed: Duration, current: u64, total: u64) -> Option<Duration> {
    if current == 0 {
        return None;
    }
    let elapsed = elapsed.as_secs_f64();
    let eta = elapsed * total as f64 / current as f64 - elapsed;
    Some(Duration::try_from_secs_f64(eta.max(0.0)).unwrap_or(Duration::MAX))
}

/// `ETA: HH:MM:SS`, or [`ETA_UNKNOWN`] when `current` is zero.
pub fn format_eta(elapsed: Duration, current: u64, total: u64) -> String {
    match estimate_remaining(elapsed, current, total) {
        Some(eta) => format!("ETA: {}", format_time(eta)),
        None => ETA_UNKNOWN.to_string(),
    }
}

/// `Time: HH:MM:SS`.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("Time: {}", format_time(elapsed))
}
