//! Tests for the byte and time formatting helpers.

use progressline::utils::{
    estimate_remaining, format_bytes, format_elapsed, format_eta, format_rate, format_time,
    ETA_UNKNOWN,
};
use std::time::Duration;

#[test]
fn test_format_bytes_units() {
    let test_cases = [
        (0, "     0B"),
        (999, "   999B"),
        (1500, "  1.5KiB"),
        (512 * 1024, "512.0KiB"),
        (1024 * 1000, "  1.0MiB"),
        (250 * 1024 * 1024, "250.0MiB"),
        (2 * 1024 * 1024 * 1024, "  2.0GiB"),
    ];
    for (value, expected) in test_cases {
        assert_eq!(format_bytes(value), expected, "value: {}", value);
    }
}

#[test]
fn test_format_bytes_boundary_lands_on_mib() {
    assert!(format_bytes(1024 * 1000 - 1).ends_with("KiB"));
    assert!(format_bytes(1024 * 1000).ends_with("MiB"));
    assert!(format_bytes(1024 * 1024 * 1000 - 1).ends_with("MiB"));
    assert!(format_bytes(1024 * 1024 * 1000).ends_with("GiB"));
}

#[test]
fn test_format_rate_truncates_plain_bytes() {
    assert_eq!(format_rate(999, Duration::from_secs(2)), "   499B/s");
    assert_eq!(format_rate(3 * 1024 * 1024, Duration::from_secs(3)), "  1.0MiB/s");
}

#[test]
fn test_format_time_hours_unbounded() {
    assert_eq!(format_time(Duration::from_secs(24 * 3600 + 1)), "24:00:01");
    assert_eq!(format_time(Duration::from_secs_f64(59.9)), "00:00:59");
}

#[test]
fn test_eta_at_half_equals_elapsed() {
    for secs in [1, 42, 3_599, 86_400] {
        let elapsed = Duration::from_secs(secs);
        assert_eq!(estimate_remaining(elapsed, 50, 100), Some(elapsed));
        assert_eq!(
            format_eta(elapsed, 50, 100),
            format!("ETA: {}", format_time(elapsed))
        );
    }
}

#[test]
fn test_eta_unknown_sentinel() {
    assert_eq!(ETA_UNKNOWN, "ETA: --:--:--");
    assert_eq!(format_eta(Duration::from_secs(99), 0, 100), ETA_UNKNOWN);
}

#[test]
fn test_format_elapsed() {
    assert_eq!(format_elapsed(Duration::ZERO), "Time: 00:00:00");
    assert_eq!(format_elapsed(Duration::from_secs(7_322)), "Time: 02:02:02");
}
