#![allow(dead_code)]

use console::measure_text_width;
use progressline::progress::{ProgressBar, ProgressBarBuilder, Segment, CLEAR_LINE};
use progressline::{FixedWidth, ManualClock};
use std::time::Duration;

// Common test constants
pub const TEST_TOTAL: u64 = 100;
pub const TEST_WIDTH: usize = 60;
pub const TEST_LABEL: &str = "upload";

// === Bar Creation Helpers ===

/// Creates a builder with a fixed terminal width and a frozen clock
pub fn create_test_builder(total: u64, width: usize) -> (ProgressBarBuilder, ManualClock) {
    let clock = ManualClock::new();
    let builder = ProgressBarBuilder::new(total)
        .terminal(FixedWidth(width))
        .clock(clock.clone());
    (builder, clock)
}

/// Creates a default-layout bar of `TEST_TOTAL` units on a `TEST_WIDTH` terminal
pub fn create_test_bar() -> (ProgressBar, ManualClock) {
    create_test_bar_with(TEST_TOTAL, TEST_WIDTH)
}

/// Creates a default-layout bar with custom total and width
pub fn create_test_bar_with(total: u64, width: usize) -> (ProgressBar, ManualClock) {
    let (builder, clock) = create_test_builder(total, width);
    let bar = builder.build().expect("Failed to build test bar");
    (bar, clock)
}

/// Creates a bar rendering only the given segments
pub fn create_test_bar_with_segments(
    segments: &[Segment],
    width: usize,
) -> (ProgressBar, ManualClock) {
    let (builder, clock) = create_test_builder(TEST_TOTAL, width);
    let bar = builder
        .label(TEST_LABEL)
        .output_info(segments.iter().copied())
        .build()
        .expect("Failed to build test bar");
    (bar, clock)
}

/// Creates a file-mode bar for `total` bytes
pub fn create_file_mode_bar(total: u64, width: usize) -> (ProgressBar, ManualClock) {
    let (builder, clock) = create_test_builder(total, width);
    let bar = builder
        .file_mode(true)
        .build()
        .expect("Failed to build file mode bar");
    (bar, clock)
}

// === Rendering Helpers ===

/// Renders a bar and strips the clear-line prefix
pub fn visible_line(bar: &ProgressBar) -> String {
    let line = bar.render();
    line.strip_prefix(CLEAR_LINE)
        .expect("Rendered line should start with the clear-line sequence")
        .to_string()
}

/// Extracts the framed bar, frames included, from a visible line
pub fn extract_bar(line: &str) -> Option<&str> {
    let start = line.find('|')?;
    let end = line.rfind('|')?;
    (end > start).then(|| &line[start..=end])
}

/// Counts occurrences of a glyph
pub fn count_glyph(text: &str, glyph: char) -> usize {
    text.chars().filter(|&c| c == glyph).count()
}

/// Advances the clock by whole seconds
pub fn advance_secs(clock: &ManualClock, secs: u64) {
    clock.advance(Duration::from_secs(secs));
}

// === Assertion Helpers ===

/// Asserts that the visible width of a rendered line fits the terminal
pub fn assert_fits(bar: &ProgressBar, width: usize) {
    let line = visible_line(bar);
    let measured = measure_text_width(&line);
    assert!(
        measured <= width,
        "Line {:?} is {} columns wide, terminal has {}",
        line,
        measured,
        width
    );
}

/// Asserts that the visible width equals the terminal width exactly
pub fn assert_fills(bar: &ProgressBar, width: usize) {
    let line = visible_line(bar);
    assert_eq!(measure_text_width(&line), width, "Line: {:?}", line);
}

/// Asserts the documented percentage formula
pub fn assert_percentage(bar: &ProgressBar) {
    let expected = (bar.current() as f64 / bar.total() as f64 * 100.0).round() as u8;
    assert_eq!(bar.percentage(), expected);
}
