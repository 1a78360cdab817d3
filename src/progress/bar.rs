//! The progress bar state machine and its line renderer.
//!
//! A [`ProgressBar`] is mutated by the task it tracks and rendered on every
//! tick of the host program. Rendering never prints by itself; it returns a
//! line that starts with a carriage return and a clear-line sequence so that
//! consecutive frames overwrite each other.
//!
//! # Examples
//!
//! ```rust
//! use progressline::ProgressBar;
//!
//! let mut bar = ProgressBar::new(10).unwrap();
//! bar.inc(3).inc(3);
//! assert_eq!(bar.current(), 6);
//! assert_eq!(bar.percentage(), 60);
//!
//! bar.finish();
//! assert!(bar.is_finished());
//! assert_eq!(bar.percentage(), 100);
//! ```
//!
//! Sharing a bar between workers is up to the caller: wrap it in a
//! `Mutex` and take the lock around every mutation and render.

use super::builder::{check_glyph, check_label, ProgressBarBuilder};
use super::config::{Direction, ProgressBarConfig};
use super::segment::{OutputSpec, Segment};
use crate::clock::Clock;
use crate::terminal::{resolve_width, TerminalWidth};
use crate::utils::{format_bytes, format_elapsed, format_eta, format_rate};
use crate::{Error, Result};

use console::measure_text_width;
use std::fmt;
use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Carriage return followed by "erase to end of line".
pub const CLEAR_LINE: &str = "\r\x1b[0K";

/// Frame glyph drawn on each side of the bar.
const FRAME: char = '|';

/// A single-line progress bar.
pub struct ProgressBar {
    total: u64,
    current: u64,
    fill: char,
    empty: char,
    label: Option<String>,
    finished: bool,
    start_time: Instant,
    output: OutputSpec,
    direction: Direction,
    terminal: Arc<dyn TerminalWidth>,
    clock: Arc<dyn Clock>,
}

impl ProgressBar {
    /// Create a bar for `total` units with the default options.
    ///
    /// Fails with [`Error::InvalidConfiguration`] when `total` is zero.
    pub fn new(total: u64) -> Result<Self> {
        ProgressBarBuilder::new(total).build()
    }

    /// Create a bar that drains from 100% to 0%.
    pub fn new_reverse(total: u64) -> Result<Self> {
        ProgressBarBuilder::reverse(total).build()
    }

    /// Create a builder for `total` units.
    ///
    /// ```rust
    /// use progressline::ProgressBar;
    ///
    /// let bar = ProgressBar::builder(10).fill('#').build().unwrap();
    /// assert_eq!(bar.fill(), '#');
    /// assert_eq!(bar.total(), 10);
    /// ```
    pub fn builder(total: u64) -> ProgressBarBuilder {
        ProgressBarBuilder::new(total)
    }

    /// Assemble a bar from an already validated configuration.
    pub(crate) fn new_with_config(config: ProgressBarConfig) -> Self {
        let start_time = config.clock.now();
        let mut bar = Self {
            total: config.total,
            current: 0,
            fill: config.fill,
            empty: config.empty,
            label: config.label,
            finished: false,
            start_time,
            output: config.output,
            direction: config.direction,
            terminal: config.terminal,
            clock: config.clock,
        };
        if config.file_mode {
            bar.set_file_mode(true);
        }
        debug!(
            total = bar.total,
            direction = ?bar.direction,
            "Created progress bar with segments [{}]",
            bar.output
                .segments()
                .map(Segment::name)
                .collect::<Vec<_>>()
                .join(", ")
        );
        bar
    }

    /// Advance by `amount`, stopping at the total.
    pub fn inc(&mut self, amount: u64) -> &mut Self {
        self.current = self.current.saturating_add(amount).min(self.total);
        self
    }

    /// Advance by one unit.
    pub fn increment(&mut self) -> &mut Self {
        self.inc(1)
    }

    /// Jump to `value`, forward or backward.
    ///
    /// Fails with [`Error::InvalidValue`] when `value` exceeds the total.
    pub fn set(&mut self, value: u64) -> Result<&mut Self> {
        if value > self.total {
            return Err(Error::InvalidValue {
                value,
                total: self.total,
            });
        }
        self.current = value;
        Ok(self)
    }

    /// Complete the bar: jump to the total and stop the clock.
    pub fn finish(&mut self) -> &mut Self {
        self.current = self.total;
        self.finished = true;
        debug!(total = self.total, "Progress bar finished");
        self
    }

    /// Stop the clock without completing the bar.
    pub fn halt(&mut self) -> &mut Self {
        self.finished = true;
        debug!(
            current = self.current,
            total = self.total,
            "Progress bar halted"
        );
        self
    }

    /// Whether [`finish`](Self::finish) or [`halt`](Self::halt) was called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Displayed percentage, rounded, inverted for reverse bars.
    pub fn percentage(&self) -> u8 {
        let raw = (self.current as f64 / self.total as f64 * 100.0).round() as u8;
        self.direction.apply(raw)
    }

    /// Units done so far.
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Units that make 100%.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The bar's label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Instant the bar was created at, according to its clock.
    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    /// Fill or drain.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Segments rendered and their templates.
    pub fn output_spec(&self) -> &OutputSpec {
        &self.output
    }

    /// Filled glyph.
    pub fn fill(&self) -> char {
        self.fill
    }

    /// Unfilled glyph.
    pub fn empty(&self) -> char {
        self.empty
    }

    /// Change the filled glyph.
    pub fn set_fill(&mut self, fill: char) -> Result<&mut Self> {
        check_glyph("fill", fill)?;
        self.fill = fill;
        Ok(self)
    }

    /// Change the unfilled glyph.
    pub fn set_empty(&mut self, empty: char) -> Result<&mut Self> {
        check_glyph("empty", empty)?;
        self.empty = empty;
        Ok(self)
    }

    /// Whether the status segment shows bytes and transfer rate.
    pub fn file_mode(&self) -> bool {
        self.output.contains(Segment::StatusBytes)
    }

    /// Switch the status segment between plain and byte/rate rendering.
    ///
    /// The segment keeps its position and template. Layouts without a status
    /// segment are left untouched.
    pub fn set_file_mode(&mut self, file_mode: bool) -> &mut Self {
        let (from, to) = if file_mode {
            (Segment::Status, Segment::StatusBytes)
        } else {
            (Segment::StatusBytes, Segment::Status)
        };
        if self.output.replace(from, to) {
            debug!("Switched status segment to {}", to);
        }
        self
    }

    /// Replace the layout with `output`.
    ///
    /// If the current layout has a status segment, its file mode carries over
    /// to the new one. Fails with [`Error::InvalidConfiguration`] when the new
    /// layout shows a label the bar does not have; the layout is unchanged
    /// then.
    pub fn set_output_format(&mut self, output: OutputSpec) -> Result<&mut Self> {
        check_label(&output, self.label())?;
        let had_status =
            self.output.contains(Segment::Status) || self.output.contains(Segment::StatusBytes);
        let file_mode = self.file_mode();
        self.output = output;
        if had_status {
            self.set_file_mode(file_mode);
        }
        debug!(
            "Changed layout to [{}]",
            self.output
                .segments()
                .map(Segment::name)
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(self)
    }

    /// Replace the layout with `segments`, using their default templates.
    pub fn set_output_info(
        &mut self,
        segments: impl IntoIterator<Item = Segment>,
    ) -> Result<&mut Self> {
        self.set_output_format(OutputSpec::from_segments(segments)?)
    }

    /// Time since the bar was created.
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.start_time)
    }

    /// Render the current frame.
    ///
    /// The line is sized to the terminal width queried right now, starts
    /// with [`CLEAR_LINE`] and has no trailing newline.
    pub fn render(&self) -> String {
        let width = resolve_width(self.terminal.as_ref());
        let elapsed = self.elapsed();

        // Lay out every other segment first; the bar takes what is left.
        let others = measure_text_width(&self.compose(elapsed, ""));
        let bar = self.format_bar(width, others);
        let line = self.compose(elapsed, &bar);

        trace!(
            width,
            others,
            bar = measure_text_width(&bar),
            "Rendered progress line"
        );
        format!("{}{}", CLEAR_LINE, line)
    }

    /// Write the current frame to `out` and flush it.
    pub fn draw<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(self.render().as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn compose(&self, elapsed: Duration, bar: &str) -> String {
        self.output
            .iter()
            .map(|format| format.apply(&self.format_segment(format.segment(), elapsed, bar)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn format_segment(&self, segment: Segment, elapsed: Duration, bar: &str) -> String {
        match segment {
            Segment::Label => self.label.clone().unwrap_or_default(),
            Segment::Percentage => format!("{:03}", self.percentage()),
            Segment::Bar => bar.to_string(),
            Segment::Status => self.format_status(elapsed),
            Segment::StatusBytes => format!(
                "{} {} {}",
                format_bytes(self.current),
                format_rate(self.current, elapsed),
                self.format_status(elapsed)
            ),
        }
    }

    fn format_status(&self, elapsed: Duration) -> String {
        if self.finished {
            format_elapsed(elapsed)
        } else {
            format_eta(elapsed, self.current, self.total)
        }
    }

    /// Frame the bar into the columns left after `others`.
    ///
    /// Returns an empty string when not even the frames fit.
    fn format_bar(&self, width: usize, others: usize) -> String {
        if !self.output.contains(Segment::Bar) {
            return String::new();
        }
        let Some(inner) = width.checked_sub(others + 2) else {
            return String::new();
        };
        let filled = usize::from(self.percentage()) * inner / 100;
        let mut bar = String::with_capacity(inner + 2);
        bar.push(FRAME);
        bar.extend(std::iter::repeat(self.fill).take(filled));
        bar.extend(std::iter::repeat(self.empty).take(inner - filled));
        bar.push(FRAME);
        bar
    }
}

impl fmt::Display for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressBar")
            .field("current", &self.current)
            .field("total", &self.total)
            .field("finished", &self.finished)
            .field("direction", &self.direction)
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::terminal::FixedWidth;

    fn bar_with_width(total: u64, width: usize) -> ProgressBar {
        ProgressBarBuilder::new(total)
            .terminal(FixedWidth(width))
            .clock(ManualClock::new())
            .build()
            .unwrap()
    }

    #[test]
    fn test_format_bar_fills_remaining_width() {
        let mut bar = bar_with_width(100, 40);
        bar.set(50).unwrap();
        let rendered = bar.format_bar(40, 18);
        assert_eq!(rendered, "|==========..........|");
    }

    #[test]
    fn test_format_bar_too_narrow() {
        let bar = bar_with_width(100, 10);
        assert_eq!(bar.format_bar(10, 9), "");
        assert_eq!(bar.format_bar(10, 8), "||");
    }

    #[test]
    fn test_format_bar_absent_segment() {
        let bar = ProgressBarBuilder::new(10)
            .output_info([Segment::Percentage])
            .terminal(FixedWidth(40))
            .build()
            .unwrap();
        assert_eq!(bar.format_bar(40, 4), "");
    }

    #[test]
    fn test_render_prefix_and_no_newline() {
        let bar = bar_with_width(100, 40);
        let line = bar.render();
        assert!(line.starts_with(CLEAR_LINE));
        assert!(!line.ends_with('\n'));
    }

    #[test]
    fn test_debug_format() {
        let mut bar = bar_with_width(100, 40);
        bar.inc(12);
        let debug_str = format!("{:?}", bar);
        assert!(debug_str.contains("ProgressBar"));
        assert!(debug_str.contains("current: 12"));
        assert!(debug_str.contains("total: 100"));
    }
}
