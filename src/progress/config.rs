//! Configuration structures and defaults for progress bars.
//!
//! [`ProgressBarConfig`] holds every option a [`ProgressBar`](super::ProgressBar)
//! is built from. It is normally filled in through
//! [`ProgressBarBuilder`](super::ProgressBarBuilder), which validates it.
//!
//! # Examples
//!
//! ```rust
//! use progressline::progress::{Direction, ProgressBarConfig};
//!
//! let config = ProgressBarConfig::default();
//! assert_eq!(config.fill, '=');
//! assert_eq!(config.empty, '.');
//! assert_eq!(config.direction, Direction::Forward);
//! ```

use super::segment::OutputSpec;
use crate::clock::{Clock, SystemClock};
use crate::terminal::{ConsoleTerminal, TerminalWidth};

use std::sync::Arc;

/// Glyph used for the filled part of the bar.
pub const DEFAULT_FILL: char = '=';
/// Glyph used for the unfilled part of the bar.
pub const DEFAULT_EMPTY: char = '.';

/// Whether the bar fills up or drains as progress is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Percentage grows from 0 to 100.
    #[default]
    Forward,
    /// Percentage shrinks from 100 to 0.
    ///
    /// Only the displayed percentage and the fill are inverted; ETA, elapsed
    /// time and transfer rate still use the raw counters.
    Reverse,
}

impl Direction {
    /// Map a raw percentage to the displayed one.
    pub fn apply(self, percentage: u8) -> u8 {
        match self {
            Direction::Forward => percentage,
            Direction::Reverse => 100 - percentage,
        }
    }
}

/// Configuration structure for a progress bar.
#[derive(Clone)]
pub struct ProgressBarConfig {
    /// Number of units that make 100%.
    pub total: u64,
    /// Filled glyph.
    pub fill: char,
    /// Unfilled glyph.
    pub empty: char,
    /// Optional label, rendered by [`Segment::Label`](super::Segment::Label).
    pub label: Option<String>,
    /// Segments to render and their templates.
    pub output: OutputSpec,
    /// Render byte count and transfer rate in the status segment.
    pub file_mode: bool,
    /// Fill or drain.
    pub direction: Direction,
    /// Terminal width provider.
    pub terminal: Arc<dyn TerminalWidth>,
    /// Time source.
    pub clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for ProgressBarConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressBarConfig")
            .field("total", &self.total)
            .field("fill", &self.fill)
            .field("empty", &self.empty)
            .field("label", &self.label)
            .field("output", &self.output)
            .field("file_mode", &self.file_mode)
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

impl Default for ProgressBarConfig {
    fn default() -> Self {
        Self {
            total: 100,
            fill: DEFAULT_FILL,
            empty: DEFAULT_EMPTY,
            label: None,
            output: OutputSpec::default(),
            file_mode: false,
            direction: Direction::Forward,
            terminal: Arc::new(ConsoleTerminal),
            clock: Arc::new(SystemClock),
        }
    }
}
