//! Builder pattern implementation for creating ProgressBar instances.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use progressline::progress::ProgressBarBuilder;
//!
//! let bar = ProgressBarBuilder::new(1024)
//!     .fill('#')
//!     .empty('-')
//!     .label("fetch")
//!     .build()
//!     .unwrap();
//! assert_eq!(bar.label(), Some("fetch"));
//! ```
//!
//! ## Layout From Segment Names
//!
//! ```rust
//! use progressline::progress::{ProgressBarBuilder, Segment};
//!
//! let bar = ProgressBarBuilder::new(10)
//!     .output_info_names(&["status", "percentage", "bar"])
//!     .build()
//!     .unwrap();
//! assert_eq!(bar.output_spec().segments().next(), Some(Segment::Status));
//! ```
//!
//! ## Deterministic Rendering
//!
//! ```rust
//! use progressline::clock::ManualClock;
//! use progressline::progress::ProgressBarBuilder;
//! use progressline::terminal::FixedWidth;
//!
//! let bar = ProgressBarBuilder::new(100)
//!     .terminal(FixedWidth(40))
//!     .clock(ManualClock::new())
//!     .build()
//!     .unwrap();
//! assert!(bar.render().ends_with("ETA: --:--:--"));
//! ```

use super::bar::ProgressBar;
use super::config::{Direction, ProgressBarConfig};
use super::segment::{OutputSpec, Segment};
use crate::clock::Clock;
use crate::terminal::TerminalWidth;
use crate::{Error, Result};

use console::measure_text_width;
use std::sync::Arc;

/// A layout requested on the builder, validated at build time.
#[derive(Debug, Clone)]
enum PendingOutput {
    Segments(Vec<Segment>),
    Names(Vec<String>),
}

impl PendingOutput {
    fn resolve(self) -> Result<OutputSpec> {
        match self {
            PendingOutput::Segments(segments) => OutputSpec::from_segments(segments),
            PendingOutput::Names(names) => OutputSpec::from_names(names.as_slice()),
        }
    }
}

/// A builder used to create a [`ProgressBar`].
#[derive(Debug, Clone)]
pub struct ProgressBarBuilder {
    config: ProgressBarConfig,
    pending_output: Option<PendingOutput>,
    prepend_label: bool,
}

impl ProgressBarBuilder {
    /// Creates a builder with the default options for `total` units.
    pub fn new(total: u64) -> Self {
        Self {
            config: ProgressBarConfig {
                total,
                ..ProgressBarConfig::default()
            },
            pending_output: None,
            prepend_label: false,
        }
    }

    /// Convenience function for a bar that drains instead of filling.
    pub fn reverse(total: u64) -> Self {
        Self::new(total).direction(Direction::Reverse)
    }

    /// Sets the filled glyph.
    pub fn fill(mut self, fill: char) -> Self {
        self.config.fill = fill;
        self
    }

    /// Sets the unfilled glyph.
    pub fn empty(mut self, empty: char) -> Self {
        self.config.empty = empty;
        self
    }

    /// Sets the label.
    ///
    /// A label alone does not render; put [`Segment::Label`] in the layout,
    /// or use [`labelled`](Self::labelled).
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = Some(label.into());
        self
    }

    /// Sets the label and prepends the label segment to the current layout.
    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.config.label = Some(label.into());
        self.prepend_label = true;
        self
    }

    /// Sets the segments to render, in order, with default templates.
    ///
    /// Validation is deferred to [`build`](Self::build).
    pub fn output_info(mut self, segments: impl IntoIterator<Item = Segment>) -> Self {
        self.pending_output = Some(PendingOutput::Segments(segments.into_iter().collect()));
        self
    }

    /// Sets the segments to render from their names.
    ///
    /// Unknown names are reported by [`build`](Self::build), like any other
    /// invalid layout.
    pub fn output_info_names<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        let names = names.iter().map(|name| name.as_ref().to_string()).collect();
        self.pending_output = Some(PendingOutput::Names(names));
        self
    }

    /// Sets the segments to render together with their templates.
    pub fn output_format(mut self, output: OutputSpec) -> Self {
        self.config.output = output;
        self.pending_output = None;
        self
    }

    /// Render byte count and transfer rate in the status segment.
    pub fn file_mode(mut self, file_mode: bool) -> Self {
        self.config.file_mode = file_mode;
        self
    }

    /// Sets whether the bar fills or drains.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.config.direction = direction;
        self
    }

    /// Sets the terminal width provider.
    pub fn terminal(mut self, terminal: impl TerminalWidth + 'static) -> Self {
        self.config.terminal = Arc::new(terminal);
        self
    }

    /// Sets the time source.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.config.clock = Arc::new(clock);
        self
    }

    /// Get a reference to the configuration being built.
    pub fn config(&self) -> &ProgressBarConfig {
        &self.config
    }

    /// Create the [`ProgressBar`] with the specified options.
    pub fn build(mut self) -> Result<ProgressBar> {
        if let Some(pending) = self.pending_output.take() {
            self.config.output = pending.resolve()?;
        }
        if self.prepend_label && !self.config.output.contains(Segment::Label) {
            let segments = std::iter::once(Segment::Label)
                .chain(self.config.output.segments())
                .collect::<Vec<_>>();
            self.config.output = OutputSpec::from_segments(segments)?;
        }
        validate(&self.config)?;
        Ok(ProgressBar::new_with_config(self.config))
    }
}

fn validate(config: &ProgressBarConfig) -> Result<()> {
    if config.total == 0 {
        return Err(Error::InvalidConfiguration(
            "total must be greater than zero".to_string(),
        ));
    }
    for (name, glyph) in [("fill", config.fill), ("empty", config.empty)] {
        check_glyph(name, glyph)?;
    }
    check_label(&config.output, config.label.as_deref())
}

/// A layout with the label segment needs a label to show.
pub(crate) fn check_label(output: &OutputSpec, label: Option<&str>) -> Result<()> {
    if output.contains(Segment::Label) && label.is_none() {
        return Err(Error::InvalidConfiguration(
            "the label segment requires a label".to_string(),
        ));
    }
    Ok(())
}

/// A glyph must occupy exactly one terminal column.
pub(crate) fn check_glyph(name: &str, glyph: char) -> Result<()> {
    let width = measure_text_width(glyph.encode_utf8(&mut [0; 4]));
    if width != 1 {
        return Err(Error::InvalidConfiguration(format!(
            "{} glyph {:?} is {} columns wide, expected 1",
            name, glyph, width
        )));
    }
    Ok(())
}
