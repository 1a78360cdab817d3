//! Progress module containing the progress bar and its configuration.
//!
//! # Overview
//!
//! - `bar` - The [`ProgressBar`] state machine and line renderer
//! - `builder` - [`ProgressBarBuilder`] for fluent, validated construction
//! - `config` - [`ProgressBarConfig`], [`Direction`] and default glyphs
//! - `segment` - [`Segment`] kinds and the [`OutputSpec`] layout
//!
//! # Examples
//!
//! ## Default Layout
//!
//! ```rust
//! use progressline::progress::ProgressBarBuilder;
//! use progressline::terminal::FixedWidth;
//!
//! let mut bar = ProgressBarBuilder::new(100)
//!     .terminal(FixedWidth(30))
//!     .build()
//!     .unwrap();
//! bar.set(40).unwrap();
//! // "040% |===......| ETA: 00:00:00"
//! assert!(bar.render().contains("040% |"));
//! ```
//!
//! ## File Transfers
//!
//! ```rust
//! use progressline::progress::{ProgressBarBuilder, Segment};
//!
//! let mut bar = ProgressBarBuilder::new(4 * 1024 * 1024)
//!     .file_mode(true)
//!     .build()
//!     .unwrap();
//! assert!(bar.file_mode());
//! assert!(bar.output_spec().contains(Segment::StatusBytes));
//!
//! bar.set_file_mode(false);
//! assert!(bar.output_spec().contains(Segment::Status));
//! ```
//!
//! ## Custom Templates
//!
//! ```rust
//! use progressline::progress::{OutputSpec, ProgressBarBuilder, Segment};
//! use progressline::terminal::FixedWidth;
//!
//! let layout = OutputSpec::from_formats([
//!     (Segment::Label, "[{}]"),
//!     (Segment::Bar, "{}"),
//!     (Segment::Percentage, "{}%"),
//! ])
//! .unwrap();
//! let bar = ProgressBarBuilder::new(10)
//!     .label("sync")
//!     .output_format(layout)
//!     .terminal(FixedWidth(24))
//!     .build()
//!     .unwrap();
//! assert!(bar.render().ends_with("| 000%"));
//! ```

pub(crate) mod bar;
pub(crate) mod builder;
pub(crate) mod config;
pub(crate) mod segment;

pub use bar::{ProgressBar, CLEAR_LINE};
pub use builder::ProgressBarBuilder;
pub use config::{Direction, ProgressBarConfig, DEFAULT_EMPTY, DEFAULT_FILL};
pub use segment::{OutputSpec, Segment, SegmentFormat, PLACEHOLDER};
