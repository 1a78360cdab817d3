//! progressline renders single-line terminal progress bars: a percentage, a
//! bar sized to the terminal, and an ETA or elapsed time, optionally with the
//! number of bytes moved and the transfer rate.
//!
//! # Quick Start
//!
//! ```rust
//! use progressline::{ProgressBar, Error};
//!
//! # fn main() -> Result<(), Error> {
//! let mut bar = ProgressBar::new(250)?;
//! for _ in 0..250 {
//!     // ... do one unit of work ...
//!     bar.increment();
//!     print!("{}", bar);
//! }
//! bar.finish();
//! println!("{}", bar);
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`progress`] - The `ProgressBar`, its builder, configuration and layout
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`terminal`] - Terminal width providers
//! - [`clock`] - Time sources
//! - [`utils`] - Byte and time formatting helpers
//!
//! A bar is not synchronized. Hosts that update one bar from several
//! threads must serialize access themselves, for example with a `Mutex`.

pub mod clock;
pub mod error;
pub mod progress;
pub mod terminal;
pub mod utils;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use progress::{
    Direction, OutputSpec, ProgressBar, ProgressBarBuilder, ProgressBarConfig, Segment,
};
pub use terminal::{ConsoleTerminal, FixedWidth, TerminalWidth, DEFAULT_TERMINAL_WIDTH};
