//! Terminal width providers.
//!
//! A [`ProgressBar`](crate::ProgressBar) asks its provider for the column
//! count on every render, so resizing the terminal between frames is picked
//! up immediately. Providers report `None` when the width is unknown and the
//! bar falls back to [`DEFAULT_TERMINAL_WIDTH`].
//!
//! # Examples
//!
//! ```rust
//! use progressline::terminal::{FixedWidth, TerminalWidth};
//!
//! let terminal = FixedWidth(40);
//! assert_eq!(terminal.columns(), Some(40));
//! ```

use console::Term;

/// Column count used when the terminal cannot be queried.
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Source of the current terminal column count.
pub trait TerminalWidth: Send + Sync {
    /// Current number of columns, or `None` if unavailable.
    fn columns(&self) -> Option<usize>;
}

/// Queries the attached stdout terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleTerminal;

impl TerminalWidth for ConsoleTerminal {
    fn columns(&self) -> Option<usize> {
        Term::stdout()
            .size_checked()
            .map(|(_rows, columns)| columns as usize)
    }
}

/// A terminal of constant width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth(pub usize);

impl TerminalWidth for FixedWidth {
    fn columns(&self) -> Option<usize> {
        Some(self.0)
    }
}

/// Resolve the width to render for, applying the default on failure.
pub(crate) fn resolve_width(terminal: &dyn TerminalWidth) -> usize {
    match terminal.columns() {
        Some(columns) if columns > 0 => columns,
        _ => {
            tracing::debug!(
                "Terminal width unavailable, using {} columns",
                DEFAULT_TERMINAL_WIDTH
            );
            DEFAULT_TERMINAL_WIDTH
        }
    }
}
