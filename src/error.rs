//! Error handling for the progressline library.
//!
//! Only two operations can fail on purpose: building a bar from an invalid
//! configuration and setting a value outside `[0, total]`. Writing a rendered
//! frame can additionally surface an I/O error from the caller's writer.

use std::io;
use thiserror::Error;

/// Errors that can happen when using progressline.
#[derive(Error, Debug)]
pub enum Error {
    /// A value passed to [`ProgressBar::set`](crate::ProgressBar::set) is outside `[0, total]`.
    #[error("Invalid value: {value} (total: {total})")]
    InvalidValue {
        /// The rejected value.
        value: u64,
        /// The bar's total.
        total: u64,
    },

    /// The bar cannot be built from the provided options.
    ///
    /// Returned for a zero total, duplicated or conflicting segments, unknown
    /// segment names, malformed templates and glyphs that are not exactly one
    /// column wide.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// I/O Error.
    ///
    /// Wraps errors from the writer a frame is drawn to.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for operations that can fail with a progressline error.
pub type Result<T> = std::result::Result<T, Error>;
