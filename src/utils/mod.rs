//! Shared formatting helpers.
//!
//! These are the pure functions the status segment is built from. They do
//! not depend on any bar state and can be used on their own.
//!
//! # Overview
//!
//! - [`bytes`] - Human-readable byte counts with binary units
//! - [`duration`] - `HH:MM:SS` clock strings, ETA and elapsed labels
//!
//! # Examples
//!
//! ```rust
//! use progressline::utils::{format_bytes, format_time};
//! use std::time::Duration;
//!
//! assert_eq!(format_bytes(1500), "  1.5KiB");
//! assert_eq!(format_time(Duration::from_secs(3_725)), "01:02:05");
//! ```

pub mod bytes;
pub mod duration;

pub use bytes::{format_bytes, format_rate};
pub use duration::{estimate_remaining, format_elapsed, format_eta, format_time, ETA_UNKNOWN};
