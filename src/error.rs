//! # Error Types
//!
//! This module defines error types used throughout the tinta library.
//!
//! All errors are fatal: the converter is a single-pass batch tool with no
//! partial-failure recovery. A failure mid-job leaves the output stream
//! truncated, and the caller decides whether a truncated stream is usable.

use thiserror::Error;

/// Main error type for tinta operations
#[derive(Debug, Error)]
pub enum TintaError {
    /// Input image is wider than the printer can physically print
    #[error("image width {width} px exceeds the printer's capability ({max} px)")]
    ImageTooWide {
        /// Width of the offending image in pixels
        width: u32,
        /// Maximum printable width in dots
        max: u16,
    },

    /// Could not allocate a per-image working buffer
    #[error("could not allocate enough memory: {0}")]
    Allocation(#[from] std::collections::TryReserveError),

    /// Image decoding or validation error
    #[error("image error: {0}")]
    Image(String),

    /// I/O error from the output sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
