//! # Tinta - PNG to ESC/POS Raster Converter
//!
//! Tinta converts decoded RGBA images into 1-bit raster streams framed as
//! ESC/POS commands for EPSON thermal receipt printers. It provides:
//!
//! - **Color reduction**: gamma-corrected luma → CIE L\*-like lightness
//! - **Photo mode**: histogram equalization + Atkinson error diffusion
//! - **Bit packing**: MSB-first 1-bit canvas with 8-dot alignment geometry
//! - **Protocol implementation**: GS 8 L raster command builders
//!
//! ## Quick Start
//!
//! ```
//! use tinta::{JobEncoder, JobOptions, PrinterConfig, RawImage};
//!
//! // A 16x8 opaque black image
//! let mut pixels = vec![0u8; 16 * 8 * 4];
//! for px in pixels.chunks_exact_mut(4) {
//!     px[3] = 0xFF;
//! }
//! let image = RawImage::new(16, 8, &pixels)?;
//!
//! // Encode a whole job into a byte vector (any `Write` sink works)
//! let mut encoder = JobEncoder::new(Vec::new(), PrinterConfig::TM_T70, JobOptions::default());
//! encoder.print_image(&image)?;
//! let bytes = encoder.finish()?;
//!
//! // init (2) + store header (17) + 16 raster bytes + flush (7)
//! assert_eq!(bytes.len(), 42);
//! # Ok::<(), tinta::TintaError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`render`] | Color reduction, equalization, dithering, bit packing |
//! | [`protocol`] | ESC/POS command builders |
//! | [`encoder`] | Job orchestration and frame emission |
//! | [`printer`] | Printer configurations |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! Written against the EPSON TM-T70 (512-dot printable width, 180 DPI).
//! Other EPSON printers speaking the GS 8 L raster dialect should work
//! with an adjusted [`PrinterConfig`].
//!
//! ## Failure Model
//!
//! The pipeline is a single-pass batch converter: every error is fatal and
//! leaves the output stream truncated. See [`error::TintaError`].

pub mod encoder;
pub mod error;
pub mod printer;
pub mod protocol;
pub mod render;

// Re-exports for convenience
pub use encoder::{DEFAULT_THRESHOLD, ImageStats, JobEncoder, JobOptions};
pub use error::TintaError;
pub use printer::PrinterConfig;
pub use render::RawImage;
pub use render::canvas::Align;
