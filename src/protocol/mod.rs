//! # ESC/POS Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/POS protocol
//! used by EPSON thermal receipt printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Basic printer commands (init, cut, left margin)
//! - [`raster`]: Raster graphics commands (GS 8 L store, print buffer flush)
//!
//! ## Usage Example
//!
//! ```
//! use tinta::protocol::{commands, raster};
//!
//! // Build a minimal print sequence for a 16-dot-wide, 2-row bitmap
//! let mut data = Vec::new();
//!
//! // Initialize printer
//! data.extend(commands::init());
//!
//! // Store and print the raster
//! let bitmap = vec![0xFF; 2 * 2]; // 2 bytes per row, 2 rows
//! data.extend(raster::store(16, 2, &bitmap));
//! data.extend(raster::flush());
//!
//! // Cut the paper
//! data.extend(commands::cut());
//!
//! // Send `data` to the printer...
//! ```
//!
//! ## Protocol Reference
//!
//! This implementation is based on the "ESC/POS Application Programming
//! Guide" by Seiko Epson Corp.

pub mod commands;
pub mod raster;
