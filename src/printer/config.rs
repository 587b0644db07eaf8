//! # Printer Configuration
//!
//! This module defines hardware specifications for supported thermal printers.
//!
//! ## Supported Printers
//!
//! | Model | Width (dots) | Resolution | Raster chunk limit |
//! |-------|--------------|------------|--------------------|
//! | TM-T70 | 512 | 180 DPI | 1662 rows |
//!
//! ## Usage
//!
//! ```
//! use tinta::printer::PrinterConfig;
//!
//! let config = PrinterConfig::TM_T70;
//! println!("Print width: {} dots ({} bytes)",
//!          config.max_width_dots,
//!          config.max_width_bytes);
//! ```

/// # Printer Configuration
///
/// Defines the hardware characteristics of a thermal printer.
///
/// ## Physical Properties
///
/// - **max_width_dots**: Maximum printable width in dots (pixels)
/// - **max_width_bytes**: Width in bytes (max_width_dots / 8)
/// - **dpi**: Resolution in dots per inch
///
/// ## Raster Tuning
///
/// - **max_chunk_rows**: Maximum rows per GS 8 L store frame
///
/// ## Invariant
///
/// `max_width_dots` must be divisible by 8: raster bits are packed 8 per
/// byte, and the left-margin command moves in 8-dot steps.
#[derive(Debug, Clone, Copy)]
pub struct PrinterConfig {
    /// Printer model name
    pub name: &'static str,

    /// Maximum print width in dots (pixels)
    pub max_width_dots: u16,

    /// Maximum print width in bytes (max_width_dots / 8)
    pub max_width_bytes: u16,

    /// Resolution in dots per inch
    pub dpi: u16,

    /// Maximum rows per raster store frame (GS 8 L transmit limit)
    pub max_chunk_rows: u16,
}

impl PrinterConfig {
    /// # EPSON TM-T70 Configuration
    ///
    /// 80mm paper width thermal receipt printer.
    ///
    /// ## Specifications
    ///
    /// | Property | Value |
    /// |----------|-------|
    /// | Paper width | 80mm |
    /// | Print width | ~72mm (512 dots) |
    /// | Resolution | 180 DPI |
    /// | Cutter | Auto-cutter (partial) |
    ///
    /// The 1662-row chunk limit comes from the ESC/POS raster graphics
    /// documentation for Function 112 (store raster data).
    pub const TM_T70: Self = Self {
        name: "EPSON TM-T70",
        max_width_dots: 512,
        max_width_bytes: 64,
        dpi: 180,
        max_chunk_rows: 1662,
    };

    /// Calculate dots per millimeter
    #[inline]
    pub fn dots_per_mm(&self) -> f32 {
        self.dpi as f32 / 25.4
    }

    /// Calculate print width in millimeters
    #[inline]
    pub fn width_mm(&self) -> f32 {
        self.max_width_dots as f32 / self.dots_per_mm()
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::TM_T70
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tm_t70_dimensions() {
        let config = PrinterConfig::TM_T70;
        assert_eq!(config.max_width_dots, 512);
        assert_eq!(config.max_width_bytes, 64);
        assert_eq!(config.max_width_dots, config.max_width_bytes * 8);
    }

    #[test]
    fn test_width_divisible_by_8() {
        // Raster bytes hold 8 dots each; a non-8-aligned width cannot be framed
        assert_eq!(PrinterConfig::TM_T70.max_width_dots % 8, 0);
    }

    #[test]
    fn test_dots_per_mm() {
        let config = PrinterConfig::TM_T70;
        let dpmm = config.dots_per_mm();
        // 180 DPI ≈ 7.1 dots/mm
        assert!((dpmm - 7.09).abs() < 0.1);
    }

    #[test]
    fn test_width_mm() {
        let config = PrinterConfig::TM_T70;
        let width = config.width_mm();
        // 512 dots / 7.09 dpmm ≈ 72mm
        assert!((width - 72.2).abs() < 1.0);
    }

    #[test]
    fn test_default_is_tm_t70() {
        let default = PrinterConfig::default();
        assert_eq!(default.name, PrinterConfig::TM_T70.name);
    }
}
