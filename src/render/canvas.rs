//! # Bit Packing and Alignment Geometry
//!
//! This module packs a binarized lightness field into the 1-bit canvas the
//! raster protocol transmits, and resolves horizontal alignment into a
//! left-margin offset.
//!
//! ## Canvas Layout
//!
//! The canvas width is the image width rounded up to the next multiple of
//! 8 dots, because raster bytes carry 8 dots each:
//!
//! ```text
//! image width 13 → canvas width 16, stride 2 bytes
//!
//! bit:   7 6 5 4 3 2 1 0   7 6 5 4 3 2 1 0
//!        ███████████████████████████░ ░ ░     ← 3 padding columns, always 0
//! ```
//!
//! - Bit 7 (MSB) = leftmost dot, bit 0 (LSB) = rightmost dot
//! - 1 = mark (burn the dot), 0 = blank
//! - Padding columns beyond the image width stay blank
//!
//! ## Rotation
//!
//! Rotating "upside down" reverses the entire pixel stream (last pixel
//! first), which is a 180° rotation of the raster. Alignment defaults to
//! Right when rotating and no alignment was chosen, so the flipped image
//! leaves the paper edge it would have left unrotated.

use crate::error::TintaError;
use crate::printer::PrinterConfig;
use crate::render::LightnessField;
use crate::render::dither::is_marked;

/// Horizontal placement of the image on the paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Flush against the left paper edge (the default)
    Left,
    /// Centered on the printable width
    Center,
    /// Flush against the right paper edge
    Right,
}

/// Resolved print geometry: the alignment actually in effect and the
/// left-margin offset it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Alignment after default resolution
    pub align: Align,
    /// Left margin in dots, always a multiple of 8
    pub offset: u16,
}

impl Geometry {
    /// Resolve an optional alignment request against the printer width.
    ///
    /// `None` means the caller expressed no preference: it resolves to
    /// Right when rotating (the stream reversal would otherwise move the
    /// image to the wrong edge) and Left otherwise. The computed offset is
    /// rounded down to a multiple of 8 because the margin command moves in
    /// 8-dot steps.
    ///
    /// ## Example
    ///
    /// ```
    /// use tinta::printer::PrinterConfig;
    /// use tinta::render::canvas::{Align, Geometry};
    ///
    /// let geometry = Geometry::resolve(None, true, 16, &PrinterConfig::TM_T70);
    /// assert_eq!(geometry.align, Align::Right);
    /// assert_eq!(geometry.offset, 496);
    /// ```
    pub fn resolve(
        align: Option<Align>,
        rotate: bool,
        canvas_width: u16,
        printer: &PrinterConfig,
    ) -> Self {
        let align = align.unwrap_or(if rotate { Align::Right } else { Align::Left });
        let free = printer.max_width_dots.saturating_sub(canvas_width);
        let offset = match align {
            Align::Left => 0,
            Align::Center => free / 2,
            Align::Right => free,
        } & !7;
        Self { align, offset }
    }
}

/// A packed 1-bit bitmap, one byte per 8 horizontal dots, row-major.
#[derive(Debug, Clone)]
pub struct BinaryCanvas {
    width: u16,
    height: u32,
    data: Vec<u8>,
}

impl BinaryCanvas {
    /// Canvas width in dots (a multiple of 8, >= the image width)
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Canvas height in rows
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize / 8
    }

    /// The packed bytes of `count` rows starting at `first_row`
    pub fn rows(&self, first_row: u32, count: u32) -> &[u8] {
        let start = first_row as usize * self.stride();
        let end = (first_row + count) as usize * self.stride();
        &self.data[start..end]
    }

    /// Is the dot at (x, y) marked?
    pub fn get(&self, x: u16, y: u32) -> bool {
        let byte = (y as usize * self.width as usize + x as usize) >> 3;
        self.data[byte] & (0x80 >> (x % 8)) != 0
    }
}

/// Pack a binarized field into a [`BinaryCanvas`].
///
/// Every source pixel at logical index `i` maps to physical index
/// `idx = rotate ? w*h-1-i : i`; the pixel read from `idx` lands at the
/// coordinates decoded from `i` with the *image* width, so a rotated
/// stream reverses completely rather than flipping per row. The canvas
/// starts all-blank and only marked pixels set bits, which keeps the
/// padding columns blank for free.
pub fn pack(
    field: &LightnessField,
    threshold: u8,
    rotate: bool,
) -> Result<BinaryCanvas, TintaError> {
    let w = field.width() as usize;
    let h = field.height() as usize;
    let canvas_width = field.width().div_ceil(8) * 8;
    let stride = canvas_width as usize / 8;

    let mut data: Vec<u8> = Vec::new();
    data.try_reserve_exact(stride * h)?;
    data.resize(stride * h, 0);

    let size = w * h;
    for i in 0..size {
        let idx = if rotate { size - 1 - i } else { i };
        if is_marked(field.data[idx], threshold) {
            let x = i % w;
            let y = i / w;
            data[(y * canvas_width as usize + x) >> 3] |= 0x80 >> (x % 8);
        }
    }

    Ok(BinaryCanvas {
        width: canvas_width as u16,
        height: field.height(),
        data,
    })
}

// ============================================================================
// TESTS
// ============================================================================
