//! # Atkinson Error-Diffusion Dithering
//!
//! This module converts a continuous-tone lightness field to a binary
//! field while preserving mid-tone density, using Atkinson's variant of
//! error diffusion.
//!
//! ## What is Dithering?
//!
//! A thermal head either burns a dot or it doesn't. Dithering varies the
//! density of burned dots so a 1-bit device can suggest gray:
//!
//! ```text
//! Lightness:    Black    Dark     Medium   Light    White
//!               ██████   ▓▒▓▒▓▒   ░▒░▒░▒   ░░▒░░░   ░░░░░░
//! ```
//!
//! ## The Atkinson Kernel
//!
//! Each pixel is snapped to black or white and 1/8 of the resulting error
//! is pushed to six forward neighbors:
//!
//! ```text
//!          X   1/8  1/8
//!    1/8  1/8  1/8
//!         1/8
//! ```
//!
//! Only 6 of the 8 error units are propagated; the remaining 2/8 are
//! deliberately discarded. Compared with Floyd-Steinberg's full propagation
//! this loses some shadow/highlight detail but produces the sparse,
//! high-contrast halftone that suits thermal paper, where dot bleed fills
//! dense areas in anyway.
//!
//! ## Ordering Constraint
//!
//! Diffusion is read-modify-write against the live buffer in strict
//! row-major scan order: a pixel's binarization must see every error
//! contribution from earlier pixels, including contributions that stack on
//! the same cell. The pass is inherently sequential.

use crate::render::LightnessField;

/// Forward-neighbor offsets of the Atkinson kernel, in (dx, dy) form.
const KERNEL: [(i32, i32); 6] = [(1, 0), (2, 0), (-1, 1), (0, 1), (1, 1), (0, 2)];

/// Is a lightness value dark enough to print?
///
/// This is the whole of the non-photo binarizer: a pixel is marked
/// (burned) iff its lightness is at or below the threshold.
///
/// ## Example
///
/// ```
/// use tinta::render::dither::is_marked;
///
/// assert!(is_marked(0, 0x80));
/// assert!(is_marked(0x80, 0x80));
/// assert!(!is_marked(0x81, 0x80));
/// ```
#[inline]
pub fn is_marked(lightness: u8, threshold: u8) -> bool {
    lightness <= threshold
}

/// Dither the field in place.
///
/// After the pass every value is exactly 0 (marked) or 255 (unmarked);
/// [`is_marked`] with the same threshold classifies them consistently.
///
/// In photo mode the threshold passed here must be the one remapped by
/// [`equalize`](crate::render::equalize::equalize), not the configured one.
pub fn atkinson(field: &mut LightnessField, threshold: u8) {
    let w = field.width() as usize;
    let h = field.height() as usize;

    for i in 0..w * h {
        let o = field.data[i] as i32;
        let n = if is_marked(o as u8, threshold) { 0 } else { 255 };
        field.data[i] = n as u8;

        // 1/8 of the error per neighbor, truncating toward zero; the two
        // unassigned eighths are dropped.
        let e = (o - n) / 8;

        let x = (i % w) as i32;
        let y = (i / w) as i32;
        for (dx, dy) in KERNEL {
            let x0 = x + dx;
            let y0 = y + dy;
            if x0 < 0 || x0 >= w as i32 || y0 >= h as i32 {
                continue;
            }
            let j = y0 as usize * w + x0 as usize;
            let v = field.data[j] as i32 + e;
            field.data[j] = v.clamp(0, 255) as u8;
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
