//! # ESC/POS Raster Graphics Commands
//!
//! This module implements the GS 8 L raster graphics commands used to
//! transfer a packed monochrome bitmap to the printer and render it.
//!
//! ## Graphics Flow
//!
//! Printing one image is a two-step conversation:
//!
//! | Step | Command | Description |
//! |------|---------|-------------|
//! | Store | GS 8 L ... fn=112 | Load raster data into the print buffer |
//! | Flush | GS ( L ... fn=50  | Render the buffered data and feed |
//!
//! Tall images repeat the (store, flush) pair per chunk of at most
//! [`GS8L_MAX_Y`] rows.
//!
//! ## Bit Packing
//!
//! Raster data is packed as bytes where each bit represents one dot:
//! - Bit 7 (MSB) = leftmost dot
//! - Bit 0 (LSB) = rightmost dot
//! - 1 = black (print), 0 = white (no print)
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! Byte value 0x0F = 00001111 = ░░░░████
//! Byte value 0xAA = 10101010 = █░█░█░█░
//! ```
//!
//! ## Reference
//!
//! "ESC/POS Application Programming Guide", GS ( L / GS 8 L,
//! Functions 112 and 50.

use super::commands::{GS, u16_le, u32_le};

/// Maximum rows per GS 8 L store frame.
///
/// The raster-format documentation caps a single Function 112 transfer at
/// 1662 rows; taller images are split into multiple store/flush pairs.
pub const GS8L_MAX_Y: u16 = 1662;

/// Fixed bytes of the store-frame parameter block preceding the dimensions:
/// m=48, fn=112, a=48 (monochrome), bx=1, by=1, c=49 (color 1).
const STORE_FN: [u8; 6] = [0x30, 0x70, 0x30, 0x01, 0x01, 0x31];

/// # Store Raster Data (GS 8 L ... fn=112)
///
/// Loads one chunk of packed raster data into the printer's buffer. The
/// data is not rendered until a [`flush`] frame arrives.
///
/// ## Protocol Details
///
/// | Format | Bytes |
/// |--------|-------|
/// | ASCII  | GS 8 L p1 p2 p3 p4 m fn a bx by c xL xH yL yH d1...dk |
/// | Hex    | 1D 38 4C p1 p2 p3 p4 30 70 30 01 01 31 xL xH yL yH d1...dk |
///
/// ## Parameters
///
/// - `p1..p4`: parameter byte count, `10 + k`, little-endian u32
///   (`k` = payload length; p3/p4 are zero whenever the value fits 16 bits)
/// - `xL xH`: bitmap width in dots, little-endian (must be a multiple of 8)
/// - `yL yH`: number of rows in this chunk, little-endian
/// - `d1...dk`: packed bitmap bytes, `k = rows * width/8`, 1 = print dot
///
/// ## Example
///
/// ```
/// use tinta::protocol::raster;
///
/// // 16 dots wide, 8 rows, all black
/// let data = vec![0xFF; 8 * 2];
/// let cmd = raster::store(16, 8, &data);
///
/// // Parameter field: 10 + 8*(16/8) = 26
/// assert_eq!(&cmd[0..7], &[0x1D, 0x38, 0x4C, 26, 0, 0, 0]);
/// // Dimensions: width 16, rows 8
/// assert_eq!(&cmd[13..17], &[16, 0, 8, 0]);
/// assert_eq!(cmd.len(), 17 + 16);
/// ```
pub fn store(width_dots: u16, rows: u16, data: &[u8]) -> Vec<u8> {
    debug_assert!(width_dots % 8 == 0, "raster width must be a multiple of 8");
    debug_assert!(rows <= GS8L_MAX_Y, "chunk exceeds GS 8 L row limit");

    let expected_len = (width_dots as usize / 8) * rows as usize;
    debug_assert!(
        data.len() == expected_len,
        "Raster data length mismatch. Expected {} ({} bytes × {} rows), got {}",
        expected_len,
        width_dots / 8,
        rows,
        data.len()
    );

    let params = u32_le(10 + data.len() as u32);
    let [xl, xh] = u16_le(width_dots);
    let [yl, yh] = u16_le(rows);

    let mut cmd = Vec::with_capacity(17 + data.len());
    cmd.push(GS);
    cmd.push(b'8');
    cmd.push(b'L');
    cmd.extend_from_slice(&params);
    cmd.extend_from_slice(&STORE_FN);
    cmd.push(xl);
    cmd.push(xh);
    cmd.push(yl);
    cmd.push(yh);
    cmd.extend_from_slice(data);
    cmd
}

/// # Print Buffered Raster Data (GS ( L ... fn=50)
///
/// Renders the raster data loaded by [`store`] and feeds the paper past it.
/// Carries no per-image parameters.
///
/// ## Protocol Details
///
/// | Format | Bytes |
/// |--------|-------|
/// | ASCII  | GS ( L pL pH m fn |
/// | Hex    | 1D 28 4C 02 00 30 32 |
///
/// ## Example
///
/// ```
/// use tinta::protocol::raster;
///
/// assert_eq!(raster::flush(), vec![0x1D, 0x28, 0x4C, 0x02, 0x00, 0x30, 0x32]);
/// ```
#[inline]
pub fn flush() -> Vec<u8> {
    vec![GS, b'(', b'L', 0x02, 0x00, 0x30, 0x32]
}

// ============================================================================
// TESTS
// ============================================================================
