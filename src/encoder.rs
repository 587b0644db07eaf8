//! # Job Encoder
//!
//! This module drives whole conversion jobs: it runs the render pipeline
//! over each input image and serializes the result into the ESC/POS
//! command stream.
//!
//! ## Frame Order
//!
//! ```text
//! init                        once per job, before any image
//! per image, per chunk of ≤ GS8L_MAX_Y rows:
//!     [left margin]           only when the alignment offset is non-zero
//!     store                   17-byte header + packed rows
//!     flush                   render the buffered chunk
//! [cut]                       once per job, when requested
//! ```
//!
//! Images are processed strictly in order with no state carried between
//! them except the init-already-sent flag; every per-image buffer is
//! dropped before the next image starts.
//!
//! ## Failure Model
//!
//! Everything is fatal. A too-wide image fails before any of its frames
//! reach the sink; a sink write failure aborts the job and leaves the
//! stream truncated. There is no retry — the caller decides whether a
//! truncated stream is usable.

use std::io::Write;

use crate::error::TintaError;
use crate::printer::PrinterConfig;
use crate::protocol::{commands, raster};
use crate::render::canvas::{Align, BinaryCanvas, Geometry, pack};
use crate::render::dither::atkinson;
use crate::render::equalize::equalize;
use crate::render::lightness::reduce;
use crate::render::RawImage;

/// Default binarization threshold: mid-scale.
pub const DEFAULT_THRESHOLD: u8 = 0x80;

/// Distinct lightness levels above which an image is probably a photograph.
const PHOTO_HINT_LEVELS: usize = 64;

/// Job-level conversion options.
///
/// Assembled by the CLI (or any other caller); the encoder itself never
/// reads global state.
#[derive(Debug, Clone, Copy)]
pub struct JobOptions {
    /// Cut the paper once at the end of the job
    pub cut: bool,
    /// Photo mode: histogram equalization + Atkinson dithering
    pub photo: bool,
    /// Horizontal alignment; `None` resolves to Left (or Right when rotating)
    pub align: Option<Align>,
    /// Rotate the image upside down (180°) before printing
    pub rotate: bool,
    /// Binarization threshold; a pixel prints when lightness <= threshold
    pub threshold: u8,
}

impl Default for JobOptions {
    fn default() -> Self {
        Self {
            cut: false,
            photo: false,
            align: None,
            rotate: false,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Per-image statistics reported back to the caller.
///
/// Advisory only — nothing here changes the emitted bytes.
#[derive(Debug, Clone, Copy)]
pub struct ImageStats {
    /// Number of distinct lightness levels in the reduced image
    pub distinct_levels: usize,
}

impl ImageStats {
    /// Does this image look like a photograph?
    ///
    /// Line art occupies a handful of lightness levels; a rich tonal range
    /// suggests the image would binarize better with photo mode on.
    pub fn suggests_photo_mode(&self) -> bool {
        self.distinct_levels > PHOTO_HINT_LEVELS
    }
}

/// Encodes a conversion job into an output sink.
///
/// Generic over any [`Write`] sink: a `BufWriter<File>`, locked stdout, or
/// a `Vec<u8>` in tests. [`finish`](Self::finish) must be called to emit
/// the trailing frames and flush; it returns the sink.
///
/// ## Example
///
/// ```
/// use tinta::{JobEncoder, JobOptions, PrinterConfig, RawImage};
///
/// let pixels = vec![0u8; 8 * 2 * 4]; // 8x2, fully transparent → blank
/// let image = RawImage::new(8, 2, &pixels)?;
///
/// let mut encoder = JobEncoder::new(Vec::new(), PrinterConfig::TM_T70, JobOptions::default());
/// encoder.print_image(&image)?;
/// let bytes = encoder.finish()?;
///
/// // init + store header + 2 blank rows + flush
/// assert_eq!(bytes.len(), 2 + 17 + 2 + 7);
/// # Ok::<(), tinta::TintaError>(())
/// ```
pub struct JobEncoder<W: Write> {
    sink: W,
    printer: PrinterConfig,
    options: JobOptions,
    init_sent: bool,
}

impl<W: Write> JobEncoder<W> {
    /// Create an encoder writing to `sink`. No bytes are written until the
    /// first image (or [`finish`](Self::finish)).
    pub fn new(sink: W, printer: PrinterConfig, options: JobOptions) -> Self {
        Self {
            sink,
            printer,
            options,
            init_sent: false,
        }
    }

    /// Convert one image and write its frames.
    ///
    /// Runs the full pipeline: width validation, color reduction, optional
    /// photo-mode equalization and dithering, bit packing, then chunked
    /// frame emission. Width validation happens before any byte for this
    /// image is written.
    pub fn print_image(&mut self, image: &RawImage<'_>) -> Result<ImageStats, TintaError> {
        if image.width() > self.printer.max_width_dots as u32 {
            return Err(TintaError::ImageTooWide {
                width: image.width(),
                max: self.printer.max_width_dots,
            });
        }

        let (mut field, histogram) = reduce(image)?;
        let stats = ImageStats {
            distinct_levels: histogram.distinct_levels(),
        };

        let mut threshold = self.options.threshold;
        if self.options.photo {
            // Equalization must finish over the whole field before the
            // first pixel is dithered, and the dither threshold is the
            // remapped one.
            threshold = equalize(&mut field, histogram, threshold);
            atkinson(&mut field, threshold);
        }

        let canvas = pack(&field, threshold, self.options.rotate)?;
        let geometry = Geometry::resolve(
            self.options.align,
            self.options.rotate,
            canvas.width(),
            &self.printer,
        );

        self.ensure_init()?;
        self.emit_canvas(&canvas, &geometry)?;
        Ok(stats)
    }

    /// Emit the trailing frames (cut, when requested), flush the sink and
    /// return it. On a job with no images this still emits the init frame,
    /// matching what the device expects from an empty run.
    pub fn finish(mut self) -> Result<W, TintaError> {
        self.ensure_init()?;
        if self.options.cut {
            self.sink.write_all(&commands::cut())?;
        }
        self.sink.flush()?;
        Ok(self.sink)
    }

    /// Write the init frame exactly once per job.
    fn ensure_init(&mut self) -> Result<(), TintaError> {
        if !self.init_sent {
            self.sink.write_all(&commands::init())?;
            self.init_sent = true;
        }
        Ok(())
    }

    /// Serialize one packed canvas as (margin?, store, flush) chunk triples.
    fn emit_canvas(&mut self, canvas: &BinaryCanvas, geometry: &Geometry) -> Result<(), TintaError> {
        let mut row = 0u32;
        while row < canvas.height() {
            let k = (canvas.height() - row).min(self.printer.max_chunk_rows as u32);

            if geometry.offset != 0 {
                self.sink.write_all(&commands::left_margin(geometry.offset))?;
            }
            self.sink
                .write_all(&raster::store(canvas.width(), k as u16, canvas.rows(row, k)))?;
            self.sink.write_all(&raster::flush())?;
            // Keep the device fed chunk by chunk on streaming sinks
            self.sink.flush()?;

            row += k;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// An all-black opaque RGBA buffer
    fn black_rgba(width: u32, height: u32) -> Vec<u8> {
        let mut pixels = vec![0u8; (width * height * 4) as usize];
        for px in pixels.chunks_exact_mut(4) {
            px[3] = 0xFF;
        }
        pixels
    }

    fn encode(pixels: &[u8], width: u32, height: u32, options: JobOptions) -> Vec<u8> {
        let image = RawImage::new(width, height, pixels).unwrap();
        let mut encoder = JobEncoder::new(Vec::new(), PrinterConfig::TM_T70, options);
        encoder.print_image(&image).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_solid_black_single_chunk() {
        let pixels = black_rgba(16, 8);
        let bytes = encode(&pixels, 16, 8, JobOptions::default());

        let mut expected = vec![0x1B, 0x40]; // init
        // store: p = 10 + 8*(16/8) = 26, width 16, rows 8
        expected.extend([0x1D, 0x38, 0x4C, 26, 0, 0, 0]);
        expected.extend([0x30, 0x70, 0x30, 0x01, 0x01, 0x31]);
        expected.extend([16, 0, 8, 0]);
        expected.extend([0xFF; 16]); // every dot marked
        expected.extend([0x1D, 0x28, 0x4C, 0x02, 0x00, 0x30, 0x32]); // flush

        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_rotate_unset_aligns_right() {
        let pixels = black_rgba(16, 8);
        let options = JobOptions {
            rotate: true,
            ..JobOptions::default()
        };
        let bytes = encode(&pixels, 16, 8, options);

        // init, then margin frame carrying (512 - 16) = 496 = 0x01F0
        assert_eq!(&bytes[..2], &[0x1B, 0x40]);
        assert_eq!(&bytes[2..6], &[0x1D, 0x4C, 0xF0, 0x01]);
        // store follows
        assert_eq!(&bytes[6..9], &[0x1D, 0x38, 0x4C]);
    }

    #[test]
    fn test_cut_frame_trails_the_job() {
        let pixels = black_rgba(8, 1);
        let options = JobOptions {
            cut: true,
            ..JobOptions::default()
        };
        let bytes = encode(&pixels, 8, 1, options);
        assert_eq!(&bytes[bytes.len() - 4..], &[0x1D, 0x56, 0x41, 0x40]);
    }

    #[test]
    fn test_too_wide_image_writes_nothing() {
        let pixels = black_rgba(520, 1);
        let image = RawImage::new(520, 1, &pixels).unwrap();
        let mut encoder =
            JobEncoder::new(Vec::new(), PrinterConfig::TM_T70, JobOptions::default());

        let err = encoder.print_image(&image).unwrap_err();
        assert!(matches!(
            err,
            TintaError::ImageTooWide { width: 520, max: 512 }
        ));
        let bytes = encoder.finish().unwrap();
        assert_eq!(bytes, vec![0x1B, 0x40], "only the job init frame");
    }

    #[test]
    fn test_empty_job_still_inits() {
        let encoder = JobEncoder::new(Vec::new(), PrinterConfig::TM_T70, JobOptions::default());
        let bytes = encoder.finish().unwrap();
        assert_eq!(bytes, vec![0x1B, 0x40]);
    }

    #[test]
    fn test_two_images_one_init() {
        let pixels = black_rgba(8, 2);
        let image = RawImage::new(8, 2, &pixels).unwrap();
        let mut encoder =
            JobEncoder::new(Vec::new(), PrinterConfig::TM_T70, JobOptions::default());
        encoder.print_image(&image).unwrap();
        encoder.print_image(&image).unwrap();
        let bytes = encoder.finish().unwrap();

        let inits = bytes
            .windows(2)
            .filter(|w| *w == [0x1B, 0x40])
            .count();
        assert_eq!(inits, 1);
        // Two store frames
        let stores = bytes
            .windows(3)
            .filter(|w| *w == [0x1D, 0x38, 0x4C])
            .count();
        assert_eq!(stores, 2);
    }

    #[test]
    fn test_photo_mode_uses_remapped_threshold() {
        // 12 black + 4 white pixels. Equalization lifts black to
        // 255*12/16 = 191 and remaps the threshold to the same 191; the
        // dark region then dithers instead of vanishing. Reusing the
        // configured 0x80 against the equalized values would mark nothing.
        let mut pixels = vec![0u8; 8 * 2 * 4];
        for (i, px) in pixels.chunks_exact_mut(4).enumerate() {
            let c = if i < 12 { 0 } else { 255 };
            px.copy_from_slice(&[c, c, c, 0xFF]);
        }
        let bytes = encode(&pixels, 8, 2, JobOptions {
            photo: true,
            ..JobOptions::default()
        });

        // store payload: 1 byte per row, 2 rows, directly before the flush
        let payload = &bytes[bytes.len() - 7 - 2..bytes.len() - 7];
        assert_eq!(payload, &[0x92, 0x20]);
    }

    #[test]
    fn test_stats_distinct_levels() {
        let pixels = black_rgba(8, 1);
        let image = RawImage::new(8, 1, &pixels).unwrap();
        let mut encoder =
            JobEncoder::new(Vec::new(), PrinterConfig::TM_T70, JobOptions::default());
        let stats = encoder.print_image(&image).unwrap();
        assert_eq!(stats.distinct_levels, 1);
        assert!(!stats.suggests_photo_mode());
    }
}
