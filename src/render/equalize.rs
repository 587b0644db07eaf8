//! # Histogram Equalization
//!
//! Photo-mode tone mapping: stretches the lightness distribution of a
//! continuous-tone image across the full [0, 255] range so the dithering
//! stage has mid-tones to work with.
//!
//! ## Algorithm
//!
//! The image histogram is prefix-summed into a cumulative distribution,
//! then every pixel `v` is replaced with `255 * cdf[v] / pixel_count`
//! (truncating). The binarization threshold is remapped through the same
//! distribution so "50% gray" still means the middle of the *equalized*
//! tonal range.
//!
//! This is a global transform: the histogram must cover the whole image
//! before any pixel is rewritten, and the whole field must be equalized
//! before dithering starts.

use crate::render::LightnessField;
use crate::render::lightness::Histogram;

/// Equalize the field in place and remap the threshold.
///
/// Consumes the histogram (the prefix sum destroys the raw counts) and
/// returns the remapped threshold, which downstream dithering and
/// binarization must use in place of the configured one.
///
/// ## Example
///
/// ```
/// use tinta::render::RawImage;
/// use tinta::render::equalize::equalize;
/// use tinta::render::lightness::reduce;
///
/// // A flat dark-gray image equalizes to full white (all mass at one
/// // level), and the threshold follows the distribution upward
/// let pixels: Vec<u8> = [40u8, 40, 40, 255].repeat(4);
/// let image = RawImage::new(2, 2, &pixels).unwrap();
/// let (mut field, histogram) = reduce(&image).unwrap();
/// let remapped = equalize(&mut field, histogram, 0x80);
/// assert_eq!(remapped, 255);
/// ```
pub fn equalize(field: &mut LightnessField, histogram: Histogram, threshold: u8) -> u8 {
    let cdf = histogram.into_cdf();
    for v in field.data.iter_mut() {
        *v = cdf.remap(*v);
    }
    cdf.remap(threshold)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::lightness::Histogram;

    fn field_of(width: u32, height: u32, data: Vec<u8>) -> (LightnessField, Histogram) {
        let mut histogram = Histogram::new();
        for &v in &data {
            histogram.record(v);
        }
        (LightnessField::new(width, height, data), histogram)
    }

    #[test]
    fn test_two_level_image_stretches_to_full_range() {
        // Half the pixels at 100, half at 150 → equalized to 127 and 255
        let (mut field, histogram) = field_of(4, 2, vec![100, 100, 100, 100, 150, 150, 150, 150]);
        equalize(&mut field, histogram, 0x80);

        assert_eq!(&field.data[..4], &[127, 127, 127, 127]);
        assert_eq!(&field.data[4..], &[255, 255, 255, 255]);
    }

    #[test]
    fn test_threshold_remaps_with_the_image() {
        let (mut field, histogram) = field_of(4, 2, vec![100, 100, 100, 100, 150, 150, 150, 150]);
        let remapped = equalize(&mut field, histogram, 0x80);

        // cdf[128] = 4 of 8 → 255*4/8 = 127: the threshold lands exactly on
        // the equalized dark level, keeping it on the marked side.
        assert_eq!(remapped, 127);
    }

    #[test]
    fn test_uniform_image_goes_white() {
        // All mass in one bucket: cdf[v] = total for every v >= level
        let (mut field, histogram) = field_of(2, 2, vec![42; 4]);
        equalize(&mut field, histogram, 0x80);
        assert_eq!(field.data, vec![255; 4]);
    }

    #[test]
    fn test_equalized_values_preserve_order() {
        let (mut field, histogram) = field_of(4, 1, vec![10, 20, 30, 40]);
        equalize(&mut field, histogram, 0x80);
        assert!(field.data.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*field.data.last().unwrap(), 255);
    }
}
