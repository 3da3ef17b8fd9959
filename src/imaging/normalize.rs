//! Pixel-mode normalization for JPEG output.
//!
//! JPEG carries neither an alpha channel nor a palette, so every resampled
//! buffer is normalized to an opaque 8-bit RGB buffer before encoding.
//! Transparency is flattened onto a white background; palette-indexed
//! sources arrive here already expanded to RGBA by the decoder and take the
//! same compositing path. Re-encoding the normalized buffer is also the
//! point where embedded metadata (EXIF orientation, camera, location) is
//! dropped — the output carries none.

use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

/// Convert any decoded color representation into an opaque 3-channel buffer.
///
/// - Canonical RGB8 passes through untouched.
/// - Opaque non-canonical modes (grayscale, 16-bit, float) convert
///   losslessly down to RGB8.
/// - Alpha-carrying modes composite every pixel onto opaque white, using
///   the alpha channel as linear blend weight: fully transparent pixels
///   become white, fully opaque pixels keep their color.
///
/// The output always has the same pixel dimensions as the input.
pub fn flatten_to_rgb(image: DynamicImage) -> RgbImage {
    match image {
        DynamicImage::ImageRgb8(rgb) => rgb,
        opaque @ (DynamicImage::ImageLuma8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageRgb16(_)
        | DynamicImage::ImageRgb32F(_)) => opaque.into_rgb8(),
        alpha @ (DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageLumaA16(_)
        | DynamicImage::ImageRgba8(_)
        | DynamicImage::ImageRgba16(_)
        | DynamicImage::ImageRgba32F(_)) => composite_onto_white(&alpha.into_rgba8()),
        // DynamicImage is non_exhaustive; any future mode goes through the
        // alpha-safe path.
        other => composite_onto_white(&other.into_rgba8()),
    }
}

/// Composite an RGBA buffer onto an opaque white background.
fn composite_onto_white(rgba: &RgbaImage) -> RgbImage {
    let (width, height) = rgba.dimensions();
    let mut out = RgbImage::new(width, height);
    for (src, dst) in rgba.pixels().zip(out.pixels_mut()) {
        let Rgba([r, g, b, a]) = *src;
        *dst = Rgb([blend(r, a), blend(g, a), blend(b, a)]);
    }
    out
}

/// Linear blend of one channel against white, rounded to nearest.
fn blend(channel: u8, alpha: u8) -> u8 {
    let a = u32::from(alpha);
    ((u32::from(channel) * a + 255 * (255 - a) + 127) / 255) as u8
}
