//! Pure Rust image processing backend — zero external dependencies.
//!
//! Everything is statically linked into the binary.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG) | `image` crate (pure Rust decoder) |
//! | Resample | `DynamicImage::resize_exact` with `Lanczos3` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` at caller quality |
//!
//! Lanczos3 is a deliberate choice: it is a windowed-sinc filter with the
//! anti-aliasing behavior downscaling needs. Nearest-neighbor and bilinear
//! produce visibly worse thumbnails and are not offered.

use super::backend::{BackendError, ImageBackend};
use super::params::Quality;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageReader, RgbImage};
use std::io::Cursor;
use std::path::Path;

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageBackend for RustBackend {
    fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError> {
        ImageReader::open(path)
            .map_err(BackendError::Io)?
            .decode()
            .map_err(|e| BackendError::Decode(format!("{}: {}", path.display(), e)))
    }

    fn resample(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        // Dimensions were computed by the caller; resize_exact must not
        // second-guess them with its own aspect fitting.
        image.resize_exact(width, height, FilterType::Lanczos3)
    }

    fn encode(
        &self,
        image: &RgbImage,
        output: &Path,
        quality: Quality,
    ) -> Result<u64, BackendError> {
        // Encode in memory first so the byte size is known and a failed
        // encode never leaves a truncated file behind.
        let mut buffer = Cursor::new(Vec::new());
        JpegEncoder::new_with_quality(&mut buffer, quality.value() as u8)
            .write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| BackendError::Encode(format!("{}: {}", output.display(), e)))?;

        let bytes = buffer.into_inner();
        std::fs::write(output, &bytes).map_err(BackendError::Io)?;
        Ok(bytes.len() as u64)
    }
}
