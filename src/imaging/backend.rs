//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the three primitives the pipeline
//! delegates: decode, resample, and encode. The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, statically
//! linked. Orchestration in [`operations`](super::operations) is
//! backend-agnostic so it can be tested against a recording mock.

use super::params::Quality;
use image::{DynamicImage, RgbImage};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
}

/// Trait for image processing backends.
///
/// `Sync` so a backend reference can be shared across rayon worker threads.
pub trait ImageBackend: Sync {
    /// Decode a source file into a pixel buffer.
    fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError>;

    /// Downsample to exact output dimensions with a high-quality filter.
    fn resample(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage;

    /// Encode a normalized buffer as JPEG at `quality`, writing it to
    /// `output` and returning the encoded byte size.
    fn encode(
        &self,
        image: &RgbImage,
        output: &Path,
        quality: Quality,
    ) -> Result<u64, BackendError>;
}
