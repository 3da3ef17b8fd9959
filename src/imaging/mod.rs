//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode (JPEG)** | `image::ImageReader` |
//! | **Resample** | Lanczos3 via `resize_exact` |
//! | **Normalize** | white-flatten to opaque RGB8 |
//! | **Encode → JPEG** | `JpegEncoder` at caller quality |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Normalize**: Pixel-mode flattening for the alpha-free output format
//! - **Parameters**: The [`Quality`] contract for lossy encoding
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: Per-target orchestration producing a [`VariantReport`]

pub mod backend;
mod calculations;
mod normalize;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use calculations::{ScaleAxis, TargetFit, resolve_dimensions};
pub use normalize::flatten_to_rgb;
pub use operations::{
    OutputVariant, PipelineError, SkippedTarget, VariantConfig, VariantReport,
    create_size_variants,
};
pub use params::{Quality, QualityOutOfRange};
pub use rust_backend::RustBackend;
