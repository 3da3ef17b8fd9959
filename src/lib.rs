//! # imageset
//!
//! Command-line tool that derives responsive JPEG size variants from a
//! single source image. Given one JPEG and a list of target widths (or
//! heights), it produces one downsampled, quality-controlled JPEG per
//! achievable target — the set of resolutions a responsive `srcset` needs.
//!
//! # Architecture
//!
//! The core is a pure pipeline with presentation pushed to the edges:
//!
//! ```text
//! CLI (main.rs)   validate args, decode input, create output dir
//!      │
//! imaging         resolve dimensions → resample → normalize → encode,
//!      │          one pass per target, partitioned into created/skipped
//! output          format the two result lists for humans (or --json)
//! ```
//!
//! The pipeline never prints and never exits; it returns two ordered lists
//! (created variants and skipped targets) and the CLI layer alone decides
//! messaging and exit codes. That keeps every stage a function from inputs
//! to values, testable without a terminal.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Dimension math, pixel normalization, resample + encode via the backend trait |
//! | [`naming`] | `{stem}_{size}.{ext}` destination-name convention |
//! | [`output`] | CLI output formatting — pure `format_*` functions plus print wrappers |
//!
//! # Design Decisions
//!
//! ## Never Upscale
//!
//! A target larger than the source along the constrained axis is skipped
//! with a stated reason, not stretched. Upscaled assets cost bytes without
//! adding detail; the report makes every skip visible so the caller knows
//! exactly which breakpoints the source cannot serve.
//!
//! ## Lanczos3 Resampling
//!
//! Downscaling uses `image`'s Lanczos3 (windowed-sinc) filter. Bilinear and
//! nearest-neighbor are cheaper but alias badly on fine detail.
//!
//! ## White-Flatten Normalization
//!
//! JPEG has no alpha channel, so transparency is composited onto an opaque
//! white background before encoding, and every buffer is brought to 8-bit
//! RGB. Re-encoding from the normalized buffer is also what strips embedded
//! EXIF metadata — output files carry none.
//!
//! ## Pure-Rust Imaging
//!
//! Decode, resample, and encode all come from the `image` crate — no
//! ImageMagick, no libvips, no system dependencies. The binary is fully
//! self-contained.

pub mod imaging;
pub mod naming;
pub mod output;
