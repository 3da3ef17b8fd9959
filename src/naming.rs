//! Centralized filename handling for source and variant files.
//!
//! Every variant of one source follows the same naming pattern: the source
//! base name, an underscore, the target size, and the source's original
//! extension — `photo.jpg` at target 960 becomes `photo_960.jpg`. The name
//! is injective in target size for a fixed source, so parallel writers never
//! collide, and deterministic across runs, so re-running overwrites instead
//! of accumulating files.

use std::path::Path;

/// A source filename split into base name and extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceName {
    /// Filename without extension (`photo` from `photo.jpg`).
    pub stem: String,
    /// Extension without the dot, original case preserved (`JPG` stays `JPG`).
    pub extension: String,
}

impl SourceName {
    /// Split a source path into stem and extension.
    ///
    /// Returns `None` when either part is missing or not valid UTF-8 —
    /// such paths cannot name JPEG sources.
    pub fn from_path(path: &Path) -> Option<Self> {
        let stem = path.file_stem()?.to_str()?;
        let extension = path.extension()?.to_str()?;
        if stem.is_empty() {
            return None;
        }
        Some(Self {
            stem: stem.to_string(),
            extension: extension.to_string(),
        })
    }

    /// The original filename, `{stem}.{extension}`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.stem, self.extension)
    }

    /// Destination name for one target size: `{stem}_{target}.{extension}`.
    pub fn variant_file_name(&self, target: u32) -> String {
        format!("{}_{}.{}", self.stem, target, self.extension)
    }
}

/// Whether a path carries a JPEG-family extension (`jpg`/`jpeg`, any case).
pub fn is_jpeg_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("jpg") || e.eq_ignore_ascii_case("jpeg"))
}
