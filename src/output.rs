//! CLI output formatting.
//!
//! The pipeline returns two ordered result lists and never prints; all
//! human-readable formatting lives here. Each report has a `format_*`
//! function (returns `Vec<String>`) for testability and a `print_*` wrapper
//! that writes to stdout. Format functions are pure — no I/O, no side
//! effects.
//!
//! # Output Format
//!
//! ```text
//! Processing: photo.jpg (1920x1080)
//! Output directory: ./resized
//!
//! ✓ Created: photo_960.jpg (960x540, 123 KB)
//!
//! ⚠ Skipped 3840px: original is only 1920px wide
//!
//! Successfully created 1 image(s) from photo.jpg
//! ```
//!
//! `--json` replaces all of the above with one serde-serialized report for
//! pipeline consumers.

use crate::imaging::{OutputVariant, SkippedTarget, VariantReport};
use serde::Serialize;
use std::path::Path;

/// Machine-readable run report, emitted by `--json`.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub source: &'a str,
    pub original_width: u32,
    pub original_height: u32,
    pub created: &'a [OutputVariant],
    pub skipped: &'a [SkippedTarget],
}

/// Render a byte count as whole kilobytes.
fn format_kb(bytes: u64) -> String {
    format!("{:.0} KB", bytes as f64 / 1024.0)
}

/// One line per created variant: name, dimensions, encoded size.
pub fn format_created_line(variant: &OutputVariant) -> String {
    format!(
        "✓ Created: {} ({}x{}, {})",
        variant.file_name,
        variant.width,
        variant.height,
        format_kb(variant.encoded_bytes)
    )
}

/// One line per skipped target: size and the limiting original dimension.
pub fn format_skipped_line(skip: &SkippedTarget) -> String {
    format!("⚠ Skipped {}px: {}", skip.target_size, skip.reason)
}

/// Header lines printed before processing starts.
pub fn format_processing_header(
    source_file: &str,
    original: (u32, u32),
    output_dir: &Path,
) -> Vec<String> {
    vec![
        format!(
            "Processing: {} ({}x{})",
            source_file, original.0, original.1
        ),
        format!("Output directory: {}", output_dir.display()),
        String::new(),
    ]
}

/// Full result block: created lines, skip warnings, and the batch summary.
///
/// A zero-created run gets a warning summary but is still a success — the
/// caller must not turn it into an error exit.
pub fn format_resize_report(source_file: &str, report: &VariantReport) -> Vec<String> {
    let mut lines = Vec::new();

    for variant in &report.created {
        lines.push(format_created_line(variant));
    }

    if !report.skipped.is_empty() {
        if !report.created.is_empty() {
            lines.push(String::new());
        }
        for skip in &report.skipped {
            lines.push(format_skipped_line(skip));
        }
    }

    lines.push(String::new());
    if report.created.is_empty() {
        lines.push("Warning: No images created (all sizes would require upscaling)".to_string());
    } else {
        lines.push(format!(
            "Successfully created {} image(s) from {}",
            report.created.len(),
            source_file
        ));
    }
    lines
}

pub fn print_processing_header(source_file: &str, original: (u32, u32), output_dir: &Path) {
    for line in format_processing_header(source_file, original, output_dir) {
        println!("{line}");
    }
}

pub fn print_resize_report(source_file: &str, report: &VariantReport) {
    for line in format_resize_report(source_file, report) {
        println!("{line}");
    }
}

/// Serialize the JSON report.
pub fn format_json_report(
    source_file: &str,
    original: (u32, u32),
    report: &VariantReport,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        source: source_file,
        original_width: original.0,
        original_height: original.1,
        created: &report.created,
        skipped: &report.skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(target: u32, width: u32, height: u32, bytes: u64) -> OutputVariant {
        OutputVariant {
            target_size: target,
            width,
            height,
            file_name: format!("photo_{target}.jpg"),
            encoded_bytes: bytes,
        }
    }

    fn skip(target: u32, reason: &str) -> SkippedTarget {
        SkippedTarget {
            target_size: target,
            reason: reason.to_string(),
        }
    }

    #[test]
    fn created_line_shows_name_dimensions_and_kb() {
        let line = format_created_line(&variant(960, 960, 540, 125_952));
        assert_eq!(line, "✓ Created: photo_960.jpg (960x540, 123 KB)");
    }

    #[test]
    fn skipped_line_shows_target_and_reason() {
        let line = format_skipped_line(&skip(3840, "original is only 1920px wide"));
        assert_eq!(line, "⚠ Skipped 3840px: original is only 1920px wide");
    }

    #[test]
    fn header_names_source_dimensions_and_directory() {
        let lines = format_processing_header("photo.jpg", (1920, 1080), Path::new("./resized"));
        assert_eq!(lines[0], "Processing: photo.jpg (1920x1080)");
        assert_eq!(lines[1], "Output directory: ./resized");
        assert_eq!(lines[2], "");
    }

    #[test]
    fn report_with_both_partitions() {
        let report = VariantReport {
            created: vec![variant(960, 960, 540, 102_400)],
            skipped: vec![skip(3840, "original is only 1920px wide")],
        };
        let lines = format_resize_report("photo.jpg", &report);
        assert_eq!(
            lines,
            vec![
                "✓ Created: photo_960.jpg (960x540, 100 KB)".to_string(),
                String::new(),
                "⚠ Skipped 3840px: original is only 1920px wide".to_string(),
                String::new(),
                "Successfully created 1 image(s) from photo.jpg".to_string(),
            ]
        );
    }

    #[test]
    fn zero_created_report_warns_without_erroring() {
        let report = VariantReport {
            created: vec![],
            skipped: vec![skip(800, "original is only 500px wide")],
        };
        let lines = format_resize_report("small.jpg", &report);
        assert_eq!(
            lines.last().unwrap(),
            "Warning: No images created (all sizes would require upscaling)"
        );
    }

    #[test]
    fn json_report_round_trips_fields() {
        let report = VariantReport {
            created: vec![variant(100, 100, 75, 2048)],
            skipped: vec![skip(900, "original is only 400px wide")],
        };
        let json = format_json_report("photo.jpg", (400, 300), &report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["source"], "photo.jpg");
        assert_eq!(value["original_width"], 400);
        assert_eq!(value["original_height"], 300);
        assert_eq!(value["created"][0]["file_name"], "photo_100.jpg");
        assert_eq!(value["created"][0]["encoded_bytes"], 2048);
        assert_eq!(value["skipped"][0]["target_size"], 900);
    }
}
