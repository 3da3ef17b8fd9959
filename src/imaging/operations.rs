//! High-level variant generation.
//!
//! Combines the pure dimension calculations with backend execution: for each
//! requested target size the source is resampled, normalized to opaque RGB,
//! and encoded as JPEG into the output directory. The result is a report
//! with one outcome per requested target — created or skipped — in input
//! order. This function never prints and never terminates the process; exit
//! codes and user messaging belong to the CLI layer.

use super::backend::{BackendError, ImageBackend};
use super::calculations::{ScaleAxis, TargetFit, plan_targets};
use super::normalize::flatten_to_rgb;
use super::params::Quality;
use crate::naming::SourceName;
use image::DynamicImage;
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    /// A requested size was zero. This is a malformed request, rejected
    /// before any target is processed.
    #[error("target sizes must be positive integers")]
    InvalidTargetSize,
    /// Resample/encode/write failed for one target; the batch is aborted
    /// rather than silently continuing with partial output.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// What to generate: target sizes, the axis they constrain, and the
/// encoding quality.
#[derive(Debug, Clone)]
pub struct VariantConfig {
    pub targets: Vec<u32>,
    pub axis: ScaleAxis,
    pub quality: Quality,
}

/// One successfully created variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputVariant {
    /// The requested size, for traceability.
    pub target_size: u32,
    pub width: u32,
    pub height: u32,
    pub file_name: String,
    pub encoded_bytes: u64,
}

/// One target that would require upscaling, with the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedTarget {
    pub target_size: u32,
    pub reason: String,
}

/// The pipeline's result: both partitions, each in input order.
///
/// `created.len() + skipped.len()` always equals the number of requested
/// targets. An all-skipped run is a valid zero-created outcome, not an
/// error.
#[derive(Debug, Default, Serialize)]
pub struct VariantReport {
    pub created: Vec<OutputVariant>,
    pub skipped: Vec<SkippedTarget>,
}

enum Outcome {
    Created(OutputVariant),
    Skipped(SkippedTarget),
}

/// Generate one resized JPEG per feasible target size.
///
/// Targets are processed independently — rayon fans the resample + encode
/// work out across cores over the shared read-only source buffer, and the
/// order-preserving collect restores input order before the report is
/// assembled. Skipped targets never abort the batch; a backend failure
/// aborts the whole run.
pub fn create_size_variants(
    backend: &impl ImageBackend,
    source: &DynamicImage,
    output_dir: &Path,
    name: &SourceName,
    config: &VariantConfig,
) -> Result<VariantReport, PipelineError> {
    if config.targets.contains(&0) {
        return Err(PipelineError::InvalidTargetSize);
    }

    let original = (source.width(), source.height());
    let plan = plan_targets(&config.targets, original, config.axis);

    let outcomes: Vec<Outcome> = plan
        .par_iter()
        .map(|planned| match planned.fit {
            TargetFit::ExceedsOriginal { limit } => Ok(Outcome::Skipped(SkippedTarget {
                target_size: planned.target,
                reason: config.axis.describe_limit(limit),
            })),
            TargetFit::Fits { width, height } => {
                let resampled = backend.resample(source, width, height);
                let normalized = flatten_to_rgb(resampled);
                let file_name = name.variant_file_name(planned.target);
                let encoded_bytes =
                    backend.encode(&normalized, &output_dir.join(&file_name), config.quality)?;
                Ok(Outcome::Created(OutputVariant {
                    target_size: planned.target,
                    width,
                    height,
                    file_name,
                    encoded_bytes,
                }))
            }
        })
        .collect::<Result<_, BackendError>>()?;

    let mut report = VariantReport::default();
    for outcome in outcomes {
        match outcome {
            Outcome::Created(variant) => report.created.push(variant),
            Outcome::Skipped(skip) => report.skipped.push(skip),
        }
    }
    Ok(report)
}
