//! Pure calculation functions for variant dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Which original dimension a target size constrains.
///
/// The orthogonal dimension is always derived so aspect ratio is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleAxis {
    Width,
    Height,
}

impl ScaleAxis {
    /// The original dimension the target size applies to.
    pub fn constrained(self, width: u32, height: u32) -> u32 {
        match self {
            ScaleAxis::Width => width,
            ScaleAxis::Height => height,
        }
    }

    /// The original dimension that gets derived.
    pub fn orthogonal(self, width: u32, height: u32) -> u32 {
        match self {
            ScaleAxis::Width => height,
            ScaleAxis::Height => width,
        }
    }

    /// Skip reason naming the limiting original dimension.
    ///
    /// ```text
    /// original is only 1920px wide
    /// original is only 1080px tall
    /// ```
    pub fn describe_limit(self, limit: u32) -> String {
        match self {
            ScaleAxis::Width => format!("original is only {limit}px wide"),
            ScaleAxis::Height => format!("original is only {limit}px tall"),
        }
    }
}

/// Outcome of resolving one target size against the original dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFit {
    /// Output dimensions for a feasible target.
    Fits { width: u32, height: u32 },
    /// The target exceeds the original along the constrained axis.
    /// `limit` is that original dimension.
    ExceedsOriginal { limit: u32 },
}

/// Resolve the output dimensions for a single target size.
///
/// A target larger than the constrained original dimension would require
/// upscaling and is rejected; a target equal to it reproduces the original
/// dimensions exactly. The orthogonal dimension is the exact integer floor
/// of `target * orthogonal / constrained`, clamped to at least 1 pixel so
/// extreme aspect ratios never produce a zero-height (or zero-width) output.
pub fn resolve_dimensions(target: u32, original: (u32, u32), axis: ScaleAxis) -> TargetFit {
    let (orig_w, orig_h) = original;
    let constrained = axis.constrained(orig_w, orig_h);

    if target > constrained {
        return TargetFit::ExceedsOriginal { limit: constrained };
    }

    let orthogonal = axis.orthogonal(orig_w, orig_h);
    // u64 keeps the product exact; the division is the floor.
    let derived =
        ((u64::from(target) * u64::from(orthogonal)) / u64::from(constrained)).max(1) as u32;

    match axis {
        ScaleAxis::Width => TargetFit::Fits {
            width: target,
            height: derived,
        },
        ScaleAxis::Height => TargetFit::Fits {
            width: derived,
            height: target,
        },
    }
}

/// One requested target together with its resolved outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedTarget {
    pub target: u32,
    pub fit: TargetFit,
}

/// Resolve every requested target in input order.
///
/// No target is dropped: every element of `targets` appears in the result,
/// either feasible or exceeding the original.
pub fn plan_targets(targets: &[u32], original: (u32, u32), axis: ScaleAxis) -> Vec<PlannedTarget> {
    targets
        .iter()
        .map(|&target| PlannedTarget {
            target,
            fit: resolve_dimensions(target, original, axis),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // resolve_dimensions tests
    // =========================================================================

    #[test]
    fn width_axis_derives_height() {
        // 1920x1080 at width 960 → 960x540
        assert_eq!(
            resolve_dimensions(960, (1920, 1080), ScaleAxis::Width),
            TargetFit::Fits {
                width: 960,
                height: 540
            }
        );
    }

    #[test]
    fn height_axis_derives_width() {
        // 800x600 at height 300 → 400x300
        assert_eq!(
            resolve_dimensions(300, (800, 600), ScaleAxis::Height),
            TargetFit::Fits {
                width: 400,
                height: 300
            }
        );
    }

    #[test]
    fn target_above_width_exceeds() {
        assert_eq!(
            resolve_dimensions(3840, (1920, 1080), ScaleAxis::Width),
            TargetFit::ExceedsOriginal { limit: 1920 }
        );
    }

    #[test]
    fn target_above_height_exceeds() {
        assert_eq!(
            resolve_dimensions(1200, (800, 600), ScaleAxis::Height),
            TargetFit::ExceedsOriginal { limit: 600 }
        );
    }

    #[test]
    fn target_equal_to_original_is_feasible() {
        // Equality reproduces the original dimensions; only true upscaling
        // is rejected.
        assert_eq!(
            resolve_dimensions(500, (500, 500), ScaleAxis::Width),
            TargetFit::Fits {
                width: 500,
                height: 500
            }
        );
    }

    #[test]
    fn derived_dimension_is_floored() {
        // 645 * 1080 / 1920 = 362.8125 → 362
        assert_eq!(
            resolve_dimensions(645, (1920, 1080), ScaleAxis::Width),
            TargetFit::Fits {
                width: 645,
                height: 362
            }
        );
    }

    #[test]
    fn derived_dimension_never_reaches_zero() {
        // 10 * 1 / 1000 floors to 0; output must stay at least 1px.
        assert_eq!(
            resolve_dimensions(10, (1000, 1), ScaleAxis::Width),
            TargetFit::Fits {
                width: 10,
                height: 1
            }
        );
    }

    #[test]
    fn aspect_ratio_within_one_pixel() {
        // Rounding error on the derived dimension stays below one pixel of
        // the true aspect-preserving value.
        let original = (3543, 2365);
        for target in [100, 999, 1772, 3543] {
            let TargetFit::Fits { width, height } =
                resolve_dimensions(target, original, ScaleAxis::Width)
            else {
                panic!("target {target} should be feasible");
            };
            let exact = f64::from(target) * f64::from(original.1) / f64::from(original.0);
            assert!((f64::from(height) - exact).abs() < 1.0);
            assert_eq!(width, target);
        }
    }

    // =========================================================================
    // plan_targets tests
    // =========================================================================

    #[test]
    fn plan_preserves_input_order_and_duplicates() {
        let plan = plan_targets(&[600, 300, 600], (1200, 900), ScaleAxis::Width);
        let targets: Vec<u32> = plan.iter().map(|p| p.target).collect();
        assert_eq!(targets, vec![600, 300, 600]);
        assert_eq!(plan[0].fit, plan[2].fit);
    }

    #[test]
    fn plan_keeps_every_target() {
        // One outcome per input size, feasible or not.
        let plan = plan_targets(&[3840, 960, 2000], (1920, 1080), ScaleAxis::Width);
        assert_eq!(plan.len(), 3);
        assert!(matches!(
            plan[0].fit,
            TargetFit::ExceedsOriginal { limit: 1920 }
        ));
        assert!(matches!(plan[1].fit, TargetFit::Fits { .. }));
        assert!(matches!(
            plan[2].fit,
            TargetFit::ExceedsOriginal { limit: 1920 }
        ));
    }

    #[test]
    fn plan_empty_targets_is_empty() {
        assert!(plan_targets(&[], (1000, 800), ScaleAxis::Width).is_empty());
    }

    // =========================================================================
    // ScaleAxis tests
    // =========================================================================

    #[test]
    fn axis_selects_dimensions() {
        assert_eq!(ScaleAxis::Width.constrained(1920, 1080), 1920);
        assert_eq!(ScaleAxis::Width.orthogonal(1920, 1080), 1080);
        assert_eq!(ScaleAxis::Height.constrained(1920, 1080), 1080);
        assert_eq!(ScaleAxis::Height.orthogonal(1920, 1080), 1920);
    }

    #[test]
    fn limit_reason_names_the_axis() {
        assert_eq!(
            ScaleAxis::Width.describe_limit(1920),
            "original is only 1920px wide"
        );
        assert_eq!(
            ScaleAxis::Height.describe_limit(1080),
            "original is only 1080px tall"
        );
    }
}
