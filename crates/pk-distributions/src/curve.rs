//! Density and cumulative curves for plotting.

use crate::distribution::{Distribution, Support};
use pk_core::{ensure, EngineConfig, Real, Result, Size};

/// Which function a curve traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    /// pmf (discrete) or pdf (continuous).
    Density,
    /// cdf.
    Cumulative,
}

/// Evaluate `kind` across `support`.
///
/// Discrete supports are evaluated at every integer and `points` is
/// ignored. Continuous supports are evaluated at `points` evenly spaced
/// positions, endpoints included; the bounds must be finite and `points`
/// at least 2.
pub fn curve_over(
    dist: &dyn Distribution,
    kind: CurveKind,
    support: Support,
    points: Size,
) -> Result<Vec<(Real, Real)>> {
    let eval = |x: Real| match kind {
        CurveKind::Density => dist.density(x),
        CurveKind::Cumulative => dist.cdf(x),
    };
    match support {
        Support::Discrete { .. } => Ok(support.integers().into_iter().map(|k| (k, eval(k))).collect()),
        Support::Continuous { low, high } => {
            ensure!(points >= 2, "a curve needs at least 2 points, got {points}");
            ensure!(
                low.is_finite() && high.is_finite(),
                "{} support [{low}, {high}] is not finite",
                dist.name()
            );
            let step = (high - low) / (points - 1) as Real;
            Ok((0..points)
                .map(|i| {
                    let x = if i == points - 1 { high } else { low + i as Real * step };
                    (x, eval(x))
                })
                .collect())
        }
    }
}

/// Evaluate `kind` across the distribution's display support.
pub fn curve(dist: &dyn Distribution, kind: CurveKind, points: Size) -> Result<Vec<(Real, Real)>> {
    curve_over(dist, kind, dist.display_support(), points)
}

/// Evaluate `kind` with the resolution and support coverage of `config`.
pub fn curve_with(dist: &dyn Distribution, kind: CurveKind, config: &EngineConfig) -> Result<Vec<(Real, Real)>> {
    config.validate()?;
    curve_over(dist, kind, dist.support(config.support_coverage), config.curve_points)
}
