//! Numerical integration.
//!
//! Only a fixed-grid composite trapezoid rule is provided. Its cost and
//! error are fully determined by the step count, which is what the legacy
//! cumulative-distribution contract relies on.

use pk_core::{ensure, Real, Result, Size};

/// A numerical integrator.
pub trait Integrator {
    /// Integrate `f` on `[a, b]`. Reversed bounds give the negated integral.
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real>;
}

/// Composite trapezoid rule on `steps` equal panels.
///
/// Exactly `steps + 1` evaluations of the integrand, no refinement loop.
///
/// # Example
/// ```
/// use pk_math::integrals::{FixedTrapezoidIntegral, Integrator};
///
/// let rule = FixedTrapezoidIntegral::new(1000);
/// let area = rule.integrate(|x| x * x, 0.0, 3.0).unwrap();
/// assert!((area - 9.0).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTrapezoidIntegral {
    steps: Size,
}

impl FixedTrapezoidIntegral {
    /// Create a rule with the given number of panels.
    pub fn new(steps: Size) -> Self {
        Self { steps }
    }

    /// Number of panels.
    pub fn steps(&self) -> Size {
        self.steps
    }
}

impl Integrator for FixedTrapezoidIntegral {
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real> {
        ensure!(self.steps >= 1, "trapezoid rule needs at least 1 panel");
        if a == b {
            return Ok(0.0);
        }
        let h = (b - a) / self.steps as Real;
        let interior: Real = (1..self.steps).map(|i| f(a + i as Real * h)).sum();
        Ok(h * (0.5 * (f(a) + f(b)) + interior))
    }
}
