//! One-sample z-test: the three equivalent decision rules.
//!
//! The observed statistic `x̄` is standardized as
//! `z = (x̄ − null_value) / standard_error`. With the defaults
//! (`null_value = 0`, `standard_error = 1`) the statistic is its own z-score.

use crate::kit::{critical_value, p_value, CriticalValue, RejectionRegion};
use crate::tail::{Method, Tail};
use pk_core::{ensure, Probability, Real, Result};

/// Inputs of a z-test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestParameters {
    /// Direction of the alternative hypothesis.
    pub tail: Tail,
    /// Significance level, in `(0, 1)`.
    pub alpha: Probability,
    /// Observed sample statistic `x̄`.
    pub statistic: Real,
    /// Rule whose decision is reported as the test result.
    pub method: Method,
    /// Value of the parameter under the null hypothesis.
    pub null_value: Real,
    /// Standard error of the statistic, strictly positive.
    pub standard_error: Real,
}

impl TestParameters {
    /// Parameters with `null_value = 0` and `standard_error = 1`.
    ///
    /// Fails with `Precondition` unless `0 < alpha < 1` and `statistic` is
    /// finite.
    pub fn new(tail: Tail, alpha: Probability, statistic: Real, method: Method) -> Result<Self> {
        let params = Self {
            tail,
            alpha,
            statistic,
            method,
            null_value: 0.0,
            standard_error: 1.0,
        };
        params.validate()?;
        Ok(params)
    }

    /// Replace the null value.
    pub fn with_null_value(mut self, null_value: Real) -> Self {
        self.null_value = null_value;
        self
    }

    /// Replace the standard error.
    pub fn with_standard_error(mut self, standard_error: Real) -> Self {
        self.standard_error = standard_error;
        self
    }

    /// Check the significance level, statistic, null value and standard
    /// error.
    pub fn validate(&self) -> Result<()> {
        let checked = self.check();
        if let Err(e) = &checked {
            tracing::debug!(error = %e, "rejected test parameters");
        }
        checked
    }

    fn check(&self) -> Result<()> {
        ensure!(
            self.alpha > 0.0 && self.alpha < 1.0,
            "significance level must lie in (0, 1), got {}",
            self.alpha
        );
        ensure!(
            self.statistic.is_finite(),
            "statistic must be finite, got {}",
            self.statistic
        );
        ensure!(
            self.null_value.is_finite(),
            "null value must be finite, got {}",
            self.null_value
        );
        ensure!(
            self.standard_error > 0.0 && self.standard_error.is_finite(),
            "standard error must be positive, got {}",
            self.standard_error
        );
        Ok(())
    }

    /// The standardized statistic.
    pub fn z(&self) -> Real {
        (self.statistic - self.null_value) / self.standard_error
    }
}

/// Confidence interval for the parameter at level `1 − α`.
///
/// One-tailed tests give a half-infinite interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    /// Lower bound, `−∞` for a left-tailed test.
    pub lower: Real,
    /// Upper bound, `+∞` for a right-tailed test.
    pub upper: Real,
    /// Confidence level `1 − α`.
    pub level: Probability,
}

impl ConfidenceInterval {
    /// Whether `value` lies outside the open interval `(lower, upper)`.
    ///
    /// Endpoints count as excluded, so this agrees with
    /// [`RejectionRegion::contains`] on the boundary.
    pub fn excludes(&self, value: Real) -> bool {
        value <= self.lower || value >= self.upper
    }
}

/// Reject decision of each method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decisions {
    /// `z` lies in the rejection region.
    pub critical_value: bool,
    /// `p ≤ α`.
    pub p_value: bool,
    /// The confidence interval excludes the null value.
    pub confidence_interval: bool,
}

/// Everything a z-test computes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestOutcome {
    /// The parameters the test was run with.
    pub params: TestParameters,
    /// Standardized statistic.
    pub z: Real,
    /// Critical value(s) at `α`.
    pub critical: CriticalValue,
    /// Rejection region for `z`.
    pub region: RejectionRegion,
    /// P-value of `z`.
    pub p_value: Probability,
    /// Confidence interval around the statistic.
    pub interval: ConfidenceInterval,
    /// Decision of every method.
    pub decisions: Decisions,
}

impl TestOutcome {
    /// Decision of the given method.
    pub fn rejects(&self, method: Method) -> bool {
        match method {
            Method::CriticalValue => self.decisions.critical_value,
            Method::PValue => self.decisions.p_value,
            Method::ConfidenceInterval => self.decisions.confidence_interval,
        }
    }

    /// Decision of the selected method.
    pub fn reject(&self) -> bool {
        self.rejects(self.params.method)
    }

    /// Whether the three methods reach the same decision.
    pub fn methods_agree(&self) -> bool {
        let d = self.decisions;
        d.critical_value == d.p_value && d.p_value == d.confidence_interval
    }
}

/// One-sample z-test.
///
/// # Example
/// ```
/// use pk_hypothesis::{Method, Tail, TestParameters, ZTest};
///
/// let params = TestParameters::new(Tail::Left, 0.05, -2.0, Method::PValue).unwrap();
/// let outcome = ZTest::new(params).unwrap().evaluate();
/// assert!(outcome.reject());
/// assert!(outcome.methods_agree());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZTest {
    params: TestParameters,
}

impl ZTest {
    /// A test over validated parameters.
    pub fn new(params: TestParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// The test parameters.
    pub fn params(&self) -> &TestParameters {
        &self.params
    }

    /// Run all three decision rules.
    pub fn evaluate(&self) -> TestOutcome {
        let params = self.params;
        let z = params.z();
        let critical = critical_value(params.alpha, params.tail);
        let region = RejectionRegion::new(params.alpha, params.tail);
        let p = p_value(z, params.tail);

        let margin = critical.margin() * params.standard_error;
        let (lower, upper) = match params.tail {
            Tail::Left => (f64::NEG_INFINITY, params.statistic + margin),
            Tail::Right => (params.statistic - margin, f64::INFINITY),
            Tail::Two => (params.statistic - margin, params.statistic + margin),
        };
        let interval = ConfidenceInterval {
            lower,
            upper,
            level: 1.0 - params.alpha,
        };

        let decisions = Decisions {
            critical_value: region.contains(z),
            p_value: p <= params.alpha,
            confidence_interval: interval.excludes(params.null_value),
        };
        let outcome = TestOutcome {
            params,
            z,
            critical,
            region,
            p_value: p,
            interval,
            decisions,
        };
        tracing::debug!(
            tail = %params.tail,
            alpha = params.alpha,
            statistic = params.statistic,
            z,
            p_value = p,
            method = %params.method,
            reject = outcome.reject(),
            "z-test evaluated"
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pk_core::Error;

    fn run(tail: Tail, alpha: Real, statistic: Real) -> TestOutcome {
        let params = TestParameters::new(tail, alpha, statistic, Method::CriticalValue).unwrap();
        ZTest::new(params).unwrap().evaluate()
    }

    #[test]
    fn left_tail_rejects_under_every_method() {
        let outcome = run(Tail::Left, 0.05, -2.0);
        assert_abs_diff_eq!(outcome.p_value, 0.022_75, epsilon = 1e-5);
        assert_abs_diff_eq!(outcome.interval.upper, -2.0 + 1.644_854, epsilon = 1e-6);
        assert_eq!(outcome.interval.lower, f64::NEG_INFINITY);
        assert_eq!(
            outcome.decisions,
            Decisions {
                critical_value: true,
                p_value: true,
                confidence_interval: true,
            }
        );
    }

    #[test]
    fn right_tail_fails_to_reject_a_small_statistic() {
        let outcome = run(Tail::Right, 0.05, 1.0);
        assert!(!outcome.reject());
        assert!(outcome.methods_agree());
        assert_eq!(outcome.interval.upper, f64::INFINITY);
    }

    #[test]
    fn two_tailed_interval_is_symmetric() {
        let outcome = run(Tail::Two, 0.05, 0.5);
        assert_abs_diff_eq!(outcome.interval.lower, 0.5 - 1.959_964, epsilon = 1e-6);
        assert_abs_diff_eq!(outcome.interval.upper, 0.5 + 1.959_964, epsilon = 1e-6);
        assert_abs_diff_eq!(outcome.interval.level, 0.95, epsilon = 1e-15);
        assert!(!outcome.reject() && outcome.methods_agree());
    }

    #[test]
    fn standard_error_and_null_value_scale_the_statistic() {
        let params = TestParameters::new(Tail::Two, 0.05, 104.0, Method::ConfidenceInterval)
            .unwrap()
            .with_null_value(100.0)
            .with_standard_error(2.0);
        let outcome = ZTest::new(params).unwrap().evaluate();
        assert_eq!(outcome.z, 2.0);
        assert_abs_diff_eq!(outcome.interval.lower, 104.0 - 2.0 * 1.959_964, epsilon = 1e-5);
        assert!(outcome.reject() && outcome.methods_agree());
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        for alpha in [0.0, 1.0, -0.1, f64::NAN] {
            assert!(matches!(
                TestParameters::new(Tail::Left, alpha, 0.0, Method::PValue),
                Err(Error::Precondition(_))
            ));
        }
        let params = TestParameters::new(Tail::Left, 0.05, 0.0, Method::PValue)
            .unwrap()
            .with_standard_error(0.0);
        assert!(ZTest::new(params).is_err());
    }
}
