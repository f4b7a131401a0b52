//! Parameter metadata and named parameter values.

use crate::registry::DistributionSpec;
use pk_core::{ensure, Error, Real, Result};
use pk_math::is_integer;

/// Declaration of one distribution parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    /// Parameter name, as used in formulas.
    pub name: &'static str,
    /// Human-readable meaning.
    pub description: &'static str,
    /// Closed range of sensible values; either end may be infinite.
    pub range: (Real, Real),
    /// Whether only integer values are meaningful.
    pub integer: bool,
    /// Value used when the caller supplies none.
    pub default: Real,
}

impl ParamSpec {
    /// Whether `value` lies in the declared range and respects integrality.
    pub fn admits(&self, value: Real) -> bool {
        let (low, high) = self.range;
        value >= low && value <= high && (!self.integer || is_integer(value))
    }
}

/// Values for a distribution's parameters, keyed by name and kept in the
/// distribution's declared order.
///
/// Nothing here forces values into their declared range: the math resolves
/// out-of-domain inputs to `0` or `NaN`. Call [`ParameterSet::validate`]
/// to check ranges explicitly.
///
/// # Example
/// ```
/// use pk_distributions::{get_distribution, ParameterSet};
///
/// let spec = get_distribution("binomial").unwrap();
/// let mut params = ParameterSet::defaults(spec);
/// params.set("p", 0.25).unwrap();
/// assert_eq!(params.values(), vec![10.0, 0.25]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    distribution: &'static str,
    entries: Vec<(&'static str, Real)>,
}

impl ParameterSet {
    /// Every parameter of `spec` at its default value.
    pub fn defaults(spec: &DistributionSpec) -> Self {
        Self {
            distribution: spec.name,
            entries: spec.params.iter().map(|p| (p.name, p.default)).collect(),
        }
    }

    /// Positional values in the order of `spec.params`.
    pub fn from_values(spec: &DistributionSpec, values: &[Real]) -> Result<Self> {
        if values.len() != spec.params.len() {
            return Err(Error::ArityMismatch {
                distribution: spec.name,
                expected: spec.params.len(),
                got: values.len(),
            });
        }
        Ok(Self {
            distribution: spec.name,
            entries: spec
                .params
                .iter()
                .zip(values)
                .map(|(p, &v)| (p.name, v))
                .collect(),
        })
    }

    /// Registry name of the distribution these values belong to.
    pub fn distribution(&self) -> &'static str {
        self.distribution
    }

    /// Value of the named parameter.
    pub fn get(&self, name: &str) -> Option<Real> {
        self.entries.iter().find(|(n, _)| *n == name).map(|&(_, v)| v)
    }

    /// Replace the value of the named parameter.
    pub fn set(&mut self, name: &str, value: Real) -> Result<()> {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => {
                entry.1 = value;
                Ok(())
            }
            None => Err(Error::InvalidArgument(format!(
                "{} has no parameter named {name:?}",
                self.distribution
            ))),
        }
    }

    /// Values in declaration order.
    pub fn values(&self) -> Vec<Real> {
        self.entries.iter().map(|&(_, v)| v).collect()
    }

    /// Check every value against its declared range and integrality.
    pub fn validate(&self, spec: &DistributionSpec) -> Result<()> {
        ensure!(
            spec.name == self.distribution,
            "parameters for {} cannot be checked against {}",
            self.distribution,
            spec.name
        );
        for (param, &(_, value)) in spec.params.iter().zip(&self.entries) {
            ensure!(
                param.admits(value),
                "{}: {} = {value} outside [{}, {}]{}",
                spec.name,
                param.name,
                param.range.0,
                param.range.1,
                if param.integer { " or not an integer" } else { "" }
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::get_distribution;

    #[test]
    fn defaults_follow_declaration_order() {
        let spec = get_distribution("normal").unwrap();
        let params = ParameterSet::defaults(spec);
        assert_eq!(params.values(), vec![0.0, 1.0]);
        assert_eq!(params.get("sigma"), Some(1.0));
        assert_eq!(params.get("lambda"), None);
    }

    #[test]
    fn positional_values_check_arity() {
        let spec = get_distribution("f").unwrap();
        assert!(ParameterSet::from_values(spec, &[5.0, 10.0]).is_ok());
        let err = ParameterSet::from_values(spec, &[5.0]).unwrap_err();
        assert_eq!(
            err,
            Error::ArityMismatch {
                distribution: "f",
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn unknown_parameter_name() {
        let spec = get_distribution("poisson").unwrap();
        let mut params = ParameterSet::defaults(spec);
        assert!(matches!(params.set("mu", 1.0), Err(Error::InvalidArgument(_))));
        assert!(params.set("lambda", 7.0).is_ok());
        assert_eq!(params.values(), vec![7.0]);
    }

    #[test]
    fn validation_checks_range_and_integrality() {
        let spec = get_distribution("binomial").unwrap();
        let ok = ParameterSet::from_values(spec, &[10.0, 0.5]).unwrap();
        assert!(ok.validate(spec).is_ok());
        let fractional = ParameterSet::from_values(spec, &[10.5, 0.5]).unwrap();
        assert!(matches!(fractional.validate(spec), Err(Error::Precondition(_))));
        let out_of_range = ParameterSet::from_values(spec, &[10.0, 1.5]).unwrap();
        assert!(out_of_range.validate(spec).is_err());
        assert!(ok.validate(get_distribution("normal").unwrap()).is_err());
    }
}
