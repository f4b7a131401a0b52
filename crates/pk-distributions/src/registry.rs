//! The distribution registry: name lookup and parameter binding.
//!
//! Entries are immutable statics. Binding a parameter vector to an entry
//! produces a boxed [`Distribution`] configured by the caller's
//! [`EngineConfig`]; nothing is cached or shared between bindings.

use crate::continuous::{ChiSquare, Exponential, FisherF, Gamma, Normal, StudentT, Uniform};
use crate::discrete::{Bernoulli, Binomial, Geometric, Poisson};
use crate::distribution::{Distribution, Kind};
use crate::params::{ParamSpec, ParameterSet};
use pk_core::{EngineConfig, Error, Real, Result};
use std::fmt;

const INF: Real = f64::INFINITY;

type Constructor = fn(&[Real], &EngineConfig) -> Box<dyn Distribution>;

/// A registered distribution family.
pub struct DistributionSpec {
    /// Registry name.
    pub name: &'static str,
    /// Discrete or continuous.
    pub kind: Kind,
    /// Parameters, in parameter-vector order.
    pub params: &'static [ParamSpec],
    /// Mass or density function in LaTeX.
    pub formula: &'static str,
    /// One-paragraph description.
    pub description: &'static str,
    /// Typical application areas.
    pub applications: &'static [&'static str],
    make: Constructor,
}

impl fmt::Debug for DistributionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistributionSpec")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl DistributionSpec {
    /// Bind positional parameter values.
    ///
    /// Fails only on a wrong number of values; out-of-domain values are
    /// accepted and surface as `NaN` results.
    pub fn bind(&self, values: &[Real], config: &EngineConfig) -> Result<Box<dyn Distribution>> {
        if values.len() != self.params.len() {
            tracing::debug!(
                distribution = self.name,
                expected = self.params.len(),
                got = values.len(),
                "parameter arity mismatch"
            );
            return Err(Error::ArityMismatch {
                distribution: self.name,
                expected: self.params.len(),
                got: values.len(),
            });
        }
        tracing::trace!(distribution = self.name, ?values, "binding parameters");
        Ok((self.make)(values, config))
    }

    /// Bind a named parameter set.
    pub fn bind_set(&self, params: &ParameterSet, config: &EngineConfig) -> Result<Box<dyn Distribution>> {
        if params.distribution() != self.name {
            return Err(Error::InvalidArgument(format!(
                "parameters for {} given to {}",
                params.distribution(),
                self.name
            )));
        }
        self.bind(&params.values(), config)
    }

    /// Bind every parameter at its default.
    pub fn bind_defaults(&self, config: &EngineConfig) -> Box<dyn Distribution> {
        let values: Vec<Real> = self.params.iter().map(|p| p.default).collect();
        (self.make)(&values, config)
    }
}

/// Every registered family, in display order.
pub fn all() -> &'static [DistributionSpec] {
    &REGISTRY
}

/// Look up a family by name.
///
/// Case-insensitive; `_`, `-` and spaces are ignored, so `"chi_square"`
/// and `"Chi-Square"` both find `chiSquare`.
///
/// # Example
/// ```
/// use pk_distributions::get_distribution;
///
/// assert_eq!(get_distribution("chi_square").unwrap().name, "chiSquare");
/// assert!(get_distribution("cauchy").is_err());
/// ```
pub fn get_distribution(name: &str) -> Result<&'static DistributionSpec> {
    let wanted = normalize(name);
    match REGISTRY.iter().find(|spec| normalize(spec.name) == wanted) {
        Some(spec) => {
            tracing::debug!(requested = name, found = spec.name, "distribution lookup");
            Ok(spec)
        }
        None => {
            tracing::debug!(requested = name, "unknown distribution");
            Err(Error::NotFound(name.to_string()))
        }
    }
}

/// Look up `name` and bind `values` in one step.
pub fn distribution(name: &str, values: &[Real], config: &EngineConfig) -> Result<Box<dyn Distribution>> {
    get_distribution(name)?.bind(values, config)
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

// ── Constructors ──────────────────────────────────────────────────────────────

fn make_bernoulli(p: &[Real], _: &EngineConfig) -> Box<dyn Distribution> {
    Box::new(Bernoulli::new(p[0]))
}

fn make_binomial(p: &[Real], _: &EngineConfig) -> Box<dyn Distribution> {
    Box::new(Binomial::new(p[0], p[1]))
}

fn make_poisson(p: &[Real], _: &EngineConfig) -> Box<dyn Distribution> {
    Box::new(Poisson::new(p[0]))
}

fn make_geometric(p: &[Real], _: &EngineConfig) -> Box<dyn Distribution> {
    Box::new(Geometric::new(p[0]))
}

fn make_normal(p: &[Real], _: &EngineConfig) -> Box<dyn Distribution> {
    Box::new(Normal::new(p[0], p[1]))
}

fn make_uniform(p: &[Real], _: &EngineConfig) -> Box<dyn Distribution> {
    Box::new(Uniform::new(p[0], p[1]))
}

fn make_exponential(p: &[Real], _: &EngineConfig) -> Box<dyn Distribution> {
    Box::new(Exponential::new(p[0]))
}

fn make_gamma(p: &[Real], c: &EngineConfig) -> Box<dyn Distribution> {
    Box::new(Gamma::new(p[0], p[1]).with_cdf_method(c.cdf_method))
}

fn make_t(p: &[Real], c: &EngineConfig) -> Box<dyn Distribution> {
    Box::new(StudentT::new(p[0]).with_cdf_method(c.cdf_method))
}

fn make_f(p: &[Real], c: &EngineConfig) -> Box<dyn Distribution> {
    Box::new(FisherF::new(p[0], p[1]).with_cdf_method(c.cdf_method))
}

fn make_chi_square(p: &[Real], c: &EngineConfig) -> Box<dyn Distribution> {
    Box::new(ChiSquare::new(p[0]).with_cdf_method(c.cdf_method))
}

// ── Parameter declarations ────────────────────────────────────────────────────

const fn param(
    name: &'static str,
    description: &'static str,
    range: (Real, Real),
    integer: bool,
    default: Real,
) -> ParamSpec {
    ParamSpec {
        name,
        description,
        range,
        integer,
        default,
    }
}

const SUCCESS_P: ParamSpec = param("p", "success probability of a single trial", (0.0, 1.0), false, 0.5);

static REGISTRY: [DistributionSpec; 11] = [
    DistributionSpec {
        name: "bernoulli",
        kind: Kind::Discrete,
        params: &[SUCCESS_P],
        formula: r"P(X=x) = \begin{cases} p, & \text{if } x = 1 \\ 1-p, & \text{if } x = 0 \end{cases}",
        description: "The outcome of a single yes/no experiment, such as a coin toss. \
                      The single parameter p is the probability of success (the value 1).",
        applications: &[
            "modelling the outcome of a coin toss",
            "binary classification outcomes (success/failure, yes/no)",
            "pass/fail decisions in quality control",
            "cured/not cured outcomes in clinical trials",
        ],
        make: make_bernoulli,
    },
    DistributionSpec {
        name: "binomial",
        kind: Kind::Discrete,
        params: &[
            param("n", "number of trials", (1.0, INF), true, 10.0),
            SUCCESS_P,
        ],
        formula: r"P(X=k) = \binom{n}{k} p^k (1-p)^{n-k}",
        description: "The number of successes in n independent yes/no trials that each \
                      succeed with probability p. It generalises the Bernoulli distribution.",
        applications: &[
            "acceptance sampling in quality control",
            "consumer preference counts in market research",
            "case counts in clinical trials",
            "modelling vote outcomes",
        ],
        make: make_binomial,
    },
    DistributionSpec {
        name: "poisson",
        kind: Kind::Discrete,
        params: &[param("lambda", "mean number of events per interval", (0.0, INF), false, 3.0)],
        formula: r"P(X=k) = \frac{e^{-\lambda} \lambda^k}{k!}",
        description: "The number of random events in a unit interval of time. The \
                      parameter lambda is the average number of events per interval.",
        applications: &[
            "incoming calls per unit time at a call centre",
            "website visits within a time window",
            "traffic accidents in a region over a period",
            "customers arriving at a checkout per unit time",
        ],
        make: make_poisson,
    },
    DistributionSpec {
        name: "geometric",
        kind: Kind::Discrete,
        params: &[SUCCESS_P],
        formula: r"P(X=k) = (1-p)^{k-1} p",
        description: "The number of Bernoulli trials needed to obtain the first success, \
                      where p is the success probability of each trial.",
        applications: &[
            "index of the first defective item found in inspection",
            "attempts needed to win a game for the first time",
            "operating cycles before a machine part first fails",
            "contacts needed before an infection is transmitted",
        ],
        make: make_geometric,
    },
    DistributionSpec {
        name: "normal",
        kind: Kind::Continuous,
        params: &[
            param("mu", "mean (expected value)", (-INF, INF), false, 0.0),
            param("sigma", "standard deviation", (0.0, INF), false, 1.0),
        ],
        formula: r"f(x) = \frac{1}{\sigma\sqrt{2\pi}} e^{-\frac{1}{2}\left(\frac{x-\mu}{\sigma}\right)^2}",
        description: "The normal (Gaussian) distribution is the most common continuous \
                      distribution, with a bell-shaped density determined by its mean mu \
                      and standard deviation sigma.",
        applications: &[
            "measurement errors of natural phenomena",
            "distribution of human height and weight",
            "distribution of exam scores",
            "modelling asset returns in financial markets",
        ],
        make: make_normal,
    },
    DistributionSpec {
        name: "uniform",
        kind: Kind::Continuous,
        params: &[
            param("a", "lower bound", (-INF, INF), false, 0.0),
            param("b", "upper bound", (-INF, INF), false, 1.0),
        ],
        formula: r"f(x) = \begin{cases} \frac{1}{b-a}, & \text{if } a \leq x \leq b \\ 0, & \text{otherwise} \end{cases}",
        description: "Every point of the interval [a, b] has the same density. It is one \
                      of the simplest ways to model randomness.",
        applications: &[
            "computer-generated random numbers",
            "random sampling procedures",
            "modelling quantisation error",
            "arrival-time estimates without prior knowledge",
        ],
        make: make_uniform,
    },
    DistributionSpec {
        name: "exponential",
        kind: Kind::Continuous,
        params: &[param("lambda", "rate", (0.0, INF), false, 3.0)],
        formula: r"f(x) = \begin{cases} \lambda e^{-\lambda x}, & \text{if } x \geq 0 \\ 0, & \text{if } x < 0 \end{cases}",
        description: "The waiting time between independent random events. It models \
                      memoryless processes such as service times in queues or the lifetime \
                      of equipment.",
        applications: &[
            "equipment lifetime analysis",
            "service times in queueing systems",
            "radioactive decay",
            "time between incoming phone calls",
        ],
        make: make_exponential,
    },
    DistributionSpec {
        name: "gamma",
        kind: Kind::Continuous,
        params: &[
            param("k", "shape", (0.0, INF), false, 2.0),
            param("theta", "scale", (0.0, INF), false, 1.0),
        ],
        formula: r"f(x) = \frac{x^{k-1} e^{-x/\theta}}{\theta^k \Gamma(k)}",
        description: "A continuous distribution that generalises the exponential, \
                      chi-square and Erlang distributions, with shape k and scale theta.",
        applications: &[
            "modelling rainfall amounts",
            "insurance claim sizes",
            "lifetime analysis in reliability engineering",
            "conjugate prior in Bayesian statistics",
        ],
        make: make_gamma,
    },
    DistributionSpec {
        name: "t",
        kind: Kind::Continuous,
        params: &[param("nu", "degrees of freedom", (1.0, INF), false, 5.0)],
        formula: r"f(x) = \frac{\Gamma\left(\frac{\nu+1}{2}\right)}{\sqrt{\nu\pi}\,\Gamma\left(\frac{\nu}{2}\right)} \left(1+\frac{x^2}{\nu}\right)^{-\frac{\nu+1}{2}}",
        description: "Used for small-sample inference, building confidence intervals and \
                      running t tests when the population variance is unknown.",
        applications: &["t tests", "confidence interval estimation", "small-sample inference"],
        make: make_t,
    },
    DistributionSpec {
        name: "f",
        kind: Kind::Continuous,
        params: &[
            param("d1", "numerator degrees of freedom", (1.0, INF), true, 5.0),
            param("d2", "denominator degrees of freedom", (1.0, INF), true, 10.0),
        ],
        formula: r"f(x) = \frac{\Gamma\left(\frac{d_1+d_2}{2}\right)}{\Gamma\left(\frac{d_1}{2}\right)\Gamma\left(\frac{d_2}{2}\right)} \left(\frac{d_1}{d_2}\right)^{\frac{d_1}{2}} \frac{x^{\frac{d_1}{2}-1}}{\left(1+\frac{d_1}{d_2}x\right)^{\frac{d_1+d_2}{2}}}",
        description: "Compares two sample variances and is central to analysis of variance.",
        applications: &[
            "analysis of variance",
            "model comparison",
            "hypothesis tests in regression analysis",
        ],
        make: make_f,
    },
    DistributionSpec {
        name: "chiSquare",
        kind: Kind::Continuous,
        params: &[param("k", "degrees of freedom", (1.0, INF), true, 2.0)],
        formula: r"f(x) = \frac{1}{2^{k/2}\Gamma(k/2)} x^{k/2-1} e^{-x/2}",
        description: "Used in hypothesis testing, such as goodness-of-fit tests, and in \
                      building confidence intervals.",
        applications: &[
            "goodness-of-fit tests",
            "hypothesis testing",
            "confidence interval estimation",
        ],
        make: make_chi_square,
    },
];
