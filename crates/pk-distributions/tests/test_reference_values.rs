//! Reference values and cross-family contracts, exercised through the
//! registry the way callers use it.

use approx::assert_abs_diff_eq;
use pk_core::{EngineConfig, Error};
use pk_distributions::{all, distribution, get_distribution, Distribution, Kind, Support};
use pk_math::random_numbers::MersenneTwisterUniformRng;

fn bind(name: &str, values: &[f64]) -> Box<dyn Distribution> {
    distribution(name, values, &EngineConfig::default()).unwrap()
}

#[test]
fn bernoulli_mass_sums_to_one() {
    let d = bind("bernoulli", &[0.3]);
    assert_abs_diff_eq!(d.density(0.0), 0.7, epsilon = 1e-15);
    assert_abs_diff_eq!(d.density(1.0), 0.3, epsilon = 1e-15);
    let total: f64 = d.display_support().integers().iter().map(|&k| d.density(k)).sum();
    assert_abs_diff_eq!(total, 1.0, epsilon = 1e-15);
}

#[test]
fn binomial_ten_half() {
    let d = bind("binomial", &[10.0, 0.5]);
    assert_abs_diff_eq!(d.density(5.0), 0.246_093_75, epsilon = 1e-12);
    assert_eq!(d.mean(), 5.0);
    assert_eq!(d.variance(), 2.5);
}

#[test]
fn poisson_four() {
    let d = bind("poisson", &[4.0]);
    assert_abs_diff_eq!(d.density(4.0), 0.195_366_81, epsilon = 1e-8);
    assert_eq!(d.mean(), 4.0);
    assert_eq!(d.variance(), 4.0);
}

#[test]
fn standard_normal() {
    let d = bind("normal", &[0.0, 1.0]);
    assert_eq!(d.cdf(0.0), 0.5);
    assert_eq!(d.quantile(0.5), 0.0);
    let mut x = -3.0;
    while x <= 3.0 {
        assert!((d.quantile(d.cdf(x)) - x).abs() < 1e-4, "round trip failed at {x}");
        x += 0.1;
    }
}

#[test]
fn exponential_two() {
    let d = bind("exponential", &[2.0]);
    assert_eq!(d.cdf(0.0), 0.0);
    assert_eq!(d.mean(), 0.5);
    assert_abs_diff_eq!(d.median(), 0.346_57, epsilon = 1e-5);
}

#[test]
fn gamma_non_integer_shape_sample_is_the_mean() {
    let d = bind("gamma", &[2.5, 2.0]);
    let mut rng = MersenneTwisterUniformRng::new(2024);
    for _ in 0..5 {
        assert_eq!(d.sample(&mut rng), 5.0);
    }
}

#[test]
fn discrete_cdf_is_running_pmf_sum() {
    let config = EngineConfig::default();
    for spec in all().iter().filter(|s| s.kind == Kind::Discrete) {
        let d = spec.bind_defaults(&config);
        let mut running = 0.0;
        for k in d.support(config.support_coverage).integers() {
            running += d.density(k);
            assert_abs_diff_eq!(d.cdf(k), running, epsilon = 1e-12);
        }
    }
}

#[test]
fn supports_hold_the_central_mass() {
    let config = EngineConfig::default();
    for spec in all() {
        let d = spec.bind_defaults(&config);
        let support = d.support(config.support_coverage);
        let top = d.cdf(support.max());
        assert!(top >= 1.0 - 1e-3, "{}: cdf(max = {}) = {top}", spec.name, support.max());
        if let Support::Continuous { low, .. } = support {
            let bottom = d.cdf(low - 1e-9);
            assert!(bottom <= 1e-3, "{}: cdf(min) = {bottom}", spec.name);
        }
    }
}

#[test]
fn supports_hold_the_central_mass_for_heavy_tails() {
    let config = EngineConfig::default();
    for (name, values) in [
        ("t", vec![1.0]),
        ("f", vec![2.0, 3.0]),
        ("gamma", vec![0.5, 4.0]),
        ("chiSquare", vec![1.0]),
        ("poisson", vec![40.0]),
        ("geometric", vec![0.02]),
    ] {
        let d = distribution(name, &values, &config).unwrap();
        let support = d.support(config.support_coverage);
        assert!(d.cdf(support.max()) >= 1.0 - 1e-3, "{name}{values:?}: {support:?}");
        assert!(d.cdf(support.min() - 1e-9) <= 1e-3, "{name}{values:?}: {support:?}");
    }
}

#[test]
fn raw_display_supports_are_kept_without_coverage() {
    let d = bind("t", &[5.0]);
    assert_eq!(d.support(None), Support::continuous(-5.0, 5.0));
    let d = bind("f", &[5.0, 10.0]);
    assert_eq!(d.display_support(), Support::continuous(0.0, 10.0));
}

#[test]
fn undefined_moments_are_sentinels() {
    assert!(bind("t", &[1.0]).mean().is_nan());
    assert_eq!(bind("t", &[2.0]).variance(), f64::INFINITY);
    assert!(bind("t", &[0.8]).variance().is_nan());
    assert!(bind("f", &[5.0, 2.0]).mean().is_nan());
    assert!(bind("f", &[5.0, 4.0]).variance().is_nan());
}

#[test]
fn off_support_mass_is_zero() {
    for (name, values) in [
        ("bernoulli", vec![0.4]),
        ("binomial", vec![6.0, 0.4]),
        ("poisson", vec![2.0]),
        ("geometric", vec![0.4]),
    ] {
        let d = distribution(name, &values, &EngineConfig::default()).unwrap();
        for x in [-1.0, 2.5, -0.5] {
            assert_eq!(d.density(x), 0.0, "{name} at {x}");
        }
    }
}

#[test]
fn lookup_failures() {
    assert_eq!(
        get_distribution("weibull").unwrap_err(),
        Error::NotFound("weibull".into())
    );
    assert!(matches!(
        distribution("normal", &[0.0], &EngineConfig::default()),
        Err(Error::ArityMismatch { expected: 2, got: 1, .. })
    ));
}
