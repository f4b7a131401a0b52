//! A caller's round trip through the façade: look up a distribution, plot
//! it, simulate from it, and test a hypothesis about the simulated mean.

use approx::assert_abs_diff_eq;
use probkit::core::EngineConfig;
use probkit::distributions::{curve_with, draw, get_distribution, CurveKind, SampleSummary};
use probkit::hypothesis::{Method, Tail, TestParameters, ZTest};
use probkit::math::random_numbers::MersenneTwisterUniformRng;

#[test]
fn lookup_plot_simulate_and_test() {
    let config = EngineConfig::default();
    let spec = get_distribution("Chi_Square").unwrap();
    let d = spec.bind(&[4.0], &config).unwrap();

    let cdf = curve_with(d.as_ref(), CurveKind::Cumulative, &config).unwrap();
    assert_eq!(cdf.len(), config.curve_points);
    assert!(cdf.windows(2).all(|w| w[0].1 <= w[1].1));

    let mut rng = MersenneTwisterUniformRng::new(42);
    let samples = draw(d.as_ref(), 2_000, &mut rng);
    let summary = SampleSummary::from_samples(&samples).unwrap();
    assert_abs_diff_eq!(summary.mean, d.mean(), epsilon = 0.3);

    let standard_error = d.std_dev() / (summary.count as f64).sqrt();
    let params = TestParameters::new(Tail::Two, 0.01, summary.mean, Method::ConfidenceInterval)
        .unwrap()
        .with_null_value(d.mean())
        .with_standard_error(standard_error);
    let outcome = ZTest::new(params).unwrap().evaluate();
    assert!(outcome.methods_agree());
}
