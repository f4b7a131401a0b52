//! Random samples, their summary statistics, and histograms against the
//! theoretical density.

use crate::distribution::{Distribution, Kind, Support, MAX_DISCRETE_POINTS};
use num_traits::ToPrimitive;
use pk_core::{ensure, Error, Real, Result, Size};
use pk_math::Statistics;
use rand::RngCore;

/// Draw `n` independent variates from `dist`.
pub fn draw(dist: &dyn Distribution, n: Size, rng: &mut dyn RngCore) -> Vec<Real> {
    (0..n).map(|_| dist.sample(rng)).collect()
}

/// Count, mean, and population (÷n) standard deviation of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    /// Number of values.
    pub count: Size,
    /// Arithmetic mean.
    pub mean: Real,
    /// Population standard deviation.
    pub std_dev: Real,
}

impl SampleSummary {
    /// Summarise `samples`; fails on an empty slice.
    pub fn from_samples(samples: &[Real]) -> Result<Self> {
        let stats: Statistics = samples.iter().copied().collect();
        match (stats.mean(), stats.population_std_dev()) {
            (Some(mean), Some(std_dev)) => Ok(Self {
                count: stats.samples(),
                mean,
                std_dev,
            }),
            _ => Err(Error::Precondition("cannot summarise an empty sample".into())),
        }
    }
}

/// One histogram bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    /// Lower edge (the integer itself for discrete histograms).
    pub low: Real,
    /// Upper edge.
    pub high: Real,
    /// Number of samples in the bin.
    pub count: Size,
    /// `count / n` for discrete histograms, `count / (n · width)` for
    /// continuous ones.
    pub frequency: Real,
    /// pmf at the integer, or pdf at the bin centre.
    pub theoretical: Real,
}

/// Empirical frequencies next to the theoretical mass or density.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bins in increasing order.
    pub bins: Vec<Bin>,
    /// Total number of samples.
    pub samples: Size,
}

/// Bin `samples` against `dist`.
///
/// Discrete: one bin per integer from the smallest to the largest of the
/// support and the samples. Continuous: `max(5, ⌈1 + 3.322·log₁₀ n⌉)`
/// equal-width bins (Sturges) spanning the support and the samples.
pub fn histogram(dist: &dyn Distribution, samples: &[Real], support: Support) -> Result<Histogram> {
    ensure!(!samples.is_empty(), "cannot build a histogram from an empty sample");
    ensure!(
        samples.iter().all(|x| x.is_finite()),
        "histogram samples must be finite"
    );
    let lo = samples.iter().copied().fold(support.min(), Real::min);
    let hi = samples.iter().copied().fold(support.max(), Real::max);
    ensure!(lo.is_finite() && hi.is_finite(), "histogram range [{lo}, {hi}] is not finite");

    let bins = match dist.kind() {
        Kind::Discrete => discrete_bins(dist, samples, lo, hi)?,
        Kind::Continuous => continuous_bins(dist, samples, lo, hi)?,
    };
    Ok(Histogram {
        bins,
        samples: samples.len(),
    })
}

fn discrete_bins(dist: &dyn Distribution, samples: &[Real], lo: Real, hi: Real) -> Result<Vec<Bin>> {
    let first = lo.round();
    let width = (hi.round() - first + 1.0).to_usize().unwrap_or(0);
    let max_width = MAX_DISCRETE_POINTS.to_usize().unwrap_or(usize::MAX);
    ensure!(
        (1..=max_width).contains(&width),
        "discrete histogram would need {width} bins"
    );
    let mut counts = vec![0usize; width];
    for x in samples {
        if let Some(i) = (x.round() - first).to_usize() {
            if i < width {
                counts[i] += 1;
            }
        }
    }
    let n = samples.len() as Real;
    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let k = first + i as Real;
            Bin {
                low: k,
                high: k,
                count,
                frequency: count as Real / n,
                theoretical: dist.density(k),
            }
        })
        .collect())
}

fn continuous_bins(dist: &dyn Distribution, samples: &[Real], lo: Real, hi: Real) -> Result<Vec<Bin>> {
    let n = samples.len();
    let bins = sturges_bins(n);
    let width = (hi - lo) / bins as Real;
    ensure!(width > 0.0, "histogram range [{lo}, {hi}] is empty");

    let mut counts = vec![0usize; bins];
    for x in samples {
        let i = ((x - lo) / width).floor().to_usize().unwrap_or(0).min(bins - 1);
        counts[i] += 1;
    }
    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let low = lo + i as Real * width;
            Bin {
                low,
                high: low + width,
                count,
                frequency: count as Real / (n as Real * width),
                theoretical: dist.density(low + 0.5 * width),
            }
        })
        .collect())
}

/// `max(5, ⌈1 + 3.322·log₁₀ n⌉)`.
fn sturges_bins(n: Size) -> Size {
    (1.0 + 3.322 * (n as Real).log10())
        .ceil()
        .to_usize()
        .unwrap_or(0)
        .max(5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::continuous::{Exponential, Normal};
    use crate::discrete::{Geometric, Poisson};
    use pk_math::random_numbers::MersenneTwisterUniformRng;

    #[test]
    fn summary_uses_population_deviation() {
        let s = SampleSummary::from_samples(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(s.count, 4);
        assert_eq!(s.mean, 2.5);
        assert!((s.std_dev - 1.25_f64.sqrt()).abs() < 1e-12);
        assert!(SampleSummary::from_samples(&[]).is_err());
    }

    #[test]
    fn sturges_rule() {
        assert_eq!(sturges_bins(1), 5);
        assert_eq!(sturges_bins(10), 5);
        assert_eq!(sturges_bins(1000), 11);
        assert_eq!(sturges_bins(10_000), 15);
    }

    #[test]
    fn discrete_histogram_has_one_bin_per_integer() {
        let d = Poisson::new(2.0);
        let samples = [0.0, 1.0, 1.0, 2.0, 14.0];
        let h = histogram(&d, &samples, d.display_support()).unwrap();
        assert_eq!(h.bins.len(), 15);
        assert_eq!(h.bins[1].count, 2);
        assert_eq!(h.bins[1].frequency, 0.4);
        assert_eq!(h.bins[14].count, 1);
        assert_eq!(h.bins[3].theoretical, d.density(3.0));
        assert_eq!(h.bins.iter().map(|b| b.count).sum::<usize>(), 5);
    }

    #[test]
    fn continuous_histogram_is_a_density() {
        let d = Exponential::new(1.0);
        let mut rng = MersenneTwisterUniformRng::new(12);
        let samples = draw(&d, 5_000, &mut rng);
        let h = histogram(&d, &samples, d.display_support()).unwrap();
        assert_eq!(h.bins.len(), sturges_bins(5_000));
        let area: Real = h.bins.iter().map(|b| b.frequency * (b.high - b.low)).sum();
        assert!((area - 1.0).abs() < 1e-9, "area = {area}");
        assert_eq!(h.bins.iter().map(|b| b.count).sum::<usize>(), 5_000);
        assert!((h.bins[0].low - 0.0).abs() < 1e-15);
    }

    #[test]
    fn invalid_samples_are_rejected() {
        let d = Normal::standard();
        assert!(histogram(&d, &[], d.display_support()).is_err());
        assert!(histogram(&d, &[f64::NAN], d.display_support()).is_err());
    }

    #[test]
    fn discrete_range_too_wide_is_an_error() {
        let d = Geometric::new(0.5);
        for outlier in [1.0e7, 1.0e19, 1.0e300] {
            assert!(matches!(
                histogram(&d, &[1.0, outlier], d.display_support()),
                Err(Error::Precondition(_))
            ));
        }
    }
}
