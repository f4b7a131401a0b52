//! Running statistics accumulator.

use pk_core::{Real, Size};

/// Incremental statistics accumulator.
///
/// Accumulates samples and reports count, mean, unbiased and population
/// variance, standard deviations, minimum, and maximum. Sums are kept
/// relative to the first sample to limit cancellation when the data sit
/// far from zero.
#[derive(Debug, Clone)]
pub struct Statistics {
    count: Size,
    shift: Real,
    sum: Real,
    sum_sq: Real,
    min: Real,
    max: Real,
}

impl Statistics {
    /// Create a new empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            shift: 0.0,
            sum: 0.0,
            sum_sq: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Add a single sample.
    pub fn add(&mut self, x: Real) {
        if self.count == 0 {
            self.shift = x;
        }
        let d = x - self.shift;
        self.count += 1;
        self.sum += d;
        self.sum_sq += d * d;
        if x < self.min {
            self.min = x;
        }
        if x > self.max {
            self.max = x;
        }
    }

    /// Number of samples.
    pub fn samples(&self) -> Size {
        self.count
    }

    /// Arithmetic mean.  Returns `None` if no samples have been added.
    pub fn mean(&self) -> Option<Real> {
        if self.count == 0 {
            None
        } else {
            Some(self.shift + self.sum / self.count as Real)
        }
    }

    /// Population variance (divides by `n`).  Returns `None` if no samples
    /// have been added.
    pub fn population_variance(&self) -> Option<Real> {
        if self.count == 0 {
            return None;
        }
        let n = self.count as Real;
        let m = self.sum / n;
        Some((self.sum_sq / n - m * m).max(0.0))
    }

    /// Unbiased (Bessel-corrected) variance.  Returns `None` for fewer than
    /// 2 samples.
    pub fn variance(&self) -> Option<Real> {
        if self.count < 2 {
            return None;
        }
        let n = self.count as Real;
        self.population_variance().map(|v| v * n / (n - 1.0))
    }

    /// Unbiased standard deviation.  Returns `None` for fewer than 2 samples.
    pub fn std_dev(&self) -> Option<Real> {
        self.variance().map(|v| v.sqrt())
    }

    /// Population standard deviation.  Returns `None` if empty.
    pub fn population_std_dev(&self) -> Option<Real> {
        self.population_variance().map(|v| v.sqrt())
    }

    /// Minimum sample value.  Returns `None` if no samples have been added.
    pub fn minimum(&self) -> Option<Real> {
        if self.count == 0 {
            None
        } else {
            Some(self.min)
        }
    }

    /// Maximum sample value.  Returns `None` if no samples have been added.
    pub fn maximum(&self) -> Option<Real> {
        if self.count == 0 {
            None
        } else {
            Some(self.max)
        }
    }

    /// Reset the accumulator to its initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Real> for Statistics {
    fn extend<I: IntoIterator<Item = Real>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

impl FromIterator<Real> for Statistics {
    fn from_iter<I: IntoIterator<Item = Real>>(iter: I) -> Self {
        let mut s = Self::new();
        s.extend(iter);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn basic_statistics() {
        let s: Statistics = [1.0, 2.0, 3.0, 4.0, 5.0].into_iter().collect();
        assert_eq!(s.samples(), 5);
        assert_abs_diff_eq!(s.mean().unwrap(), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.variance().unwrap(), 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(s.population_variance().unwrap(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.std_dev().unwrap(), 2.5_f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(s.population_std_dev().unwrap(), 2.0_f64.sqrt(), epsilon = 1e-12);
        assert_eq!(s.minimum().unwrap(), 1.0);
        assert_eq!(s.maximum().unwrap(), 5.0);
    }

    #[test]
    fn empty_statistics() {
        let s = Statistics::new();
        assert!(s.mean().is_none());
        assert!(s.variance().is_none());
        assert!(s.population_variance().is_none());
        assert!(s.minimum().is_none());
    }

    #[test]
    fn single_sample() {
        let mut s = Statistics::new();
        s.add(4.2);
        assert_eq!(s.mean(), Some(4.2));
        assert_eq!(s.population_variance(), Some(0.0));
        assert!(s.variance().is_none());
        s.reset();
        assert_eq!(s.samples(), 0);
    }

    #[test]
    fn large_offset_is_stable() {
        let s: Statistics = [1e9 + 1.0, 1e9 + 2.0, 1e9 + 3.0].into_iter().collect();
        assert_abs_diff_eq!(s.variance().unwrap(), 1.0, epsilon = 1e-9);
    }
}
