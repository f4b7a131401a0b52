//! Error function (Abramowitz & Stegun 7.1.26).

use pk_core::Real;

const P: Real = 0.327_591_1;
const A: [Real; 5] = [
    0.254_829_592,
    -0.284_496_736,
    1.421_413_741,
    -1.453_152_027,
    1.061_405_429,
];

/// The error function erf(x) = 2/√π ∫₀ˣ e^{−t²} dt.
///
/// Five-term rational approximation, maximum absolute error 1.5×10⁻⁷.
/// Odd by construction: `erf(−x) = −erf(x)`.
pub fn erf(x: Real) -> Real {
    if x.is_nan() {
        return f64::NAN;
    }
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A[4] * t + A[3]) * t + A[2]) * t + A[1]) * t + A[0]) * t;
    sign * (1.0 - poly * (-x * x).exp())
}

/// The complementary error function erfc(x) = 1 − erf(x).
pub fn erfc(x: Real) -> Real {
    1.0 - erf(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn error_function_values() {
        assert_abs_diff_eq!(erf(0.0), 0.0, epsilon = 1e-8);
        assert_abs_diff_eq!(erf(1.0), 0.842_700_792_9, epsilon = 1.5e-7);
        assert_abs_diff_eq!(erf(-1.0), -0.842_700_792_9, epsilon = 1.5e-7);
        assert_abs_diff_eq!(erfc(0.0), 1.0, epsilon = 1e-8);
        assert_abs_diff_eq!(erf(6.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn within_published_bound_of_statrs() {
        let mut x = -5.0;
        while x <= 5.0 {
            let reference = statrs::function::erf::erf(x);
            assert_abs_diff_eq!(erf(x), reference, epsilon = 1.5e-7);
            x += 0.01;
        }
    }

    #[test]
    fn odd_symmetry() {
        for x in [0.1, 0.7, 1.3, 2.9] {
            assert_eq!(erf(-x), -erf(x));
        }
        assert!(erf(f64::NAN).is_nan());
    }
}
