//! 1D root finding, used to invert cumulative distribution functions that
//! have no closed-form inverse.

use pk_core::{ensure, fail, Real, Result};

const MAX_ITERATIONS: u32 = 200;
const MAX_EXPANSIONS: u32 = 1100;
const DEFAULT_ACCURACY: Real = 1.0e-12;

/// Brent's method for finding a root of `f(x)` in `[x_min, x_max]`.
///
/// Combines bisection, secant, and inverse quadratic interpolation.
/// `f(x_min)` and `f(x_max)` must not share a sign.
pub fn brent<F>(f: F, x_min: Real, x_max: Real, accuracy: Real) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    let acc = if accuracy > 0.0 {
        accuracy
    } else {
        DEFAULT_ACCURACY
    };
    let mut a = x_min;
    let mut b = x_max;
    let mut fa = f(a);
    let mut fb = f(b);

    ensure!(
        fa * fb <= 0.0,
        "Brent: f({a}) = {fa} and f({b}) = {fb} must have opposite signs"
    );
    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }

    let mut c = b;
    let mut fc = fb;
    let mut d = b - a;
    let mut e = d;

    for _ in 0..MAX_ITERATIONS {
        if fb * fc > 0.0 {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }
        let tol = 2.0 * f64::EPSILON * b.abs() + 0.5 * acc;
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol || fb == 0.0 {
            return Ok(b);
        }
        if e.abs() >= tol && fa.abs() > fb.abs() {
            let s = fb / fa;
            let (p, q) = if a == c {
                (2.0 * xm * s, 1.0 - s)
            } else {
                let q = fa / fc;
                let r = fb / fc;
                let p = s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0));
                let q = (q - 1.0) * (r - 1.0) * (s - 1.0);
                (p, q)
            };
            let (p, q) = if p > 0.0 { (p, -q) } else { (-p, q) };
            if 2.0 * p < (3.0 * xm * q - (tol * q).abs()) && 2.0 * p < (e * q).abs() {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }
        a = b;
        fa = fb;
        b += if d.abs() > tol {
            d
        } else if xm > 0.0 {
            tol
        } else {
            -tol
        };
        fb = f(b);
    }
    fail!("Brent solver: maximum iterations reached")
}

/// Find `x` with `increasing(x) = target` anywhere on the real line.
///
/// Steps out from `guess` in both directions, doubling the step each time,
/// until the target is bracketed.
pub fn solve_increasing_unbounded<F>(increasing: F, target: Real, guess: Real, accuracy: Real) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    ensure!(target.is_finite(), "target must be finite, got {target}");
    let mut step = 1.0;
    let (mut low, mut high) = (guess, guess);
    let mut expansions = 0;
    while increasing(high) < target {
        low = high;
        high = guess + step;
        step *= 2.0;
        expansions += 1;
        ensure!(
            expansions < MAX_EXPANSIONS && high.is_finite(),
            "no finite bracket above {guess} reaches {target}"
        );
    }
    while increasing(low) > target {
        high = low;
        low = guess - step;
        step *= 2.0;
        expansions += 1;
        ensure!(
            expansions < MAX_EXPANSIONS && low.is_finite(),
            "no finite bracket below {guess} reaches {target}"
        );
    }
    brent(|x| increasing(x) - target, low, high, accuracy)
}
