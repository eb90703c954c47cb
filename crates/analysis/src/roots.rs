// Real roots of polynomials
//
// Degrees 1 and 2 use closed formulas. Higher degrees are isolated between
// consecutive roots of the derivative, where the polynomial is monotonic,
// inside the Cauchy bound, and refined by bisection.

use crate::config::RootStrategy;
use crate::error::{AnalysisError, AnalysisResult};
use crate::polynomial::Polynomial;
use tracing::trace;

/// Roots within this distance of an integer are snapped to it
pub const SNAP_TOLERANCE: f64 = 1e-9;

/// Relative tolerance under which the discriminant counts as zero
const DISCRIMINANT_TOLERANCE: f64 = 1e-12;

/// |p(x)| below this fraction of the term magnitudes counts as a root
const RESIDUAL_TOLERANCE: f64 = 1e-12;

const MAX_BISECTIONS: usize = 200;

/// Roots of `poly` according to the configured strategy.
///
/// The zero polynomial has no isolated roots; callers that care report it
/// separately.
pub fn solve_roots(poly: &Polynomial, strategy: RootStrategy) -> AnalysisResult<Vec<f64>> {
    match (poly.degree(), strategy) {
        (Some(degree), RootStrategy::ClosedForm) if degree > 2 => {
            Err(AnalysisError::UnsupportedDegree { degree })
        }
        _ => Ok(real_roots(poly)),
    }
}

/// Every real root, whatever the degree
pub fn real_roots(poly: &Polynomial) -> Vec<f64> {
    let roots = match poly.degree() {
        None | Some(0) => Vec::new(),
        Some(1) => linear(poly.coefficients()),
        Some(2) => quadratic(poly.coefficients()),
        Some(degree) => {
            trace!(degree, "isolating roots numerically");
            isolate(poly)
        }
    };
    finish(roots)
}

fn linear(coeffs: &[f64]) -> Vec<f64> {
    vec![-coeffs[0] / coeffs[1]]
}

fn quadratic(coeffs: &[f64]) -> Vec<f64> {
    let (c, b, a) = (coeffs[0], coeffs[1], coeffs[2]);
    let discriminant = b * b - 4.0 * a * c;
    let scale = (b * b).max((4.0 * a * c).abs());

    if discriminant.abs() <= DISCRIMINANT_TOLERANCE * scale {
        return vec![-b / (2.0 * a)];
    }
    if discriminant < 0.0 {
        return Vec::new();
    }

    // Avoids cancellation between -b and the square root
    let q = -0.5 * (b + b.signum() * discriminant.sqrt());
    if q == 0.0 {
        return vec![0.0];
    }
    vec![q / a, c / q]
}

/// Every real root lies strictly inside (-bound, bound)
pub fn cauchy_bound(poly: &Polynomial) -> f64 {
    let leading = poly.leading();
    let coeffs = poly.coefficients();
    let largest = coeffs[..coeffs.len().saturating_sub(1)]
        .iter()
        .map(|c| (c / leading).abs())
        .fold(0.0, f64::max);
    1.0 + largest
}

fn isolate(poly: &Polynomial) -> Vec<f64> {
    let bound = cauchy_bound(poly);

    let mut points = vec![-bound];
    points.extend(
        real_roots(&poly.derivative())
            .into_iter()
            .filter(|x| x.abs() < bound),
    );
    points.push(bound);

    let mut roots = Vec::new();
    for pair in points.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if is_root(poly, lo) {
            roots.push(lo);
            continue;
        }
        let (f_lo, f_hi) = (poly.eval(lo), poly.eval(hi));
        if f_lo.signum() != f_hi.signum() && !is_root(poly, hi) {
            roots.push(bisect(poly, lo, hi));
        }
    }
    roots
}

fn is_root(poly: &Polynomial, x: f64) -> bool {
    poly.eval(x).abs() <= RESIDUAL_TOLERANCE * poly.magnitude_at(x).max(1.0)
}

/// `poly` is monotonic on [lo, hi] with a sign change
fn bisect(poly: &Polynomial, mut lo: f64, mut hi: f64) -> f64 {
    let rising = poly.eval(lo) < 0.0;
    for _ in 0..MAX_BISECTIONS {
        let mid = 0.5 * (lo + hi);
        if mid <= lo || mid >= hi {
            break;
        }
        let value = poly.eval(mid);
        if value == 0.0 {
            return mid;
        }
        if (value < 0.0) == rising {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

/// Snap to integers within `SNAP_TOLERANCE`, turning -0 into 0
pub fn snap(value: f64) -> f64 {
    let nearest = value.round();
    if (value - nearest).abs() < SNAP_TOLERANCE {
        nearest + 0.0
    } else {
        value
    }
}

/// Snap, sort and drop duplicates
fn finish(roots: Vec<f64>) -> Vec<f64> {
    let mut roots: Vec<f64> = roots
        .into_iter()
        .filter(|r| r.is_finite())
        .map(snap)
        .collect();
    roots.sort_by(f64::total_cmp);
    roots.dedup_by(|a, b| (*a - *b).abs() <= SNAP_TOLERANCE * b.abs().max(1.0));
    roots
}
