// Asymptote and limit heuristics
//
// Nothing here is exact: limits and slant lines come from a few far samples,
// vertical asymptotes from probing both sides of each excluded point.

use crate::config::AngleMode;
use crate::eval::evaluate;
use crate::polynomial::Polynomial;
use crate::rational::Rational;
use crate::roots::real_roots;
use parser::ast::{BinaryOp, Expr};
use serde::Serialize;
use std::fmt;
use tracing::trace;

/// Far sample points, irregular so periodic functions do not line up
const FAR_POINTS: [f64; 3] = [1.618_034e6, 1.414_214e7, 1.732_051e8];

/// Points used for secant slopes of slant asymptotes
const SLOPE_POINTS: [f64; 3] = [1.0e5, 1.0e6, 1.0e7];

const CONVERGENCE_TOLERANCE: f64 = 1e-4;

/// Smallest far value accepted as diverging
const DIVERGENCE_THRESHOLD: f64 = 1e6;

/// Each far value must grow by at least this factor to count as diverging
const GROWTH_FACTOR: f64 = 1.5;

/// Distance from an excluded point at which the function is probed
const PROBE_OFFSET: f64 = 1e-7;

/// |f| at the probe beyond which an excluded point is a vertical asymptote
const VERTICAL_THRESHOLD: f64 = 1e5;

/// Limits and line coefficients are reported to this many decimals
const REPORT_DECIMALS: f64 = 1e6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    NegativeInfinity,
    PositiveInfinity,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::NegativeInfinity => -1.0,
            Direction::PositiveInfinity => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Limit {
    Finite { value: f64 },
    PositiveInfinity,
    NegativeInfinity,
    Unknown,
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Finite { value } => write!(f, "{}", parser::display::format_number(*value)),
            Limit::PositiveInfinity => write!(f, "∞"),
            Limit::NegativeInfinity => write!(f, "-∞"),
            Limit::Unknown => write!(f, "unknown"),
        }
    }
}

/// y = slope*x + intercept; slope 0 for horizontal asymptotes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    pub slope: f64,
    pub intercept: f64,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use parser::display::format_number;
        if self.slope == 0.0 {
            return write!(f, "y = {}", format_number(self.intercept));
        }
        let slope = if self.slope == 1.0 {
            String::new()
        } else if self.slope == -1.0 {
            "-".to_string()
        } else {
            format!("{}*", format_number(self.slope))
        };
        match self.intercept {
            b if b > 0.0 => write!(f, "y = {}x + {}", slope, format_number(b)),
            b if b < 0.0 => write!(f, "y = {}x - {}", slope, format_number(-b)),
            _ => write!(f, "y = {}x", slope),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Asymptotes {
    pub vertical: Vec<f64>,
    /// Horizontal or oblique line as x -> -∞
    pub left: Option<Line>,
    /// Horizontal or oblique line as x -> +∞
    pub right: Option<Line>,
    pub limit_left: Limit,
    pub limit_right: Limit,
}

fn round_report(value: f64) -> f64 {
    (value * REPORT_DECIMALS).round() / REPORT_DECIMALS + 0.0
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= CONVERGENCE_TOLERANCE * b.abs().max(1.0)
}

/// Points where a denominator (or the base of a negative power) vanishes.
///
/// Only denominators that are rational functions of x are solved; zeros of
/// the numerator are kept, so removable holes are reported too.
pub fn excluded_points(expr: &Expr) -> Vec<f64> {
    let mut points = Vec::new();
    collect_excluded(expr, &mut points);
    points.sort_by(f64::total_cmp);
    points.dedup();
    points
}

fn collect_excluded(expr: &Expr, points: &mut Vec<f64>) {
    match expr {
        Expr::Number(_) | Expr::Variable | Expr::Constant(_) => {}
        Expr::Unary { expr, .. } => collect_excluded(expr, points),
        Expr::Call { arg, .. } => collect_excluded(arg, points),
        Expr::Binary { op, lhs, rhs } => {
            collect_excluded(lhs, points);
            collect_excluded(rhs, points);
            match op {
                BinaryOp::Div => points.extend(zeros_of_denominator(rhs)),
                BinaryOp::Pow if is_negative_constant(rhs) => {
                    points.extend(zeros_of_denominator(lhs))
                }
                _ => {}
            }
        }
    }
}

fn is_negative_constant(expr: &Expr) -> bool {
    !expr.contains_variable()
        && Polynomial::from_expr(expr)
            .and_then(|p| p.constant_value())
            .is_some_and(|value| value < 0.0)
}

fn zeros_of_denominator(denominator: &Expr) -> Vec<f64> {
    if !denominator.contains_variable() {
        return Vec::new();
    }
    match Rational::from_expr(denominator) {
        Some(rational) => real_roots(&rational.numerator)
            .into_iter()
            .filter(|x| rational.denominator.eval(*x) != 0.0)
            .collect(),
        None => {
            trace!(%denominator, "denominator is not rational, zeros not searched");
            Vec::new()
        }
    }
}

/// Limit of a polynomial from its leading term
fn polynomial_limit(poly: &Polynomial, direction: Direction) -> Limit {
    match poly.degree() {
        None => Limit::Finite { value: 0.0 },
        Some(0) => Limit::Finite {
            value: poly.leading(),
        },
        Some(degree) => {
            let sign = poly.leading().signum() * direction.sign().powi(degree as i32);
            if sign > 0.0 {
                Limit::PositiveInfinity
            } else {
                Limit::NegativeInfinity
            }
        }
    }
}

/// Limit at ±∞ from three far samples
pub fn limit_at_infinity(expr: &Expr, direction: Direction, mode: AngleMode) -> Limit {
    if let Some(poly) = Polynomial::from_expr(expr) {
        return polynomial_limit(&poly, direction);
    }

    let mut values = [0.0; 3];
    for (value, x) in values.iter_mut().zip(FAR_POINTS) {
        match evaluate(expr, direction.sign() * x, mode) {
            Ok(v) if !v.is_nan() => *value = v,
            _ => return Limit::Unknown,
        }
    }
    let [v1, v2, v3] = values;

    if values.iter().all(|v| v.is_infinite()) && v1.signum() == v3.signum() && v2.signum() == v3.signum() {
        return infinite(v3);
    }
    if values.iter().any(|v| v.is_infinite()) {
        return Limit::Unknown;
    }

    if close(v1, v3) && close(v2, v3) {
        return Limit::Finite {
            value: round_report(v3),
        };
    }

    let same_sign = v1.signum() == v2.signum() && v2.signum() == v3.signum();
    let exploding = v2.abs() > GROWTH_FACTOR * v1.abs() && v3.abs() > GROWTH_FACTOR * v2.abs();
    if same_sign && exploding && v3.abs() >= DIVERGENCE_THRESHOLD {
        return infinite(v3);
    }

    Limit::Unknown
}

fn infinite(sample: f64) -> Limit {
    if sample > 0.0 {
        Limit::PositiveInfinity
    } else {
        Limit::NegativeInfinity
    }
}

/// Slant line y = m*x + b when the secant slope and intercept settle
fn oblique_line(expr: &Expr, direction: Direction, mode: AngleMode) -> Option<Line> {
    let xs = SLOPE_POINTS.map(|x| direction.sign() * x);
    let mut ys = [0.0; 3];
    for (y, x) in ys.iter_mut().zip(xs) {
        *y = evaluate(expr, x, mode).ok().filter(|v| v.is_finite())?;
    }

    let m1 = (ys[1] - ys[0]) / (xs[1] - xs[0]);
    let m2 = (ys[2] - ys[1]) / (xs[2] - xs[1]);
    if !close(m1, m2) || round_report(m2) == 0.0 {
        return None;
    }

    let slope = round_report(m2);
    let b1 = ys[1] - slope * xs[1];
    let b2 = ys[2] - slope * xs[2];
    close(b1, b2).then(|| Line {
        slope,
        intercept: round_report(b2),
    })
}

fn line_for(expr: &Expr, limit: Limit, direction: Direction, mode: AngleMode) -> Option<Line> {
    match limit {
        Limit::Finite { value } => Some(Line {
            slope: 0.0,
            intercept: value,
        }),
        Limit::PositiveInfinity | Limit::NegativeInfinity => oblique_line(expr, direction, mode),
        Limit::Unknown => None,
    }
}

/// Excluded points where the function blows up on at least one side
pub fn vertical_asymptotes(expr: &Expr, excluded: &[f64], mode: AngleMode) -> Vec<f64> {
    excluded
        .iter()
        .copied()
        .filter(|&c| {
            [c - PROBE_OFFSET, c + PROBE_OFFSET].iter().any(|&x| {
                evaluate(expr, x, mode)
                    .is_ok_and(|v| !v.is_finite() || v.abs() >= VERTICAL_THRESHOLD)
            })
        })
        .collect()
}

pub fn find_asymptotes(expr: &Expr, excluded: &[f64], mode: AngleMode) -> Asymptotes {
    let limit_left = limit_at_infinity(expr, Direction::NegativeInfinity, mode);
    let limit_right = limit_at_infinity(expr, Direction::PositiveInfinity, mode);

    let (left, right) = if Polynomial::from_expr(expr).is_some() {
        (None, None)
    } else {
        (
            line_for(expr, limit_left, Direction::NegativeInfinity, mode),
            line_for(expr, limit_right, Direction::PositiveInfinity, mode),
        )
    };

    Asymptotes {
        vertical: vertical_asymptotes(expr, excluded, mode),
        left,
        right,
        limit_left,
        limit_right,
    }
}
