// Sign-based interval classification
//
// Breakpoints split the real line into open intervals; each interval takes the
// label of the test function's sign at one representative point.

use parser::display::format_number;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Monotonicity {
    Increasing,
    Decreasing,
    Undefined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Concavity {
    Convex,
    Concave,
    Undefined,
}

/// Label chosen from the sign of a test value
pub trait SignLabel: Copy {
    fn positive() -> Self;

    /// Negative values and exact ties
    fn non_positive() -> Self;

    /// The test failed or returned a non-finite value
    fn undefined() -> Self;

    fn from_value(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() && v > 0.0 => Self::positive(),
            Some(v) if v.is_finite() => Self::non_positive(),
            _ => Self::undefined(),
        }
    }
}

impl SignLabel for Monotonicity {
    fn positive() -> Self {
        Monotonicity::Increasing
    }

    fn non_positive() -> Self {
        Monotonicity::Decreasing
    }

    fn undefined() -> Self {
        Monotonicity::Undefined
    }
}

impl SignLabel for Concavity {
    fn positive() -> Self {
        Concavity::Convex
    }

    fn non_positive() -> Self {
        Concavity::Concave
    }

    fn undefined() -> Self {
        Concavity::Undefined
    }
}

impl fmt::Display for Monotonicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Monotonicity::Increasing => write!(f, "increasing"),
            Monotonicity::Decreasing => write!(f, "decreasing"),
            Monotonicity::Undefined => write!(f, "undefined"),
        }
    }
}

impl fmt::Display for Concavity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Concavity::Convex => write!(f, "convex"),
            Concavity::Concave => write!(f, "concave"),
            Concavity::Undefined => write!(f, "undefined"),
        }
    }
}

/// Open interval; `None` bounds stand for -∞ and +∞
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interval<L> {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub label: L,
}

impl<L> Interval<L> {
    pub fn contains(&self, x: f64) -> bool {
        self.lower.is_none_or(|lo| x > lo) && self.upper.is_none_or(|hi| x < hi)
    }
}

impl<L: fmt::Display> fmt::Display for Interval<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lower = self.lower.map_or("-∞".to_string(), format_number);
        let upper = self.upper.map_or("∞".to_string(), format_number);
        write!(f, "({}, {}) {}", lower, upper, self.label)
    }
}

/// Drop non-finite values, sort, remove duplicates
pub fn normalize_breakpoints(breakpoints: &[f64]) -> Vec<f64> {
    let mut points: Vec<f64> = breakpoints.iter().copied().filter(|x| x.is_finite()).collect();
    points.sort_by(f64::total_cmp);
    points.dedup();
    points
}

/// One test point per interval, in order
pub fn representative_points(breakpoints: &[f64]) -> Vec<f64> {
    match (breakpoints.first(), breakpoints.last()) {
        (Some(first), Some(last)) => {
            let mut points = Vec::with_capacity(breakpoints.len() + 1);
            points.push(first - 1.0);
            points.extend(breakpoints.windows(2).map(|pair| 0.5 * (pair[0] + pair[1])));
            points.push(last + 1.0);
            points
        }
        _ => vec![0.0],
    }
}

/// Partition the real line at `breakpoints` and label every piece by the sign of `test`
pub fn classify<L, F, E>(test: F, breakpoints: &[f64]) -> Vec<Interval<L>>
where
    L: SignLabel,
    F: Fn(f64) -> Result<f64, E>,
{
    let points = normalize_breakpoints(breakpoints);
    let representatives = representative_points(&points);

    representatives
        .iter()
        .enumerate()
        .map(|(i, &x)| Interval {
            lower: i.checked_sub(1).map(|j| points[j]),
            upper: points.get(i).copied(),
            label: L::from_value(test(x).ok()),
        })
        .collect()
}
