// Function analysis pipeline
//
// parse -> simplify -> f', f'' -> excluded points -> critical points ->
// inflection points -> intervals -> asymptotes -> samples
//
// Any error aborts the whole call; a partial report is never returned.

use crate::asymptotes::{excluded_points, find_asymptotes, Asymptotes};
use crate::config::AnalysisConfig;
use crate::derivative::derivative;
use crate::error::{AnalysisError, AnalysisResult};
use crate::eval::evaluate;
use crate::intervals::{classify, Concavity, Interval, Monotonicity};
use crate::rational::Rational;
use crate::roots::{snap, solve_roots};
use crate::sampler::{sample, Sample};
use crate::simplify::simplify;
use parser::ast::Expr;
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// Text and LaTeX renderings of one expression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Formula {
    pub text: String,
    pub latex: String,
}

impl Formula {
    pub fn of(expr: &Expr) -> Self {
        Formula {
            text: expr.to_string(),
            latex: expr.to_latex(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CriticalKind {
    LocalMin,
    LocalMax,
    /// Second derivative zero or not finite at the point
    Undetermined,
}

impl fmt::Display for CriticalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriticalKind::LocalMin => write!(f, "local min"),
            CriticalKind::LocalMax => write!(f, "local max"),
            CriticalKind::Undetermined => write!(f, "undetermined"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriticalPoint {
    pub x: f64,
    pub y: f64,
    pub kind: CriticalKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InflectionPoint {
    pub x: f64,
    pub y: f64,
}

/// Diagnostics that do not abort the analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Note {
    /// The derivative is not a rational function; its zeros were not searched
    DerivativeNotRational { order: u8 },
    /// The derivative is identically zero; it has no isolated zeros
    DerivativeVanishes { order: u8 },
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = |order: u8| if order == 1 { "f'" } else { "f''" };
        match self {
            Note::DerivativeNotRational { order } => write!(
                f,
                "{} is not a rational function of x; its zeros were not searched",
                name(*order)
            ),
            Note::DerivativeVanishes { order } => {
                write!(f, "{} is identically zero", name(*order))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    #[serde(skip)]
    pub expr: Expr,
    #[serde(skip)]
    pub first: Expr,
    #[serde(skip)]
    pub second: Expr,

    pub function: Formula,
    pub derivative: Formula,
    pub second_derivative: Formula,

    /// Points outside the domain from vanishing denominators
    pub excluded: Vec<f64>,
    pub critical_points: Vec<CriticalPoint>,
    pub inflection_points: Vec<InflectionPoint>,
    pub monotonicity: Vec<Interval<Monotonicity>>,
    pub concavity: Vec<Interval<Concavity>>,
    pub asymptotes: Asymptotes,
    pub samples: Vec<Sample>,
    pub notes: Vec<Note>,
}

/// Zeros of a derivative
enum Zeros {
    Points(Vec<f64>),
    /// Identically zero
    Everywhere,
    NotRational,
}

pub fn analyze(text: &str, config: &AnalysisConfig) -> AnalysisResult<Analysis> {
    let expr = parser::parse(text)?;
    debug!(input = text, parsed = %expr, "parsed expression");
    analyze_expr(&expr, config)
}

pub fn analyze_expr(parsed: &Expr, config: &AnalysisConfig) -> AnalysisResult<Analysis> {
    let mode = config.angle_mode;

    let expr = simplify(parsed);
    let first = derivative(&expr, mode);
    let second = derivative(&first, mode);
    debug!(f = %expr, f1 = %first, f2 = %second, "derivatives");

    // Holes of the original text count, even when simplification cancels them
    let excluded = excluded_points(parsed);
    debug!(?excluded, "excluded points");

    let mut notes = Vec::new();

    let critical_xs = match zeros_of(&first, config, &excluded)? {
        Zeros::Points(xs) => xs,
        Zeros::Everywhere => {
            notes.push(Note::DerivativeVanishes { order: 1 });
            Vec::new()
        }
        Zeros::NotRational => {
            notes.push(Note::DerivativeNotRational { order: 1 });
            Vec::new()
        }
    };

    let critical_points = critical_xs
        .iter()
        .map(|&x| {
            let y = value_at(&expr, x, config)?;
            let curvature = value_at(&second, x, config)?;
            let kind = if !curvature.is_finite() || curvature.abs() <= config.zero_tolerance {
                CriticalKind::Undetermined
            } else if curvature > 0.0 {
                CriticalKind::LocalMin
            } else {
                CriticalKind::LocalMax
            };
            Ok(CriticalPoint { x, y, kind })
        })
        .collect::<AnalysisResult<Vec<_>>>()?;
    debug!(count = critical_points.len(), "critical points");

    let inflection_xs = match zeros_of(&second, config, &excluded)? {
        Zeros::Points(xs) => xs,
        Zeros::Everywhere => {
            notes.push(Note::DerivativeVanishes { order: 2 });
            Vec::new()
        }
        Zeros::NotRational => {
            notes.push(Note::DerivativeNotRational { order: 2 });
            Vec::new()
        }
    };

    let inflection_points = inflection_xs
        .iter()
        .map(|&x| Ok(InflectionPoint { x, y: value_at(&expr, x, config)? }))
        .collect::<AnalysisResult<Vec<_>>>()?;
    debug!(count = inflection_points.len(), "inflection points");

    let with_excluded = |xs: &[f64]| [xs, excluded.as_slice()].concat();
    let monotonicity = classify(
        |x| evaluate(&first, x, mode),
        &with_excluded(&critical_xs),
    );
    let concavity = classify(
        |x| evaluate(&second, x, mode),
        &with_excluded(&inflection_xs),
    );

    let asymptotes = find_asymptotes(&expr, &excluded, mode);
    debug!(
        vertical = ?asymptotes.vertical,
        left = %asymptotes.limit_left,
        right = %asymptotes.limit_right,
        "asymptotes"
    );

    let points_of_interest: Vec<f64> = critical_xs
        .iter()
        .chain(&inflection_xs)
        .chain(&asymptotes.vertical)
        .copied()
        .collect();
    let samples = sample(&expr, &points_of_interest, config.sample_count, config);
    if samples.is_empty() {
        warn!(f = %expr, "no finite samples in the chart window");
    }

    for note in &notes {
        debug!(%note, "note");
    }

    Ok(Analysis {
        function: Formula::of(&expr),
        derivative: Formula::of(&first),
        second_derivative: Formula::of(&second),
        expr,
        first,
        second,
        excluded,
        critical_points,
        inflection_points,
        monotonicity,
        concavity,
        asymptotes,
        samples,
        notes,
    })
}

fn value_at(expr: &Expr, x: f64, config: &AnalysisConfig) -> AnalysisResult<f64> {
    evaluate(expr, x, config.angle_mode)
        .map(snap)
        .map_err(|source| AnalysisError::Evaluation { x, source })
}

/// Zeros of a derivative that are not poles or excluded points
fn zeros_of(derivative: &Expr, config: &AnalysisConfig, excluded: &[f64]) -> AnalysisResult<Zeros> {
    let Some(rational) = Rational::from_expr(derivative) else {
        return Ok(Zeros::NotRational);
    };
    if rational.numerator.is_zero() {
        return Ok(Zeros::Everywhere);
    }

    let roots = solve_roots(&rational.numerator, config.root_strategy)?;
    let poles = rational.poles();
    let outside = |x: &f64| {
        poles
            .iter()
            .chain(excluded)
            .any(|p| (p - x).abs() <= config.zero_tolerance)
    };
    Ok(Zeros::Points(roots.into_iter().filter(|x| !outside(x)).collect()))
}
