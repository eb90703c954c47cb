// Chart sampling

use crate::config::AnalysisConfig;
use crate::eval::evaluate;
use parser::ast::Expr;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

/// Window around the points of interest, or the default window when there are none
pub fn chart_window(points_of_interest: &[f64], config: &AnalysisConfig) -> (f64, f64) {
    let finite = points_of_interest.iter().copied().filter(|x| x.is_finite());
    let bounds = finite.fold(None, |acc: Option<(f64, f64)>, x| match acc {
        Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
        None => Some((x, x)),
    });
    match bounds {
        Some((lo, hi)) => (lo - config.margin, hi + config.margin),
        None => config.default_window,
    }
}

/// Evenly spaced samples across the chart window.
///
/// `target_count` steps give `target_count + 1` candidate points; points where
/// evaluation fails, the value is non-finite or exceeds the cutoff are dropped.
pub fn sample(
    expr: &Expr,
    points_of_interest: &[f64],
    target_count: usize,
    config: &AnalysisConfig,
) -> Vec<Sample> {
    let (lo, hi) = chart_window(points_of_interest, config);
    let steps = target_count.max(1);
    let step = (hi - lo) / steps as f64;

    (0..=steps)
        .filter_map(|i| {
            let x = lo + i as f64 * step;
            let y = evaluate(expr, x, config.angle_mode).ok()?;
            (y.is_finite() && y.abs() <= config.y_cutoff).then_some(Sample { x, y })
        })
        .collect()
}
