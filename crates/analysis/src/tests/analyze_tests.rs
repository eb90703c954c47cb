// Analyze Pipeline Tests
//
// End-to-end runs of `analyze` on the worked examples.

use crate::analyze::{analyze, CriticalKind, CriticalPoint, InflectionPoint, Note};
use crate::asymptotes::{Limit, Line};
use crate::config::{AnalysisConfig, RootStrategy};
use crate::error::{AnalysisError, EvalError};
use crate::intervals::{Concavity, Monotonicity};

fn run(input: &str) -> crate::analyze::Analysis {
    analyze(input, &AnalysisConfig::default())
        .unwrap_or_else(|e| panic!("analysis of {:?} failed: {}", input, e))
}

// ==================== CUBIC SCENARIO ====================

#[test]
fn test_cubic_derivatives() {
    let analysis = run("x^3 - 3*x^2 + 2");
    assert_eq!(analysis.function.text, "x^3 - 3*x^2 + 2");
    assert_eq!(analysis.derivative.text, "3*x^2 - 6*x");
    assert_eq!(analysis.derivative.latex, "3x^{2} - 6x");
    assert_eq!(analysis.second_derivative.text, "6*x - 6");
}

#[test]
fn test_cubic_critical_points() {
    let analysis = run("x^3 - 3*x^2 + 2");
    assert_eq!(
        analysis.critical_points,
        vec![
            CriticalPoint {
                x: 0.0,
                y: 2.0,
                kind: CriticalKind::LocalMax
            },
            CriticalPoint {
                x: 2.0,
                y: -2.0,
                kind: CriticalKind::LocalMin
            },
        ]
    );
}

#[test]
fn test_cubic_inflection_point() {
    let analysis = run("x^3 - 3*x^2 + 2");
    assert_eq!(analysis.inflection_points, vec![InflectionPoint { x: 1.0, y: 0.0 }]);
}

#[test]
fn test_cubic_intervals() {
    let analysis = run("x^3 - 3*x^2 + 2");

    let mono: Vec<_> = analysis
        .monotonicity
        .iter()
        .map(|i| (i.lower, i.upper, i.label))
        .collect();
    assert_eq!(
        mono,
        vec![
            (None, Some(0.0), Monotonicity::Increasing),
            (Some(0.0), Some(2.0), Monotonicity::Decreasing),
            (Some(2.0), None, Monotonicity::Increasing),
        ]
    );

    let conc: Vec<_> = analysis
        .concavity
        .iter()
        .map(|i| (i.lower, i.upper, i.label))
        .collect();
    assert_eq!(
        conc,
        vec![
            (None, Some(1.0), Concavity::Concave),
            (Some(1.0), None, Concavity::Convex),
        ]
    );
}

#[test]
fn test_cubic_asymptotes_and_samples() {
    let analysis = run("x^3 - 3*x^2 + 2");
    assert!(analysis.excluded.is_empty());
    assert!(analysis.asymptotes.vertical.is_empty());
    assert_eq!(analysis.asymptotes.limit_left, Limit::NegativeInfinity);
    assert_eq!(analysis.asymptotes.limit_right, Limit::PositiveInfinity);
    assert_eq!(analysis.samples.len(), 401);
    assert_eq!(analysis.samples[0].x, -3.0);
    assert!(analysis.notes.is_empty());
}

#[test]
fn test_analyze_is_idempotent() {
    let first = run("x^3 - 3*x^2 + 2");
    let second = run("x^3 - 3*x^2 + 2");
    assert_eq!(first, second);

    // Re-analyzing the simplified text gives the same report
    let again = run(&first.function.text);
    assert_eq!(first, again);
}

// ==================== OTHER SHAPES ====================

#[test]
fn test_quartic_needs_numeric_roots() {
    let analysis = run("x^4 - 2*x^2");
    let kinds: Vec<_> = analysis
        .critical_points
        .iter()
        .map(|p| (p.x, p.y, p.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (-1.0, -1.0, CriticalKind::LocalMin),
            (0.0, 0.0, CriticalKind::LocalMax),
            (1.0, -1.0, CriticalKind::LocalMin),
        ]
    );
    assert_eq!(analysis.inflection_points.len(), 2);
}

#[test]
fn test_closed_form_strategy_rejects_cubic_derivative() {
    let config = AnalysisConfig {
        root_strategy: RootStrategy::ClosedForm,
        ..AnalysisConfig::default()
    };
    let result = analyze("x^4 - 2*x^2", &config);
    assert!(matches!(result, Err(AnalysisError::UnsupportedDegree { degree: 3 })));
}

#[test]
fn test_reciprocal_plus_line() {
    let analysis = run("x + 1/x");
    assert_eq!(analysis.excluded, vec![0.0]);
    assert_eq!(analysis.derivative.text, "(x^2 - 1)/x^2");
    assert_eq!(
        analysis.critical_points,
        vec![
            CriticalPoint {
                x: -1.0,
                y: -2.0,
                kind: CriticalKind::LocalMax
            },
            CriticalPoint {
                x: 1.0,
                y: 2.0,
                kind: CriticalKind::LocalMin
            },
        ]
    );
    let labels: Vec<_> = analysis.monotonicity.iter().map(|i| i.label).collect();
    assert_eq!(
        labels,
        vec![
            Monotonicity::Increasing,
            Monotonicity::Decreasing,
            Monotonicity::Decreasing,
            Monotonicity::Increasing,
        ]
    );
    assert_eq!(analysis.asymptotes.vertical, vec![0.0]);
    let diagonal = Some(Line {
        slope: 1.0,
        intercept: 0.0,
    });
    assert_eq!(analysis.asymptotes.left, diagonal);
    assert_eq!(analysis.asymptotes.right, diagonal);
}

#[test]
fn test_reciprocal_concavity_split_at_pole() {
    let analysis = run("1/x");
    assert!(analysis.critical_points.is_empty());
    assert_eq!(analysis.second_derivative.text, "2/x^3");
    let labels: Vec<_> = analysis.concavity.iter().map(|i| i.label).collect();
    assert_eq!(labels, vec![Concavity::Concave, Concavity::Convex]);
}

#[test]
fn test_linear_function_notes() {
    let analysis = run("2*x + 1");
    assert!(analysis.critical_points.is_empty());
    assert_eq!(analysis.notes, vec![Note::DerivativeVanishes { order: 2 }]);
}

#[test]
fn test_trig_function_notes() {
    let analysis = run("sin(x)");
    assert_eq!(
        analysis.notes,
        vec![
            Note::DerivativeNotRational { order: 1 },
            Note::DerivativeNotRational { order: 2 },
        ]
    );
    assert_eq!(analysis.monotonicity.len(), 1);
    assert_eq!(analysis.derivative.text, "pi/180*cos(x)");
}

// ==================== ERRORS ====================

#[test]
fn test_parse_error_aborts() {
    let result = analyze("3 + (", &AnalysisConfig::default());
    match result {
        Err(error @ AnalysisError::Parse(_)) => assert_eq!(error.exit_code(), 1),
        other => panic!("expected parse error, got {:?}", other.map(|a| a.function)),
    }
}

#[test]
fn test_evaluation_error_at_critical_point() {
    // f' = 2x/(x^2 - 1) vanishes at 0, where ln(-1) is undefined
    let result = analyze("ln(x^2 - 1)", &AnalysisConfig::default());
    match result {
        Err(error @ AnalysisError::Evaluation { .. }) => {
            assert_eq!(error.exit_code(), 101);
            if let AnalysisError::Evaluation { x, source } = error {
                assert_eq!(x, 0.0);
                assert_eq!(source, EvalError::LogDomain(-1.0));
            }
        }
        other => panic!("expected evaluation error, got {:?}", other.map(|a| a.function)),
    }
}

// ==================== COEFFICIENT RANGE ====================

#[test]
fn test_tiny_coefficient_is_not_zero() {
    let analysis = run("(0.000001*x)^2");
    assert!(analysis.notes.is_empty(), "notes: {:?}", analysis.notes);
    assert_ne!(analysis.function.text, "0");
    assert_eq!(analysis.critical_points.len(), 1);
    assert_eq!(analysis.critical_points[0].x, 0.0);
}

#[test]
fn test_huge_nested_power_completes() {
    let analysis = run("((x+1)^64)^64");
    assert!(analysis.notes.contains(&Note::DerivativeNotRational { order: 1 }));
    assert!(analysis.function.text.ends_with(")^64"));
}
