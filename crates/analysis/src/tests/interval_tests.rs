// Interval Classifier Tests
//
// Includes property tests for the partition invariant: the intervals cover
// the real line without gaps or overlaps.

use crate::intervals::{
    classify, normalize_breakpoints, representative_points, Concavity, Interval, Monotonicity,
};
use proptest::prelude::*;

fn first_derivative(x: f64) -> Result<f64, ()> {
    Ok(3.0 * x * x - 6.0 * x)
}

// ==================== BREAKPOINTS ====================

#[test]
fn test_normalize_breakpoints() {
    let points = normalize_breakpoints(&[2.0, f64::NAN, 0.0, 2.0, f64::INFINITY]);
    assert_eq!(points, vec![0.0, 2.0]);
}

#[test]
fn test_representative_points() {
    assert_eq!(representative_points(&[]), vec![0.0]);
    assert_eq!(representative_points(&[1.0]), vec![0.0, 2.0]);
    assert_eq!(representative_points(&[0.0, 2.0]), vec![-1.0, 1.0, 3.0]);
}

// ==================== LABELS ====================

#[test]
fn test_no_breakpoints_single_interval() {
    let intervals: Vec<Interval<Monotonicity>> = classify(|_| Ok::<f64, ()>(1.0), &[]);
    assert_eq!(
        intervals,
        vec![Interval {
            lower: None,
            upper: None,
            label: Monotonicity::Increasing,
        }]
    );
}

#[test]
fn test_cubic_monotonicity() {
    let intervals: Vec<Interval<Monotonicity>> = classify(first_derivative, &[0.0, 2.0]);
    let labels: Vec<_> = intervals.iter().map(|i| i.label).collect();
    assert_eq!(
        labels,
        vec![
            Monotonicity::Increasing,
            Monotonicity::Decreasing,
            Monotonicity::Increasing
        ]
    );
    assert_eq!(intervals[1].lower, Some(0.0));
    assert_eq!(intervals[1].upper, Some(2.0));
}

#[test]
fn test_cubic_concavity() {
    let intervals: Vec<Interval<Concavity>> = classify(|x| Ok::<f64, ()>(6.0 * x - 6.0), &[1.0]);
    let labels: Vec<_> = intervals.iter().map(|i| i.label).collect();
    assert_eq!(labels, vec![Concavity::Concave, Concavity::Convex]);
}

#[test]
fn test_zero_is_decreasing_and_concave() {
    let mono: Vec<Interval<Monotonicity>> = classify(|_| Ok::<f64, ()>(0.0), &[]);
    assert_eq!(mono[0].label, Monotonicity::Decreasing);
    let conc: Vec<Interval<Concavity>> = classify(|_| Ok::<f64, ()>(0.0), &[]);
    assert_eq!(conc[0].label, Concavity::Concave);
}

#[test]
fn test_failure_and_nan_are_undefined() {
    let failed: Vec<Interval<Monotonicity>> = classify(|_| Err("outside domain"), &[]);
    assert_eq!(failed[0].label, Monotonicity::Undefined);
    let nan: Vec<Interval<Concavity>> = classify(|_| Ok::<f64, ()>(f64::NAN), &[]);
    assert_eq!(nan[0].label, Concavity::Undefined);
}

#[test]
fn test_display() {
    let intervals: Vec<Interval<Monotonicity>> = classify(first_derivative, &[0.0, 2.0]);
    assert_eq!(intervals[0].to_string(), "(-∞, 0) increasing");
    assert_eq!(intervals[2].to_string(), "(2, ∞) increasing");
}

// ==================== PARTITION PROPERTIES ====================

proptest! {
    #[test]
    fn prop_intervals_partition_real_line(
        breakpoints in prop::collection::vec(-1e6f64..1e6, 0..12),
    ) {
        let intervals: Vec<Interval<Monotonicity>> =
            classify(|x| Ok::<f64, ()>(x.sin()), &breakpoints);
        let normalized = normalize_breakpoints(&breakpoints);

        prop_assert_eq!(intervals.len(), normalized.len() + 1);
        prop_assert_eq!(intervals[0].lower, None);
        prop_assert_eq!(intervals[intervals.len() - 1].upper, None);

        for pair in intervals.windows(2) {
            prop_assert_eq!(pair[0].upper, pair[1].lower);
        }
        for interval in &intervals {
            if let (Some(lo), Some(hi)) = (interval.lower, interval.upper) {
                prop_assert!(lo < hi);
            }
        }
    }

    #[test]
    fn prop_representatives_inside_their_interval(
        breakpoints in prop::collection::vec(-1e3f64..1e3, 0..12),
    ) {
        let normalized = normalize_breakpoints(&breakpoints);
        let representatives = representative_points(&normalized);
        let intervals: Vec<Interval<Monotonicity>> =
            classify(|_| Ok::<f64, ()>(1.0), &normalized);

        for (interval, x) in intervals.iter().zip(representatives) {
            prop_assert!(interval.contains(x));
        }
    }

    #[test]
    fn prop_duplicates_do_not_add_intervals(
        breakpoints in prop::collection::vec(-100i32..100, 0..8),
    ) {
        let points: Vec<f64> = breakpoints.iter().map(|&b| b as f64).collect();
        let doubled: Vec<f64> = points.iter().chain(&points).copied().collect();
        let once: Vec<Interval<Monotonicity>> = classify(|_| Ok::<f64, ()>(1.0), &points);
        let twice: Vec<Interval<Monotonicity>> = classify(|_| Ok::<f64, ()>(1.0), &doubled);
        prop_assert_eq!(once, twice);
    }
}
