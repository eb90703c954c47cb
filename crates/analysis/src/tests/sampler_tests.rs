// Chart Sampler Tests

use super::parse_expr;
use crate::config::AnalysisConfig;
use crate::sampler::{chart_window, sample};

#[test]
fn test_default_window() {
    let config = AnalysisConfig::default();
    assert_eq!(chart_window(&[], &config), (-5.0, 5.0));
}

#[test]
fn test_window_around_points_of_interest() {
    let config = AnalysisConfig::default();
    assert_eq!(chart_window(&[0.0, 2.0, 1.0], &config), (-3.0, 5.0));
    assert_eq!(chart_window(&[1.0, f64::NAN], &config), (-2.0, 4.0));
}

#[test]
fn test_sample_count_and_order() {
    let config = AnalysisConfig::default();
    let samples = sample(&parse_expr("x"), &[], 10, &config);
    assert_eq!(samples.len(), 11);
    assert_eq!(samples[0].x, -5.0);
    assert_eq!(samples[10].x, 5.0);
    assert!(samples.windows(2).all(|pair| pair[0].x < pair[1].x));
}

#[test]
fn test_failed_points_dropped() {
    let config = AnalysisConfig::default();
    assert_eq!(sample(&parse_expr("1/x"), &[], 10, &config).len(), 10);
    assert_eq!(sample(&parse_expr("sqrt(x)"), &[], 10, &config).len(), 6);
}

#[test]
fn test_cutoff_drops_large_values() {
    let config = AnalysisConfig::default();
    let samples = sample(&parse_expr("x^10"), &[], 10, &config);
    assert_eq!(samples.len(), 5);
    assert!(samples.iter().all(|s| s.y.abs() <= config.y_cutoff));
}

#[test]
fn test_zero_target_count() {
    let config = AnalysisConfig::default();
    assert_eq!(sample(&parse_expr("x"), &[], 0, &config).len(), 2);
}
