// Polynomial Tests
//
// Coefficient extraction, the polynomial predicate and canonical rebuilding.

use super::parse_expr;
use crate::error::AnalysisError;
use crate::polynomial::{coefficients, is_polynomial, Polynomial};

// ==================== EXTRACTION ====================

#[test]
fn test_coefficients_low_degree_first() {
    let poly = coefficients(&parse_expr("x^3 - 3*x^2 + 2")).unwrap();
    assert_eq!(poly.coefficients(), &[2.0, 0.0, -3.0, 1.0]);
    assert_eq!(poly.degree(), Some(3));
}

#[test]
fn test_expansion_of_products() {
    let poly = coefficients(&parse_expr("(x + 1)*(x - 1)")).unwrap();
    assert_eq!(poly.coefficients(), &[-1.0, 0.0, 1.0]);
}

#[test]
fn test_division_by_constant() {
    let poly = coefficients(&parse_expr("x/2 + 1")).unwrap();
    assert_eq!(poly.coefficients(), &[1.0, 0.5]);
}

#[test]
fn test_trailing_zeros_trimmed() {
    let poly = coefficients(&parse_expr("x^2 + x - x^2")).unwrap();
    assert_eq!(poly.coefficients(), &[0.0, 1.0]);
    assert_eq!(Polynomial::new(vec![0.0, 0.0]).degree(), None);
    assert!(Polynomial::new(vec![0.0]).is_zero());
}

#[test]
fn test_not_polynomial_error() {
    let result = coefficients(&parse_expr("sqrt(x)"));
    assert!(matches!(result, Err(AnalysisError::NotPolynomial(_))));
}

// ==================== PREDICATE ====================

#[test]
fn test_is_polynomial_accepts() {
    for input in ["7", "x", "pi*x", "3*x^2 - 6*x", "x/2", "(x + 1)^3", "-x"] {
        assert!(is_polynomial(&parse_expr(input)), "{} should be polynomial", input);
    }
}

#[test]
fn test_is_polynomial_rejects() {
    for input in ["sin(x)", "2/x", "x^0.5", "x^-1", "2^x", "x/(x - 0)", "ln(2)*x"] {
        assert!(!is_polynomial(&parse_expr(input)), "{} should not be polynomial", input);
    }
}

// ==================== OPERATIONS ====================

#[test]
fn test_horner_evaluation() {
    let poly = Polynomial::new(vec![2.0, 0.0, -3.0, 1.0]);
    assert_eq!(poly.eval(0.0), 2.0);
    assert_eq!(poly.eval(2.0), -2.0);
}

#[test]
fn test_derivative() {
    let poly = Polynomial::new(vec![2.0, 0.0, -3.0, 1.0]);
    assert_eq!(poly.derivative().coefficients(), &[0.0, -6.0, 3.0]);
    assert!(Polynomial::constant(4.0).derivative().is_zero());
}

#[test]
fn test_canonical_expression() {
    let poly = Polynomial::new(vec![0.0, -6.0, 3.0]);
    assert_eq!(poly.to_expr().to_string(), "3*x^2 - 6*x");

    let poly = Polynomial::new(vec![-1.0, 0.0, -2.0]);
    assert_eq!(poly.to_expr().to_string(), "-2*x^2 - 1");

    let poly = Polynomial::new(vec![1.0, 0.0, -1.0]);
    assert_eq!(poly.to_expr().to_string(), "-x^2 + 1");

    assert_eq!(Polynomial::zero().to_expr().to_string(), "0");
}

// ==================== BOUNDS ====================

#[test]
fn test_small_coefficients_are_kept() {
    let poly = coefficients(&parse_expr("(0.000001*x)^2")).unwrap();
    assert_eq!(poly.degree(), Some(2));
    assert!((poly.leading() - 1e-12).abs() <= 1e-24);
}

#[test]
fn test_cancelled_sum_is_exact_zero() {
    let poly = coefficients(&parse_expr("0.1*x + 0.2*x - 0.3*x")).unwrap();
    assert!(poly.is_zero());
    let quadratic = coefficients(&parse_expr("(0.1*x + 0.2)*(0.3*x - 0.6)")).unwrap();
    assert_eq!(quadratic.coefficients()[1], 0.0);
}

#[test]
fn test_degree_is_capped() {
    assert!(is_polynomial(&parse_expr("(x + 1)^64")));
    assert!(!is_polynomial(&parse_expr("((x + 1)^64)^64")));
    assert!(!is_polynomial(&parse_expr("x^40*x^40")));
    assert!(matches!(
        coefficients(&parse_expr("((x + 1)^64)^64")),
        Err(AnalysisError::NotPolynomial(_))
    ));
}

#[test]
fn test_checked_power() {
    let base = coefficients(&parse_expr("x + 1")).unwrap();
    assert_eq!(base.checked_powi(64).map(|p| p.degree()), Some(Some(64)));
    assert!(base.checked_powi(65).is_none());
    assert!(Polynomial::constant(1e300).checked_powi(2).is_none());
}

#[test]
fn test_rational_conversion_is_capped() {
    use crate::rational::Rational;
    assert!(Rational::from_expr(&parse_expr("1/(x + 1)^64")).is_some());
    assert!(Rational::from_expr(&parse_expr("1/((x + 1)^64)^2")).is_none());
}
