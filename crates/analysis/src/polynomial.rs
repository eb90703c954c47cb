// Dense univariate polynomials
//
// Coefficients are stored low degree first; trailing zeros are always trimmed,
// so the zero polynomial has no coefficients at all. Sums that cancel down to
// rounding noise are stored as exact zeros; small genuine coefficients are kept.

use crate::error::{AnalysisError, AnalysisResult};
use parser::ast::{BinaryOp, Expr, UnaryOp};
use serde::Serialize;
use std::ops::{Add, Mul, Neg, Sub};

/// Largest integer exponent expanded symbolically
pub const MAX_POWER: u32 = 64;

/// Largest degree kept in coefficient form; larger products stay symbolic
pub const MAX_DEGREE: usize = 64;

/// A sum whose magnitude is at most this fraction of its terms' magnitudes is zero
const CANCEL_EPSILON: f64 = 1e-12;

fn cancel(sum: f64, scale: f64) -> f64 {
    if sum.is_finite() && sum.abs() <= CANCEL_EPSILON * scale {
        0.0
    } else {
        sum
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    pub fn new(coeffs: Vec<f64>) -> Self {
        let mut poly = Polynomial { coeffs };
        poly.trim();
        poly
    }

    pub fn zero() -> Self {
        Polynomial { coeffs: Vec::new() }
    }

    pub fn constant(value: f64) -> Self {
        Polynomial::new(vec![value])
    }

    /// The polynomial `x`
    pub fn identity() -> Self {
        Polynomial::new(vec![0.0, 1.0])
    }

    fn trim(&mut self) {
        while self
            .coeffs
            .last()
            .is_some_and(|c| *c == 0.0)
        {
            self.coeffs.pop();
        }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// The value when the polynomial has degree 0 (or is zero)
    pub fn constant_value(&self) -> Option<f64> {
        match self.coeffs.len() {
            0 => Some(0.0),
            1 => Some(self.coeffs[0]),
            _ => None,
        }
    }

    pub fn leading(&self) -> f64 {
        self.coeffs.last().copied().unwrap_or(0.0)
    }

    /// Horner evaluation
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
    }

    /// Sum of |a_i| |x|^i, the scale against which `eval` noise is judged
    pub fn magnitude_at(&self, x: f64) -> f64 {
        let x = x.abs();
        self.coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c.abs())
    }

    pub fn derivative(&self) -> Polynomial {
        Polynomial::new(
            self.coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(power, c)| c * power as f64)
                .collect(),
        )
    }

    pub fn scale(&self, factor: f64) -> Polynomial {
        Polynomial::new(self.coeffs.iter().map(|c| c * factor).collect())
    }

    pub fn powi(&self, exponent: u32) -> Polynomial {
        (0..exponent).fold(Polynomial::constant(1.0), |acc, _| &acc * self)
    }

    /// Degree within `MAX_DEGREE` and every coefficient finite
    pub fn is_bounded(&self) -> bool {
        self.degree().is_none_or(|d| d <= MAX_DEGREE) && self.coeffs.iter().all(|c| c.is_finite())
    }

    /// `powi`, or `None` when the result would not be bounded
    pub fn checked_powi(&self, exponent: u32) -> Option<Polynomial> {
        let degree = self.degree().unwrap_or(0);
        if degree.checked_mul(exponent as usize)? > MAX_DEGREE {
            return None;
        }
        Some(self.powi(exponent)).filter(Polynomial::is_bounded)
    }

    /// Number of factors of `x` shared by every term
    pub fn lowest_power(&self) -> usize {
        self.coeffs.iter().take_while(|c| **c == 0.0).count()
    }

    /// Divide by `x^count`; the caller guarantees `count <= lowest_power()`
    pub fn shift_down(&self, count: usize) -> Polynomial {
        Polynomial::new(self.coeffs.iter().skip(count).copied().collect())
    }

    /// Coefficient extraction over the expression tree.
    ///
    /// Accepts numbers, `x`, named constants, `+ - *`, division by a non-zero
    /// constant and non-negative integer powers. Anything else, including
    /// every function call, yields `None`, as does a result that is not
    /// bounded (degree above `MAX_DEGREE` or a non-finite coefficient).
    pub fn from_expr(expr: &Expr) -> Option<Polynomial> {
        Polynomial::convert(expr).filter(Polynomial::is_bounded)
    }

    fn convert(expr: &Expr) -> Option<Polynomial> {
        match expr {
            Expr::Number(value) => value.is_finite().then(|| Polynomial::constant(*value)),
            Expr::Variable => Some(Polynomial::identity()),
            Expr::Constant(constant) => Some(Polynomial::constant(constant.value())),
            Expr::Unary {
                op: UnaryOp::Negate,
                expr,
            } => Polynomial::from_expr(expr).map(|p| -&p),
            Expr::Binary { op, lhs, rhs } => {
                let lhs = Polynomial::from_expr(lhs)?;
                let rhs = Polynomial::from_expr(rhs)?;
                match op {
                    BinaryOp::Add => Some(&lhs + &rhs),
                    BinaryOp::Sub => Some(&lhs - &rhs),
                    BinaryOp::Mul => Some(&lhs * &rhs),
                    BinaryOp::Div => {
                        let divisor = rhs.constant_value()?;
                        (divisor != 0.0).then(|| lhs.scale(1.0 / divisor))
                    }
                    BinaryOp::Pow => {
                        let exponent = integer_exponent(&rhs)?;
                        u32::try_from(exponent).ok().and_then(|n| lhs.checked_powi(n))
                    }
                }
            }
            Expr::Call { .. } => None,
        }
    }

    /// Canonical expression: descending powers, coefficient first, signs folded into `-`
    pub fn to_expr(&self) -> Expr {
        let mut result: Option<Expr> = None;

        for (power, &c) in self.coeffs.iter().enumerate().rev() {
            if c == 0.0 {
                continue;
            }
            result = Some(match result {
                None => term(c, power),
                Some(acc) if c < 0.0 => Expr::sub(acc, term(-c, power)),
                Some(acc) => Expr::add(acc, term(c, power)),
            });
        }

        result.unwrap_or(Expr::Number(0.0))
    }
}

/// Integer value of a constant polynomial within `MAX_POWER`
pub(crate) fn integer_exponent(exponent: &Polynomial) -> Option<i32> {
    let value = exponent.constant_value()?;
    let limit = MAX_POWER as f64;
    (value.fract() == 0.0 && value.abs() <= limit).then_some(value as i32)
}

/// `c*x^power` with the unit coefficient elided
fn term(c: f64, power: usize) -> Expr {
    if power == 0 {
        return Expr::Number(c);
    }
    let monomial = if power == 1 {
        Expr::Variable
    } else {
        Expr::pow(Expr::Variable, Expr::Number(power as f64))
    };
    if c == 1.0 {
        monomial
    } else if c == -1.0 {
        Expr::neg(monomial)
    } else {
        Expr::mul(Expr::Number(c), monomial)
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        Polynomial::new(
            (0..len)
                .map(|i| {
                    let a = self.coeffs.get(i).copied().unwrap_or(0.0);
                    let b = rhs.coeffs.get(i).copied().unwrap_or(0.0);
                    cancel(a + b, a.abs() + b.abs())
                })
                .collect(),
        )
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        self + &(-rhs)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero();
        }
        let len = self.coeffs.len() + rhs.coeffs.len() - 1;
        let mut coeffs = vec![0.0; len];
        let mut scales = vec![0.0; len];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
                scales[i + j] += (a * b).abs();
            }
        }
        Polynomial::new(
            coeffs
                .into_iter()
                .zip(scales)
                .map(|(sum, scale)| cancel(sum, scale))
                .collect(),
        )
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.scale(-1.0)
    }
}

/// `true` when the expression converts to a polynomial; never true for a non-polynomial
pub fn is_polynomial(expr: &Expr) -> bool {
    Polynomial::from_expr(expr).is_some()
}

/// Coefficients, low degree first
pub fn coefficients(expr: &Expr) -> AnalysisResult<Polynomial> {
    Polynomial::from_expr(expr).ok_or_else(|| AnalysisError::NotPolynomial(expr.to_string()))
}
