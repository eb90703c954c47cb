// Rational functions of x
//
// A quotient of two polynomials, kept with common powers of x cancelled and
// a denominator whose leading coefficient is positive.

use crate::polynomial::{integer_exponent, Polynomial};
use crate::roots::real_roots;
use parser::ast::{BinaryOp, Expr, UnaryOp};

#[derive(Debug, Clone, PartialEq)]
pub struct Rational {
    pub numerator: Polynomial,
    pub denominator: Polynomial,
}

impl Rational {
    /// Build and reduce; `None` when the denominator is the zero polynomial
    pub fn new(numerator: Polynomial, denominator: Polynomial) -> Option<Rational> {
        if denominator.is_zero() {
            return None;
        }
        Some(Rational {
            numerator,
            denominator,
        }
        .reduce())
    }

    pub fn from_polynomial(poly: Polynomial) -> Rational {
        Rational {
            numerator: poly,
            denominator: Polynomial::constant(1.0),
        }
    }

    fn reduce(self) -> Rational {
        let Rational {
            mut numerator,
            mut denominator,
        } = self;

        if numerator.is_zero() {
            return Rational::from_polynomial(Polynomial::zero());
        }

        let shared = numerator.lowest_power().min(denominator.lowest_power());
        if shared > 0 {
            numerator = numerator.shift_down(shared);
            denominator = denominator.shift_down(shared);
        }

        if let Some(divisor) = denominator.constant_value() {
            return Rational::from_polynomial(numerator.scale(1.0 / divisor));
        }

        if denominator.leading() < 0.0 {
            numerator = -&numerator;
            denominator = -&denominator;
        }

        Rational {
            numerator,
            denominator,
        }
    }

    /// Both sides within `MAX_DEGREE` with finite coefficients
    pub fn is_bounded(&self) -> bool {
        self.numerator.is_bounded() && self.denominator.is_bounded()
    }

    pub fn is_polynomial(&self) -> bool {
        self.denominator.degree() == Some(0)
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.numerator.eval(x) / self.denominator.eval(x)
    }

    pub fn add(&self, rhs: &Rational) -> Rational {
        if self.denominator == rhs.denominator {
            return Rational {
                numerator: &self.numerator + &rhs.numerator,
                denominator: self.denominator.clone(),
            }
            .reduce();
        }
        Rational {
            numerator: &(&self.numerator * &rhs.denominator) + &(&rhs.numerator * &self.denominator),
            denominator: &self.denominator * &rhs.denominator,
        }
        .reduce()
    }

    pub fn negate(&self) -> Rational {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }

    pub fn mul(&self, rhs: &Rational) -> Rational {
        Rational {
            numerator: &self.numerator * &rhs.numerator,
            denominator: &self.denominator * &rhs.denominator,
        }
        .reduce()
    }

    /// `None` when dividing by the zero function
    pub fn div(&self, rhs: &Rational) -> Option<Rational> {
        Rational::new(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
        )
    }

    /// `None` for a zero base with a negative exponent or an unbounded result
    pub fn powi(&self, exponent: i32) -> Option<Rational> {
        let magnitude = exponent.unsigned_abs();
        let numerator = self.numerator.checked_powi(magnitude)?;
        let denominator = self.denominator.checked_powi(magnitude)?;
        if exponent >= 0 {
            Rational::new(numerator, denominator)
        } else {
            Rational::new(denominator, numerator)
        }
    }

    /// Rational form of an expression built from `+ - * /` and integer powers.
    ///
    /// Subtrees whose form is not bounded yield `None` and stay symbolic.
    pub fn from_expr(expr: &Expr) -> Option<Rational> {
        Rational::convert(expr).filter(Rational::is_bounded)
    }

    fn convert(expr: &Expr) -> Option<Rational> {
        match expr {
            Expr::Number(_) | Expr::Variable | Expr::Constant(_) => {
                Polynomial::from_expr(expr).map(Rational::from_polynomial)
            }
            Expr::Unary {
                op: UnaryOp::Negate,
                expr,
            } => Rational::from_expr(expr).map(|r| r.negate()),
            Expr::Binary { op, lhs, rhs } => {
                let lhs = Rational::from_expr(lhs)?;
                let rhs = Rational::from_expr(rhs)?;
                match op {
                    BinaryOp::Add => Some(lhs.add(&rhs)),
                    BinaryOp::Sub => Some(lhs.add(&rhs.negate())),
                    BinaryOp::Mul => Some(lhs.mul(&rhs)),
                    BinaryOp::Div => lhs.div(&rhs),
                    BinaryOp::Pow => {
                        if !rhs.is_polynomial() {
                            return None;
                        }
                        let exponent = integer_exponent(&rhs.numerator)?;
                        lhs.powi(exponent)
                    }
                }
            }
            Expr::Call { .. } => None,
        }
    }

    /// `numerator/denominator`, each side in canonical polynomial form
    pub fn to_expr(&self) -> Expr {
        if self.is_polynomial() {
            return self.numerator.scale(1.0 / self.denominator.leading()).to_expr();
        }
        Expr::div(self.numerator.to_expr(), self.denominator.to_expr())
    }

    /// Real zeros of the denominator
    pub fn poles(&self) -> Vec<f64> {
        real_roots(&self.denominator)
    }
}
