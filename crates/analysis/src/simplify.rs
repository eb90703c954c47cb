// Expression simplification
//
// Two stages run until nothing changes:
// 1. `fold`: bottom-up rewriting (numeric folding, identities, sign handling,
//    coefficients moved to the front)
// 2. `canonicalize`: every subtree that is a rational function of x and
//    contains no named constant is rebuilt from its coefficients, so like
//    terms merge and polynomials read in descending powers
//
// Function calls are never folded: `sin(30)` stays symbolic.

use crate::eval::apply_binary;
use crate::rational::Rational;
use parser::ast::{BinaryOp, Expr, UnaryOp};

const MAX_PASSES: usize = 8;

pub fn simplify(expr: &Expr) -> Expr {
    let mut current = fold(expr);
    for _ in 0..MAX_PASSES {
        let next = fold(&canonicalize(&current));
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// Bottom-up rewriting with local rules only
pub fn fold(expr: &Expr) -> Expr {
    match expr {
        Expr::Number(_) | Expr::Variable | Expr::Constant(_) => expr.clone(),
        Expr::Unary {
            op: UnaryOp::Negate,
            expr,
        } => negate(fold(expr)),
        Expr::Binary { op, lhs, rhs } => fold_binary(*op, fold(lhs), fold(rhs)),
        Expr::Call { func, arg } => Expr::call(*func, fold(arg)),
    }
}

fn negate(expr: Expr) -> Expr {
    match expr {
        Expr::Number(value) => Expr::Number(-value),
        Expr::Unary { expr, .. } => *expr,
        // -(3*x) = -3*x
        Expr::Binary {
            op: BinaryOp::Mul,
            lhs,
            rhs,
        } if matches!(*lhs, Expr::Number(_)) => fold_binary(BinaryOp::Mul, negate(*lhs), *rhs),
        other => Expr::neg(other),
    }
}

/// Split `-a` into `a`
fn strip_negation(expr: &Expr) -> Option<&Expr> {
    match expr {
        Expr::Unary {
            op: UnaryOp::Negate,
            expr,
        } => Some(expr),
        _ => None,
    }
}

fn fold_binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    if let (Expr::Number(a), Expr::Number(b)) = (&lhs, &rhs) {
        if let Ok(value) = apply_binary(op, *a, *b) {
            if value.is_finite() {
                return Expr::Number(value);
            }
        }
        return Expr::binary(op, lhs, rhs);
    }

    match op {
        BinaryOp::Add => fold_add(lhs, rhs),
        BinaryOp::Sub => fold_sub(lhs, rhs),
        BinaryOp::Mul => fold_mul(lhs, rhs),
        BinaryOp::Div => fold_div(lhs, rhs),
        BinaryOp::Pow => fold_pow(lhs, rhs),
    }
}

fn fold_add(lhs: Expr, rhs: Expr) -> Expr {
    if lhs.is_number(0.0) {
        return rhs;
    }
    if rhs.is_number(0.0) {
        return lhs;
    }
    if let Some(inner) = strip_negation(&rhs) {
        return fold_sub(lhs, inner.clone());
    }
    if let Expr::Number(value) = rhs {
        if value < 0.0 {
            return fold_sub(lhs, Expr::Number(-value));
        }
    }
    Expr::add(lhs, rhs)
}

fn fold_sub(lhs: Expr, rhs: Expr) -> Expr {
    if rhs.is_number(0.0) {
        return lhs;
    }
    if lhs.is_number(0.0) {
        return negate(rhs);
    }
    if lhs == rhs {
        return Expr::Number(0.0);
    }
    if let Some(inner) = strip_negation(&rhs) {
        return fold_add(lhs, inner.clone());
    }
    if let Expr::Number(value) = rhs {
        if value < 0.0 {
            return fold_add(lhs, Expr::Number(-value));
        }
    }
    Expr::sub(lhs, rhs)
}

fn fold_mul(lhs: Expr, rhs: Expr) -> Expr {
    if lhs.is_number(0.0) || rhs.is_number(0.0) {
        return Expr::Number(0.0);
    }
    if lhs.is_number(1.0) {
        return rhs;
    }
    if rhs.is_number(1.0) {
        return lhs;
    }
    if lhs.is_number(-1.0) {
        return negate(rhs);
    }
    if rhs.is_number(-1.0) {
        return negate(lhs);
    }
    if let Some(inner) = strip_negation(&lhs) {
        return negate(fold_mul(inner.clone(), rhs));
    }
    if let Some(inner) = strip_negation(&rhs) {
        return negate(fold_mul(lhs, inner.clone()));
    }

    // Coefficient first: x*3 = 3*x, cos(x)*(pi/180) = pi/180*cos(x)
    if lhs.contains_variable() && !rhs.contains_variable() {
        return fold_mul(rhs, lhs);
    }
    if !matches!(lhs, Expr::Number(_)) && matches!(rhs, Expr::Number(_)) {
        return fold_mul(rhs, lhs);
    }

    // 2*(3*x) = 6*x
    if let Expr::Number(a) = lhs {
        if let Expr::Binary {
            op: BinaryOp::Mul,
            lhs: inner_lhs,
            rhs: inner_rhs,
        } = &rhs
        {
            if let Expr::Number(b) = **inner_lhs {
                return fold_mul(Expr::Number(a * b), (**inner_rhs).clone());
            }
        }
    }

    Expr::mul(lhs, rhs)
}

fn fold_div(lhs: Expr, rhs: Expr) -> Expr {
    if lhs.is_number(0.0) && !rhs.is_number(0.0) {
        return Expr::Number(0.0);
    }
    if rhs.is_number(1.0) {
        return lhs;
    }
    if rhs.is_number(-1.0) {
        return negate(lhs);
    }
    if let Some(inner) = strip_negation(&rhs) {
        return negate(fold_div(lhs, inner.clone()));
    }
    Expr::div(lhs, rhs)
}

fn fold_pow(lhs: Expr, rhs: Expr) -> Expr {
    if rhs.is_number(1.0) {
        return lhs;
    }
    if rhs.is_number(0.0) || lhs.is_number(1.0) {
        return Expr::Number(1.0);
    }
    if let Expr::Number(exponent) = rhs {
        if lhs.is_number(0.0) && exponent > 0.0 {
            return Expr::Number(0.0);
        }
    }
    Expr::pow(lhs, rhs)
}

fn contains_constant(expr: &Expr) -> bool {
    match expr {
        Expr::Constant(_) => true,
        Expr::Number(_) | Expr::Variable => false,
        Expr::Unary { expr, .. } => contains_constant(expr),
        Expr::Binary { lhs, rhs, .. } => contains_constant(lhs) || contains_constant(rhs),
        Expr::Call { arg, .. } => contains_constant(arg),
    }
}

/// Rebuild rational subtrees from their coefficients
pub fn canonicalize(expr: &Expr) -> Expr {
    if expr.contains_variable() && !contains_constant(expr) {
        if let Some(rational) = Rational::from_expr(expr) {
            return rational.to_expr();
        }
    }
    match expr {
        Expr::Number(_) | Expr::Variable | Expr::Constant(_) => expr.clone(),
        Expr::Unary { op, expr } => Expr::Unary {
            op: *op,
            expr: Box::new(canonicalize(expr)),
        },
        Expr::Binary { op, lhs, rhs } => Expr::binary(*op, canonicalize(lhs), canonicalize(rhs)),
        Expr::Call { func, arg } => Expr::call(*func, canonicalize(arg)),
    }
}
