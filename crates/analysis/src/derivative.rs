// Symbolic differentiation with respect to x

use crate::config::AngleMode;
use crate::simplify::simplify;
use parser::ast::{BinaryOp, Expr, Function, UnaryOp};

/// Simplified first derivative
pub fn derivative(expr: &Expr, mode: AngleMode) -> Expr {
    simplify(&differentiate(expr, mode))
}

/// Simplified derivative of the given order; order 0 is the simplified expression
pub fn nth_derivative(expr: &Expr, order: usize, mode: AngleMode) -> Expr {
    (0..order).fold(simplify(expr), |current, _| derivative(&current, mode))
}

/// Raw structural derivative, before simplification
pub fn differentiate(expr: &Expr, mode: AngleMode) -> Expr {
    match expr {
        Expr::Number(_) | Expr::Constant(_) => Expr::Number(0.0),
        Expr::Variable => Expr::Number(1.0),
        Expr::Unary {
            op: UnaryOp::Negate,
            expr,
        } => Expr::neg(differentiate(expr, mode)),
        Expr::Binary { op, lhs, rhs } => differentiate_binary(*op, lhs, rhs, mode),
        Expr::Call { func, arg } => differentiate_call(*func, arg, mode),
    }
}

fn differentiate_binary(op: BinaryOp, u: &Expr, v: &Expr, mode: AngleMode) -> Expr {
    let du = || differentiate(u, mode);
    let dv = || differentiate(v, mode);

    match op {
        BinaryOp::Add => Expr::add(du(), dv()),
        BinaryOp::Sub => Expr::sub(du(), dv()),
        // (uv)' = u'v + uv'
        BinaryOp::Mul => Expr::add(Expr::mul(du(), v.clone()), Expr::mul(u.clone(), dv())),
        // (u/v)' = (u'v - uv')/v^2
        BinaryOp::Div => Expr::div(
            Expr::sub(Expr::mul(du(), v.clone()), Expr::mul(u.clone(), dv())),
            Expr::pow(v.clone(), Expr::Number(2.0)),
        ),
        BinaryOp::Pow => differentiate_power(u, v, mode),
    }
}

fn differentiate_power(base: &Expr, exponent: &Expr, mode: AngleMode) -> Expr {
    let power = Expr::pow(base.clone(), exponent.clone());
    let ln_base = || Expr::call(Function::Ln, base.clone());

    match (base.contains_variable(), exponent.contains_variable()) {
        (_, false) => {
            // (u^c)' = c*u^(c - 1)*u'
            let lowered = Expr::pow(
                base.clone(),
                Expr::sub(exponent.clone(), Expr::Number(1.0)),
            );
            Expr::mul(
                Expr::mul(exponent.clone(), lowered),
                differentiate(base, mode),
            )
        }
        (false, true) => {
            // (c^v)' = c^v*ln(c)*v'
            Expr::mul(Expr::mul(power, ln_base()), differentiate(exponent, mode))
        }
        (true, true) => {
            // (u^v)' = u^v*(v'*ln(u) + v*u'/u)
            let inner = Expr::add(
                Expr::mul(differentiate(exponent, mode), ln_base()),
                Expr::div(
                    Expr::mul(exponent.clone(), differentiate(base, mode)),
                    base.clone(),
                ),
            );
            Expr::mul(power, inner)
        }
    }
}

fn differentiate_call(func: Function, arg: &Expr, mode: AngleMode) -> Expr {
    let mut inner = differentiate(arg, mode);
    // Degree mode reads the argument in degrees: d/dx sin(x°) = cos(x°)*pi/180
    if func.is_trigonometric() {
        if let Some(factor) = mode.chain_factor() {
            inner = Expr::mul(factor, inner);
        }
    }
    let at = |f: Function| Expr::call(f, arg.clone());
    let squared = |e: Expr| Expr::pow(e, Expr::Number(2.0));

    match func {
        Function::Sin => Expr::mul(at(Function::Cos), inner),
        Function::Cos => Expr::neg(Expr::mul(at(Function::Sin), inner)),
        Function::Tan => Expr::div(inner, squared(at(Function::Cos))),
        Function::Cot => Expr::neg(Expr::div(inner, squared(at(Function::Sin)))),
        Function::Log => Expr::div(
            inner,
            Expr::mul(arg.clone(), Expr::call(Function::Ln, Expr::Number(10.0))),
        ),
        Function::Ln => Expr::div(inner, arg.clone()),
        Function::Sqrt => Expr::div(
            inner,
            Expr::mul(Expr::Number(2.0), at(Function::Sqrt)),
        ),
    }
}
