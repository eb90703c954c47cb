// Point evaluation of expressions
//
// Domain violations are errors; values that are merely non-finite (overflow,
// tan at its poles) come back as NaN or infinity for the caller to filter.

use crate::config::AngleMode;
use crate::error::EvalError;
use parser::ast::{BinaryOp, Expr, Function, UnaryOp};

/// |cos| (for tan) or |sin| (for cot) below this counts as a pole
pub const ASYMPTOTE_EPSILON: f64 = 1e-10;

pub fn evaluate(expr: &Expr, x: f64, mode: AngleMode) -> Result<f64, EvalError> {
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::Variable => Ok(x),
        Expr::Constant(constant) => Ok(constant.value()),
        Expr::Unary {
            op: UnaryOp::Negate,
            expr,
        } => Ok(-evaluate(expr, x, mode)?),
        Expr::Binary { op, lhs, rhs } => {
            let lhs = evaluate(lhs, x, mode)?;
            let rhs = evaluate(rhs, x, mode)?;
            apply_binary(*op, lhs, rhs)
        }
        Expr::Call { func, arg } => apply_function(*func, evaluate(arg, x, mode)?, mode),
    }
}

/// Evaluate a variable-free expression
pub fn evaluate_constant(expr: &Expr, mode: AngleMode) -> Result<f64, EvalError> {
    evaluate(expr, 0.0, mode)
}

pub fn apply_binary(op: BinaryOp, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
    match op {
        BinaryOp::Add => Ok(lhs + rhs),
        BinaryOp::Sub => Ok(lhs - rhs),
        BinaryOp::Mul => Ok(lhs * rhs),
        BinaryOp::Div => {
            if rhs == 0.0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(lhs / rhs)
            }
        }
        BinaryOp::Pow => power(lhs, rhs),
    }
}

fn power(base: f64, exponent: f64) -> Result<f64, EvalError> {
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    if base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
        return Err(EvalError::NegativeBase(base));
    }
    Ok(base.powf(exponent))
}

pub fn apply_function(func: Function, value: f64, mode: AngleMode) -> Result<f64, EvalError> {
    match func {
        Function::Sin => Ok(mode.to_radians(value).sin()),
        Function::Cos => Ok(mode.to_radians(value).cos()),
        Function::Tan => {
            let angle = mode.to_radians(value);
            if angle.cos().abs() < ASYMPTOTE_EPSILON {
                Ok(f64::NAN)
            } else {
                Ok(angle.tan())
            }
        }
        Function::Cot => {
            let angle = mode.to_radians(value);
            let sin = angle.sin();
            if sin.abs() < ASYMPTOTE_EPSILON {
                Ok(f64::NAN)
            } else {
                Ok(angle.cos() / sin)
            }
        }
        Function::Log => {
            if value <= 0.0 {
                Err(EvalError::LogDomain(value))
            } else {
                Ok(value.log10())
            }
        }
        Function::Ln => {
            if value <= 0.0 {
                Err(EvalError::LogDomain(value))
            } else {
                Ok(value.ln())
            }
        }
        Function::Sqrt => {
            if value < 0.0 {
                Err(EvalError::NegativeSqrt(value))
            } else {
                Ok(value.sqrt())
            }
        }
    }
}
