// Textual and LaTeX rendering of expressions
//
// The text form re-parses to an equivalent expression; the LaTeX form feeds the formula renderer.

use crate::ast::{BinaryOp, Constant, Expr, Function, PREC_NEGATE, PREC_PRODUCT};
use std::fmt;

/// Format a number with at most 10 decimal places and no trailing zeros.
///
/// Rounding only hides floating noise (`0.1 + 0.2` prints `0.3`); a value that
/// rounding would change by more than a relative 1e-9, such as `1e-12`, is
/// printed in full so the text re-parses to the same number.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    if value.abs() >= 1e15 {
        return format!("{}", value);
    }
    let rounded = (value * 1e10).round() / 1e10;
    if (rounded - value).abs() > 1e-9 * value.abs() {
        return format!("{}", value);
    }
    // -0 prints as 0
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

/// Parenthesization for the two operands of a binary node
fn operand_parens(op: BinaryOp, lhs: &Expr, rhs: &Expr) -> (bool, bool) {
    let prec = op.precedence();
    let lhs_prec = lhs.precedence();
    let rhs_prec = rhs.precedence();
    // A signed right operand is always wrapped: a*(-b), x^(-1)
    let rhs_signed = rhs_prec == PREC_NEGATE;
    match op {
        BinaryOp::Pow => (lhs_prec <= prec, rhs_prec < prec || rhs_signed),
        BinaryOp::Sub | BinaryOp::Div => (lhs_prec < prec, rhs_prec <= prec || rhs_signed),
        BinaryOp::Add | BinaryOp::Mul => (lhs_prec < prec, rhs_prec < prec || rhs_signed),
    }
}

/// -(a + b) and -(-a) need parentheses, -a*b does not
fn negate_parens(operand: &Expr) -> bool {
    let prec = operand.precedence();
    prec < PREC_PRODUCT || prec == PREC_NEGATE
}

struct Wrapped<'a>(&'a Expr, bool);

impl fmt::Display for Wrapped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.1 {
            write!(f, "({})", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{}", format_number(*value)),
            Expr::Variable => write!(f, "x"),
            Expr::Constant(constant) => write!(f, "{}", constant.name()),
            Expr::Unary { expr, .. } => write!(f, "-{}", Wrapped(expr, negate_parens(expr))),
            Expr::Binary { op, lhs, rhs } => {
                let (left, right) = operand_parens(*op, lhs, rhs);
                let lhs = Wrapped(lhs, left);
                let rhs = Wrapped(rhs, right);
                match op {
                    BinaryOp::Add | BinaryOp::Sub => write!(f, "{} {} {}", lhs, op.symbol(), rhs),
                    _ => write!(f, "{}{}{}", lhs, op.symbol(), rhs),
                }
            }
            Expr::Call { func, arg } => write!(f, "{}({})", func.name(), arg),
        }
    }
}

impl Expr {
    /// LaTeX source for the formula renderer
    pub fn to_latex(&self) -> String {
        match self {
            Expr::Number(value) => format_number(*value),
            Expr::Variable => "x".to_string(),
            Expr::Constant(Constant::Pi) => "\\pi".to_string(),
            Expr::Constant(Constant::E) => "e".to_string(),
            Expr::Unary { expr, .. } => format!("-{}", latex_wrap(expr, negate_parens(expr))),
            Expr::Binary { op, lhs, rhs } => {
                let (left, right) = operand_parens(*op, lhs, rhs);
                match op {
                    BinaryOp::Add => format!("{} + {}", latex_wrap(lhs, left), latex_wrap(rhs, right)),
                    BinaryOp::Sub => format!("{} - {}", latex_wrap(lhs, left), latex_wrap(rhs, right)),
                    BinaryOp::Mul => {
                        // 3x^{2} rather than 3 \cdot x^{2}
                        let juxtapose =
                            matches!(**lhs, Expr::Number(_)) && !rhs.starts_with_number() && !right;
                        if juxtapose {
                            format!("{}{}", latex_wrap(lhs, left), rhs.to_latex())
                        } else {
                            format!("{} \\cdot {}", latex_wrap(lhs, left), latex_wrap(rhs, right))
                        }
                    }
                    BinaryOp::Div => format!("\\frac{{{}}}{{{}}}", lhs.to_latex(), rhs.to_latex()),
                    // Braces group the exponent
                    BinaryOp::Pow => format!("{}^{{{}}}", latex_wrap(lhs, left), rhs.to_latex()),
                }
            }
            Expr::Call { func, arg } => match func {
                Function::Sqrt => format!("\\sqrt{{{}}}", arg.to_latex()),
                Function::Log => format!("\\log_{{10}}\\left({}\\right)", arg.to_latex()),
                _ => format!("\\{}\\left({}\\right)", func.name(), arg.to_latex()),
            },
        }
    }
}

fn latex_wrap(expr: &Expr, parens: bool) -> String {
    if parens {
        format!("\\left({}\\right)", expr.to_latex())
    } else {
        expr.to_latex()
    }
}
