// crates/parser/src/ast.rs

use std::f64::consts::{E, PI};

/// Byte range in the source text
pub type Span = std::ops::Range<usize>;

/// Name of the single free variable
pub const VARIABLE: &str = "x";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => PI,
            Constant::E => E,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "e",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Negate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }

    /// Binding strength used by the printers
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => PREC_SUM,
            BinaryOp::Mul | BinaryOp::Div => PREC_PRODUCT,
            BinaryOp::Pow => PREC_POWER,
        }
    }
}

pub const PREC_SUM: u8 = 1;
pub const PREC_PRODUCT: u8 = 2;
pub const PREC_NEGATE: u8 = 3;
pub const PREC_POWER: u8 = 4;
pub const PREC_ATOM: u8 = 5;

/// Named functions of one argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Cot,
    /// Base-10 logarithm
    Log,
    /// Natural logarithm
    Ln,
    Sqrt,
}

impl Function {
    pub fn from_name(name: &str) -> Option<Function> {
        match name {
            "sin" => Some(Function::Sin),
            "cos" => Some(Function::Cos),
            "tan" => Some(Function::Tan),
            "cot" => Some(Function::Cot),
            "log" => Some(Function::Log),
            "ln" => Some(Function::Ln),
            "sqrt" => Some(Function::Sqrt),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Cot => "cot",
            Function::Log => "log",
            Function::Ln => "ln",
            Function::Sqrt => "sqrt",
        }
    }

    pub fn is_trigonometric(self) -> bool {
        matches!(
            self,
            Function::Sin | Function::Cos | Function::Tan | Function::Cot
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),

    /// The free variable `x`
    Variable,

    Constant(Constant),

    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },

    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    Call {
        func: Function,
        arg: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn add(lhs: Expr, rhs: Expr) -> Expr {
        Expr::binary(BinaryOp::Add, lhs, rhs)
    }

    pub fn sub(lhs: Expr, rhs: Expr) -> Expr {
        Expr::binary(BinaryOp::Sub, lhs, rhs)
    }

    pub fn mul(lhs: Expr, rhs: Expr) -> Expr {
        Expr::binary(BinaryOp::Mul, lhs, rhs)
    }

    pub fn div(lhs: Expr, rhs: Expr) -> Expr {
        Expr::binary(BinaryOp::Div, lhs, rhs)
    }

    pub fn pow(lhs: Expr, rhs: Expr) -> Expr {
        Expr::binary(BinaryOp::Pow, lhs, rhs)
    }

    pub fn neg(expr: Expr) -> Expr {
        Expr::Unary {
            op: UnaryOp::Negate,
            expr: Box::new(expr),
        }
    }

    pub fn call(func: Function, arg: Expr) -> Expr {
        Expr::Call {
            func,
            arg: Box::new(arg),
        }
    }

    pub fn is_number(&self, value: f64) -> bool {
        matches!(self, Expr::Number(n) if *n == value)
    }

    pub fn contains_variable(&self) -> bool {
        match self {
            Expr::Variable => true,
            Expr::Number(_) | Expr::Constant(_) => false,
            Expr::Unary { expr, .. } => expr.contains_variable(),
            Expr::Binary { lhs, rhs, .. } => lhs.contains_variable() || rhs.contains_variable(),
            Expr::Call { arg, .. } => arg.contains_variable(),
        }
    }

    /// True when the leftmost leaf is a number literal (`2`, `3^x`, `4*x`)
    pub fn starts_with_number(&self) -> bool {
        match self {
            Expr::Number(_) => true,
            Expr::Binary { lhs, .. } => lhs.starts_with_number(),
            Expr::Variable | Expr::Constant(_) | Expr::Unary { .. } | Expr::Call { .. } => false,
        }
    }

    /// Binding strength of the node's outermost operator
    pub fn precedence(&self) -> u8 {
        match self {
            Expr::Number(n) if *n < 0.0 => PREC_NEGATE,
            Expr::Number(_) | Expr::Variable | Expr::Constant(_) | Expr::Call { .. } => PREC_ATOM,
            Expr::Unary { .. } => PREC_NEGATE,
            Expr::Binary { op, .. } => op.precedence(),
        }
    }
}
