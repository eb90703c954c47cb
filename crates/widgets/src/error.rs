// Error handling for the widgets
//
// Each widget has its own error enum; the CLI maps them to exit codes.

use analysis::EvalError;
use parser::error::{ParseError, summarize};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CalculatorError {
    #[error("could not parse expression: {}", summarize(.0))]
    Parse(Vec<ParseError>),

    #[error("the calculator does not accept the variable x")]
    UsesVariable,

    #[error(transparent)]
    Evaluation(#[from] EvalError),

    #[error("result is not a finite number")]
    NonFinite,
}

impl CalculatorError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CalculatorError::Parse(_) => 1,
            CalculatorError::UsesVariable => 2,
            CalculatorError::Evaluation(_) => 101,
            CalculatorError::NonFinite => 104,
        }
    }
}

impl From<Vec<ParseError>> for CalculatorError {
    fn from(errors: Vec<ParseError>) -> Self {
        CalculatorError::Parse(errors)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrigError {
    #[error("unknown trigonometric function '{0}' (expected sin, cos, tan or cot)")]
    UnknownFunction(String),

    #[error("{func}({angle}) is undefined")]
    Undefined { func: &'static str, angle: f64 },

    #[error("{func}(x) = {value} has no solution: |m| > 1")]
    NoSolution { func: &'static str, value: f64 },

    #[error("input {0} is not a finite number")]
    NonFinite(f64),
}

impl TrigError {
    pub fn exit_code(&self) -> i32 {
        match self {
            TrigError::UnknownFunction(_) | TrigError::NonFinite(_) => 2,
            TrigError::Undefined { .. } => 104,
            TrigError::NoSolution { .. } => 105,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriangleError {
    #[error("at least three values are needed, {0} given")]
    TooFewValues(usize),

    #[error("at least one side is needed")]
    NoSide,

    #[error("the known angles sum to {0}°, which is not below 180°")]
    AngleSum(f64),

    #[error("three angles are given but they do not sum to 180°")]
    OverdeterminedAngles,

    #[error("sides {0}, {1} and {2} violate the triangle inequality")]
    InvalidSides(f64, f64, f64),

    #[error("no triangle has these sides and angle")]
    NoSolution,
}

impl TriangleError {
    pub fn exit_code(&self) -> i32 {
        match self {
            TriangleError::TooFewValues(_) | TriangleError::NoSide => 2,
            TriangleError::AngleSum(_) | TriangleError::OverdeterminedAngles => 106,
            TriangleError::InvalidSides(..) | TriangleError::NoSolution => 105,
        }
    }
}
