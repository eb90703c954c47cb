// Error handling for expression analysis
//
// Evaluation failures are domain violations at a point. Analysis failures
// abort a whole `analyze` call; no partial report is produced.

use parser::error::{ParseError, summarize};
use thiserror::Error;

/// Domain violation while evaluating an expression at a point
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("square root of negative number {0}")]
    NegativeSqrt(f64),

    #[error("logarithm of non-positive number {0}")]
    LogDomain(f64),

    #[error("non-integer power of negative number {0}")]
    NegativeBase(f64),
}

#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    /// Malformed expression text
    #[error("could not parse expression: {}", summarize(.0))]
    Parse(Vec<ParseError>),

    /// Evaluation failed at a point the result depends on
    #[error("evaluation failed at x = {x}: {source}")]
    Evaluation {
        x: f64,
        #[source]
        source: EvalError,
    },

    /// Closed-form root solving stops at degree 2
    #[error("no closed-form roots for a polynomial of degree {degree}")]
    UnsupportedDegree { degree: usize },

    /// Coefficients requested for a non-polynomial expression
    #[error("not a polynomial: {0}")]
    NotPolynomial(String),
}

impl AnalysisError {
    /// Get the exit code for this error type
    /// Used by main.rs to return specific exit codes
    pub fn exit_code(&self) -> i32 {
        match self {
            AnalysisError::Parse(_) => 1,
            AnalysisError::Evaluation { .. } => 101,
            AnalysisError::UnsupportedDegree { .. } => 102,
            AnalysisError::NotPolynomial(_) => 103,
        }
    }

    /// Diagnostic code shown in reports
    pub fn code(&self) -> &'static str {
        match self {
            AnalysisError::Parse(_) => "E001",
            AnalysisError::Evaluation { .. } => "E101",
            AnalysisError::UnsupportedDegree { .. } => "E102",
            AnalysisError::NotPolynomial(_) => "E103",
        }
    }
}

impl From<Vec<ParseError>> for AnalysisError {
    fn from(errors: Vec<ParseError>) -> Self {
        AnalysisError::Parse(errors)
    }
}

/// Convenient Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;
