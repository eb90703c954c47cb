pub mod analyze;
pub mod asymptotes;
pub mod config;
pub mod derivative;
pub mod error;
pub mod error_report;
pub mod eval;
pub mod intervals;
pub mod polynomial;
pub mod rational;
pub mod roots;
pub mod sampler;
pub mod simplify;

pub use analyze::{analyze, analyze_expr, Analysis, CriticalKind, CriticalPoint, Formula, InflectionPoint, Note};
pub use asymptotes::{Asymptotes, Limit, Line};
pub use config::{AnalysisConfig, AngleMode, RootStrategy};
pub use derivative::{derivative, nth_derivative};
pub use error::{AnalysisError, AnalysisResult, EvalError};
pub use eval::evaluate;
pub use intervals::{classify, Concavity, Interval, Monotonicity};
pub use polynomial::{coefficients, is_polynomial, Polynomial};
pub use rational::Rational;
pub use roots::solve_roots;
pub use sampler::{sample, Sample};
pub use simplify::simplify;

#[cfg(test)]
mod tests;
