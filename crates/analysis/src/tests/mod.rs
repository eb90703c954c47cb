// Test module for analysis
//
// Unit tests for evaluation, differentiation, simplification, root solving,
// interval classification, asymptotes, sampling and the analyze pipeline.

mod analyze_tests;
mod interval_tests;
mod polynomial_tests;
mod sampler_tests;

use parser::ast::Expr;

pub(crate) fn parse_expr(input: &str) -> Expr {
    parser::parse(input).unwrap_or_else(|e| panic!("Parse error for {:?}: {:?}", input, e))
}
