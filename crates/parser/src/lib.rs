pub mod ast;
pub mod display;
pub mod error;
pub mod parser;

use ast::Expr;
use chumsky::error::Simple;
use chumsky::{Parser, Stream};
use error::ParseError;

/// Lex and parse one expression.
///
/// Invalid characters and unbalanced parentheses are reported before the grammar runs,
/// so every failure carries the byte span of the offending input.
pub fn parse(source: &str) -> Result<Expr, Vec<ParseError>> {
    let tokens = lexer::lex_spanned(source)
        .map_err(|err| vec![Simple::custom(err.span.clone(), err.to_string())])?;

    if let Some(err) = error::check_balance(&tokens) {
        return Err(vec![err]);
    }

    let end = source.len();
    parser::parser().parse(Stream::from_iter(end..end + 1, tokens.into_iter()))
}

#[cfg(test)]
mod tests;
