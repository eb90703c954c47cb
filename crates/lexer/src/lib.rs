pub mod token;

use logos::Logos;
use std::fmt;
use std::ops::Range;
use token::Token;

/// Byte range of a token in the source text
pub type Span = Range<usize>;

/// A character sequence no token rule accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub span: Span,
    pub text: String,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid character '{}'", self.text)
    }
}

impl std::error::Error for LexError {}

/// Tokenize a source string and return a Vec of tokens, skipping invalid input
pub fn lex(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|t| t.ok())
        .collect()
}

/// Tokenize a source string keeping byte spans; stops at the first invalid character
pub fn lex_spanned(source: &str) -> Result<Vec<(Token, Span)>, LexError> {
    Token::lexer(source)
        .spanned()
        .map(|(token, span)| match token {
            Ok(token) => Ok((token, span)),
            Err(_) => Err(LexError {
                text: source[span.clone()].to_string(),
                span,
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests;
