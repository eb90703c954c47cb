// Error reporting with Ariadne
//
// This module provides readable error messages using Ariadne.

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use chumsky::error::{Simple, SimpleReason};
use lexer::token::Token;
use std::ops::Range;

/// Type alias for Chumsky parser errors
pub type ParseError = Simple<Token>;

/// Build the Ariadne report for one parse error
fn build_report<'a>(
    filename: &'a str,
    error: &ParseError,
    color: bool,
) -> Report<'a, (&'a str, Range<usize>)> {
    let span = error.span();
    let msg = match error.reason() {
        SimpleReason::Custom(msg) => msg.clone(),
        _ => format!("{}", error),
    };

    let report = Report::build(ReportKind::Error, filename, span.start)
        .with_config(Config::default().with_color(color))
        .with_code("E001")
        .with_message("Parse Error")
        .with_label(
            Label::new((filename, span))
                .with_message(msg)
                .with_color(Color::Red),
        );

    // Add expected tokens if available (limit to 5 to avoid overwhelming output)
    let report = if error.expected().len() > 0 {
        let expected: Vec<String> = error
            .expected()
            .take(5)
            .map(format_expected)
            .collect();

        let help_msg = if error.expected().len() > 5 {
            format!("Expected one of: {}, ...", expected.join(", "))
        } else {
            format!("Expected: {}", expected.join(", "))
        };

        report.with_help(help_msg)
    } else {
        report
    };

    report.finish()
}

/// Converts Chumsky errors to Ariadne reports on stderr
pub fn report_errors(filename: &str, source: &str, errors: &[ParseError]) {
    for error in errors {
        // A failed write to stderr leaves nothing better to do
        let _ = build_report(filename, error, true).eprint((filename, Source::from(source)));
    }
}

/// Renders the reports without colors, for embedding in other messages
pub fn render_errors(filename: &str, source: &str, errors: &[ParseError]) -> String {
    let mut out = Vec::new();
    for error in errors {
        // Writing into a Vec cannot fail
        let _ = build_report(filename, error, false).write((filename, Source::from(source)), &mut out);
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// One-line summary of the first error, for contexts without source display
pub fn summarize(errors: &[ParseError]) -> String {
    match errors.first() {
        Some(error) => match error.reason() {
            SimpleReason::Custom(msg) => format!("{} at {}..{}", msg, error.span().start, error.span().end),
            _ => match error.found() {
                Some(token) => format!("unexpected '{}' at {}..{}", token, error.span().start, error.span().end),
                None => "unexpected end of input".to_string(),
            },
        },
        None => "parse error".to_string(),
    }
}

/// Format expected token for human-readable output
fn format_expected(token: &Option<Token>) -> String {
    match token {
        Some(Token::Plus) => "'+'".to_string(),
        Some(Token::Minus) => "'-'".to_string(),
        Some(Token::Star) => "'*'".to_string(),
        Some(Token::Slash) => "'/'".to_string(),
        Some(Token::Caret) => "'^'".to_string(),
        Some(Token::Percent) => "'%'".to_string(),
        Some(Token::LParen) => "'('".to_string(),
        Some(Token::RParen) => "')'".to_string(),
        Some(Token::Pi) => "'π'".to_string(),
        Some(Token::Radical) => "'√'".to_string(),
        Some(Token::Identifier(_)) => "identifier".to_string(),
        Some(Token::Number(_)) => "number".to_string(),
        None => "end of input".to_string(),
    }
}

/// Checks parenthesis balance before parsing
/// This gives a precise location for the unmatched side, which chumsky only reports at end of input
pub fn check_balance(tokens: &[(Token, Range<usize>)]) -> Option<ParseError> {
    let mut open: Vec<Range<usize>> = Vec::new();

    for (token, span) in tokens {
        match token {
            Token::LParen => open.push(span.clone()),
            Token::RParen => {
                if open.pop().is_none() {
                    return Some(Simple::custom(span.clone(), "unmatched ')'"));
                }
            }
            _ => {}
        }
    }

    open.pop()
        .map(|span| Simple::custom(span, "unclosed '(' opened here"))
}
