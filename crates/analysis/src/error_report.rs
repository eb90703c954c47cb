// Error reporting with Ariadne for analysis
//
// This module provides readable error messages for analysis errors.

use crate::AnalysisError;
use ariadne::{Color, Label, Report, ReportKind, Source};

/// Format an AnalysisError as an Ariadne report on stderr
pub fn report_analysis_error(filename: &str, source: &str, error: &AnalysisError) {
    let whole = 0..source.len();

    match error {
        AnalysisError::Parse(errors) => {
            parser::error::report_errors(filename, source, errors);
        }

        AnalysisError::Evaluation { x, source: cause } => {
            let _ = Report::build(ReportKind::Error, filename, 0)
                .with_code(error.code())
                .with_message(format!("Evaluation failed at x = {}", x))
                .with_label(
                    Label::new((filename, whole))
                        .with_message(format!("{} while evaluating this expression", cause))
                        .with_color(Color::Red),
                )
                .with_help("The point lies outside the domain of the function")
                .finish()
                .eprint((filename, Source::from(source)));
        }

        AnalysisError::UnsupportedDegree { degree } => {
            let _ = Report::build(ReportKind::Error, filename, 0)
                .with_code(error.code())
                .with_message(format!("Cannot solve a degree {} derivative in closed form", degree))
                .with_label(
                    Label::new((filename, whole))
                        .with_message("a derivative of this function is above degree 2")
                        .with_color(Color::Red),
                )
                .with_help("Use the numeric root strategy to isolate the roots")
                .finish()
                .eprint((filename, Source::from(source)));
        }

        AnalysisError::NotPolynomial(text) => {
            let _ = Report::build(ReportKind::Error, filename, 0)
                .with_code(error.code())
                .with_message(format!("Not a polynomial: {}", text))
                .with_label(
                    Label::new((filename, whole))
                        .with_message("coefficients are only defined for polynomials")
                        .with_color(Color::Red),
                )
                .finish()
                .eprint((filename, Source::from(source)));
        }
    }
}
