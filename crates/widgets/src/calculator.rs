// Scientific calculator
//
// Same grammar as the function analyzer, without the variable. Missing
// closing parentheses are appended before parsing.

use crate::error::CalculatorError;
use analysis::eval::evaluate_constant;
use analysis::AngleMode;
use tracing::debug;

/// Results are rounded to this many decimal places
pub const DECIMALS: i32 = 10;

#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    pub angle_mode: AngleMode,
}

impl Calculator {
    pub fn new(angle_mode: AngleMode) -> Self {
        Calculator { angle_mode }
    }

    pub fn evaluate(&self, text: &str) -> Result<f64, CalculatorError> {
        let closed = auto_close(text);
        let expr = parser::parse(&closed)?;
        debug!(input = text, parsed = %expr, "calculator expression");

        if expr.contains_variable() {
            return Err(CalculatorError::UsesVariable);
        }

        let value = evaluate_constant(&expr, self.angle_mode)?;
        if !value.is_finite() {
            return Err(CalculatorError::NonFinite);
        }
        Ok(round_result(value))
    }
}

/// Append the closing parentheses that are missing at the end
pub fn auto_close(text: &str) -> String {
    let open = text.chars().filter(|c| *c == '(').count();
    let close = text.chars().filter(|c| *c == ')').count();
    let mut closed = text.to_string();
    if open > close {
        closed.push_str(&")".repeat(open - close));
    }
    closed
}

/// Round to `DECIMALS` places; huge magnitudes are returned as they are
pub fn round_result(value: f64) -> f64 {
    let scale = 10f64.powi(DECIMALS);
    let scaled = value * scale;
    if !scaled.is_finite() || scaled.abs() >= 2f64.powi(52) {
        return value;
    }
    scaled.round() / scale + 0.0
}
