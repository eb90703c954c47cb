// Trigonometry tool
//
// Point values of sin, cos, tan and cot, and the basic equations
// sin x = m, cos x = m, tan x = m, cot x = m.

use crate::error::TrigError;
use analysis::eval::apply_function;
use analysis::AngleMode;
use parser::ast::Function;
use parser::display::format_number;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Values this close to 0, 1 or -1 are snapped
pub const SNAP_EPSILON: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrigFunction {
    Sin,
    Cos,
    Tan,
    Cot,
}

impl TrigFunction {
    pub fn name(self) -> &'static str {
        self.function().name()
    }

    fn function(self) -> Function {
        match self {
            TrigFunction::Sin => Function::Sin,
            TrigFunction::Cos => Function::Cos,
            TrigFunction::Tan => Function::Tan,
            TrigFunction::Cot => Function::Cot,
        }
    }

    /// Period of the solution families, in degrees
    fn period(self) -> f64 {
        match self {
            TrigFunction::Sin | TrigFunction::Cos => 360.0,
            TrigFunction::Tan | TrigFunction::Cot => 180.0,
        }
    }

    fn inverse_latex(self) -> &'static str {
        match self {
            TrigFunction::Sin => "\\arcsin",
            TrigFunction::Cos => "\\arccos",
            TrigFunction::Tan => "\\arctan",
            TrigFunction::Cot => "\\operatorname{arccot}",
        }
    }
}

impl FromStr for TrigFunction {
    type Err = TrigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "sin" => Ok(TrigFunction::Sin),
            "cos" => Ok(TrigFunction::Cos),
            "tan" => Ok(TrigFunction::Tan),
            "cot" => Ok(TrigFunction::Cot),
            _ => Err(TrigError::UnknownFunction(name.to_string())),
        }
    }
}

impl fmt::Display for TrigFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn snap_unit(value: f64) -> f64 {
    [0.0, 1.0, -1.0]
        .into_iter()
        .find(|target| (value - target).abs() < SNAP_EPSILON)
        .unwrap_or(value)
}

/// Value of `func` at `angle`; tan and cot at their poles are `Undefined`
pub fn trig_value(func: TrigFunction, angle: f64, mode: AngleMode) -> Result<f64, TrigError> {
    if !angle.is_finite() {
        return Err(TrigError::NonFinite(angle));
    }
    // Trigonometric functions never fail on a finite argument; NaN marks a pole
    let value = apply_function(func.function(), angle, mode).unwrap_or(f64::NAN);
    if value.is_nan() {
        return Err(TrigError::Undefined {
            func: func.name(),
            angle,
        });
    }
    let value = snap_unit(value);
    debug!(%func, angle, value, "trig value");
    Ok(value)
}

/// One family of solutions `x = base + k*period`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionFamily {
    /// Base solution in degrees
    pub base: f64,
    /// Period in degrees
    pub period: f64,
    /// `x = 30° + k·360°`
    pub degrees: String,
    /// `x = \alpha + k2\pi`
    pub latex: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrigSolution {
    pub func: TrigFunction,
    pub value: f64,
    /// Principal value of the inverse function, in degrees
    pub alpha: f64,
    /// `\alpha = \arcsin(0.5) \approx 30^\circ`
    pub alpha_latex: String,
    pub families: Vec<SolutionFamily>,
}

/// Two decimals, as shown to the user
fn degrees_text(value: f64) -> String {
    format_number((value * 100.0).round() / 100.0)
}

fn family(base: f64, period: f64, latex: &str) -> SolutionFamily {
    let k_term = if period == 360.0 { "k·360°" } else { "k·180°" };
    SolutionFamily {
        base,
        period,
        degrees: format!("x = {}° + {}", degrees_text(base), k_term),
        latex: latex.to_string(),
    }
}

/// Solve `func(x) = m` in degrees, listing every solution family once
pub fn solve_basic(func: TrigFunction, m: f64) -> Result<TrigSolution, TrigError> {
    if !m.is_finite() {
        return Err(TrigError::NonFinite(m));
    }
    if m.abs() > 1.0 && matches!(func, TrigFunction::Sin | TrigFunction::Cos) {
        return Err(TrigError::NoSolution {
            func: func.name(),
            value: m,
        });
    }

    let alpha = match func {
        TrigFunction::Sin => m.asin().to_degrees(),
        TrigFunction::Cos => m.acos().to_degrees(),
        TrigFunction::Tan => m.atan().to_degrees(),
        // arccot takes values in (0°, 180°)
        TrigFunction::Cot => 90.0 - m.atan().to_degrees(),
    };
    let period = func.period();

    let candidates = match func {
        TrigFunction::Sin => vec![
            family(alpha, period, "x = \\alpha + k2\\pi"),
            family(180.0 - alpha, period, "x = \\pi - \\alpha + k2\\pi"),
        ],
        TrigFunction::Cos => vec![
            family(alpha, period, "x = \\alpha + k2\\pi"),
            family(-alpha, period, "x = -\\alpha + k2\\pi"),
        ],
        TrigFunction::Tan | TrigFunction::Cot => vec![family(alpha, period, "x = \\alpha + k\\pi")],
    };

    // sin x = 1 or cos x = ±1 collapse into a single family
    let mut families: Vec<SolutionFamily> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let duplicate = families.iter().any(|f| {
            let gap = (f.base - candidate.base).rem_euclid(period);
            gap < 1e-9 || period - gap < 1e-9
        });
        if !duplicate {
            families.push(candidate);
        }
    }

    let alpha_latex = format!(
        "\\alpha = {}({}) \\approx {}^\\circ",
        func.inverse_latex(),
        format_number(m),
        degrees_text(alpha)
    );
    debug!(%func, m, alpha, count = families.len(), "solved basic equation");

    Ok(TrigSolution {
        func,
        value: m,
        alpha,
        alpha_latex,
        families,
    })
}
