// Analysis configuration
//
// Every knob of the pipeline lives here so the CLI can load it from a file
// and override single fields from flags.

use parser::ast::{Constant, Expr};
use serde::{Deserialize, Serialize};

/// Unit in which trigonometric functions read their argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleMode::Degrees => angle.to_radians(),
            AngleMode::Radians => angle,
        }
    }

    /// Inner derivative of the unit conversion: pi/180 in degree mode
    pub fn chain_factor(self) -> Option<Expr> {
        match self {
            AngleMode::Degrees => Some(Expr::div(
                Expr::Constant(Constant::Pi),
                Expr::Number(180.0),
            )),
            AngleMode::Radians => None,
        }
    }
}

/// How zeros of polynomials above degree 2 are found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RootStrategy {
    /// Closed formulas only; degree 3 and above is an error
    ClosedForm,
    /// Closed formulas up to degree 2, bracketing and bisection above
    #[default]
    Numeric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub angle_mode: AngleMode,
    pub root_strategy: RootStrategy,
    /// Number of steps across the chart window
    pub sample_count: usize,
    /// Space added on both sides of the points of interest
    pub margin: f64,
    /// Chart window when there is nothing to center on
    pub default_window: (f64, f64),
    /// Samples with |y| above this are dropped
    pub y_cutoff: f64,
    /// |f''(x)| at or below this leaves a critical point undetermined
    pub zero_tolerance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            angle_mode: AngleMode::Degrees,
            root_strategy: RootStrategy::Numeric,
            sample_count: 400,
            margin: 3.0,
            default_window: (-5.0, 5.0),
            y_cutoff: 10_000.0,
            zero_tolerance: 1e-9,
        }
    }
}
