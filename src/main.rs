//! mathkit: function analysis, calculator, trigonometry and triangle tools

mod output;

use analysis::error_report::report_analysis_error;
use analysis::{AnalysisConfig, AnalysisError, AngleMode, RootStrategy};
use ariadne::{Color, Label, Report, ReportKind, Source};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use widgets::{Calculator, CalculatorError, TriangleError, TriangleInput, TrigError, TrigFunction};

/// Name shown in reports for expressions given on the command line
const INPUT_NAME: &str = "<input>";

#[derive(Parser)]
#[command(name = "mathkit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Study real functions and solve small math problems")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG wins when set
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// JSON file with analysis settings; flags override it
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Derivatives, critical points, intervals, asymptotes and samples of f(x)
    Analyze {
        #[arg(value_name = "EXPR")]
        expr: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Number of steps across the chart window
        #[arg(long, value_name = "N")]
        samples: Option<usize>,

        /// Space added around the points of interest
        #[arg(long, value_name = "M")]
        margin: Option<f64>,

        /// Trigonometric functions read radians
        #[arg(long)]
        radians: bool,

        /// Only closed formulas for roots; degree 3 and above fails
        #[arg(long)]
        closed_form: bool,
    },

    /// Evaluate an expression, at x when --at is given
    Eval {
        #[arg(value_name = "EXPR")]
        expr: String,

        #[arg(long, value_name = "X", allow_negative_numbers = true)]
        at: Option<f64>,

        #[arg(long)]
        radians: bool,
    },

    /// Simplified derivative of f(x)
    Derive {
        #[arg(value_name = "EXPR")]
        expr: String,

        #[arg(long, default_value_t = 1)]
        order: usize,

        /// Print LaTeX instead of plain text
        #[arg(long)]
        latex: bool,

        #[arg(long)]
        radians: bool,
    },

    /// Trigonometric values and basic equations
    Trig {
        #[command(subcommand)]
        command: TrigCommands,
    },

    /// Solve a triangle from three known values (angles in degrees)
    Triangle {
        #[arg(long)]
        a: Option<f64>,
        #[arg(long)]
        b: Option<f64>,
        #[arg(long)]
        c: Option<f64>,
        #[arg(long)]
        angle_a: Option<f64>,
        #[arg(long)]
        angle_b: Option<f64>,
        #[arg(long)]
        angle_c: Option<f64>,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum TrigCommands {
    /// sin, cos, tan or cot of an angle
    Value {
        #[arg(value_name = "FUNC")]
        func: String,

        #[arg(value_name = "ANGLE", allow_negative_numbers = true)]
        angle: f64,

        #[arg(long)]
        radians: bool,
    },

    /// Solve func(x) = m, solutions in degrees
    Solve {
        #[arg(value_name = "FUNC")]
        func: String,

        #[arg(value_name = "M", allow_negative_numbers = true)]
        value: f64,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    ConfigFormat {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("cannot write JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Calculator(#[from] CalculatorError),

    #[error(transparent)]
    Trig(#[from] TrigError),

    #[error(transparent)]
    Triangle(#[from] TriangleError),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::ConfigRead { .. } | CliError::ConfigFormat { .. } => 3,
            CliError::Json(_) => 4,
            CliError::Analysis(e) => e.exit_code(),
            CliError::Calculator(e) => e.exit_code(),
            CliError::Trig(e) => e.exit_code(),
            CliError::Triangle(e) => e.exit_code(),
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<AnalysisConfig, CliError> {
    let Some(path) = path else {
        return Ok(AnalysisConfig::default());
    };
    let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = serde_json::from_str(&text).map_err(|source| CliError::ConfigFormat {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "loaded config");
    Ok(config)
}

fn angle_mode(config: &AnalysisConfig, radians: bool) -> AngleMode {
    if radians {
        AngleMode::Radians
    } else {
        config.angle_mode
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let source = match &cli.command {
        Commands::Analyze { expr, .. } | Commands::Eval { expr, .. } | Commands::Derive { expr, .. } => {
            Some(expr.clone())
        }
        _ => None,
    };

    if let Err(error) = run(cli) {
        report(&error, source.as_deref());
        std::process::exit(error.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze {
            expr,
            json,
            samples,
            margin,
            radians,
            closed_form,
        } => {
            let mut config = config;
            config.angle_mode = angle_mode(&config, radians);
            if let Some(samples) = samples {
                config.sample_count = samples;
            }
            if let Some(margin) = margin {
                config.margin = margin;
            }
            if closed_form {
                config.root_strategy = RootStrategy::ClosedForm;
            }

            let report = analysis::analyze(&expr, &config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", output::analysis_text(&report));
            }
        }

        Commands::Eval { expr, at, radians } => {
            let mode = angle_mode(&config, radians);
            let value = match at {
                Some(x) => {
                    let parsed = parser::parse(&expr).map_err(AnalysisError::from)?;
                    analysis::evaluate(&parsed, x, mode)
                        .map_err(|source| AnalysisError::Evaluation { x, source })?
                }
                None => Calculator::new(mode).evaluate(&expr)?,
            };
            println!("{}", parser::display::format_number(value));
        }

        Commands::Derive {
            expr,
            order,
            latex,
            radians,
        } => {
            let parsed = parser::parse(&expr).map_err(AnalysisError::from)?;
            let result = analysis::nth_derivative(&parsed, order, angle_mode(&config, radians));
            if latex {
                println!("{}", result.to_latex());
            } else {
                println!("{}", result);
            }
        }

        Commands::Trig { command } => match command {
            TrigCommands::Value {
                func,
                angle,
                radians,
            } => {
                let func: TrigFunction = func.parse()?;
                let value = widgets::trig_value(func, angle, angle_mode(&config, radians))?;
                println!("{}", parser::display::format_number(value));
            }
            TrigCommands::Solve { func, value } => {
                let func: TrigFunction = func.parse()?;
                let solution = widgets::solve_basic(func, value)?;
                print!("{}", output::trig_text(&solution));
            }
        },

        Commands::Triangle {
            a,
            b,
            c,
            angle_a,
            angle_b,
            angle_c,
            json,
        } => {
            let input = TriangleInput {
                a,
                b,
                c,
                angle_a,
                angle_b,
                angle_c,
            };
            let solution = widgets::solve_triangle(&input)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&solution)?);
            } else {
                print!("{}", output::triangle_text(&solution));
            }
        }
    }

    Ok(())
}

fn report(error: &CliError, source: Option<&str>) {
    match (error, source) {
        (CliError::Analysis(e), Some(source)) => report_analysis_error(INPUT_NAME, source, e),
        (CliError::Calculator(CalculatorError::Parse(errors)), Some(source)) => {
            parser::error::report_errors(INPUT_NAME, source, errors)
        }
        (CliError::Calculator(e), Some(source)) => {
            let _ = Report::build(ReportKind::Error, INPUT_NAME, 0)
                .with_message(e.to_string())
                .with_label(
                    Label::new((INPUT_NAME, 0..source.len()))
                        .with_message("in this expression")
                        .with_color(Color::Red),
                )
                .finish()
                .eprint((INPUT_NAME, Source::from(source)));
        }
        _ => eprintln!("error: {}", error),
    }
}
