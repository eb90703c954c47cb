pub mod calculator;
pub mod error;
pub mod triangle;
pub mod trig;

pub use calculator::Calculator;
pub use error::{CalculatorError, TriangleError, TrigError};
pub use triangle::{solve_triangle, Triangle, TriangleCase, TriangleInput, TriangleSolution};
pub use trig::{solve_basic, trig_value, SolutionFamily, TrigFunction, TrigSolution};

#[cfg(test)]
mod tests;
