//! Static evaluation strategies.
//!
//! Every evaluator scores from the defender's point of view: positive favours
//! the defender, negative the attacker.

pub mod columns;
pub mod material;

use std::fmt;
use std::str::FromStr;

use thirteen_core::Board;

pub use columns::ColumnWeights;
pub use material::Material;

/// A static evaluation of an undecided position.
pub trait Evaluate {
    /// Score `board`, defender-positive.
    fn evaluate(&self, board: &Board) -> i32;
}

impl<F> Evaluate for F
where
    F: Fn(&Board) -> i32,
{
    fn evaluate(&self, board: &Board) -> i32 {
        self(board)
    }
}

/// Evaluator selectable at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluator {
    /// Per-column weighted piece sums.
    Columns(ColumnWeights),
    /// Piece count difference.
    Material,
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::Columns(ColumnWeights::default())
    }
}

impl Evaluate for Evaluator {
    fn evaluate(&self, board: &Board) -> i32 {
        match self {
            Evaluator::Columns(weights) => weights.evaluate(board),
            Evaluator::Material => Material.evaluate(board),
        }
    }
}

/// An evaluator name that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown evaluator: \"{found}\" (expected columns or material)")]
pub struct EvaluatorParseError {
    /// The rejected input.
    pub found: String,
}

impl FromStr for Evaluator {
    type Err = EvaluatorParseError;

    fn from_str(s: &str) -> Result<Evaluator, EvaluatorParseError> {
        match s.to_ascii_lowercase().as_str() {
            "columns" | "column" => Ok(Evaluator::Columns(ColumnWeights::default())),
            "material" => Ok(Evaluator::Material),
            _ => Err(EvaluatorParseError {
                found: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluator::Columns(_) => write!(f, "columns"),
            Evaluator::Material => write!(f, "material"),
        }
    }
}
