//! Game driver errors.

use thirteen_core::{LayoutError, MoveError, Side, SideParseError};
use thirteen_engine::{EvaluatorParseError, SearchError};

/// Errors that can occur while driving a game or running a command.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    /// A move was submitted after the game was decided.
    #[error("game is over: {winner} won")]
    GameOver {
        /// The side that won.
        winner: Side,
    },

    /// A move was rejected by the board.
    #[error(transparent)]
    Move(#[from] MoveError),

    /// The search failed.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// A board layout could not be parsed.
    #[error("invalid layout \"{layout}\": {source}")]
    InvalidLayout {
        /// The layout string as given.
        layout: String,
        /// What was wrong with it.
        source: LayoutError,
    },

    /// A layout holds more pieces for one side than a game can.
    #[error("{side} has {count} pieces, at most {max} allowed")]
    TooManyPieces {
        /// The overfull side.
        side: Side,
        /// Pieces found.
        count: usize,
        /// Largest allowed count.
        max: usize,
    },

    /// A side name could not be parsed.
    #[error(transparent)]
    InvalidSide(#[from] SideParseError),

    /// An evaluator name could not be parsed.
    #[error(transparent)]
    InvalidEval(#[from] EvaluatorParseError),

    /// Writing command output failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
