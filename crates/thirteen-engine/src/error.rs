//! Search errors.

use thirteen_core::Side;

/// Errors that abort a search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A position that is neither decided nor past the move limit offered the
    /// side to move nothing to play.
    #[error("{side} has no legal move at move {move_number} in an undecided position")]
    NoLegalMoves {
        /// Side to move.
        side: Side,
        /// Ply count of the offending node.
        move_number: u32,
    },
}
