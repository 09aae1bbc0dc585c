//! Move-tree node counts for checking the generator against known totals.

use tracing::debug;

use crate::board::Board;
use crate::moves::generate_moves;
use crate::side::Side;

/// Count the leaf nodes of the game tree `depth` plies deep.
///
/// Decided positions are leaves: they count once and are not expanded.
pub fn perft(board: &Board, side: Side, depth: usize) -> u64 {
    if depth == 0 || board.is_terminal() {
        return 1;
    }

    let moves = generate_moves(board, side);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .as_slice()
        .iter()
        .map(|&mv| perft(&board.apply_move(side, mv), !side, depth - 1))
        .sum()
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(from-to, node_count)` pairs in generation order.
pub fn divide(board: &Board, side: Side, depth: usize) -> Vec<(String, u64)> {
    let counts: Vec<(String, u64)> = generate_moves(board, side)
        .as_slice()
        .iter()
        .map(|&mv| {
            let child = board.apply_move(side, mv);
            let count = if depth <= 1 { 1 } else { perft(&child, !side, depth - 1) };
            (mv.describe(board, side), count)
        })
        .collect();
    debug!(
        %side,
        depth,
        total = counts.iter().map(|(_, count)| count).sum::<u64>(),
        "divide complete"
    );
    counts
}
