//! Endgame cutoff: stop searching once the attacker can no longer win.
//!
//! The attacker wins only by reaching row 0 or by capturing every defender
//! piece. Each attacker move advances a piece exactly one row and captures at
//! most one piece, so with `n` attacker moves left the attacker needs a piece
//! within `n` rows of row 0 or at most `n` defenders on the board. When neither
//! holds the game is a defender win whatever is played.
//!
//! The cutoff reports the slowest defender win, so it can understate how fast
//! the defender wins but never who wins.

use thirteen_core::{Board, Side};

/// Attacker moves still to be played from a node at `move_number` with `side`
/// to move, when the last legal move is played at ply `ply_cap`.
pub(crate) fn attacker_moves_left(side: Side, move_number: u32, ply_cap: u32) -> u32 {
    let first = match side {
        Side::Attacker => move_number,
        Side::Defender => move_number + 1,
    };
    if first > ply_cap {
        0
    } else {
        (ply_cap - first) / 2 + 1
    }
}

/// Return `true` if the attacker has no way left to win.
pub(crate) fn attacker_cannot_win(board: &Board, side: Side, move_number: u32, ply_cap: u32) -> bool {
    let moves_left = attacker_moves_left(side, move_number, ply_cap);
    let can_reach_goal = board
        .side(Side::Attacker)
        .iter()
        .map(|tile| tile.row() as u32)
        .min()
        .is_some_and(|row| row <= moves_left);
    let can_capture_all = board.piece_count(Side::Defender) as u32 <= moves_left;
    !(can_reach_goal || can_capture_all)
}
