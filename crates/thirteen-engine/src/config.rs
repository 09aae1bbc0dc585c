//! Search tunables.

use thirteen_core::Side;

/// Rules and heuristics the searcher runs with.
///
/// Decided games score `±(move_cap - move_number) * win_scale`, positive for a
/// defender win, so faster wins score higher. These must stay larger in
/// magnitude than any static evaluation. With the defaults the slowest win
/// scores 20, which bounds the built-in evaluators only while each side has
/// at most five pieces (a full starting row).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Reference ply for win scores.
    pub move_cap: i32,
    /// Multiplier for win scores.
    pub win_scale: i32,
    /// Last ply on which a move may be played. A node past it is a defender win.
    pub ply_cap: u32,
    /// First move number at which the endgame cutoff may fire. `None` disables it.
    pub endgame_prune_from: Option<u32>,
    /// Number of generated moves the attacker considers at move 0. `None`
    /// considers all of them.
    pub opening_width: Option<usize>,
    /// Sort children by static evaluation before searching them.
    pub order_moves: bool,
    /// Shuffle moves before ordering so equal lines vary between games.
    pub shuffle: bool,
}

impl SearchConfig {
    /// Configuration with every source of variation and every pruning
    /// shortcut other than alpha-beta itself switched off.
    pub fn exhaustive() -> Self {
        Self {
            endgame_prune_from: None,
            opening_width: None,
            order_moves: false,
            shuffle: false,
            ..Self::default()
        }
    }

    /// Score of a game won by `winner` at `move_number`.
    pub fn win_score(&self, winner: Side, move_number: u32) -> i32 {
        let magnitude = (self.move_cap - move_number as i32) * self.win_scale;
        if winner.is_maximizing() {
            magnitude
        } else {
            -magnitude
        }
    }

    /// Score of a game that ran out of moves at `move_number`: a defender win.
    pub fn cap_score(&self, move_number: u32) -> i32 {
        self.win_score(Side::Defender, move_number)
    }

    /// Score returned when the attacker provably cannot win: the slowest
    /// possible defender win.
    pub fn endgame_score(&self) -> i32 {
        self.win_score(Side::Defender, self.ply_cap + 1)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            move_cap: 27,
            win_scale: 10,
            ply_cap: 24,
            endgame_prune_from: Some(17),
            opening_width: Some(7),
            order_moves: true,
            shuffle: true,
        }
    }
}
