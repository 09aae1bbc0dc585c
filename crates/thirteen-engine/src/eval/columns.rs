//! Column-weighted piece evaluation.
//!
//! Each piece contributes the weight of the column it stands on; defender
//! pieces count positive, attacker pieces negative. Central columns weigh more
//! since a central piece has three advances instead of two.

use thirteen_core::{Board, Side, WIDTH};

use crate::eval::Evaluate;

const CENTRE_BIAS: [i32; WIDTH as usize] = [1, 2, 3, 2, 1];

/// Per-column weights for each side, indexed by `tile mod WIDTH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnWeights {
    /// Weights applied to defender pieces.
    pub defender: [i32; WIDTH as usize],
    /// Weights applied to attacker pieces.
    pub attacker: [i32; WIDTH as usize],
}

impl ColumnWeights {
    /// Use the same table for both sides.
    pub const fn symmetric(weights: [i32; WIDTH as usize]) -> Self {
        Self {
            defender: weights,
            attacker: weights,
        }
    }

    /// Weighted sum of one side's pieces.
    pub fn side_total(&self, board: &Board, side: Side) -> i32 {
        let table = match side {
            Side::Attacker => &self.attacker,
            Side::Defender => &self.defender,
        };
        board
            .side(side)
            .iter()
            .map(|tile| table[tile.column() as usize])
            .sum()
    }
}

impl Default for ColumnWeights {
    fn default() -> Self {
        Self::symmetric(CENTRE_BIAS)
    }
}

impl Evaluate for ColumnWeights {
    fn evaluate(&self, board: &Board) -> i32 {
        self.side_total(board, Side::Defender) - self.side_total(board, Side::Attacker)
    }
}
