//! Material balance evaluation.

use thirteen_core::{Board, Side};

use crate::eval::Evaluate;

/// Defender piece count minus attacker piece count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Material;

impl Evaluate for Material {
    fn evaluate(&self, board: &Board) -> i32 {
        board.piece_count(Side::Defender) as i32 - board.piece_count(Side::Attacker) as i32
    }
}
