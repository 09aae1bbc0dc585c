//! Turn-by-turn game state around a [`Board`].

use tracing::info;

use thirteen_core::{Board, Move, Side};

use crate::error::PlayError;

/// Moves each side gets before the attacker runs out of time.
pub const MOVES_PER_SIDE: u32 = 13;

/// A game in progress: the board, whose turn it is and how many plies have
/// been played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Side,
    move_number: u32,
}

impl Game {
    /// Start a new game from the standard position with the attacker to move.
    pub fn new() -> Self {
        Self::from_position(Board::starting_position(), Side::Attacker, 0)
    }

    /// Resume a game from an arbitrary position.
    pub fn from_position(board: Board, to_move: Side, move_number: u32) -> Self {
        Self {
            board,
            to_move,
            move_number,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Plies played so far.
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    /// Attacker moves remaining, as shown to players.
    pub fn moves_left(&self) -> u32 {
        MOVES_PER_SIDE.saturating_sub(self.move_number.div_ceil(2))
    }

    /// The winner, if the game is over.
    ///
    /// A decided board takes precedence; otherwise the defender wins once
    /// the attacker has no moves left.
    pub fn winner(&self) -> Option<Side> {
        self.board.winner().or_else(|| {
            if self.moves_left() == 0 {
                Some(Side::Defender)
            } else {
                None
            }
        })
    }

    /// Play `mv` for the side to move and pass the turn.
    pub fn play(&mut self, mv: Move) -> Result<(), PlayError> {
        if let Some(winner) = self.winner() {
            return Err(PlayError::GameOver { winner });
        }
        let description = mv.describe(&self.board, self.to_move);
        self.board = self.board.try_apply_move(self.to_move, mv)?;
        info!(
            side = %self.to_move,
            move_number = self.move_number,
            mv = %description,
            "move played"
        );
        self.to_move = !self.to_move;
        self.move_number += 1;
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
