//! Moves and move generation.

use std::fmt;

use crate::board::{Board, MAX_PIECES};
use crate::side::Side;
use crate::tile::Tile;

/// Upper bound on the number of moves one side can have.
pub const MAX_MOVES: usize = MAX_PIECES * 3;

/// Column deltas tried for every piece, in generation order:
/// left diagonal, straight, right diagonal.
const COLUMN_DELTAS: [i8; 3] = [-1, 0, 1];

/// A move: which of the mover's pieces (by collection index) goes to which tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: u8,
    dest: Tile,
}

impl Move {
    /// Create a move of the piece at collection index `source` to `dest`.
    #[inline]
    pub const fn new(source: usize, dest: Tile) -> Move {
        Move {
            source: source as u8,
            dest,
        }
    }

    /// Collection index of the moving piece.
    #[inline]
    pub const fn source(self) -> usize {
        self.source as usize
    }

    /// Destination tile.
    #[inline]
    pub const fn dest(self) -> Tile {
        self.dest
    }

    /// Render as `from-to` tile indices for the given position.
    pub fn describe(self, board: &Board, side: Side) -> String {
        match board.side(side).get(self.source()) {
            Some(from) => format!("{from}-{}", self.dest),
            None => format!("#{}-{}", self.source, self.dest),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}->{}", self.source, self.dest)
    }
}

/// Stack-allocated buffer for generated moves.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: u8,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::new(0, Tile::from_index_unchecked(0)); MAX_MOVES],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < MAX_MOVES);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Keep only the first `len` moves.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.len = self.len.min(len.min(MAX_MOVES) as u8);
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    /// Return a mutable slice of the moves, e.g. for shuffling.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves[..self.len as usize]
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Generate every move available to `side`.
///
/// Pieces are visited in collection order and each tries the left diagonal,
/// straight and right diagonal advance. A destination held by the mover's own
/// piece is skipped; one held by the opponent is a capture.
pub fn generate_moves(board: &Board, side: Side) -> MoveList {
    let mut moves = MoveList::new();
    let pieces = board.side(side);
    let own = pieces.mask();
    let forward = side.forward();

    for (index, from) in pieces.iter().enumerate() {
        for column_delta in COLUMN_DELTAS {
            let Some(to) = from.offset(column_delta, forward) else {
                continue;
            };
            if own & (1 << to.index()) == 0 {
                moves.push(Move::new(index, to));
            }
        }
    }

    moves
}
