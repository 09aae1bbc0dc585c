//! The board: both sides' piece collections and the rules that read them.

use std::fmt;

use crate::error::{BoardError, MoveError};
use crate::hash;
use crate::moves::{Move, generate_moves};
use crate::side::Side;
use crate::tile::Tile;
use crate::{HEIGHT, WIDTH};

/// Largest number of pieces a single side can hold (one per tile).
pub const MAX_PIECES: usize = Tile::COUNT;

/// One side's pieces, in collection order.
///
/// Moves name their piece by position in this list, so the order is part of
/// the state: captures remove an entry and shift the rest down, moves replace
/// an entry in place.
#[derive(Clone, Copy)]
pub struct PieceList {
    tiles: [Tile; MAX_PIECES],
    len: u8,
}

impl PieceList {
    /// Create an empty list.
    pub const fn new() -> PieceList {
        PieceList {
            tiles: [Tile::from_index_unchecked(0); MAX_PIECES],
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, tile: Tile) {
        debug_assert!((self.len as usize) < MAX_PIECES);
        self.tiles[self.len as usize] = tile;
        self.len += 1;
    }

    /// Number of pieces.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the side has no pieces left.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The pieces as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Tile] {
        &self.tiles[..self.len as usize]
    }

    /// The tile of the piece at collection index `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Tile> {
        self.as_slice().get(index).copied()
    }

    /// Return `true` if a piece stands on `tile`.
    #[inline]
    pub fn contains(&self, tile: Tile) -> bool {
        self.as_slice().contains(&tile)
    }

    /// Iterate over the occupied tiles in collection order.
    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        self.as_slice().iter().copied()
    }

    /// Bitmask with bit `tile.index()` set for every piece.
    #[inline]
    pub fn mask(&self) -> u32 {
        self.iter().fold(0, |mask, tile| mask | (1 << tile.index()))
    }

    #[inline]
    fn set(&mut self, index: usize, tile: Tile) {
        self.tiles[index] = tile;
    }

    /// Remove the piece on `tile`, keeping the order of the others.
    fn remove_tile(&mut self, tile: Tile) -> bool {
        let len = self.len as usize;
        match self.tiles[..len].iter().position(|&t| t == tile) {
            Some(index) => {
                self.tiles.copy_within(index + 1..len, index);
                self.len -= 1;
                true
            }
            None => false,
        }
    }
}

impl Default for PieceList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for PieceList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for PieceList {}

impl fmt::Debug for PieceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|tile| tile.index()))
            .finish()
    }
}

/// Complete position: the attacker's and the defender's pieces.
///
/// `Board` is `Copy`; every branch of a search works on its own value.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Pieces indexed by [`Side::index()`].
    pieces: [PieceList; Side::COUNT],
}

impl Board {
    /// Build a board from raw tile indices, validating the invariants.
    ///
    /// Collection order is preserved as given.
    pub fn new(attacker: &[u8], defender: &[u8]) -> Result<Board, BoardError> {
        let mut pieces = [PieceList::new(); Side::COUNT];
        for (side, raw) in [(Side::Attacker, attacker), (Side::Defender, defender)] {
            let list = &mut pieces[side.index()];
            for &index in raw {
                let tile =
                    Tile::from_index(index).ok_or(BoardError::TileOutOfRange { side, index })?;
                if list.contains(tile) {
                    return Err(BoardError::DuplicateTile { side, tile });
                }
                list.push(tile);
            }
        }

        let board = Board { pieces };
        board.validate()?;
        Ok(board)
    }

    /// Return the standard starting position.
    ///
    /// The attacker fills the bottom row and the defender the top row, both in
    /// ascending column order.
    pub fn starting_position() -> Board {
        let mut pieces = [PieceList::new(); Side::COUNT];
        for column in 0..WIDTH {
            pieces[Side::Attacker.index()]
                .push(Tile::from_index_unchecked((HEIGHT - 1) * WIDTH + column));
            pieces[Side::Defender.index()].push(Tile::from_index_unchecked(column));
        }
        Board { pieces }
    }

    pub(crate) fn from_pieces(pieces: [PieceList; Side::COUNT]) -> Result<Board, BoardError> {
        let board = Board { pieces };
        board.validate()?;
        Ok(board)
    }

    /// Check that no tile is shared between the two sides.
    pub fn validate(&self) -> Result<(), BoardError> {
        let shared = self.side(Side::Attacker).mask() & self.side(Side::Defender).mask();
        if shared != 0 {
            let tile = Tile::from_index_unchecked(shared.trailing_zeros() as u8);
            return Err(BoardError::SharedTile { tile });
        }
        Ok(())
    }

    /// Return the pieces of the given side.
    #[inline]
    pub fn side(&self, side: Side) -> &PieceList {
        &self.pieces[side.index()]
    }

    /// Return which side occupies `tile`, if any.
    pub fn side_on(&self, tile: Tile) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|&side| self.pieces[side.index()].contains(tile))
    }

    /// Number of pieces the given side still has.
    #[inline]
    pub fn piece_count(&self, side: Side) -> usize {
        self.pieces[side.index()].len()
    }

    /// Position key for caching, see [`hash::hash_both`].
    #[inline]
    pub fn key(&self) -> hash::PositionKey {
        hash::hash_both(self)
    }

    /// Return the board after `side` plays `mv`.
    ///
    /// The move is assumed legal. A piece of the opponent standing on the
    /// destination is captured.
    pub fn apply_move(&self, side: Side, mv: Move) -> Board {
        let mut next = *self;
        next.pieces[side.index()].set(mv.source(), mv.dest());
        next.pieces[side.flip().index()].remove_tile(mv.dest());
        next
    }

    /// Like [`apply_move`](Self::apply_move), but rejects moves the generator
    /// would not produce.
    pub fn try_apply_move(&self, side: Side, mv: Move) -> Result<Board, MoveError> {
        let from = self.side(side).get(mv.source()).ok_or(MoveError::NoSuchPiece {
            side,
            source_index: mv.source(),
        })?;
        if !generate_moves(self, side).as_slice().contains(&mv) {
            return Err(MoveError::Illegal {
                side,
                from,
                to: mv.dest(),
            });
        }
        Ok(self.apply_move(side, mv))
    }

    /// Return the winner if the game is decided on the board.
    ///
    /// Checked in order: attacker eliminated, defender eliminated, attacker on
    /// row 0, defender on the last row.
    pub fn winner(&self) -> Option<Side> {
        if self.side(Side::Attacker).is_empty() {
            return Some(Side::Defender);
        }
        if self.side(Side::Defender).is_empty() {
            return Some(Side::Attacker);
        }
        for side in Side::ALL {
            let goal = side.goal_row();
            if self.side(side).iter().any(|tile| tile.row() == goal) {
                return Some(side);
            }
        }
        None
    }

    /// Return `true` if either side has already won.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }

    /// Wrapper that renders the board as a framed grid.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("attacker", self.side(Side::Attacker))
            .field("defender", self.side(Side::Defender))
            .finish()
    }
}

/// Framed grid rendering of a [`Board`], `A` for attacker and `D` for defender.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(WIDTH as usize * 3 + 3);
        writeln!(f, "{rule}")?;
        for row in 0..HEIGHT {
            write!(f, "| ")?;
            for column in 0..WIDTH {
                let tile = Tile::from_index_unchecked(row * WIDTH + column);
                match self.0.side_on(tile) {
                    Some(Side::Attacker) => write!(f, "A  ")?,
                    Some(Side::Defender) => write!(f, "D  ")?,
                    None => write!(f, ".. ")?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "{rule}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(index: u8) -> Tile {
        Tile::from_index(index).unwrap()
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::starting_position();
        let attacker: Vec<usize> = board.side(Side::Attacker).iter().map(Tile::index).collect();
        let defender: Vec<usize> = board.side(Side::Defender).iter().map(Tile::index).collect();
        assert_eq!(attacker, vec![25, 26, 27, 28, 29]);
        assert_eq!(defender, vec![0, 1, 2, 3, 4]);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn new_rejects_shared_tile() {
        let err = Board::new(&[12], &[12]).unwrap_err();
        assert_eq!(err, BoardError::SharedTile { tile: tile(12) });
    }

    #[test]
    fn new_rejects_duplicate_tile() {
        let err = Board::new(&[12, 12], &[3]).unwrap_err();
        assert_eq!(
            err,
            BoardError::DuplicateTile {
                side: Side::Attacker,
                tile: tile(12)
            }
        );
    }

    #[test]
    fn new_rejects_off_grid_tile() {
        let err = Board::new(&[12], &[30]).unwrap_err();
        assert_eq!(
            err,
            BoardError::TileOutOfRange {
                side: Side::Defender,
                index: 30
            }
        );
    }

    #[test]
    fn apply_move_relocates_in_place() {
        let board = Board::starting_position();
        let next = board.apply_move(Side::Attacker, Move::new(1, tile(20)));
        let attacker: Vec<usize> = next.side(Side::Attacker).iter().map(Tile::index).collect();
        assert_eq!(attacker, vec![25, 20, 27, 28, 29]);
        // The source board is untouched.
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn apply_move_captures_and_keeps_order() {
        let board = Board::new(&[17, 22], &[6, 11, 12]).unwrap();
        let next = board.apply_move(Side::Attacker, Move::new(0, tile(11)));
        let defender: Vec<usize> = next.side(Side::Defender).iter().map(Tile::index).collect();
        assert_eq!(defender, vec![6, 12]);
        assert_eq!(next.piece_count(Side::Attacker), 2);
        assert!(next.validate().is_ok());
    }

    #[test]
    fn try_apply_move_rejects_illegal() {
        let board = Board::starting_position();
        let err = board
            .try_apply_move(Side::Attacker, Move::new(0, tile(15)))
            .unwrap_err();
        assert!(matches!(err, MoveError::Illegal { .. }));
        let err = board
            .try_apply_move(Side::Attacker, Move::new(9, tile(20)))
            .unwrap_err();
        assert!(matches!(err, MoveError::NoSuchPiece { source_index: 9, .. }));
    }

    #[test]
    fn winner_by_elimination() {
        assert_eq!(Board::new(&[], &[3]).unwrap().winner(), Some(Side::Defender));
        assert_eq!(Board::new(&[20], &[]).unwrap().winner(), Some(Side::Attacker));
    }

    #[test]
    fn winner_by_reaching_goal_row() {
        assert_eq!(Board::new(&[2], &[7]).unwrap().winner(), Some(Side::Attacker));
        assert_eq!(Board::new(&[12], &[27]).unwrap().winner(), Some(Side::Defender));
    }

    #[test]
    fn elimination_checked_before_goal_row() {
        // Attacker eliminated wins for the defender even though no defender
        // piece stands on its goal row.
        let board = Board::new(&[], &[3]).unwrap();
        assert_eq!(board.winner(), Some(Side::Defender));
        // Both sides on goal rows: the attacker check comes first.
        let board = Board::new(&[1], &[26]).unwrap();
        assert_eq!(board.winner(), Some(Side::Attacker));
    }

    #[test]
    fn pretty_board_renders_grid() {
        let text = format!("{}", Board::starting_position().pretty());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), HEIGHT as usize + 2);
        assert_eq!(lines[1], "| D  D  D  D  D  |");
        assert_eq!(lines[2], "| .. .. .. .. .. |");
        assert_eq!(lines[HEIGHT as usize], "| A  A  A  A  A  |");
    }
}
