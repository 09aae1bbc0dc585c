//! Error types for board construction, layout parsing and move validation.

use crate::side::Side;
use crate::tile::Tile;

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A tile index lies outside the grid.
    #[error("{side} tile index {index} is off the grid")]
    TileOutOfRange {
        /// Side owning the offending tile.
        side: Side,
        /// The raw index supplied.
        index: u8,
    },
    /// The same tile appears twice in one side's collection.
    #[error("{side} lists tile {tile} more than once")]
    DuplicateTile {
        /// Side owning the duplicated tile.
        side: Side,
        /// The duplicated tile.
        tile: Tile,
    },
    /// Both sides claim the same tile.
    #[error("tile {tile} is claimed by both sides")]
    SharedTile {
        /// The contested tile.
        tile: Tile,
    },
}

/// Errors that occur when parsing a board layout string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The layout does not describe exactly HEIGHT rows.
    #[error("expected {expected} rows, found {found}")]
    WrongRowCount {
        /// Rows required by the grid.
        expected: usize,
        /// Rows found.
        found: usize,
    },
    /// A row describes more or fewer than WIDTH tiles.
    #[error("row {row} describes {length} tiles, expected {expected}")]
    BadRowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of tiles described.
        length: usize,
        /// Tiles required per row.
        expected: usize,
    },
    /// An unrecognized character appeared in a row.
    #[error("invalid layout character: '{character}'")]
    InvalidChar {
        /// The invalid character.
        character: char,
    },
    /// The parsed pieces fail structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// A move rejected by [`Board::try_apply_move`](crate::board::Board::try_apply_move).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The source index does not name one of the mover's pieces.
    #[error("{side} has no piece at collection index {source_index}")]
    NoSuchPiece {
        /// The moving side.
        side: Side,
        /// The requested collection index.
        source_index: usize,
    },
    /// The destination is not reachable by that piece.
    #[error("{side} piece on {from} cannot move to {to}")]
    Illegal {
        /// The moving side.
        side: Side,
        /// Tile the piece stands on.
        from: Tile,
        /// Requested destination.
        to: Tile,
    },
}

/// A side name that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown side: \"{found}\" (expected attacker or defender)")]
pub struct SideParseError {
    /// The rejected input.
    pub found: String,
}
