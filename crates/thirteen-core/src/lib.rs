//! Core Thirteen Moves types: board representation, move generation, game
//! rules and position hashing.

mod board;
mod error;
mod hash;
mod layout;
mod moves;
mod perft;
mod side;
mod tile;

/// Number of columns on the grid.
pub const WIDTH: u8 = 5;

/// Number of rows on the grid.
pub const HEIGHT: u8 = 6;

pub use board::{Board, MAX_PIECES, PieceList, PrettyBoard};
pub use error::{BoardError, LayoutError, MoveError, SideParseError};
pub use hash::{HASH_RADIX, PositionKey, SIDE_KEY_SPAN, hash_both, hash_side};
pub use layout::STARTING_LAYOUT;
pub use moves::{MAX_MOVES, Move, MoveList, generate_moves};
pub use perft::{divide, perft};
pub use side::Side;
pub use tile::Tile;
