//! Tiles of the WIDTH x HEIGHT grid.

use std::fmt;

use crate::{HEIGHT, WIDTH};

/// A tile on the grid, encoded as `row * WIDTH + column`.
///
/// Row 0 is the top edge (the attacker's goal), row `HEIGHT - 1` the bottom
/// edge (the defender's goal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile(u8);

impl Tile {
    /// Total number of tiles.
    pub const COUNT: usize = WIDTH as usize * HEIGHT as usize;

    /// Create a tile from a column and row, returning `None` if off the grid.
    #[inline]
    pub const fn new(column: u8, row: u8) -> Option<Tile> {
        if column < WIDTH && row < HEIGHT {
            Some(Tile(row * WIDTH + column))
        } else {
            None
        }
    }

    /// Create a tile from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Tile> {
        if (index as usize) < Tile::COUNT {
            Some(Tile(index))
        } else {
            None
        }
    }

    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Tile {
        debug_assert!((index as usize) < Tile::COUNT);
        Tile(index)
    }

    /// Return the zero-based index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the raw index as stored.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Column, `index mod WIDTH`.
    #[inline]
    pub const fn column(self) -> u8 {
        self.0 % WIDTH
    }

    /// Row, `index / WIDTH`.
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / WIDTH
    }

    /// Return the tile shifted by the given deltas, or `None` if it leaves the grid.
    #[inline]
    pub const fn offset(self, column_delta: i8, row_delta: i8) -> Option<Tile> {
        let column = self.column() as i8 + column_delta;
        let row = self.row() as i8 + row_delta;
        if column < 0 || row < 0 {
            return None;
        }
        Tile::new(column as u8, row as u8)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
