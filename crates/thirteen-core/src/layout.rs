//! Compact text layouts for [`Board`].
//!
//! Rows are listed top (row 0) to bottom, separated by `/`. Within a row `a`
//! is an attacker piece, `d` a defender piece, `.` an empty tile and a digit a
//! run of empty tiles. Pieces are collected in ascending tile order.

use std::str::FromStr;

use crate::board::{Board, PieceList};
use crate::error::LayoutError;
use crate::side::Side;
use crate::tile::Tile;
use crate::{HEIGHT, WIDTH};

/// Layout of the standard starting position.
pub const STARTING_LAYOUT: &str = "ddddd/5/5/5/5/aaaaa";

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(layout: &str) -> Result<Board, LayoutError> {
        let rows: Vec<&str> = layout.trim().split('/').collect();
        if rows.len() != HEIGHT as usize {
            return Err(LayoutError::WrongRowCount {
                expected: HEIGHT as usize,
                found: rows.len(),
            });
        }

        let mut pieces = [PieceList::new(); Side::COUNT];

        for (row, row_str) in rows.iter().enumerate() {
            let mut column: usize = 0;
            for c in row_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    if run == 0 {
                        return Err(LayoutError::InvalidChar { character: c });
                    }
                    column += run as usize;
                    continue;
                }
                let side = match c.to_ascii_lowercase() {
                    '.' => None,
                    'a' => Some(Side::Attacker),
                    'd' => Some(Side::Defender),
                    _ => return Err(LayoutError::InvalidChar { character: c }),
                };
                if let Some(side) = side {
                    if column < WIDTH as usize {
                        let tile = Tile::from_index_unchecked((row * WIDTH as usize + column) as u8);
                        pieces[side.index()].push(tile);
                    }
                }
                column += 1;
            }
            if column != WIDTH as usize {
                return Err(LayoutError::BadRowLength {
                    row,
                    length: column,
                    expected: WIDTH as usize,
                });
            }
        }

        Ok(Board::from_pieces(pieces)?)
    }
}

impl Board {
    /// Serialize the position to the layout format accepted by [`FromStr`].
    ///
    /// Collection order is not encoded.
    pub fn layout(&self) -> String {
        let mut out = String::new();
        for row in 0..HEIGHT {
            if row > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for column in 0..WIDTH {
                let tile = Tile::from_index_unchecked(row * WIDTH + column);
                match self.side_on(tile) {
                    Some(side) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(side.layout_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }
        out
    }
}
