//! Position keys for the transposition table.
//!
//! A side's key folds its sorted tiles as digits in base [`HASH_RADIX`]: the
//! first digit is `tile + 1`, every further digit the gap to the previous tile.
//! Digits are never zero, so distinct tile sets give distinct numerals as long
//! as every digit stays below the radix and the numeral fits its span.
//!
//! On the 5x6 grid every digit is at most 30, so up to six pieces per side are
//! encoded exactly. Beyond that the fold wraps and collisions become possible;
//! they are accepted and never detected.

use std::fmt;

use crate::board::{Board, MAX_PIECES};
use crate::side::Side;
use crate::tile::Tile;

/// Base of the per-side fold. Must exceed the largest possible digit.
pub const HASH_RADIX: u64 = 32;

/// Multiplier applied to the attacker key before adding the defender key.
/// Exceeds every exactly-encoded side key (`HASH_RADIX^6 = 2^30`).
pub const SIDE_KEY_SPAN: u64 = 1 << 32;

/// Key identifying a board for caching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositionKey(u64);

impl PositionKey {
    /// Wrap a raw key.
    #[inline]
    pub const fn new(raw: u64) -> PositionKey {
        PositionKey(raw)
    }

    /// Return the raw key.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Hash one side's tiles, independent of their order. Empty hashes to 0.
pub fn hash_side(tiles: &[Tile]) -> u64 {
    let mut sorted = [0u8; MAX_PIECES];
    let len = tiles.len().min(MAX_PIECES);
    for (slot, tile) in sorted.iter_mut().zip(tiles) {
        *slot = tile.raw();
    }
    let sorted = &mut sorted[..len];
    sorted.sort_unstable();

    let mut key = 0u64;
    let mut previous: i16 = -1;
    for &tile in sorted.iter() {
        let digit = (tile as i16 - previous) as u64;
        key = key.wrapping_mul(HASH_RADIX).wrapping_add(digit);
        previous = tile as i16;
    }
    key
}

/// Combine both sides' keys into one position key.
pub fn hash_both(board: &Board) -> PositionKey {
    let attacker = hash_side(board.side(Side::Attacker).as_slice());
    let defender = hash_side(board.side(Side::Defender).as_slice());
    PositionKey(attacker.wrapping_mul(SIDE_KEY_SPAN).wrapping_add(defender))
}
