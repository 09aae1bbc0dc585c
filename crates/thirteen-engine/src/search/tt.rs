//! Transposition table: cached results of fully searched positions.
//!
//! Keys are [`PositionKey`]s, which encode only piece placement. An entry is
//! trusted only at the exact remaining depth it was searched with; inside one
//! search that pins the ply, and with it the side to move and move number.
//! Key collisions are possible in principle and go undetected.
//!
//! Two boards with the same placement may list their pieces in different
//! orders, so the best move is kept as a pair of tiles and turned back into a
//! collection index for the board being searched.

use std::collections::HashMap;

use thirteen_core::{Board, Move, PositionKey, Side, Tile};

/// How the stored value relates to the true minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The stored value is exact.
    Exact,
    /// The stored value is a lower bound (failed high).
    LowerBound,
    /// The stored value is an upper bound (failed low).
    UpperBound,
}

/// Cached result of searching one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtEntry {
    /// Bound type of `value`.
    pub bound: Bound,
    /// Tile the best move starts from.
    pub best_from: Tile,
    /// Tile the best move goes to.
    pub best_to: Tile,
    /// Search value, defender-positive.
    pub value: i32,
    /// Remaining depth the position was searched with.
    pub depth: u8,
}

impl TtEntry {
    /// The best move as played by `side` on `board`.
    ///
    /// `None` if `side` has no piece on the starting tile, which only happens
    /// after a key collision.
    pub fn best_move(&self, board: &Board, side: Side) -> Option<Move> {
        let source = board
            .side(side)
            .iter()
            .position(|tile| tile == self.best_from)?;
        Some(Move::new(source, self.best_to))
    }
}

/// Unbounded map from position key to the last result stored for it.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<PositionKey, TtEntry>,
}

impl TranspositionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the entry for `key`.
    #[inline]
    pub fn lookup(&self, key: PositionKey) -> Option<TtEntry> {
        self.entries.get(&key).copied()
    }

    /// Store `entry` for `key`, replacing whatever was there.
    #[inline]
    pub fn store(&mut self, key: PositionKey, entry: TtEntry) {
        self.entries.insert(key, entry);
    }

    /// Number of stored positions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(index: u8) -> Tile {
        Tile::from_index(index).unwrap()
    }

    fn entry(value: i32, depth: u8, bound: Bound) -> TtEntry {
        TtEntry {
            bound,
            best_from: tile(25),
            best_to: tile(20),
            value,
            depth,
        }
    }

    #[test]
    fn store_then_lookup_finds_entry() {
        let mut tt = TranspositionTable::new();
        let key = Board::starting_position().key();
        tt.store(key, entry(15, 4, Bound::Exact));

        let found = tt.lookup(key).expect("should find stored entry");
        assert_eq!(found, entry(15, 4, Bound::Exact));
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn lookup_miss_returns_none() {
        let tt = TranspositionTable::new();
        assert!(tt.lookup(PositionKey::new(0xDEAD_BEEF)).is_none());
        assert!(tt.is_empty());
    }

    #[test]
    fn last_write_wins() {
        let mut tt = TranspositionTable::new();
        let key = PositionKey::new(77);
        tt.store(key, entry(100, 6, Bound::Exact));
        tt.store(key, entry(-5, 1, Bound::UpperBound));

        let found = tt.lookup(key).unwrap();
        assert_eq!(found.value, -5);
        assert_eq!(found.depth, 1);
        assert_eq!(found.bound, Bound::UpperBound);
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn best_move_follows_piece_order() {
        let listed = Board::new(&[20, 22], &[2]).unwrap();
        let permuted = Board::new(&[22, 20], &[2]).unwrap();
        assert_eq!(listed.key(), permuted.key());

        let cached = TtEntry {
            best_from: tile(20),
            best_to: tile(16),
            ..entry(0, 2, Bound::Exact)
        };
        assert_eq!(
            cached.best_move(&listed, Side::Attacker),
            Some(Move::new(0, tile(16)))
        );
        assert_eq!(
            cached.best_move(&permuted, Side::Attacker),
            Some(Move::new(1, tile(16)))
        );
    }

    #[test]
    fn best_move_missing_piece_is_none() {
        let board = Board::new(&[21], &[2]).unwrap();
        assert_eq!(entry(0, 1, Bound::Exact).best_move(&board, Side::Attacker), None);
    }
}
