//! Scripted replies for the first two plies.
//!
//! The attacker opens with one of two moves known to win under deep search,
//! and the defender answers each with a fixed reply. Anything else falls
//! through to the engine.

use rand::Rng;
use rand::seq::IndexedRandom;

use thirteen_core::{Board, Move, Side, Tile};

/// Attacker openings as `(collection index, destination tile)`.
pub const ATTACKER_OPENINGS: [(usize, u8); 2] = [(1, 20), (3, 24)];

/// Return the scripted move for this position, if there is one.
///
/// On move 0 the attacker picks an opening with `rng`. On move 1 the defender
/// replies `0 -> 6` if the attacker's second piece went to tile 20 and
/// `4 -> 8` otherwise. Both require the pieces to still be on their
/// starting tiles.
pub fn book_move<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    move_number: u32,
    rng: &mut R,
) -> Option<Move> {
    let start = Board::starting_position();
    match (move_number, side) {
        (0, Side::Attacker) if *board == start => {
            let &(source, dest) = ATTACKER_OPENINGS.choose(rng)?;
            Some(Move::new(source, Tile::from_index(dest)?))
        }
        (1, Side::Defender) if board.side(Side::Defender) == start.side(Side::Defender) => {
            let second = board.side(Side::Attacker).get(1)?;
            if second.raw() == 20 {
                Some(Move::new(0, Tile::from_index(6)?))
            } else {
                Some(Move::new(4, Tile::from_index(8)?))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use thirteen_core::generate_moves;

    fn rng(seed: u64) -> Xoshiro256PlusPlus {
        Xoshiro256PlusPlus::seed_from_u64(seed)
    }

    #[test]
    fn openings_are_legal() {
        let board = Board::starting_position();
        let legal = generate_moves(&board, Side::Attacker);
        for (source, dest) in ATTACKER_OPENINGS {
            let mv = Move::new(source, Tile::from_index(dest).unwrap());
            assert!(legal.as_slice().contains(&mv));
        }
    }

    #[test]
    fn first_move_comes_from_book() {
        let board = Board::starting_position();
        for seed in 0..16 {
            let mv = book_move(&board, Side::Attacker, 0, &mut rng(seed)).unwrap();
            let pair = (mv.source(), mv.dest().raw());
            assert!(ATTACKER_OPENINGS.contains(&pair));
        }
    }

    #[test]
    fn defender_reply_depends_on_opening() {
        let start = Board::starting_position();

        let after_left = start.apply_move(Side::Attacker, Move::new(1, Tile::from_index(20).unwrap()));
        let reply = book_move(&after_left, Side::Defender, 1, &mut rng(0)).unwrap();
        assert_eq!((reply.source(), reply.dest().raw()), (0, 6));

        let after_right = start.apply_move(Side::Attacker, Move::new(3, Tile::from_index(24).unwrap()));
        let reply = book_move(&after_right, Side::Defender, 1, &mut rng(0)).unwrap();
        assert_eq!((reply.source(), reply.dest().raw()), (4, 8));
        assert!(generate_moves(&after_right, Side::Defender).as_slice().contains(&reply));
    }

    #[test]
    fn no_book_move_later() {
        let board = Board::starting_position();
        assert_eq!(book_move(&board, Side::Attacker, 2, &mut rng(0)), None);
        assert_eq!(book_move(&board, Side::Defender, 0, &mut rng(0)), None);
    }

    #[test]
    fn no_book_move_off_script() {
        let board: Board = "d1d2/5/5/5/5/1a1a1".parse().unwrap();
        assert_eq!(book_move(&board, Side::Attacker, 0, &mut rng(0)), None);
    }
}
