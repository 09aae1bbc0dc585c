//! Move ordering by static evaluation of the resulting position.

use std::cmp::Reverse;

use thirteen_core::{Board, Move, MoveList, Side};

use crate::eval::Evaluate;

/// A move together with the position it leads to.
#[derive(Debug, Clone, Copy)]
pub(super) struct Child {
    pub mv: Move,
    pub board: Board,
}

/// Expand `moves` into children, best-looking first for `side` when `sort` is set.
///
/// The sort is stable, so children with equal evaluations keep the order of
/// `moves` (which the caller may already have shuffled).
pub(super) fn order_children<E: Evaluate + ?Sized>(
    board: &Board,
    side: Side,
    moves: &MoveList,
    sort: bool,
    evaluator: &E,
) -> Vec<Child> {
    let children = moves.as_slice().iter().map(|&mv| Child {
        mv,
        board: board.apply_move(side, mv),
    });

    if !sort {
        return children.collect();
    }

    let mut scored: Vec<(i32, Child)> = children
        .map(|child| (evaluator.evaluate(&child.board), child))
        .collect();
    if side.is_maximizing() {
        scored.sort_by_key(|&(score, _)| Reverse(score));
    } else {
        scored.sort_by_key(|&(score, _)| score);
    }
    scored.into_iter().map(|(_, child)| child).collect()
}
