//! Depth-limited minimax with alpha-beta pruning.
//!
//! One routine serves both sides: the defender maximizes, the attacker
//! minimizes, and [`improves`] picks the comparison.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::trace;

use thirteen_core::{Board, Move, Side, generate_moves};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::eval::Evaluate;
use crate::search::endgame::attacker_cannot_win;
use crate::search::ordering::order_children;
use crate::search::tt::{Bound, TranspositionTable, TtEntry};

/// Score representing an unreachable upper/lower bound.
pub const INF: i32 = 1_000_000;

/// Counters collected over one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, including cutoffs.
    pub nodes: u64,
    /// Nodes whose moves were generated and searched.
    pub expansions: u64,
    /// Table lookups that matched the current depth.
    pub tt_hits: u64,
    /// Nodes cut off because the attacker could no longer win.
    pub endgame_prunes: u64,
}

/// Search state threaded through the recursion.
pub(super) struct SearchContext<'a, E: ?Sized, R: ?Sized> {
    pub config: &'a SearchConfig,
    pub evaluator: &'a E,
    pub rng: &'a mut R,
    /// Table owned by the top-level call.
    pub tt: &'a mut TranspositionTable,
    /// Depth requested at the root.
    pub root_depth: u8,
    pub stats: SearchStats,
}

/// Return `true` if `value` is better than `best` for `side`.
#[inline]
fn improves(side: Side, value: i32, best: i32) -> bool {
    if side.is_maximizing() {
        value > best
    } else {
        value < best
    }
}

/// Search `board` with `side` to move and return the best move and its value.
///
/// The move is `None` when the node is scored without searching its children:
/// decided games, the move limit, the depth horizon and endgame cutoffs.
pub(super) fn alphabeta<E, R>(
    board: &Board,
    side: Side,
    move_number: u32,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    ctx: &mut SearchContext<'_, E, R>,
) -> Result<(Option<Move>, i32), SearchError>
where
    E: Evaluate + ?Sized,
    R: Rng + ?Sized,
{
    ctx.stats.nodes += 1;

    let key = board.key();
    let cached = ctx
        .tt
        .lookup(key)
        .filter(|entry| entry.depth == depth)
        .and_then(|entry| Some((entry, entry.best_move(board, side)?)));
    if let Some((entry, cached_move)) = cached {
        ctx.stats.tt_hits += 1;
        match entry.bound {
            Bound::Exact => return Ok((Some(cached_move), entry.value)),
            Bound::LowerBound => alpha = alpha.max(entry.value),
            Bound::UpperBound => beta = beta.min(entry.value),
        }
        if alpha >= beta {
            trace!(%key, depth, value = entry.value, "table cutoff");
            return Ok((Some(cached_move), entry.value));
        }
    }

    if let Some(winner) = board.winner() {
        return Ok((None, ctx.config.win_score(winner, move_number)));
    }

    if move_number > ctx.config.ply_cap {
        return Ok((None, ctx.config.cap_score(move_number)));
    }

    if depth == 0 {
        return Ok((None, ctx.evaluator.evaluate(board)));
    }

    let prune_active = ctx
        .config
        .endgame_prune_from
        .is_some_and(|from| move_number >= from);
    if depth < ctx.root_depth
        && prune_active
        && attacker_cannot_win(board, side, move_number, ctx.config.ply_cap)
    {
        ctx.stats.endgame_prunes += 1;
        trace!(move_number, depth, "attacker cannot win, cutting off");
        return Ok((None, ctx.config.endgame_score()));
    }

    let mut moves = generate_moves(board, side);
    if moves.is_empty() {
        return Err(SearchError::NoLegalMoves { side, move_number });
    }
    ctx.stats.expansions += 1;

    if side == Side::Attacker && move_number == 0 {
        if let Some(width) = ctx.config.opening_width {
            moves.truncate(width);
        }
    }
    if ctx.config.shuffle {
        moves.as_mut_slice().shuffle(&mut *ctx.rng);
    }

    let sort = ctx.config.order_moves && depth > 1;
    let children = order_children(board, side, &moves, sort, ctx.evaluator);

    // Bounds for classifying the result, after any narrowing from the table.
    let (window_alpha, window_beta) = (alpha, beta);
    let mut best_value = if side.is_maximizing() { -INF } else { INF };
    let mut best_move = moves[0];

    for child in &children {
        let (_, value) = alphabeta(
            &child.board,
            !side,
            move_number + 1,
            depth - 1,
            alpha,
            beta,
            ctx,
        )?;

        if improves(side, value, best_value) {
            best_value = value;
            best_move = child.mv;
        }
        if side.is_maximizing() {
            alpha = alpha.max(value);
        } else {
            beta = beta.min(value);
        }
        if beta <= alpha {
            break;
        }
    }

    let bound = if best_value <= window_alpha {
        Bound::UpperBound
    } else if best_value >= window_beta {
        Bound::LowerBound
    } else {
        Bound::Exact
    };
    if let Some(best_from) = board.side(side).get(best_move.source()) {
        ctx.tt.store(
            key,
            TtEntry {
                bound,
                best_from,
                best_to: best_move.dest(),
                value: best_value,
                depth,
            },
        );
    }

    Ok((Some(best_move), best_value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn improves_respects_side() {
        assert!(improves(Side::Defender, 5, 3));
        assert!(!improves(Side::Defender, 3, 3));
        assert!(improves(Side::Attacker, -5, 3));
        assert!(!improves(Side::Attacker, 3, 3));
    }

    #[test]
    fn initial_bounds_lose_to_any_score() {
        let config = SearchConfig::default();
        let worst = config.win_score(Side::Attacker, 0);
        let best = config.win_score(Side::Defender, 0);
        assert!(improves(Side::Defender, worst, -INF));
        assert!(improves(Side::Attacker, best, INF));
    }
}
