//! Game-tree search.

pub mod alphabeta;
pub mod endgame;
pub mod ordering;
pub mod tt;

use rand::Rng;
use tracing::debug;

use thirteen_core::{Board, Move, Side};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::eval::{Evaluate, Evaluator};

use alphabeta::{INF, SearchContext, SearchStats, alphabeta};
use tt::TranspositionTable;

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move for the side to move, `None` if the root was scored without
    /// searching (decided game, move limit reached, or zero depth).
    pub best_move: Option<Move>,
    /// Minimax value, defender-positive.
    pub score: i32,
    /// Depth searched.
    pub depth: u8,
    /// Node and cutoff counters.
    pub stats: SearchStats,
}

/// Fixed-depth alpha-beta searcher.
///
/// Holds only configuration; every call to [`search`](Self::search) starts
/// from a fresh transposition table.
#[derive(Debug, Clone)]
pub struct Searcher<E = Evaluator> {
    config: SearchConfig,
    evaluator: E,
}

impl<E: Evaluate> Searcher<E> {
    /// Create a searcher with the given configuration and evaluator.
    pub fn new(config: SearchConfig, evaluator: E) -> Self {
        Self { config, evaluator }
    }

    /// The configuration in use.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The evaluator in use.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Search `board` with `side` to move at ply `move_number`, `depth` plies deep.
    ///
    /// `rng` drives the move shuffle; pass a seeded generator for
    /// reproducible results.
    pub fn search<R: Rng + ?Sized>(
        &self,
        board: &Board,
        side: Side,
        move_number: u32,
        depth: u8,
        rng: &mut R,
    ) -> Result<SearchResult, SearchError> {
        let mut tt = TranspositionTable::new();
        self.search_with_table(board, side, move_number, depth, rng, &mut tt)
    }

    /// Like [`search`](Self::search), but reads and fills a caller-owned table.
    ///
    /// Entries are only reused at the remaining depth they were stored with,
    /// so a table must not be shared between searches with different root
    /// positions or depths.
    pub fn search_with_table<R: Rng + ?Sized>(
        &self,
        board: &Board,
        side: Side,
        move_number: u32,
        depth: u8,
        rng: &mut R,
        tt: &mut TranspositionTable,
    ) -> Result<SearchResult, SearchError> {
        let mut ctx = SearchContext {
            config: &self.config,
            evaluator: &self.evaluator,
            rng,
            tt,
            root_depth: depth,
            stats: SearchStats::default(),
        };

        let (best_move, score) = alphabeta(board, side, move_number, depth, -INF, INF, &mut ctx)?;

        debug!(
            %side,
            move_number,
            depth,
            score,
            nodes = ctx.stats.nodes,
            expansions = ctx.stats.expansions,
            tt_hits = ctx.stats.tt_hits,
            endgame_prunes = ctx.stats.endgame_prunes,
            "search complete"
        );

        Ok(SearchResult {
            best_move,
            score,
            depth,
            stats: ctx.stats,
        })
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchConfig::default(), Evaluator::default())
    }
}
