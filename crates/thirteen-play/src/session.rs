//! Command runners: self-play, single-position analysis and perft.

use std::io::Write;
use std::time::Instant;

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::{info, warn};

use thirteen_core::{Board, Side, WIDTH, divide};
use thirteen_engine::{Evaluator, SearchConfig, SearchError, SearchResult, Searcher};

use crate::command::{AnalyzeArgs, Command, PerftArgs, SelfPlayArgs};
use crate::error::PlayError;
use crate::game::Game;
use crate::opening::book_move;

/// Pieces per side in the starting position, and so in any reachable one.
const MAX_PIECES_PER_SIDE: usize = WIDTH as usize;

/// Run a parsed command, writing its report to `out`.
pub fn run<W: Write>(command: &Command, out: &mut W) -> Result<(), PlayError> {
    match command {
        Command::Selfplay(args) => self_play(args, out).map(|_| ()),
        Command::Analyze(args) => analyze(args, out).map(|_| ()),
        Command::Perft(args) => perft(args, out).map(|_| ()),
    }
}

/// Play engine against engine from the starting position and return the
/// winner.
pub fn self_play<W: Write>(args: &SelfPlayArgs, out: &mut W) -> Result<Side, PlayError> {
    let evaluator: Evaluator = args.eval.parse()?;
    let searcher = Searcher::new(SearchConfig::default(), evaluator);
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut game = Game::new();

    info!(
        seed,
        attacker_depth = args.attacker_depth,
        defender_depth = args.defender_depth,
        eval = %searcher.evaluator(),
        "self-play starting"
    );
    writeln!(out, "{}", game.board().pretty())?;

    let winner = loop {
        if let Some(winner) = game.winner() {
            break winner;
        }
        let side = game.to_move();
        let move_number = game.move_number();
        let depth = match side {
            Side::Attacker => args.attacker_depth,
            Side::Defender => args.defender_depth,
        };

        let start = Instant::now();
        let scripted = if args.no_book {
            None
        } else {
            book_move(game.board(), side, move_number, &mut rng)
        };
        let (mv, score) = match scripted {
            Some(mv) => (mv, None),
            None => {
                let result = searcher.search(game.board(), side, move_number, depth, &mut rng)?;
                let mv = result
                    .best_move
                    .ok_or(SearchError::NoLegalMoves { side, move_number })?;
                (mv, Some(result.score))
            }
        };
        let elapsed = start.elapsed();

        let description = mv.describe(game.board(), side);
        game.play(mv)?;

        match score {
            Some(score) => writeln!(
                out,
                "move {move_number:>2}  {side:<8}  {description:<6}  depth {depth:>2}  eval {score:>5}  time {elapsed:.2?}"
            )?,
            None => writeln!(out, "move {move_number:>2}  {side:<8}  {description:<6}  book")?,
        }
        writeln!(out, "{}", game.board().pretty())?;
        writeln!(out, "{} moves left", game.moves_left())?;
    };

    info!(%winner, plies = game.move_number(), "self-play finished");
    writeln!(out, "{winner} wins after {} plies", game.move_number())?;
    Ok(winner)
}

/// Search a single position and report the result.
pub fn analyze<W: Write>(args: &AnalyzeArgs, out: &mut W) -> Result<SearchResult, PlayError> {
    let board = parse_layout(&args.layout)?;
    for side in Side::ALL {
        let count = board.piece_count(side);
        if count > MAX_PIECES_PER_SIDE {
            return Err(PlayError::TooManyPieces {
                side,
                count,
                max: MAX_PIECES_PER_SIDE,
            });
        }
    }
    let side: Side = args.side.parse()?;
    let evaluator: Evaluator = args.eval.parse()?;
    let searcher = Searcher::new(SearchConfig::default(), evaluator);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(args.seed);

    if let Some(winner) = board.winner() {
        warn!(%winner, "position is already decided");
    }

    let start = Instant::now();
    let result = searcher.search(&board, side, args.move_number, args.depth, &mut rng)?;
    let elapsed = start.elapsed();

    writeln!(out, "{}", board.pretty())?;
    match result.best_move {
        Some(mv) => writeln!(out, "best move      {}", mv.describe(&board, side))?,
        None => writeln!(out, "best move      none")?,
    }
    writeln!(out, "eval           {}", result.score)?;
    writeln!(out, "depth          {}", result.depth)?;
    writeln!(out, "nodes          {}", result.stats.nodes)?;
    writeln!(out, "expansions     {}", result.stats.expansions)?;
    writeln!(out, "table hits     {}", result.stats.tt_hits)?;
    writeln!(out, "endgame prunes {}", result.stats.endgame_prunes)?;
    writeln!(out, "time           {elapsed:.2?}")?;
    Ok(result)
}

/// Print per-move perft counts and return the total.
pub fn perft<W: Write>(args: &PerftArgs, out: &mut W) -> Result<u64, PlayError> {
    let board = parse_layout(&args.layout)?;
    let side: Side = args.side.parse()?;

    let start = Instant::now();
    let counts = divide(&board, side, args.depth);
    let elapsed = start.elapsed();

    let mut total: u64 = 0;
    for (mv, count) in &counts {
        writeln!(out, "{mv}: {count}")?;
        total += *count;
    }
    writeln!(out)?;
    writeln!(out, "total {total}  time {elapsed:.2?}")?;
    Ok(total)
}

fn parse_layout(layout: &str) -> Result<Board, PlayError> {
    layout.parse().map_err(|source| PlayError::InvalidLayout {
        layout: layout.to_string(),
        source,
    })
}
