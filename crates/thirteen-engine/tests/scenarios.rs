//! End-to-end searches from whole-game positions.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use thirteen_core::{Board, Side, generate_moves};
use thirteen_engine::{
    ColumnWeights, Evaluator, Material, SearchConfig, Searcher, TranspositionTable,
};

fn seeded(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

#[test]
fn same_seed_same_result() {
    let board = Board::starting_position();
    let searcher = Searcher::new(
        SearchConfig::default(),
        Evaluator::Columns(ColumnWeights::default()),
    );

    let first = searcher
        .search(&board, Side::Attacker, 2, 2, &mut seeded(2024))
        .unwrap();
    let second = searcher
        .search(&board, Side::Attacker, 2, 2, &mut seeded(2024))
        .unwrap();

    assert_eq!(first, second);
    let mv = first.best_move.expect("start position has moves");
    assert!(generate_moves(&board, Side::Attacker).as_slice().contains(&mv));
    assert!(first.score.abs() < 1_000_000);
}

#[test]
fn warm_table_answers_repeat_search() {
    let board = Board::starting_position();
    let searcher = Searcher::new(SearchConfig::default(), Material);
    let mut tt = TranspositionTable::new();

    let cold = searcher
        .search_with_table(&board, Side::Defender, 1, 3, &mut seeded(1), &mut tt)
        .unwrap();
    assert!(cold.stats.expansions > 0);
    assert!(!tt.is_empty());

    let warm = searcher
        .search_with_table(&board, Side::Defender, 1, 3, &mut seeded(1), &mut tt)
        .unwrap();
    assert_eq!(warm.stats.expansions, 0);
    assert_eq!(warm.stats.nodes, 1);
    assert_eq!(warm.score, cold.score);
    assert_eq!(warm.best_move, cold.best_move);
}

#[test]
fn attacker_one_step_out_still_wins_late() {
    // Two plies before the limit: the defender cannot stop the attacker's
    // last move onto row 0, so the cutoff must not fire.
    let board: Board = "d4/2a2/5/5/5/5".parse().unwrap();
    let result = Searcher::new(SearchConfig::default(), Material)
        .search(&board, Side::Defender, 23, 3, &mut seeded(3))
        .unwrap();
    assert_eq!(result.score, -(27 - 25) * 10);
    assert_eq!(result.stats.endgame_prunes, 0);
}

#[test]
fn hopeless_attacker_is_cut_off() {
    // One attacker four rows from goal against three defenders with three
    // attacker moves left.
    let board: Board = "d1d1d/5/5/5/2a2/5".parse().unwrap();
    let result = Searcher::new(SearchConfig::default(), Material)
        .search(&board, Side::Attacker, 20, 4, &mut seeded(4))
        .unwrap();
    assert_eq!(result.score, SearchConfig::default().endgame_score());
    assert!(result.stats.endgame_prunes > 0);
    let mv = result.best_move.expect("root is always searched");
    assert!(generate_moves(&board, Side::Attacker).as_slice().contains(&mv));
}

#[test]
fn endgame_cutoff_never_changes_the_winner() {
    const LATE_BOARDS: &[&str] = &[
        "5/d3d/5/2a2/a4/5",
        "2d2/5/1d1a1/5/a4/5",
        "5/5/d2d1/1a2a/5/5",
        "5/2d2/1a1a1/5/5/5",
        "d1d1d/5/5/5/2a2/5",
        "d4/2a2/5/5/5/5",
        "1d3/5/5/a1a2/5/5",
    ];
    // Each search reaches past the move limit, so every leaf is a decided
    // game and the values are exact outcomes.
    const ROOTS: &[(Side, u32, u8)] = &[
        (Side::Attacker, 20, 5),
        (Side::Defender, 21, 4),
        (Side::Attacker, 22, 3),
    ];

    let base = SearchConfig {
        shuffle: false,
        ..SearchConfig::default()
    };
    let pruned = Searcher::new(base.clone(), Material);
    let full = Searcher::new(
        SearchConfig {
            endgame_prune_from: None,
            ..base
        },
        Material,
    );

    for layout in LATE_BOARDS {
        let board: Board = layout.parse().unwrap();
        for &(side, move_number, depth) in ROOTS {
            let with_cutoff = pruned
                .search(&board, side, move_number, depth, &mut seeded(0))
                .unwrap();
            let without = full
                .search(&board, side, move_number, depth, &mut seeded(0))
                .unwrap();
            assert_eq!(
                with_cutoff.score.signum(),
                without.score.signum(),
                "{layout} {side} at {move_number}"
            );
            // The cutoff reports the slowest defender win.
            assert!(with_cutoff.score <= without.score, "{layout} {side} at {move_number}");
        }
    }
}

#[test]
fn engine_game_finishes_within_move_limit() {
    let searcher = Searcher::new(SearchConfig::default(), Evaluator::default());
    let mut rng = seeded(13);
    let mut board = Board::starting_position();
    let mut side = Side::Attacker;
    let mut move_number = 0;

    while board.winner().is_none() && move_number <= 24 {
        let result = searcher
            .search(&board, side, move_number, 2, &mut rng)
            .unwrap();
        let mv = result.best_move.expect("undecided position has a move");
        board = board.try_apply_move(side, mv).unwrap();
        side = !side;
        move_number += 1;
    }

    assert!(move_number <= 25);
    if move_number <= 24 {
        assert!(board.winner().is_some());
    }
}
