//! Property-based tests for the evaluator and the alpha-beta search.

use connect_four_minimax::ai::{
    score_board, LineHeuristic, LineTally, SearchResult, Searcher, FULL_WINDOW,
};
use connect_four_minimax::game::{has_four_in_a_row, lines, Board, Player};
use proptest::prelude::*;

/// Plain minimax without pruning, same move order and tie-break.
fn minimax(board: &Board, depth: usize, side: Player, maximizer: Player) -> SearchResult {
    if depth == 0 {
        return SearchResult {
            score: score_board(board, maximizer),
            column: None,
        };
    }

    let maximizing = side == maximizer;
    let mut best = SearchResult {
        score: if maximizing { i32::MIN } else { i32::MAX },
        column: None,
    };
    if has_four_in_a_row(board, side.other()) {
        return best;
    }

    for col in board.legal_columns() {
        let mut child = board.clone();
        child.drop(col, side);
        let score = minimax(&child, depth - 1, side.other(), maximizer).score;
        let improves = if maximizing {
            score > best.score
        } else {
            score < best.score
        };
        if improves || best.column.is_none() {
            best = SearchResult {
                score,
                column: Some(col),
            };
        }
    }
    best
}

/// Replay `moves` alternately starting with `first`. Drops into full
/// columns are skipped silently, which still passes the turn.
fn replay(rows: usize, cols: usize, moves: &[usize], first: Player) -> Board {
    let mut board = Board::with_size(rows, cols);
    let mut side = first;
    for &col in moves {
        board.drop(col, side);
        side = side.other();
    }
    board
}

// Random positions on boards from 4x4 up to the standard 6x7
fn position() -> impl Strategy<Value = (usize, usize, Vec<usize>)> {
    (4usize..=6, 4usize..=7).prop_flat_map(|(rows, cols)| {
        (
            Just(rows),
            Just(cols),
            prop::collection::vec(0..cols, 0..rows * cols),
        )
    })
}

fn player() -> impl Strategy<Value = Player> {
    prop::bool::ANY.prop_map(|red| if red { Player::Red } else { Player::Yellow })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn pruned_search_matches_plain_minimax(
        (rows, cols, moves) in position(),
        depth in 0usize..=4,
        maximizer in player(),
        root_is_maximizer in prop::bool::ANY,
    ) {
        let board = replay(rows, cols, &moves, Player::Red);
        let side = if root_is_maximizer { maximizer } else { maximizer.other() };
        let (alpha, beta) = FULL_WINDOW;

        let pruned = Searcher::new(maximizer, &LineHeuristic).search(&board, depth, alpha, beta, side);
        let plain = minimax(&board, depth, side, maximizer);
        prop_assert_eq!(pruned, plain);
    }

    #[test]
    fn chosen_column_is_playable(
        (rows, cols, moves) in position(),
        depth in 1usize..=3,
        side in player(),
    ) {
        let board = replay(rows, cols, &moves, Player::Red);
        let (alpha, beta) = FULL_WINDOW;
        let result = Searcher::new(side, &LineHeuristic).search(&board, depth, alpha, beta, side);

        match result.column {
            Some(col) => prop_assert!(!board.is_column_full(col)),
            None => prop_assert!(
                board.is_full() || has_four_in_a_row(&board, side.other()),
                "no column chosen on a live board"
            ),
        }
    }

    #[test]
    fn search_is_deterministic((rows, cols, moves) in position(), depth in 1usize..=3) {
        let board = replay(rows, cols, &moves, Player::Red);
        let (alpha, beta) = FULL_WINDOW;
        let searcher = Searcher::new(Player::Yellow, &LineHeuristic);

        let first = searcher.search_with_stats(&board, depth, alpha, beta, Player::Yellow);
        let second = searcher.search_with_stats(&board, depth, alpha, beta, Player::Yellow);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn node_count_within_tree_bound(
        (rows, cols, moves) in position(),
        depth in 1usize..=3,
    ) {
        let board = replay(rows, cols, &moves, Player::Red);
        let (alpha, beta) = FULL_WINDOW;
        let (_, stats) = Searcher::new(Player::Red, &LineHeuristic)
            .search_with_stats(&board, depth, alpha, beta, Player::Red);

        let bound: u64 = (0..=depth as u32).map(|d| (cols as u64).pow(d)).sum();
        prop_assert!(stats.nodes >= 1);
        prop_assert!(stats.nodes <= bound, "{} nodes > bound {}", stats.nodes, bound);
    }

    #[test]
    fn relabelling_pieces_and_perspective_preserves_score(
        (rows, cols, moves) in position(),
    ) {
        let board = replay(rows, cols, &moves, Player::Red);
        let swapped = replay(rows, cols, &moves, Player::Yellow);

        prop_assert_eq!(
            score_board(&board, Player::Red),
            score_board(&swapped, Player::Yellow)
        );
        prop_assert_eq!(
            score_board(&board, Player::Yellow),
            score_board(&swapped, Player::Red)
        );
    }

    #[test]
    fn perspectives_differ_only_by_table_bias((rows, cols, moves) in position()) {
        let board = replay(rows, cols, &moves, Player::Red);

        // +500001/-500000 leaves +1 per completed line; the 3- and 2-piece
        // rows (+5000/-5001, +500/-501) leave -1 each.
        let bias: i32 = lines(&board)
            .map(|line| match LineTally::of(&line.cells(&board), Player::Red) {
                LineTally { good: 4, .. } | LineTally { bad: 4, .. } => 1,
                LineTally { good: 3, empty: 1, .. } | LineTally { bad: 3, empty: 1, .. } => -1,
                LineTally { good: 2, empty: 2, .. } | LineTally { bad: 2, empty: 2, .. } => -1,
                _ => 0,
            })
            .sum();

        prop_assert_eq!(
            score_board(&board, Player::Red) + score_board(&board, Player::Yellow),
            bias
        );
    }

    #[test]
    fn win_detector_agrees_with_line_tallies((rows, cols, moves) in position(), who in player()) {
        let board = replay(rows, cols, &moves, Player::Red);
        let full_line = lines(&board).any(|line| LineTally::of(&line.cells(&board), who).good == 4);
        prop_assert_eq!(has_four_in_a_row(&board, who), full_line);
    }
}
