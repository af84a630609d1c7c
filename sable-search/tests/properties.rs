//! Whole-search properties checked on the opening and on random positions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sable_othello::{Board, Location, Player};
use sable_search::search::INFINITY;
use sable_search::{evaluate, search, search_root};

/// Plain minimax with the same pass rules and tie-breaking, but no pruning.
fn minimax(
    board: Board,
    depth: u32,
    maximizing: bool,
    ai_player: Player,
    total_pieces: usize,
) -> (i32, Option<Location>) {
    if depth == 0 {
        return (evaluate(&board, ai_player, total_pieces), None);
    }

    let mover = if maximizing { ai_player } else { -ai_player };
    let moves = board.legal_moves(mover);
    if moves.is_empty() {
        if board.legal_moves(-mover).is_empty() {
            return (evaluate(&board, ai_player, total_pieces), None);
        }
        let (value, _) = minimax(board, depth - 1, !maximizing, ai_player, total_pieces);
        return (value, None);
    }

    let mut best: Option<(i32, Location)> = None;
    for mv in &moves {
        let (score, _) = minimax(
            board.apply(mover, mv),
            depth - 1,
            !maximizing,
            ai_player,
            total_pieces + 1,
        );
        let better = match best {
            None => true,
            Some((value, _)) if maximizing => score > value,
            Some((value, _)) => score < value,
        };
        if better {
            best = Some((score, mv.location));
        }
    }

    let (value, location) = best.unwrap();
    (value, Some(location))
}

/// Play `plies` random moves from the start, returning the board and the side to move.
fn random_position(rng: &mut StdRng, plies: usize) -> (Board, Player) {
    let mut board = Board::new();
    let mut player = Player::Black;

    for _ in 0..plies {
        let moves = board.legal_moves(player);
        if moves.is_empty() {
            if board.legal_moves(-player).is_empty() {
                break;
            }
            player = -player;
            continue;
        }
        let pick = rng.gen_range(0..moves.len());
        let mv = moves.iter().nth(pick).unwrap();
        board = board.apply(player, mv);
        player = -player;
    }

    (board, player)
}

fn parse(board: &str) -> Board {
    board.parse().unwrap()
}

#[test]
fn alpha_beta_matches_minimax() {
    let mut rng = StdRng::seed_from_u64(0x5AB1E);

    for round in 0..24 {
        let plies = rng.gen_range(0..50);
        let (board, player) = random_position(&mut rng, plies);
        let total = board.count_occupied();

        for depth in 1..=if round % 4 == 0 { 4 } else { 3 } {
            let pruned = search_root(board, depth, player, total);
            let (value, location) = minimax(board, depth, true, player, total);
            assert_eq!(
                (pruned.value, pruned.best_move),
                (value, location),
                "depth {} on\n{}",
                depth,
                board
            );
        }
    }
}

#[test]
fn alpha_beta_matches_minimax_from_opening() {
    let board = Board::new();
    for depth in 1..=4 {
        let pruned = search_root(board, depth, Player::Black, 4);
        let (value, location) = minimax(board, depth, true, Player::Black, 4);
        assert_eq!((pruned.value, pruned.best_move), (value, location));
    }
}

#[test]
fn root_log_is_sorted_and_led_by_best_move() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..8 {
        let plies = rng.gen_range(4..40);
        let (board, player) = random_position(&mut rng, plies);
        let result = search_root(board, 3, player, board.count_occupied());

        if board.legal_moves(player).is_empty() {
            assert_eq!(result.best_move, None);
            continue;
        }

        let scores: Vec<i32> = result.decision_log.iter().map(|e| e.score).collect();
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
        assert_eq!(Some(result.decision_log[0].location), result.best_move);
        assert_eq!(result.decision_log[0].score, result.value);
    }
}

#[test]
fn captures_change_counts_exactly() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..16 {
        let plies = rng.gen_range(0..55);
        let (board, player) = random_position(&mut rng, plies);
        for mv in &board.legal_moves(player) {
            let next = board.apply(player, mv);
            assert_eq!(
                next.count(player),
                board.count(player) + 1 + mv.num_captures()
            );
            assert_eq!(next.count(-player), board.count(-player) - mv.num_captures());
            assert_eq!(next.count_occupied(), board.count_occupied() + 1);
        }
    }
}

#[test]
fn pass_spends_a_ply() {
    // White cannot move; Black can take C1.
    let board = parse(
        "
        XO------
        --------
        --------
        --------
        --------
        --------
        --------
        --------",
    );
    assert!(board.legal_moves(Player::White).is_empty());

    for depth in 1..=4 {
        let passed = search(board, depth, -INFINITY, INFINITY, true, Player::White, 2);
        let reply = search(board, depth - 1, -INFINITY, INFINITY, false, Player::White, 2);
        assert_eq!(passed.value, reply.value);
        assert_eq!(passed.best_move, None);
        assert!(passed.decision_log.is_empty());
    }

    // With one ply left the pass uses it up and the position is scored as is.
    let passed = search(board, 1, -INFINITY, INFINITY, true, Player::White, 2);
    assert_eq!(passed.value, evaluate(&board, Player::White, 2));
}

#[test]
fn no_moves_for_either_side_is_terminal() {
    let board = parse(&format!("X{}", "-".repeat(63)));
    assert!(board.is_terminal());

    for &maximizing in &[true, false] {
        let result = search(board, 6, -INFINITY, INFINITY, maximizing, Player::White, 1);
        assert_eq!(result.value, evaluate(&board, Player::White, 1));
        assert_eq!(result.best_move, None);
        assert!(result.decision_log.is_empty());
    }
}

#[test]
fn repeated_searches_are_identical() {
    let mut rng = StdRng::seed_from_u64(3);
    let (board, player) = random_position(&mut rng, 20);
    let total = board.count_occupied();

    let first = search_root(board, 4, player, total);
    for _ in 0..3 {
        assert_eq!(search_root(board, 4, player, total), first);
    }
}

#[test]
fn search_never_touches_its_input() {
    let board = Board::new();
    let copy = board;
    search_root(board, 3, Player::Black, 4);
    assert_eq!(board, copy);
}
