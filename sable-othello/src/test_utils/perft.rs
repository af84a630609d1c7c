//! Perft: walk the full game tree to a fixed depth and count what it contains.
//! The leaf counts from the opening are well known, which makes this a regression
//! check on move generation and pass handling.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::board::Board;
use crate::cell::Player;

/// What a perft walk saw. A pass counts as a ply, and a finished game counts as a
/// leaf wherever it occurs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub leaves: u64,
    pub passes: u64,
    pub game_ends: u64,
}

/// Leaves below the opening position at `depth`.
pub fn run_perft(depth: u64) -> u64 {
    perft(Board::new(), Player::Black, depth).leaves
}

pub fn perft(board: Board, player: Player, depth: u64) -> PerftCounts {
    let mut counts = PerftCounts::default();
    walk(board, player, depth, false, &mut counts);
    counts
}

fn walk(board: Board, player: Player, depth: u64, passed: bool, counts: &mut PerftCounts) {
    if depth == 0 {
        counts.leaves += 1;
        return;
    }

    let moves = board.legal_moves(player);
    if moves.is_empty() {
        if passed {
            counts.game_ends += 1;
            counts.leaves += 1;
        } else {
            counts.passes += 1;
            walk(board, -player, depth - 1, true, counts);
        }
        return;
    }

    for mv in &moves {
        walk(board.apply(player, mv), -player, depth - 1, false, counts);
    }
}
