//! Depth-bounded minimax search with alpha-beta pruning.
//!
//! Every ply builds a fresh child [`Board`]; nothing is undone. The side to move at a
//! node is `ai_player` when maximizing and its opponent when minimizing, and leaves are
//! always scored from `ai_player`'s perspective, so minimizing nodes pick the reply
//! that is worst for `ai_player`.

use crate::eval::evaluate;
use log::debug;
use sable_othello::{Board, Location, Player};
use std::time::Instant;

/// A score bound beyond any evaluation.
pub const INFINITY: i32 = i32::MAX;

/// One entry of the decision log: a move considered at the searched node and its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub score: i32,
    pub location: Location,
}

/// The outcome of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub value: i32,
    /// None when the searched node made no move: depth 0, a pass or a finished game.
    pub best_move: Option<Location>,
    /// Every move scanned before a cutoff, best first for maximizing nodes and
    /// worst first for minimizing nodes. Ties keep scan order.
    pub decision_log: Vec<ScoredMove>,
}

/// Counters gathered while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

impl SearchResult {
    fn leaf(value: i32) -> Self {
        Self {
            value,
            best_move: None,
            decision_log: Vec::new(),
        }
    }
}

/// Search `board` to `depth` plies inside the window `(alpha, beta)`.
///
/// `total_pieces` is the piece count used to pick evaluation weights at the leaves;
/// it grows by one for every placement along a line.
pub fn search(
    board: Board,
    depth: u32,
    alpha: i32,
    beta: i32,
    maximizing: bool,
    ai_player: Player,
    total_pieces: usize,
) -> SearchResult {
    let mut stats = SearchStats::default();
    search_with_stats(
        board,
        depth,
        alpha,
        beta,
        maximizing,
        ai_player,
        total_pieces,
        &mut stats,
    )
}

/// Choose a move for `ai_player`, who is to move on `board`, using the full window.
pub fn search_root(
    board: Board,
    depth: u32,
    ai_player: Player,
    total_pieces: usize,
) -> SearchResult {
    let mut stats = SearchStats::default();
    let start = Instant::now();
    let result = search_with_stats(
        board,
        depth,
        -INFINITY,
        INFINITY,
        true,
        ai_player,
        total_pieces,
        &mut stats,
    );

    debug!(
        "searched {} nodes ({} cutoffs) at depth {} in {:?}: {} scores {}",
        stats.nodes,
        stats.cutoffs,
        depth,
        start.elapsed(),
        result
            .best_move
            .map_or_else(|| "pass".to_string(), |loc| loc.to_string()),
        result.value
    );

    result
}

/// [`search`], accumulating node and cutoff counts into `stats`.
#[allow(clippy::too_many_arguments)]
pub fn search_with_stats(
    board: Board,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    ai_player: Player,
    total_pieces: usize,
    stats: &mut SearchStats,
) -> SearchResult {
    stats.nodes += 1;

    if depth == 0 {
        return SearchResult::leaf(evaluate(&board, ai_player, total_pieces));
    }

    let mover = if maximizing { ai_player } else { -ai_player };
    let moves = board.legal_moves(mover);

    if moves.is_empty() {
        // Both players pass: game ends
        if board.count_moves(-mover) == 0 {
            return SearchResult::leaf(evaluate(&board, ai_player, total_pieces));
        }

        // The mover passes, spending a ply. The reply belongs to the other side, so
        // only its value is kept here.
        let reply = search_with_stats(
            board,
            depth - 1,
            alpha,
            beta,
            !maximizing,
            ai_player,
            total_pieces,
            stats,
        );
        return SearchResult::leaf(reply.value);
    }

    let mut value = if maximizing { -INFINITY } else { INFINITY };
    let mut best_move = None;
    let mut decision_log = Vec::with_capacity(moves.len());

    for mv in &moves {
        let child = board.apply(mover, mv);
        let score = search_with_stats(
            child,
            depth - 1,
            alpha,
            beta,
            !maximizing,
            ai_player,
            total_pieces + 1,
            stats,
        )
        .value;
        decision_log.push(ScoredMove {
            score,
            location: mv.location,
        });

        if maximizing {
            if best_move.is_none() || score > value {
                value = score;
                best_move = Some(mv.location);
            }
            alpha = alpha.max(score);
        } else {
            if best_move.is_none() || score < value {
                value = score;
                best_move = Some(mv.location);
            }
            beta = beta.min(score);
        }

        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    // Stable sorts, so equal scores stay in scan order.
    if maximizing {
        decision_log.sort_by(|a, b| b.score.cmp(&a.score));
    } else {
        decision_log.sort_by_key(|entry| entry.score);
    }

    SearchResult {
        value,
        best_move,
        decision_log,
    }
}
