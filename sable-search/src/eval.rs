//! Static evaluation of Othello positions.
//!
//! A score is the sum of five terms, each positive when it favors the perspective
//! player: disc differential, mobility differential, corner control, a penalty for
//! pieces next to open corners, and a stability differential. The weight of each
//! term depends on the [`Phase`], which is derived from the number of pieces placed.

use sable_othello::{Board, Cell, Location, Player, CORNERS};

/// Subtracted once per perspective piece adjacent to an empty corner, in every phase.
pub const X_SQUARE_PENALTY: i32 = 15;

/// The four lines through a space, each walked in both directions.
const AXES: [(i8, i8); 4] = [(1, 0), (1, 1), (0, 1), (-1, 1)];

/// Game phase, classified by the number of pieces on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Fewer than 20 pieces.
    Opening,
    /// 20 to 51 pieces.
    Midgame,
    /// 52 pieces or more.
    Endgame,
}

/// Multipliers for the weighted evaluation terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Weights {
    pub pieces: i32,
    pub mobility: i32,
    pub corners: i32,
    pub stability: i32,
}

impl Phase {
    pub fn from_total_pieces(total_pieces: usize) -> Self {
        if total_pieces < 20 {
            Phase::Opening
        } else if total_pieces < 52 {
            Phase::Midgame
        } else {
            Phase::Endgame
        }
    }

    pub fn weights(self) -> Weights {
        match self {
            Phase::Opening => Weights {
                pieces: 1,
                mobility: 15,
                corners: 100,
                stability: 80,
            },
            Phase::Midgame => Weights {
                pieces: 5,
                mobility: 10,
                corners: 100,
                stability: 100,
            },
            Phase::Endgame => Weights {
                pieces: 20,
                mobility: 5,
                corners: 120,
                stability: 120,
            },
        }
    }
}

/// The weighted terms of an evaluation, for introspection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub phase: Phase,
    pub discs: i32,
    pub mobility: i32,
    pub corners: i32,
    /// Always zero or negative.
    pub x_squares: i32,
    pub stability: i32,
}

impl Evaluation {
    pub fn total(&self) -> i32 {
        self.discs + self.mobility + self.corners + self.x_squares + self.stability
    }
}

/// Score `board` for `player`. Positive scores favor `player`.
///
/// `total_pieces` selects the phase weights; it is supplied by the caller rather
/// than counted, so search can advance it one piece per ply.
#[inline]
pub fn evaluate(board: &Board, player: Player, total_pieces: usize) -> i32 {
    evaluate_detailed(board, player, total_pieces).total()
}

/// Score `board` for `player`, keeping each term separate.
pub fn evaluate_detailed(board: &Board, player: Player, total_pieces: usize) -> Evaluation {
    let phase = Phase::from_total_pieces(total_pieces);
    let weights = phase.weights();
    let opponent = -player;

    let discs = weights.pieces * board.disc_difference(player);

    let my_moves = board.count_moves(player) as i32;
    let opp_moves = board.count_moves(opponent) as i32;
    let mobility = if my_moves + opp_moves > 0 {
        weights.mobility * (my_moves - opp_moves)
    } else {
        0
    };

    let corner_balance: i32 = CORNERS
        .iter()
        .map(|&corner| match board.get(corner).owner() {
            Some(owner) if owner == player => 1,
            Some(_) => -1,
            None => 0,
        })
        .sum();
    let corners = weights.corners * corner_balance;

    let x_squares = -X_SQUARE_PENALTY * count_open_corner_neighbors(board, player) as i32;

    let stability = weights.stability
        * (count_stable(board, player) as i32 - count_stable(board, opponent) as i32);

    Evaluation {
        phase,
        discs,
        mobility,
        corners,
        x_squares,
        stability,
    }
}

/// The two edge-adjacent spaces and the diagonal neighbor of a corner.
fn corner_neighbors(corner: Location) -> [Option<Location>; 3] {
    let d_row = if corner.row() == 0 { 1 } else { -1 };
    let d_col = if corner.col() == 0 { 1 } else { -1 };
    [
        corner.offset(0, d_col),
        corner.offset(d_row, 0),
        corner.offset(d_row, d_col),
    ]
}

/// Count `player`'s pieces sitting next to a corner that is still empty.
fn count_open_corner_neighbors(board: &Board, player: Player) -> usize {
    CORNERS
        .iter()
        .filter(|&&corner| board.get(corner).is_empty())
        .flat_map(|&corner| corner_neighbors(corner))
        .flatten()
        .filter(|&loc| board.get(loc) == player)
        .count()
}

/// Count the pieces of `player` that [`is_stable`].
pub fn count_stable(board: &Board, player: Player) -> usize {
    Location::all()
        .filter(|&loc| board.get(loc) == player)
        .filter(|&loc| is_stable(board, loc, player))
        .count()
}

/// A conservative stability test: on every axis through `loc`, at least one of the
/// two directions must be secured (see [`is_secured`]).
pub fn is_stable(board: &Board, loc: Location, player: Player) -> bool {
    AXES.iter().all(|&(d_row, d_col)| {
        is_secured(board, loc, player, d_row, d_col)
            || is_secured(board, loc, player, -d_row, -d_col)
    })
}

/// Walking from `loc` over `player`'s own pieces, the direction is secured if the
/// walk leaves the board or stops on an opponent piece rather than an empty space.
fn is_secured(board: &Board, loc: Location, player: Player, d_row: i8, d_col: i8) -> bool {
    let mut cursor = loc.offset(d_row, d_col);
    while let Some(next) = cursor {
        match board.get(next) {
            Cell::Empty => return false,
            cell if cell == player => cursor = next.offset(d_row, d_col),
            _ => return true,
        }
    }
    true
}
