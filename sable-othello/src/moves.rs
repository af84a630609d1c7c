//! Legal move generation and capture application.

use crate::board::Board;
use crate::cell::{Cell, Player};
use crate::location::Location;
use crate::utils;
use arrayvec::ArrayVec;
use std::fmt;

/// Compass directions as (row, col) steps, in scan order.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A single direction captures at most 6 pieces and a line through a space has two
/// directions, so no move can capture more than 4 * 6.
const MAX_CAPTURES: usize = 24;

/// Only empty spaces can be moves, and there are at most 60 of them.
const MAX_MOVES: usize = 64;

/// The opponent pieces flipped by a move, in direction scan order and
/// nearest-to-move first within each direction.
pub type Captures = ArrayVec<Location, MAX_CAPTURES>;

/// A legal placement and every opponent piece it captures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub location: Location,
    pub captures: Captures,
}

/// All legal moves for one side in one position, in row-major order of destination.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegalMoves(ArrayVec<Move, MAX_MOVES>);

impl Board {
    /// Generate every legal move for `player`.
    /// An empty result means `player` must pass.
    pub fn legal_moves(&self, player: Player) -> LegalMoves {
        let moves = Location::all()
            .filter(|&loc| self.get(loc).is_empty())
            .filter_map(|loc| {
                let captures = self.captures_at(loc, player);
                if captures.is_empty() {
                    None
                } else {
                    Some(Move {
                        location: loc,
                        captures,
                    })
                }
            })
            .collect();

        LegalMoves(moves)
    }

    /// Count the legal moves for `player` without collecting their captures.
    pub fn count_moves(&self, player: Player) -> usize {
        Location::all()
            .filter(|&loc| self.get(loc).is_empty())
            .filter(|&loc| {
                DIRECTIONS
                    .iter()
                    .any(|&direction| self.ray_captures(loc, player, direction).is_some())
            })
            .count()
    }

    /// Returns true if neither side can move.
    pub fn is_terminal(&self) -> bool {
        self.count_moves(Player::Black) == 0 && self.count_moves(Player::White) == 0
    }

    /// Gather the captures for `player` placing at `loc` across all directions.
    /// Empty if the placement is illegal.
    pub fn captures_at(&self, loc: Location, player: Player) -> Captures {
        let mut captures = Captures::new();
        if !self.get(loc).is_empty() {
            return captures;
        }

        for &direction in DIRECTIONS.iter() {
            if let Some(run) = self.ray_captures(loc, player, direction) {
                captures.extend(run);
            }
        }
        captures
    }

    /// Walk from `loc` along `direction` over opponent pieces. The run is a capture
    /// only if it is non-empty and ends on one of `player`'s pieces.
    fn ray_captures(
        &self,
        loc: Location,
        player: Player,
        (d_row, d_col): (i8, i8),
    ) -> Option<ArrayVec<Location, 6>> {
        let opponent = Cell::from(-player);
        let mut run = ArrayVec::new();
        let mut cursor = loc.offset(d_row, d_col);

        while let Some(next) = cursor {
            if self.get(next) != opponent {
                break;
            }
            // Seven steps would walk off the board, so a run never exceeds six.
            if run.try_push(next).is_err() {
                return None;
            }
            cursor = next.offset(d_row, d_col);
        }

        match cursor {
            Some(end) if !run.is_empty() && self.get(end) == player => Some(run),
            _ => None,
        }
    }

    /// Play a move for `player`: a new board with the destination and every
    /// captured piece set to `player`'s color.
    pub fn apply(self, player: Player, mv: &Move) -> Self {
        let color = Cell::from(player);
        mv.captures
            .iter()
            .fold(self.with_cell(mv.location, color), |board, &loc| {
                board.with_cell(loc, color)
            })
    }
}

impl Move {
    /// The number of opponent pieces this move flips.
    #[inline]
    pub fn num_captures(&self) -> usize {
        self.captures.len()
    }
}

impl LegalMoves {
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the side to move has to pass.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up the move to `loc`, if it is legal.
    pub fn get(&self, loc: Location) -> Option<&Move> {
        self.0.iter().find(|mv| mv.location == loc)
    }

    /// Returns whether `loc` is a legal destination.
    pub fn contains(&self, loc: Location) -> bool {
        self.get(loc).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.0.iter()
    }

    /// The legal destinations, in generation order.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.0.iter().map(|mv| mv.location)
    }
}

impl IntoIterator for LegalMoves {
    type Item = Move;
    type IntoIter = arrayvec::IntoIter<Move, MAX_MOVES>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LegalMoves {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for LegalMoves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .locations()
            .map(|loc| loc.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}

/// A board printed with one player's legal destinations marked `*`.
pub struct Hinted<'a> {
    board: &'a Board,
    moves: &'a LegalMoves,
}

impl Board {
    pub fn hinted<'a>(&'a self, moves: &'a LegalMoves) -> Hinted<'a> {
        Hinted { board: self, moves }
    }
}

impl fmt::Display for Hinted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(f, |loc| {
            if self.moves.contains(loc) {
                '*'
            } else {
                self.board.get(loc).symbol()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(row: usize, col: usize) -> Location {
        Location::from_coords(row, col).unwrap()
    }

    #[test]
    fn opening_moves_for_black() {
        let moves = Board::new().legal_moves(Player::Black);
        let locations: Vec<Location> = moves.locations().collect();
        assert_eq!(locations, vec![loc(2, 3), loc(3, 2), loc(4, 5), loc(5, 4)]);
        for mv in &moves {
            assert_eq!(mv.num_captures(), 1);
        }
        assert_eq!(moves.get(loc(2, 3)).unwrap().captures.as_slice(), &[loc(3, 3)]);
        assert_eq!(moves.to_string(), "[D3, C4, F5, E6]");
    }

    #[test]
    fn opening_moves_for_white() {
        let moves = Board::new().legal_moves(Player::White);
        let locations: Vec<Location> = moves.locations().collect();
        assert_eq!(locations, vec![loc(2, 4), loc(3, 5), loc(4, 2), loc(5, 3)]);
    }

    #[test]
    fn captures_follow_direction_order() {
        // Black at D4 captures toward A1 (two pieces) and toward D8 (one piece).
        let board: Board = "
            X-------
            -O------
            --O-----
            --------
            ---O----
            ---X----
            --------
            --------"
            .parse()
            .unwrap();
        let captures = board.captures_at(loc(3, 3), Player::Black);
        assert_eq!(captures.as_slice(), &[loc(2, 2), loc(1, 1), loc(4, 3)]);
    }

    #[test]
    fn runs_must_end_on_own_piece() {
        // West touches our own piece directly and east ends on an empty space.
        let board: Board = "
            --------
            --------
            --------
            OOX-OO--
            --------
            --------
            --------
            --------"
            .parse()
            .unwrap();
        assert!(board.captures_at(loc(3, 3), Player::Black).is_empty());
        assert!(!board.legal_moves(Player::Black).contains(loc(3, 3)));
    }

    #[test]
    fn occupied_space_is_never_a_move() {
        let board = Board::new();
        assert!(board.captures_at(loc(3, 3), Player::Black).is_empty());
    }

    #[test]
    fn apply_flips_captures() {
        let board = Board::new();
        let moves = board.legal_moves(Player::Black);
        for mv in &moves {
            let next = board.apply(Player::Black, mv);
            assert_eq!(
                next.count(Player::Black),
                board.count(Player::Black) + 1 + mv.num_captures()
            );
            assert_eq!(
                next.count(Player::White),
                board.count(Player::White) - mv.num_captures()
            );
            assert_eq!(next.count_occupied(), board.count_occupied() + 1);
        }
    }

    #[test]
    fn full_board_is_terminal() {
        let board: Board = "X".repeat(64).parse().unwrap();
        assert!(board.is_terminal());
        assert!(board.legal_moves(Player::White).is_empty());
        assert!(!Board::new().is_terminal());
    }

    #[test]
    fn count_moves_matches_generator() {
        let board = Board::new();
        let opening = board.legal_moves(Player::Black);
        let after = board.apply(Player::Black, opening.get(loc(2, 3)).unwrap());
        assert_eq!(
            after.count_moves(Player::White),
            after.legal_moves(Player::White).len()
        );
        assert_eq!(after.count_moves(Player::White), 3);
    }

    #[test]
    fn colors_are_not_interchangeable() {
        let board = Board::new();
        assert_ne!(
            board.legal_moves(Player::Black),
            board.legal_moves(Player::White)
        );
    }

    #[test]
    fn hinted_marks_destinations() {
        let board = Board::new();
        let moves = board.legal_moves(Player::Black);
        let text = board.hinted(&moves).to_string();
        assert!(text.contains(" 3 . . . * . . . . "));
        assert!(text.contains(" 4 . . * O # . . . "));
        assert_eq!(text.matches('*').count(), 4);
    }
}
