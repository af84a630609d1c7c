//! Implements game-level Othello logic.
//!
//! For correctness, this higher-level interface is preferred; search code works on
//! [`Board`]s directly and tracks the side to move itself.

use crate::board::Board;
use crate::cell::Player;
use crate::location::{Location, ParseLocationError};
use crate::moves::LegalMoves;
use derive_more::{Display, Error};
use std::fmt;

/// An action in an Othello game: pass or place a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Place(Location),
    Pass,
}

impl From<Location> for Action {
    fn from(loc: Location) -> Self {
        Self::Place(loc)
    }
}

impl From<Option<Location>> for Action {
    /// A missing location is a pass.
    fn from(loc: Option<Location>) -> Self {
        loc.map_or(Self::Pass, Self::Place)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Place(loc) => write!(f, "{}", loc),
            Action::Pass => f.write_str("pass"),
        }
    }
}

/// Parse an action from notation ("D3" or "pass").
impl std::str::FromStr for Action {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("pass") {
            return Ok(Self::Pass);
        }
        s.parse().map(Self::Place)
    }
}

/// Why an action was refused. The game is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum GameError {
    #[display(fmt = "{} cannot play at {}", player, location)]
    IllegalMove { player: Player, location: Location },
    #[display(fmt = "{} has legal moves and cannot pass", player)]
    IllegalPass { player: Player },
    #[display(fmt = "the game is over")]
    GameOver,
}

/// The complete state of an Othello game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Game {
    pub board: Board,
    pub active_player: Player,
}

impl Default for Game {
    /// Gets the starting position with Black to move.
    fn default() -> Self {
        Self::new(Board::new(), Player::default())
    }
}

impl Game {
    pub fn new(board: Board, active_player: Player) -> Self {
        Self {
            board,
            active_player,
        }
    }

    /// Get the legal moves for the active player.
    #[inline]
    pub fn legal_moves(&self) -> LegalMoves {
        self.board.legal_moves(self.active_player)
    }

    /// Returns true if the active player has nowhere to play.
    pub fn must_pass(&self) -> bool {
        self.board.count_moves(self.active_player) == 0
    }

    /// The game ends when neither player can move.
    pub fn is_finished(&self) -> bool {
        self.board.is_terminal()
    }

    /// Apply an action for the active player, returning the next state.
    pub fn apply(&self, action: Action) -> Result<Self, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }

        let player = self.active_player;
        let board = match action {
            Action::Pass => {
                if !self.must_pass() {
                    return Err(GameError::IllegalPass { player });
                }
                self.board
            }
            Action::Place(location) => {
                let moves = self.legal_moves();
                let mv = moves
                    .get(location)
                    .ok_or(GameError::IllegalMove { player, location })?;
                self.board.apply(player, mv)
            }
        };

        Ok(Self::new(board, player.opponent()))
    }

    /// The number of pieces on the board.
    pub fn total_pieces(&self) -> usize {
        self.board.count_occupied()
    }

    /// Disc tally as (black, white).
    pub fn score(&self) -> (usize, usize) {
        (
            self.board.count(Player::Black),
            self.board.count(Player::White),
        )
    }

    /// The player with more discs, or None for a draw.
    pub fn winner(&self) -> Option<Player> {
        let (black, white) = self.score();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        let (black, white) = self.score();
        write!(f, "Black (#) {} - {} White (O)", black, white)?;
        if !self.is_finished() {
            write!(f, ", {} to move", self.active_player)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(row: usize, col: usize) -> Location {
        Location::from_coords(row, col).unwrap()
    }

    #[test]
    fn legal_move_switches_player() {
        let game = Game::default();
        let next = game.apply(Action::Place(loc(2, 3))).unwrap();
        assert_eq!(next.active_player, Player::White);
        assert_eq!(next.score(), (4, 1));
        assert_eq!(next.total_pieces(), 5);
    }

    #[test]
    fn illegal_move_is_refused() {
        let game = Game::default();
        assert_eq!(
            game.apply(Action::Place(loc(0, 0))),
            Err(GameError::IllegalMove {
                player: Player::Black,
                location: loc(0, 0)
            })
        );
        assert_eq!(
            game.apply(Action::Pass),
            Err(GameError::IllegalPass {
                player: Player::Black
            })
        );
    }

    #[test]
    fn pass_only_when_stuck() {
        // White has no piece to bound a run, black can still play.
        let board: Board = "
            XO------
            --------
            --------
            --------
            --------
            --------
            --------
            --------"
            .parse()
            .unwrap();
        let game = Game::new(board, Player::White);
        assert!(game.must_pass());
        assert!(!game.is_finished());

        let next = game.apply(Action::Pass).unwrap();
        assert_eq!(next.active_player, Player::Black);
        assert_eq!(next.board, board);
        assert!(next.legal_moves().contains(loc(0, 2)));
    }

    #[test]
    fn finished_game() {
        let board: Board = format!("{}{}", "X".repeat(40), "O".repeat(24))
            .parse()
            .unwrap();
        let game = Game::new(board, Player::Black);
        assert!(game.is_finished());
        assert_eq!(game.winner(), Some(Player::Black));
        assert_eq!(game.apply(Action::Pass), Err(GameError::GameOver));
    }

    #[test]
    fn draw_has_no_winner() {
        let board: Board = format!("{}{}", "X".repeat(32), "O".repeat(32))
            .parse()
            .unwrap();
        assert_eq!(Game::new(board, Player::White).winner(), None);
    }

    #[test]
    fn parse_action() {
        assert_eq!("pass".parse::<Action>(), Ok(Action::Pass));
        assert_eq!("PASS".parse::<Action>(), Ok(Action::Pass));
        assert_eq!("d3".parse::<Action>(), Ok(Action::Place(loc(2, 3))));
        assert!("Z9".parse::<Action>().is_err());
        assert_eq!(Action::from(None), Action::Pass);
    }
}
