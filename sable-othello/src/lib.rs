//! `sable-othello` holds the rules of Othello: the board, its cells, move generation and
//! the game session that referees a match.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`Cell`] and [`Player`] carry the signed encoding (`Black = +1`, `White = -1`,
//!    `Empty = 0`) that lets "the other side" be computed by negation.
//!  - [`Board`] is an immutable 8x8 grid. Every operation that changes a position
//!    returns a new board, so search code can recurse without undo logic.
//!    [`Board::legal_moves`] is the move generator.
//!  - [`Game`] is a high-level, checked interface that tracks whose turn it is,
//!    validates actions and detects the end of the game.

pub mod test_utils;

mod board;
mod cell;
mod game;
mod location;
mod moves;
mod utils;

pub use board::*;
pub use cell::*;
pub use game::*;
pub use location::*;
pub use moves::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
