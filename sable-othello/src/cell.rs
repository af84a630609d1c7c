//! The signed cell encoding shared by the board, the evaluator and the search.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::ops::{Neg, Not};

/// One of the two players in a game.
///
/// The discriminants match the board encoding, so `-player` is always the opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
#[repr(i8)]
pub enum Player {
    Black = 1,
    White = -1,
}

/// The contents of a single board space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
#[repr(i8)]
pub enum Cell {
    Black = 1,
    Empty = 0,
    White = -1,
}

/// A signed value outside of the `{-1, 0, 1}` encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "{} is not a valid cell value", value)]
pub struct InvalidCellError {
    pub value: i8,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl Player {
    /// Gets the other player.
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The signed value of this player's pieces on the board.
    #[inline]
    pub fn sign(self) -> i8 {
        self as i8
    }
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self {
        self.opponent()
    }
}

impl Neg for Player {
    type Output = Self;

    fn neg(self) -> Self {
        self.opponent()
    }
}

impl From<Player> for i8 {
    fn from(player: Player) -> Self {
        player.sign()
    }
}

impl TryFrom<i8> for Player {
    type Error = InvalidCellError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Player::Black),
            -1 => Ok(Player::White),
            _ => Err(InvalidCellError { value }),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The player owning this cell, if any.
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
            Cell::Empty => None,
        }
    }

    /// The character used when printing boards.
    pub fn symbol(self) -> char {
        match self {
            Cell::Black => '#',
            Cell::White => 'O',
            Cell::Empty => '.',
        }
    }
}

/// Flips ownership; empty cells stay empty.
impl Neg for Cell {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Cell::Black => Cell::White,
            Cell::White => Cell::Black,
            Cell::Empty => Cell::Empty,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl From<Cell> for i8 {
    fn from(cell: Cell) -> Self {
        cell as i8
    }
}

impl TryFrom<i8> for Cell {
    type Error = InvalidCellError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Cell::Black),
            0 => Ok(Cell::Empty),
            -1 => Ok(Cell::White),
            _ => Err(InvalidCellError { value }),
        }
    }
}

impl PartialEq<Player> for Cell {
    fn eq(&self, other: &Player) -> bool {
        *self == Cell::from(*other)
    }
}
