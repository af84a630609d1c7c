//! Code for working with [`Location`]s on the Othello board.

use crate::EDGE_LENGTH;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Formatter};

/// A location on the Othello board, as 0-indexed row and column coordinates.
///
/// Serialized as a `[row, col]` pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(into = "[u8; 2]", try_from = "[u8; 2]")]
pub struct Location {
    row: u8,
    col: u8,
}

/// The four corner locations, in row-major order.
pub const CORNERS: [Location; 4] = [
    Location { row: 0, col: 0 },
    Location { row: 0, col: 7 },
    Location { row: 7, col: 0 },
    Location { row: 7, col: 7 },
];

impl Location {
    /// Convert from row and column coordinates.
    /// Returns None if the coordinates are off the board.
    #[inline]
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row < EDGE_LENGTH && col < EDGE_LENGTH {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Step from this location by a signed offset, if the result stays on the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Self::from_coords(row as usize, col as usize)
    }

    /// Get the row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.row as usize, self.col as usize)
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Convert from a row-major square index (0 is A1, 63 is H8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::from_coords(index / EDGE_LENGTH, index % EDGE_LENGTH)
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> usize {
        self.row() * EDGE_LENGTH + self.col()
    }

    /// Iterate over every location in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..EDGE_LENGTH * EDGE_LENGTH).filter_map(Self::from_index)
    }
}

/// Convert this [`Location`] into string notation ("A4").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = "ABCDEFGH".chars().nth(self.col()).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(self.row()).ok_or(fmt::Error)?;
        // Padded so width and alignment flags apply.
        f.pad(&format!("{}{}", col_str, row_str))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid location")]
pub struct ParseLocationError;

/// Build a [`Location`] from a 1-indexed string notation ("A4").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::from_coords(row - 1, col).ok_or(ParseLocationError)
    }
}

impl From<Location> for [u8; 2] {
    fn from(loc: Location) -> Self {
        [loc.row, loc.col]
    }
}

impl TryFrom<[u8; 2]> for Location {
    type Error = ParseLocationError;

    fn try_from(coords: [u8; 2]) -> Result<Self, Self::Error> {
        Self::from_coords(coords[0] as usize, coords[1] as usize).ok_or(ParseLocationError)
    }
}
