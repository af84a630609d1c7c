//! The 8x8 board value type.
//!
//! A [`Board`] is `Copy` and never mutated in place: placing pieces produces a new
//! board. By convention row 0 is the top of the board and storage is row-major.

use crate::cell::{Cell, Player};
use crate::location::Location;
use crate::{utils, EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// A complete Othello position (without the side to move).
///
/// Serialized as an 8x8 grid of `{-1, 0, 1}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<i8>>", try_from = "Vec<Vec<i8>>")]
pub struct Board {
    cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
}

/// Reasons a grid cannot be turned into a [`Board`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    #[display(fmt = "expected 8 rows, found {}", found)]
    RowCount { found: usize },
    #[display(fmt = "expected 8 columns in row {}, found {}", row, found)]
    ColumnCount { row: usize, found: usize },
    #[display(fmt = "invalid cell value {} at row {}, column {}", value, row, col)]
    InvalidCell { row: usize, col: usize, value: i8 },
}

/// Reasons a board string cannot be parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected 64 spaces, found {}", found)]
    WrongLength { found: usize },
    #[display(fmt = "unrecognized piece {:?}", piece)]
    BadPiece { piece: char },
}

impl Default for Board {
    /// Gets the standard starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position: White on D4 and E5, Black on E4 and D5.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH];
        cells[3][3] = Cell::White;
        cells[4][4] = Cell::White;
        cells[3][4] = Cell::Black;
        cells[4][3] = Cell::Black;
        Self { cells }
    }

    /// A board with no pieces on it.
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    /// Build a board from a signed grid, failing on values outside `{-1, 0, 1}`.
    pub fn from_rows(rows: [[i8; EDGE_LENGTH]; EDGE_LENGTH]) -> Result<Self, BoardError> {
        let mut cells = [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH];
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                cells[row][col] = Cell::try_from(value)
                    .map_err(|_| BoardError::InvalidCell { row, col, value })?;
            }
        }
        Ok(Self { cells })
    }

    /// The signed grid for this board.
    pub fn to_rows(&self) -> [[i8; EDGE_LENGTH]; EDGE_LENGTH] {
        let mut rows = [[0; EDGE_LENGTH]; EDGE_LENGTH];
        for loc in Location::all() {
            rows[loc.row()][loc.col()] = self.get(loc).into();
        }
        rows
    }

    #[inline]
    pub fn get(&self, loc: Location) -> Cell {
        self[loc]
    }

    /// A copy of this board with one cell replaced.
    #[inline]
    pub fn with_cell(self, loc: Location, cell: Cell) -> Self {
        let mut next = self;
        next.cells[loc.row()][loc.col()] = cell;
        next
    }

    /// Count the pieces belonging to `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells().filter(|&cell| cell == player).count()
    }

    /// Count the occupied spaces.
    pub fn count_occupied(&self) -> usize {
        self.cells().filter(|cell| !cell.is_empty()).count()
    }

    /// Count the empty spaces.
    pub fn count_empty(&self) -> usize {
        NUM_SPACES - self.count_occupied()
    }

    /// Score a board as: # `player` pieces - # opponent pieces.
    pub fn disc_difference(&self, player: Player) -> i32 {
        self.count(player) as i32 - self.count(player.opponent()) as i32
    }

    /// The same position with every piece's owner flipped.
    pub fn swap_players(self) -> Self {
        let mut next = self;
        for row in next.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = -*cell;
            }
        }
        next
    }

    /// Iterate over the cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }
}

impl Index<Location> for Board {
    type Output = Cell;

    fn index(&self, loc: Location) -> &Cell {
        let (row, col) = loc.to_coords();
        &self.cells[row][col]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(f, |loc| self.get(loc).symbol())
    }
}

/// Parse a board from 64 piece characters in row-major order.
/// `X`/`B`/`#` are black, `O`/`W` are white, `-`/`.` are empty; whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pieces: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if pieces.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength {
                found: pieces.len(),
            });
        }

        let mut board = Board::empty();
        for (loc, &piece) in Location::all().zip(pieces.iter()) {
            let cell = match piece.to_ascii_uppercase() {
                'X' | 'B' | '#' => Cell::Black,
                'O' | 'W' => Cell::White,
                '-' | '.' => Cell::Empty,
                _ => return Err(ParseBoardError::BadPiece { piece }),
            };
            board = board.with_cell(loc, cell);
        }
        Ok(board)
    }
}

impl From<Board> for Vec<Vec<i8>> {
    fn from(board: Board) -> Self {
        board.to_rows().iter().map(|row| row.to_vec()).collect()
    }
}

impl TryFrom<Vec<Vec<i8>>> for Board {
    type Error = BoardError;

    fn try_from(grid: Vec<Vec<i8>>) -> Result<Self, Self::Error> {
        if grid.len() != EDGE_LENGTH {
            return Err(BoardError::RowCount { found: grid.len() });
        }

        let mut rows = [[0; EDGE_LENGTH]; EDGE_LENGTH];
        for (row, values) in grid.iter().enumerate() {
            if values.len() != EDGE_LENGTH {
                return Err(BoardError::ColumnCount {
                    row,
                    found: values.len(),
                });
            }
            rows[row].copy_from_slice(values);
        }
        Self::from_rows(rows)
    }
}
