//! Request and response messages for asking the engine for a move.
//!
//! A request carries a complete copy of the board, so the search never shares
//! state with whoever sent it. In JSON:
//!
//! ```json
//! {"board": [[0, 0, ...], ...], "depth": 4, "aiPlayer": 1, "totalPieces": 4}
//! {"score": 15, "move": [2, 3], "log": [[15, [2, 3]], [15, [3, 2]]]}
//! ```

use derive_more::{Display, Error};
use sable_othello::{Board, BoardError, Location, Player, NUM_SPACES};
use sable_search::{Difficulty, SearchResult};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Eight rows of eight cells, each -1 (white), 0 (empty) or 1 (black).
    pub board: Vec<Vec<i8>>,
    /// Plies to search. Zero or less searches nothing and yields no move.
    pub depth: i64,
    pub ai_player: i64,
    pub total_pieces: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub score: i32,
    #[serde(rename = "move")]
    pub best_move: Option<Location>,
    pub log: Vec<(i32, Location)>,
}

/// Why a request was refused before searching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum RequestError {
    #[display(fmt = "malformed board")]
    Board { source: BoardError },
    #[display(fmt = "aiPlayer must be 1 or -1, found {}", value)]
    AiPlayer { value: i64 },
    #[display(fmt = "totalPieces must be between 0 and 64, found {}", value)]
    TotalPieces { value: i64 },
}

/// A request that passed validation, ready to search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Query {
    pub board: Board,
    pub depth: u32,
    pub ai_player: Player,
    pub total_pieces: usize,
}

impl SearchRequest {
    /// Build a request for `player` to move on `board` at the given difficulty.
    pub fn new(board: &Board, player: Player, difficulty: Difficulty) -> Self {
        Self {
            board: Vec::from(*board),
            depth: i64::from(difficulty.depth()),
            ai_player: i64::from(player.sign()),
            total_pieces: board.count_occupied() as i64,
        }
    }

    pub fn validate(&self) -> Result<Query, RequestError> {
        let board =
            Board::try_from(self.board.clone()).map_err(|source| RequestError::Board { source })?;

        let ai_player = match self.ai_player {
            1 => Player::Black,
            -1 => Player::White,
            value => return Err(RequestError::AiPlayer { value }),
        };

        if !(0..=NUM_SPACES as i64).contains(&self.total_pieces) {
            return Err(RequestError::TotalPieces {
                value: self.total_pieces,
            });
        }

        Ok(Query {
            board,
            depth: u32::try_from(self.depth.max(0)).unwrap_or(u32::MAX),
            ai_player,
            total_pieces: self.total_pieces as usize,
        })
    }
}

impl From<SearchResult> for SearchResponse {
    fn from(result: SearchResult) -> Self {
        Self {
            score: result.value,
            best_move: result.best_move,
            log: result
                .decision_log
                .into_iter()
                .map(|entry| (entry.score, entry.location))
                .collect(),
        }
    }
}
