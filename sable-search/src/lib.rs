//! Move selection for an automated Othello player.
//!
//!  - [`eval`] scores a position from one player's perspective, with weights that
//!    shift between the opening, midgame and endgame.
//!  - [`search`] is a depth-bounded minimax with alpha-beta pruning that also reports
//!    the value of every root move it considered.

pub mod eval;
pub mod search;

mod difficulty;

pub use difficulty::{Difficulty, ParseDifficultyError};
pub use eval::{evaluate, evaluate_detailed, Evaluation, Phase};
pub use search::{search, search_root, search_with_stats, ScoredMove, SearchResult, SearchStats};
