//! Utilities used for testing and benchmarking.

pub mod perft;
pub use perft::{perft, run_perft, PerftCounts};
