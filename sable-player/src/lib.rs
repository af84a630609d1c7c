//! Everything around the search that a playable program needs.
//!
//!  - [`protocol`] and [`engine`] form the request/response boundary: a request
//!    carries a full board snapshot, and the search runs off the calling task.
//!  - [`connectors`] supply actions for each side of a match, from a terminal or
//!    from the engine, and [`driver`] referees the match itself.
//!  - [`server`] exposes the engine as JSON lines for out-of-process callers.

pub mod config;
pub mod connectors;
pub mod driver;
pub mod engine;
pub mod protocol;
pub mod server;

pub use config::{Config, GameMode};
pub use engine::{Engine, EngineError, SearchHandle};
pub use protocol::{SearchRequest, SearchResponse};
