use async_trait::async_trait;
use derive_more::{Display, Error};
use sable_othello::{Action, Game, Location, Player};

use crate::engine::EngineError;

/// Why a connector could not produce an action.
#[derive(Debug, Display, Error)]
pub enum ConnectorError {
    #[display(fmt = "input closed")]
    Closed,
    #[display(fmt = "cannot read input")]
    Io { source: std::io::Error },
    #[display(fmt = "engine failed")]
    Engine { source: EngineError },
}

/// One side of a match: somewhere actions come from.
#[async_trait]
pub trait Connector: Send {
    /// Find out what color we're playing.
    fn player(&self) -> Player;

    /// A short label for logs and prompts.
    fn name(&self) -> &str;

    /// Choose an action for the active player of `game`, which is always
    /// [`Connector::player`] and always has at least one legal move.
    async fn choose_action(&mut self, game: &Game) -> Result<Action, ConnectorError>;

    /// The scored alternatives behind the last action, best first. Empty for
    /// connectors that don't search.
    fn last_decisions(&self) -> &[(i32, Location)] {
        &[]
    }
}
