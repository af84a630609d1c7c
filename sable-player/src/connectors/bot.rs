//! [`Connector`] that asks the search engine for each move.

use super::{Connector, ConnectorError};
use crate::engine::Engine;
use crate::protocol::SearchRequest;
use async_trait::async_trait;
use log::info;
use sable_othello::{Action, Game, Location, Player};
use sable_search::Difficulty;

pub struct BotConnector {
    engine: Engine,
    player: Player,
    difficulty: Difficulty,
    name: String,
    decisions: Vec<(i32, Location)>,
}

impl BotConnector {
    pub fn new(player: Player, difficulty: Difficulty) -> Self {
        Self::with_engine(Engine::new(), player, difficulty)
    }

    pub fn with_engine(engine: Engine, player: Player, difficulty: Difficulty) -> Self {
        Self {
            engine,
            player,
            difficulty,
            name: format!("Sable {} ({})", difficulty, player),
            decisions: Vec::new(),
        }
    }
}

#[async_trait]
impl Connector for BotConnector {
    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &str {
        &self.name
    }

    async fn choose_action(&mut self, game: &Game) -> Result<Action, ConnectorError> {
        let request = SearchRequest::new(&game.board, self.player, self.difficulty);
        let response = self
            .engine
            .request(&request)
            .await
            .map_err(|source| ConnectorError::Engine { source })?;

        info!(
            "{} chose {} scoring {}",
            self.name,
            Action::from(response.best_move),
            response.score
        );
        self.decisions = response.log;
        Ok(Action::from(response.best_move))
    }

    fn last_decisions(&self) -> &[(i32, Location)] {
        &self.decisions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_std::task;
    use sable_othello::Board;
    use sable_search::{search_root, SearchResult};

    fn panicking(_: Board, _: u32, _: Player, _: usize) -> SearchResult {
        panic!("search exploded");
    }

    #[test]
    fn plays_the_searched_move() {
        let game = Game::default();
        let mut bot = BotConnector::new(Player::Black, Difficulty::Easy);
        let action = task::block_on(bot.choose_action(&game)).unwrap();

        let expected = search_root(game.board, 2, Player::Black, 4);
        assert_eq!(action, Action::from(expected.best_move));
        assert_eq!(bot.last_decisions().len(), expected.decision_log.len());
        assert!(game.apply(action).is_ok());
    }

    #[test]
    fn persistent_faults_surface() {
        let engine = Engine::with_searcher(panicking);
        let mut bot = BotConnector::with_engine(engine, Player::Black, Difficulty::Easy);
        let outcome = task::block_on(bot.choose_action(&Game::default()));
        assert!(matches!(outcome, Err(ConnectorError::Engine { .. })));
    }
}
