//! [`Connector`] for a human typing moves such as `d3`.

use super::{Connector, ConnectorError};
use async_std::io::{self, prelude::BufReadExt, BufRead, BufReader, Stdin};
use async_std::sync::{Arc, Mutex};
use async_trait::async_trait;
use log::debug;
use sable_othello::{Action, Game, Player};

/// One input stream that several human players read their moves from in turn.
pub type SharedInput<R> = Arc<Mutex<R>>;

pub struct TerminalConnector<R> {
    input: SharedInput<R>,
    player: Player,
    name: String,
}

impl TerminalConnector<BufReader<Stdin>> {
    /// Standard input, buffered once for every human at this terminal.
    pub fn stdin() -> SharedInput<BufReader<Stdin>> {
        Arc::new(Mutex::new(BufReader::new(io::stdin())))
    }
}

impl<R: BufRead + Unpin + Send> TerminalConnector<R> {
    pub fn new(input: SharedInput<R>, player: Player) -> Self {
        Self {
            input,
            player,
            name: format!("Human ({})", player),
        }
    }

    async fn read_line(&mut self) -> Result<String, ConnectorError> {
        let mut line = String::new();
        let read = self
            .input
            .lock()
            .await
            .read_line(&mut line)
            .await
            .map_err(|source| ConnectorError::Io { source })?;
        if read == 0 {
            return Err(ConnectorError::Closed);
        }
        Ok(line)
    }
}

#[async_trait]
impl<R: BufRead + Unpin + Send> Connector for TerminalConnector<R> {
    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &str {
        &self.name
    }

    async fn choose_action(&mut self, game: &Game) -> Result<Action, ConnectorError> {
        let moves = game.legal_moves();
        loop {
            println!("{}", game.board.hinted(&moves));
            println!("{} to move, legal moves {}:", self.name, moves);
            let line = self.read_line().await?;

            match line.parse::<Action>() {
                Ok(Action::Place(loc)) if moves.contains(loc) => return Ok(Action::Place(loc)),
                Ok(Action::Place(loc)) => println!("{} is not a legal move", loc),
                Ok(Action::Pass) => println!("you have a legal move and cannot pass"),
                Err(err) => {
                    debug!("unparseable input {:?}", line.trim());
                    println!("{}", err);
                }
            }
        }
    }
}
