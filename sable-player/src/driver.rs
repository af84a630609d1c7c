//! Referees a match between two connectors.

use crate::connectors::{Connector, ConnectorError};
use derive_more::{Display, Error, From};
use log::info;
use sable_othello::{Action, Game, GameError, Player};

#[derive(Debug, Display, Error, From)]
pub enum MatchError {
    #[display(fmt = "connector failed")]
    Connector { source: ConnectorError },
    #[display(fmt = "rejected action")]
    Rule { source: GameError },
    #[display(fmt = "connector seated as {} plays {}", seat, player)]
    #[from(ignore)]
    Seating { seat: Player, player: Player },
}

/// Play `game` to the end, printing the board after every action.
///
/// A side with no legal moves passes without being asked. After each action from a
/// searching connector, up to `show_decisions` of its scored alternatives are printed.
pub async fn play_match(
    mut game: Game,
    black: &mut dyn Connector,
    white: &mut dyn Connector,
    show_decisions: usize,
) -> Result<Game, MatchError> {
    for (seat, connector) in [(Player::Black, &*black), (Player::White, &*white)] {
        if connector.player() != seat {
            return Err(MatchError::Seating {
                seat,
                player: connector.player(),
            });
        }
    }

    println!("{}\n", game);

    while !game.is_finished() {
        let player = game.active_player;
        let connector: &mut dyn Connector = match player {
            Player::Black => &mut *black,
            Player::White => &mut *white,
        };

        let (action, asked) = if game.must_pass() {
            (Action::Pass, false)
        } else {
            (connector.choose_action(&game).await?, true)
        };

        game = game.apply(action)?;
        info!("{} played {}", connector.name(), action);
        println!("{} plays {}", connector.name(), action);

        if asked {
            for (score, loc) in connector.last_decisions().iter().take(show_decisions) {
                println!("  {:<3} {:>6}", loc, score);
            }
        }
        println!("{}\n", game);
    }

    let (black_count, white_count) = game.score();
    match game.winner() {
        Some(winner) => println!(
            "{} wins, {} to {}",
            winner,
            black_count.max(white_count),
            black_count.min(white_count)
        ),
        None => println!("Draw, {} to {}", black_count, white_count),
    }
    info!("game over: black {} white {}", black_count, white_count);

    Ok(game)
}
