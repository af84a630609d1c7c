//! Connectors supply the moves for each side of a match.

mod bot;
mod connector;
mod terminal;

pub use bot::BotConnector;
pub use connector::{Connector, ConnectorError};
pub use terminal::{SharedInput, TerminalConnector};
