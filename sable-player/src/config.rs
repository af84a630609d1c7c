//! Settings for a match, read from an optional TOML file.
//!
//! ```toml
//! difficulty = "hard"
//! mode = "pvb"
//! human = "white"
//! show_decisions = 3
//! ```

use derive_more::{Display, Error};
use sable_othello::Player;
use sable_search::Difficulty;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{fmt, fs, io};

/// Who sits on each side of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Two humans at the same terminal.
    Pvp,
    /// A human against the engine.
    Pvb,
    /// The engine against itself.
    Bvb,
}

impl Default for GameMode {
    fn default() -> Self {
        Self::Pvb
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameMode::Pvp => "pvp",
            GameMode::Pvb => "pvb",
            GameMode::Bvb => "bvb",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "unknown {} {:?}", kind, name)]
pub struct ParseSettingError {
    pub kind: &'static str,
    pub name: String,
}

impl std::str::FromStr for GameMode {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pvp" => Ok(GameMode::Pvp),
            "pvb" => Ok(GameMode::Pvb),
            "bvb" => Ok(GameMode::Bvb),
            _ => Err(ParseSettingError {
                kind: "game mode",
                name: s.to_string(),
            }),
        }
    }
}

/// Parse a player from its color name.
pub fn parse_color(s: &str) -> Result<Player, ParseSettingError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "black" | "b" => Ok(Player::Black),
        "white" | "w" => Ok(Player::White),
        _ => Err(ParseSettingError {
            kind: "color",
            name: s.to_string(),
        }),
    }
}

/// Players written by color name rather than by their signed value.
mod color {
    use sable_othello::Player;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(player: &Player, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(match player {
            Player::Black => "black",
            Player::White => "white",
        })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Player, D::Error> {
        let name = String::deserialize(deserializer)?;
        super::parse_color(&name).map_err(de::Error::custom)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub difficulty: Difficulty,
    pub mode: GameMode,
    /// The human's color when playing against the engine.
    #[serde(with = "color")]
    pub human: Player,
    /// How many decision log entries to print after each engine move.
    pub show_decisions: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            mode: GameMode::Pvb,
            human: Player::Black,
            show_decisions: 5,
        }
    }
}

#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display(fmt = "cannot read {}", "path.display()")]
    Read { path: PathBuf, source: io::Error },
    #[display(fmt = "invalid config")]
    Parse { source: toml::de::Error },
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }
}

impl std::str::FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|source| ConfigError::Parse { source })
    }
}
