use anyhow::{Context, Result};
use async_std::io::{self, BufRead, BufReader};
use async_std::task;
use clap::{Parser, Subcommand};
use log::info;
use sable_othello::{Game, Player};
use sable_player::config::{parse_color, Config, GameMode};
use sable_player::connectors::{BotConnector, Connector, SharedInput, TerminalConnector};
use sable_player::driver::play_match;
use sable_player::{server, Engine};
use sable_search::Difficulty;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// TOML file with match settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a match in the terminal
    Play {
        #[arg(long)]
        difficulty: Option<Difficulty>,

        /// pvp, pvb or bvb
        #[arg(long)]
        mode: Option<GameMode>,

        /// The human's color against the engine
        #[arg(long, value_parser = parse_color)]
        human: Option<Player>,

        /// Decision log entries to show after each engine move
        #[arg(long)]
        show_decisions: Option<usize>,
    },
    /// Answer JSON search requests on stdin, one per line
    Serve,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .target(env_logger::Target::Stderr)
    .init();

    if let Err(e) = task::block_on(run(args)) {
        log::error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match args.command {
        Command::Serve => {
            let engine = Engine::new();
            server::serve(&engine, BufReader::new(io::stdin()), io::stdout())
                .await
                .context("serving requests")
        }
        Command::Play {
            difficulty,
            mode,
            human,
            show_decisions,
        } => {
            config.difficulty = difficulty.unwrap_or(config.difficulty);
            config.mode = mode.unwrap_or(config.mode);
            config.human = human.unwrap_or(config.human);
            config.show_decisions = show_decisions.unwrap_or(config.show_decisions);
            play(&config).await
        }
    }
}

fn connector<R>(config: &Config, player: Player, input: &SharedInput<R>) -> Box<dyn Connector>
where
    R: BufRead + Unpin + Send + 'static,
{
    let human = match config.mode {
        GameMode::Pvp => true,
        GameMode::Pvb => player == config.human,
        GameMode::Bvb => false,
    };

    if human {
        Box::new(TerminalConnector::new(input.clone(), player))
    } else {
        Box::new(BotConnector::new(player, config.difficulty))
    }
}

async fn play(config: &Config) -> Result<()> {
    info!(
        "starting {} match at {} difficulty (depth {})",
        config.mode,
        config.difficulty,
        config.difficulty.depth()
    );

    // Both humans in a pvp match read from the same buffered stdin.
    let input = TerminalConnector::stdin();
    let mut black = connector(config, Player::Black, &input);
    let mut white = connector(config, Player::White, &input);
    play_match(
        Game::default(),
        black.as_mut(),
        white.as_mut(),
        config.show_decisions,
    )
    .await?;
    Ok(())
}
