use std::io;

use anyhow::Context;
use chess_duel::game::{ChessGame, GameConfig, PlayerKind};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Play a game of chess between two computer players.
#[derive(Parser, Debug)]
#[command(name = "chess_duel", version, about)]
struct Cli {
    /// Strategy for White
    #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
    white: PlayerKind,

    /// Strategy for Black
    #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
    black: PlayerKind,

    /// Seed for random players, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many plies
    #[arg(long)]
    max_plies: Option<u32>,

    /// Starting position as layout text (eight '/'-separated file columns, ranks 0-7)
    #[arg(long)]
    layout: Option<String>,

    /// Do not print the board after every ply
    #[arg(long, short)]
    quiet: bool,

    /// Print a JSON summary when the game ends
    #[arg(long)]
    summary_json: bool,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            white: self.white,
            black: self.black,
            seed: self.seed,
            max_plies: self.max_plies,
            layout: self.layout.clone(),
            render: !self.quiet,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.game_config();

    let mut game = ChessGame::from_config(&config).context("Failed to set up game")?;
    let outcome = game.run(&mut io::stdout().lock())?;

    if cli.summary_json {
        let summary = serde_json::to_string_pretty(&game.summary(outcome))?;
        println!("{summary}");
    }

    Ok(())
}
