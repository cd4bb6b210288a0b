use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use neon_snake::app::App;
use neon_snake::game::{Difficulty, GameConfig};
use neon_snake::persist::HighScoreStore;

#[derive(Parser)]
#[command(name = "neon-snake")]
#[command(version, about = "Terminal arcade snake")]
struct Cli {
    /// Starting difficulty; changeable in-game from the idle and game over
    /// screens
    #[arg(long, value_enum, default_value = "medium")]
    difficulty: Difficulty,

    /// Grid side length; defaults to 15 or 20 depending on terminal width
    #[arg(long)]
    grid_size: Option<usize>,

    /// Where the best score is stored
    #[arg(long, default_value = "snake_highscore.json")]
    high_score_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The grid is sized for the terminal once, at startup; it stays fixed
    // for the lifetime of the process.
    let grid_size = cli.grid_size.unwrap_or_else(|| {
        let cols = crossterm::terminal::size().map(|(cols, _)| cols).unwrap_or(80);
        GameConfig::grid_for_viewport(cols)
    });

    let config = GameConfig::new(grid_size, cli.difficulty);
    let high_score = HighScoreStore::open(cli.high_score_file);

    App::new(config, high_score).run().await
}
