use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use flexi_logger::Logger;
use sapper_core::{Board, GameConfig, RandomGenerator};

mod game;

/// Console mine-detection puzzle: reveal every safe cell without setting
/// off a mine.
#[derive(Parser, Debug)]
#[command(name = "sapper", version)]
struct Options {
    /// Board side length
    #[arg(long, default_value_t = 9)]
    size: u8,

    /// Number of mines, must be less than size * size
    #[arg(long, default_value_t = 10)]
    mines: u16,

    /// Seed for a reproducible board
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let options = Options::parse();
    let _logger = Logger::try_with_env_or_str(
        options.verbosity.log_level_filter().to_string().to_lowercase(),
    )?
    .log_to_stderr()
    .start()?;

    let config = GameConfig::new(options.size, options.mines)?;
    let seed = options.seed.unwrap_or_else(rand::random);
    log::info!("Board seed: {}", seed);

    let board = Board::new(&config, RandomGenerator::new(seed))?;
    game::run(board)
}
