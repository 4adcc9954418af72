use std::path::PathBuf;

use clap::Parser;
use flexi_logger::Logger;

use connect4_engine::board::Outcome;
use connect4_engine::core::{EngineConfig, Strategy};
use connect4_engine::engine::play_game;
use connect4_engine::mcts::MCTSConfig;
use connect4_engine::search::AlphaBetaConfig;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum StrategyCli {
    #[value(name = "alphabeta")]
    AlphaBeta,
    Mcts,
}

#[derive(Parser, Debug)]
#[command(name = "connect4", about = "Play Connect Four engine against engine")]
struct Args {
    /// Strategy for player A (X, moves first)
    #[arg(long = "a", value_enum, default_value = "alphabeta")]
    player_a: StrategyCli,

    /// Strategy for player B (O)
    #[arg(long = "b", value_enum, default_value = "mcts")]
    player_b: StrategyCli,

    /// Alpha-beta search depth in plies
    #[arg(short = 'd', long, default_value_t = 5)]
    depth: u32,

    /// MCTS iterations per move
    #[arg(short = 'i', long, default_value_t = 500)]
    iterations: u32,

    /// Game seed
    #[arg(short = 's', long, default_value_t = 42)]
    seed: u64,

    /// JSON configuration file; replaces the flags above
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

impl Args {
    fn strategy(&self, kind: StrategyCli) -> Strategy {
        match kind {
            StrategyCli::AlphaBeta => {
                Strategy::AlphaBeta(AlphaBetaConfig::default().with_depth(self.depth))
            }
            StrategyCli::Mcts => {
                Strategy::Mcts(MCTSConfig::default().with_iterations(self.iterations))
            }
        }
    }

    fn engine_config(&self) -> Result<EngineConfig, connect4_engine::core::ConfigError> {
        match &self.config {
            Some(path) => EngineConfig::from_file(path),
            None => {
                let config = EngineConfig::default()
                    .with_player_a(self.strategy(self.player_a))
                    .with_player_b(self.strategy(self.player_b))
                    .with_seed(self.seed);
                config.validate()?;
                Ok(config)
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    Logger::try_with_env_or_str("info")?
        .format(flexi_logger::colored_default_format)
        .start()?;

    let config = args.engine_config()?;
    log::info!("A: {:?}, B: {:?}, seed {}", config.player_a, config.player_b, config.seed);

    let record = play_game(&config, |board, player, column| {
        println!("{player} plays column {column}");
        println!("{board}");
    })?;

    match record.outcome {
        Outcome::Win(player) => println!("{player} wins after {} moves", record.moves.len()),
        Outcome::Draw => println!("Draw after {} moves", record.moves.len()),
    }
    Ok(())
}
