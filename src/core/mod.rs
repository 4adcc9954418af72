//! Core engine types: players, errors, RNG, configuration.
//!
//! Everything here is independent of the search algorithms; the board,
//! evaluators and searches all build on these types.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{EngineConfig, Strategy};
pub use error::{BoardError, ConfigError};
pub use player::Player;
pub use rng::GameRng;
