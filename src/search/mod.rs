//! Depth-limited alpha-beta search.
//!
//! - `alphabeta`: the recursive search, its result type and an unpruned
//!   minimax reference
//! - `config`: depth, leaf evaluator and seed

pub mod alphabeta;
pub mod config;

pub use alphabeta::{minimax, score_is_better, search, AlphaBeta, SearchResult};
pub use config::AlphaBetaConfig;
