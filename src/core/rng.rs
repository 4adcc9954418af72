//! Deterministic random number generation for rollouts and MCTS.
//!
//! Every random decision the engine makes (rollout moves, which unvisited
//! child to simulate) draws from a `GameRng`. The same seed replays the same
//! game, which is what makes searches reproducible.
//!
//! ```
//! use connect4_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Give each engine its own stream
//! let mut side_a = rng.fork();
//! let mut side_b = rng.fork();
//! assert_ne!(side_a.seed(), side_b.seed());
//!
//! // Forks are deterministic
//! let mut again = GameRng::new(42);
//! assert_eq!(again.fork().seed(), side_a.seed());
//! # let _ = (side_a.gen_range_usize(0..7), side_b.gen_range_usize(0..7));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG with deterministic forking.
///
/// Uses ChaCha8 for speed while keeping a well-distributed stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a uniformly random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
