use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::core::Player;
use crate::game::{Board, Square};

/// Plays a uniformly random legal move. The sparring partner for tests
/// and benchmarks; seed it for reproducible games.
pub struct RandomAi {
    rng: StdRng,
}

impl RandomAi {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: match seed {
                None => StdRng::from_entropy(),
                Some(seed) => StdRng::seed_from_u64(seed),
            },
        }
    }
}

impl Player for RandomAi {
    fn play(&mut self, board: &Board) -> Square {
        let moves = board.empty_squares();
        let idx = self.rng.gen_range(0..moves.len());
        debug!("random player plays {}", moves[idx]);
        moves[idx]
    }
}
