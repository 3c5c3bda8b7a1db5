//! The core abstractions for this application: marks, outcomes, scores,
//! and the player seam the game loop drives.

use std::fmt::Display;

use clap::ValueEnum;

use crate::game::{Board, Square};

/// The marker of one of the two sides. Crosses open every round.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub enum PlayerMark {
    Cross,
    Naught,
}

impl PlayerMark {
    pub fn other(&self) -> Self {
        match *self {
            Self::Cross => Self::Naught,
            Self::Naught => Self::Cross,
        }
    }
}

impl Display for PlayerMark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cross => write!(f, "X"),
            Self::Naught => write!(f, "O"),
        }
    }
}

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Ord, PartialOrd)]
pub enum RoundOutcome {
    Draw,
    Won(PlayerMark),
}

/// Which sides are human-controlled. Decided once per session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum GameMode {
    /// You play the crosses, the computer answers with perfect play
    Single,
    /// Both sides are played from the console
    Two,
}

/// Session-level win counters. Wins accumulate over rounds until the user
/// explicitly resets them; draws count for nobody.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    crosses: u32,
    naughts: u32,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Draw => {}
            RoundOutcome::Won(PlayerMark::Cross) => self.crosses += 1,
            RoundOutcome::Won(PlayerMark::Naught) => self.naughts += 1,
        }
    }

    pub fn wins(&self, mark: PlayerMark) -> u32 {
        match mark {
            PlayerMark::Cross => self.crosses,
            PlayerMark::Naught => self.naughts,
        }
    }

    /// Zero both counters. Only the user's explicit reset action calls
    /// this; finishing a round never does.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Score - X: {} | O: {}", self.crosses, self.naughts)
    }
}

/// The Player trait is the seam between the game loop and whoever picks
/// the moves.
pub trait Player {
    /// Observe the whole board through a reference, and return the square
    /// to claim this turn. The returned square must be empty on `board`.
    fn play(&mut self, board: &Board) -> Square;
}
