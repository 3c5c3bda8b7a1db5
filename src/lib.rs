//! A noughts-and-crosses (tic-tac-toe) game for the terminal, with a
//! perfect-play computer opponent.
//!
//! The [`game`] module holds the board and the round loop, [`player`] the
//! move pickers (console, random, and the alpha-beta search engine), and
//! [`core`] the vocabulary shared by both.

pub mod core;
pub mod game;
pub mod player;
