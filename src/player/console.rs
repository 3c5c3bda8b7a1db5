use std::io::BufRead;

use crate::core::{Player, PlayerMark};
use crate::game::{Board, Square};

/// A human at the terminal. Prints the board, asks for a square, and
/// keeps asking until the answer names an empty one.
pub struct ConsolePlayer {
    pub name: String,
}

impl ConsolePlayer {
    pub fn new(mark: PlayerMark) -> Self {
        ConsolePlayer {
            name: mark.to_string(),
        }
    }
}

impl Player for ConsolePlayer {
    fn play(&mut self, board: &Board) -> Square {
        println!("Time for {} to make a move", self.name);
        print!("{}", board);
        println!("Input row and column, 1-3 each: `1 3` is the top right square");
        loop {
            let mut line = String::new();
            std::io::stdin()
                .lock()
                .read_line(&mut line)
                .expect("could not read from stdin");
            let mut nums = line.split_ascii_whitespace().map(|tok| tok.parse::<usize>());
            let (row, col) = match (nums.next(), nums.next()) {
                (Some(Ok(row)), Some(Ok(col))) => (row, col),
                _ => {
                    eprintln!("Input two numbers with a space in between");
                    continue;
                }
            };
            if !(1..=3).contains(&row) || !(1..=3).contains(&col) {
                eprintln!("Numbers must be between 1 and 3");
                continue;
            }
            let sq = Square::new(row - 1, col - 1);
            if !board.is_empty(sq) {
                eprintln!("That square is already taken");
                continue;
            }
            return sq;
        }
    }
}
