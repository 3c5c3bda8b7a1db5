//! The 3x3 board and the loop that drives one round to its end.

use std::fmt::Display;
use std::str::FromStr;

use anyhow::{bail, ensure};
use itertools::iproduct;
use log::debug;

use crate::core::{Player, PlayerMark, RoundOutcome};

/// A cell coordinate on the board.
///
///   (0,0) (0,1) (0,2)
///   (1,0) (1,1) (1,2)
///   (2,0) (2,1) (2,2)
///
/// invariant: both indices are in 0..=2
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Ord, PartialOrd)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < 3 && col < 3, "({row},{col}) is off the board");
        Square { row, col }
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// The 8 ways to win: 3 rows, 3 columns, 2 diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// The grid, row-major. A cell either holds a mark or is empty.
///
/// This is a plain value: the game loop owns it, and the search engine
/// borrows it for the duration of one search call and hands it back
/// unchanged. There is no current-player field and no status cache; who
/// moves next and whether the game is over are the caller's questions.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord, Default)]
pub struct Board {
    cells: [[Option<PlayerMark>; 3]; 3],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.row][sq.col].is_none()
    }

    /// Put `mark` on `sq`. The cell must be empty; that is the caller's
    /// contract, checked in debug builds only.
    pub fn place(&mut self, sq: Square, mark: PlayerMark) {
        debug_assert!(self.is_empty(sq), "square {sq} is already taken");
        self.cells[sq.row][sq.col] = Some(mark);
    }

    /// Empty `sq` again. The undo half of the search's trial moves.
    pub fn clear(&mut self, sq: Square) {
        self.cells[sq.row][sq.col] = None;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_some())
    }

    /// Does `mark` hold all three cells of some row, column or diagonal?
    pub fn has_win(&self, mark: PlayerMark) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&(row, col)| self.cells[row][col] == Some(mark)))
    }

    /// Empty every cell, in place. The value is cleared, not reallocated.
    pub fn reset(&mut self) {
        self.cells = [[None; 3]; 3];
    }

    /// The squares still open, in row-major order. The search engine's
    /// first-best tie-break depends on this order.
    pub fn empty_squares(&self) -> Vec<Square> {
        iproduct!(0..3, 0..3)
            .filter(|&(row, col)| self.cells[row][col].is_none())
            .map(|(row, col)| Square { row, col })
            .collect()
    }

    pub fn n_marks(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let m = |cell| match cell {
            None => ' ',
            Some(PlayerMark::Cross) => 'X',
            Some(PlayerMark::Naught) => 'O',
        };
        writeln!(f, " ------- ")?;
        for row in &self.cells {
            write!(f, "| ")?;
            row.iter().try_for_each(|&cell| write!(f, "{} ", m(cell)))?;
            writeln!(f, "|")?;
        }
        writeln!(f, " ------- ")
    }
}

impl FromStr for Board {
    type Err = anyhow::Error;

    /// Parse the nine-character notation used in tests and debugging:
    /// `'x'`, `'o'` or `' '` per cell, row-major. `"oo  x    "` is a board
    /// with naughts on (0,0) and (0,1) and a cross in the center.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ensure!(s.len() == 9, "a board is exactly 9 characters, got {}", s.len());
        let mut board = Board::new();
        for ((row, col), c) in iproduct!(0..3, 0..3).zip(s.chars()) {
            match c {
                'x' => board.place(Square { row, col }, PlayerMark::Cross),
                'o' => board.place(Square { row, col }, PlayerMark::Naught),
                ' ' => {}
                _ => bail!("invalid cell {c:?}: must be 'x', 'o' or ' '"),
            }
        }
        Ok(board)
    }
}

/// Drive one round to its terminal state and report how it ended.
///
/// Crosses open, always. After each placement the mover's win is checked
/// first and board-full second, so a win on the ninth move counts as a
/// win and not as a draw. The board is left exactly as the round ended;
/// resetting it for the next round is the caller's business.
pub fn run_round(
    board: &mut Board,
    crosses: &mut dyn Player,
    naughts: &mut dyn Player,
) -> RoundOutcome {
    let mut current = PlayerMark::Cross;
    loop {
        let sq = match current {
            PlayerMark::Cross => crosses.play(board),
            PlayerMark::Naught => naughts.play(board),
        };
        board.place(sq, current);
        debug!("{current} played {sq}");
        debug!("\n{board}");
        if board.has_win(current) {
            return RoundOutcome::Won(current);
        }
        if board.is_full() {
            return RoundOutcome::Draw;
        }
        current = current.other();
    }
}
