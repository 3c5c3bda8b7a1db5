//! Full-depth minimax with alpha-beta pruning.
//!
//! On a 3x3 board the game tree is small enough to search to the end on
//! every move, so there is no heuristic and no depth cap: terminal states
//! are scored exactly and everything in between is backed up from them.
//! The result is game-theoretically perfect play.

use log::debug;

use crate::core::{Player, PlayerMark};
use crate::game::{Board, Square};

/// Exact score of a terminal state, seen from the engine's side.
const WIN: i32 = 1;
const LOSS: i32 = -1;
const DRAW: i32 = 0;

pub struct PerfectAi {
    my_marker: PlayerMark,
    /// A performance counter. If we prune well, this number is small
    n_nodes_evaluated: usize,
}

impl PerfectAi {
    pub fn new(mark: PlayerMark) -> Self {
        PerfectAi {
            my_marker: mark,
            n_nodes_evaluated: 0,
        }
    }

    /// The optimal square for this engine's mark, or `None` iff the board
    /// is full. Candidates are tried in row-major order and only a
    /// strictly better value displaces the incumbent, so of equally good
    /// squares the first one wins: the choice is deterministic.
    ///
    /// Trial moves are placed on `board` itself and cleared again; the
    /// board is exactly as it was by the time this returns. Each root
    /// candidate is searched with fresh, effectively infinite bounds.
    pub fn find_best_move(&mut self, board: &mut Board) -> Option<Square> {
        let mut best: Option<Square> = None;
        let mut best_value = i32::MIN;
        for sq in board.empty_squares() {
            board.place(sq, self.my_marker);
            let value = self.minimax(board, i32::MIN, i32::MAX, false);
            board.clear(sq);
            if value > best_value {
                best_value = value;
                best = Some(sq);
            }
        }
        best
    }

    /// Score `board` for `my_marker`, both sides playing optimally from
    /// here on.
    ///
    /// Who moved last is derived from the node kind alone: at a maximizing
    /// node the opponent has just moved (their finished line scores
    /// [`LOSS`]), at a minimizing node we have (ours scores [`WIN`]). The
    /// mover's win is tested before board-full so that a ninth-move win is
    /// not mistaken for a draw. A full board with no line is a [`DRAW`].
    fn minimax(&mut self, board: &mut Board, alpha: i32, beta: i32, maximizing: bool) -> i32 {
        self.n_nodes_evaluated += 1;
        if maximizing {
            if board.has_win(self.my_marker.other()) {
                return LOSS;
            }
        } else if board.has_win(self.my_marker) {
            return WIN;
        }
        if board.is_full() {
            return DRAW;
        }
        let mut alpha = alpha;
        let mut beta = beta;
        if maximizing {
            // pick the move for ourselves that maximizes the score
            let mut value = i32::MIN;
            for sq in board.empty_squares() {
                board.place(sq, self.my_marker);
                value = value.max(self.minimax(board, alpha, beta, false));
                board.clear(sq);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        } else {
            // pick the move for the opponent that minimizes the score
            let mut value = i32::MAX;
            for sq in board.empty_squares() {
                board.place(sq, self.my_marker.other());
                value = value.min(self.minimax(board, alpha, beta, true));
                board.clear(sq);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        }
    }
}

impl Player for PerfectAi {
    fn play(&mut self, board: &Board) -> Square {
        let mut scratch = *board;
        self.find_best_move(&mut scratch)
            .expect("no move to make: the board is full")
    }
}

impl Drop for PerfectAi {
    fn drop(&mut self) {
        debug!("PerfectAi evaluated {} nodes", self.n_nodes_evaluated);
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;

    fn best_move(notation: &str, mark: PlayerMark) -> Option<Square> {
        let mut board = Board::from_str(notation).unwrap();
        PerfectAi::new(mark).find_best_move(&mut board)
    }

    #[test]
    fn can_find_winning_move() {
        assert_eq!(
            best_move("xx       ", PlayerMark::Cross),
            Some(Square::new(0, 2))
        );
    }

    #[test]
    fn can_block_winning_move() {
        assert_eq!(
            best_move("oo  x    ", PlayerMark::Cross),
            Some(Square::new(0, 2))
        );
    }

    #[test]
    fn completes_its_own_row() {
        // (0,2) makes three naughts in row 0: the maximum value there is
        assert_eq!(
            best_move("oo       ", PlayerMark::Naught),
            Some(Square::new(0, 2))
        );
    }

    #[test]
    fn finds_the_only_non_losing_square() {
        // x . .
        // . x .
        // o o .
        // (2,2) completes the naught row; anywhere else and the crosses
        // finish their diagonal there instead
        assert_eq!(
            best_move("x   x oo ", PlayerMark::Naught),
            Some(Square::new(2, 2))
        );
    }

    #[test]
    fn answers_a_corner_opening_with_the_center() {
        // the center is the unique reply that holds the draw; the search
        // must find that every other reply loses
        assert_eq!(
            best_move("x        ", PlayerMark::Naught),
            Some(Square::new(1, 1))
        );
    }

    #[test]
    fn ties_keep_the_first_square_in_row_major_order() {
        // every opening move of tic-tac-toe is an exact draw, so on an
        // empty board all nine candidates score 0 and the scan order picks
        // the top-left square, not any strategically fancied one
        assert_eq!(best_move("         ", PlayerMark::Naught), Some(Square::new(0, 0)));
    }

    #[test]
    fn full_board_has_no_move() {
        assert_eq!(best_move("xoxxoooxx", PlayerMark::Naught), None);
    }

    #[test]
    fn search_leaves_the_board_untouched() {
        let mut board = Board::from_str("x   o    ").unwrap();
        let before = board;
        PerfectAi::new(PlayerMark::Cross).find_best_move(&mut board);
        assert_eq!(board, before);
    }
}
