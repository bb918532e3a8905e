//! The computer opponent: win if possible, else block, else random.

use crate::board::Board;
use crate::cell::Mark;
use crate::error::MoveError;
use crate::game::Game;
use tracing::{debug, instrument};

/// Uniform integer source for the opponent's random fallback.
pub trait RandomSource {
    /// Returns a value in `0..bound`. `bound` is never zero.
    fn up_to(&mut self, bound: usize) -> usize;
}

impl<R: rand::Rng> RandomSource for R {
    fn up_to(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// First empty cell (lowest index) where placing `mark` completes a line.
///
/// Each candidate is tried on a scratch copy; `board` is not modified.
pub fn winning_cell(board: &Board, mark: Mark) -> Option<usize> {
    board.empty_cells().find(|&index| {
        let mut scratch = board.clone();
        scratch.set_cell(index, mark);
        scratch.find_win_line(mark).is_some()
    })
}

impl Game {
    /// Chooses the computer's (circles') reply without changing the game.
    ///
    /// In priority order: a cell that wins for circles, a cell that blocks an
    /// immediate cross win, a uniformly random empty cell. The caller applies
    /// the result with [`make_move`](Game::make_move).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the round is already finished.
    #[instrument(skip(self, rng), fields(move_count = self.move_count))]
    pub fn find_computer_move<R>(&self, rng: &mut R) -> Result<usize, MoveError>
    where
        R: RandomSource + ?Sized,
    {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        if let Some(index) = winning_cell(&self.board, Mark::Circle) {
            debug!(index, "Taking the win");
            return Ok(index);
        }

        if let Some(index) = winning_cell(&self.board, Mark::Cross) {
            debug!(index, "Blocking");
            return Ok(index);
        }

        let free: Vec<usize> = self.board.empty_cells().collect();
        if free.is_empty() {
            return Err(MoveError::GameOver);
        }
        let index = free[rng.up_to(free.len()) % free.len()];
        debug!(index, choices = free.len(), "Random move");
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always picks the n-th choice.
    struct Fixed(usize);

    impl RandomSource for Fixed {
        fn up_to(&mut self, bound: usize) -> usize {
            assert!(self.0 < bound);
            self.0
        }
    }

    /// Ignores the bound.
    struct Unbounded(usize);

    impl RandomSource for Unbounded {
        fn up_to(&mut self, _bound: usize) -> usize {
            self.0
        }
    }

    fn play(moves: &[usize]) -> Game {
        let mut game = Game::new();
        for &index in moves {
            game.make_move(index).expect("legal move");
        }
        game
    }

    #[test]
    fn test_takes_the_win_before_blocking() {
        // X: 0 1 6, O: 4 5 -> O wins at 3, X threatens 2.
        let game = play(&[0, 4, 1, 5, 6]);
        assert_eq!(game.find_computer_move(&mut Fixed(0)), Ok(3));
    }

    #[test]
    fn test_blocks_cross() {
        // X: 0 1, O: 4 -> block at 2.
        let game = play(&[0, 4, 1]);
        assert_eq!(game.find_computer_move(&mut Fixed(0)), Ok(2));
    }

    #[test]
    fn test_random_choice_among_empty_cells() {
        let game = play(&[4]);
        let free: Vec<usize> = game.board().empty_cells().collect();
        for (n, &expected) in free.iter().enumerate() {
            assert_eq!(game.find_computer_move(&mut Fixed(n)), Ok(expected));
        }
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let game = play(&[0, 4, 1]);
        let before = game.clone();
        let _ = game.find_computer_move(&mut Fixed(0));
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_bound_choice_wraps() {
        let game = play(&[4]);
        // Eight free cells; choice 9 wraps to the second one.
        assert_eq!(game.find_computer_move(&mut Unbounded(9)), Ok(1));
    }

    #[test]
    fn test_full_board_has_no_computer_move() {
        let mut game = Game::new();
        for (n, index) in [0, 1, 2, 4, 3, 5, 7, 6, 8].into_iter().enumerate() {
            game.board.set_cell(index, Mark::for_move(n));
        }
        // Move count deliberately out of step with the board.
        game.move_count = 4;
        assert!(!game.is_over());
        assert_eq!(
            game.find_computer_move(&mut Fixed(0)),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_finished_game_has_no_computer_move() {
        let game = play(&[0, 3, 1, 4, 2]);
        assert_eq!(
            game.find_computer_move(&mut Fixed(0)),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_winning_cell_scans_low_to_high() {
        let mut board = Board::new();
        // Circle can finish 0-1-2 at 2 and 0-3-6 at 6.
        for index in [0, 1, 3] {
            board.set_cell(index, Mark::Circle);
        }
        assert_eq!(winning_cell(&board, Mark::Circle), Some(2));
        assert_eq!(winning_cell(&board, Mark::Cross), None);
    }
}
