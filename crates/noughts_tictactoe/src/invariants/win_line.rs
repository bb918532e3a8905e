//! The recorded win line agrees with the board.

use super::Invariant;
use crate::{Game, WinLine};

/// Invariant: a recorded line is fully owned by its winner, and a board
/// holding a complete line has one recorded.
pub struct WinLineInvariant;

impl Invariant<Game> for WinLineInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        match game.win_line() {
            WinLine::Line { line, winner } => line
                .cells()
                .iter()
                .all(|&index| board.cell_at(index).mark() == Some(*winner)),
            WinLine::NoWinLine => {
                board.find_win_line(crate::Mark::Cross).is_none()
                    && board.find_win_line(crate::Mark::Circle).is_none()
            }
        }
    }

    fn description() -> &'static str {
        "Recorded win line matches the board"
    }
}
