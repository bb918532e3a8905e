//! Move sequencing and outcome tracking for one round.

use crate::board::{Board, Line, N_CELLS};
use crate::cell::Mark;
use crate::error::MoveError;
use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Classification of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has a line.
    Ongoing,
    /// The mark completed a line.
    Won(Mark),
    /// All nine cells played without a line.
    Tie,
}

impl Outcome {
    /// True for the three terminal outcomes.
    pub fn is_over(self) -> bool {
        self != Outcome::Ongoing
    }
}

/// The first completed line of the round, recorded once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinLine {
    /// No line completed yet.
    #[default]
    NoWinLine,
    /// `winner` filled `line`.
    Line {
        /// The completed line.
        line: Line,
        /// Owner of the line.
        winner: Mark,
    },
}

impl WinLine {
    /// The winning mark, if a line was recorded.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            WinLine::NoWinLine => None,
            WinLine::Line { winner, .. } => Some(*winner),
        }
    }

    /// The completed line, if any.
    pub fn line(&self) -> Option<Line> {
        match self {
            WinLine::NoWinLine => None,
            WinLine::Line { line, .. } => Some(*line),
        }
    }
}

/// One round of tic-tac-toe. Crosses move first; turns alternate.
///
/// A fresh round is a fresh `Game`; cells are never cleared. Deserialized
/// games must satisfy [`GameInvariants`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGame")]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) move_count: usize,
    pub(crate) win_line: WinLine,
}

/// Wire form of [`Game`], checked before it becomes one.
#[derive(Deserialize)]
struct RawGame {
    board: Board,
    move_count: usize,
    win_line: WinLine,
}

/// A deserialized game that no sequence of moves could produce.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Inconsistent game state: {}", join_violations(violations))]
pub struct InconsistentGame {
    /// Every invariant the state breaks.
    pub violations: Vec<InvariantViolation>,
}

impl std::error::Error for InconsistentGame {}

fn join_violations(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl TryFrom<RawGame> for Game {
    type Error = InconsistentGame;

    fn try_from(raw: RawGame) -> Result<Self, Self::Error> {
        let game = Game {
            board: raw.board,
            move_count: raw.move_count,
            win_line: raw.win_line,
        };
        GameInvariants::check_all(&game).map_err(|violations| {
            warn!(?violations, "Rejected deserialized game");
            InconsistentGame { violations }
        })?;
        Ok(game)
    }
}

impl Game {
    /// Creates a round with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves played so far (0-9).
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// The recorded win line.
    pub fn win_line(&self) -> &WinLine {
        &self.win_line
    }

    /// Mark the next move will place.
    pub fn mark_to_move(&self) -> Mark {
        Mark::for_move(self.move_count)
    }

    /// Current outcome, derived from the recorded line and the move count.
    pub fn outcome(&self) -> Outcome {
        match self.win_line.winner() {
            Some(winner) => Outcome::Won(winner),
            None if self.move_count == N_CELLS => Outcome::Tie,
            None => Outcome::Ongoing,
        }
    }

    /// True once the round is won or tied.
    pub fn is_over(&self) -> bool {
        self.outcome().is_over()
    }

    /// True if [`make_move`](Self::make_move) would accept `index`.
    pub fn is_valid_move(&self, index: usize) -> bool {
        self.check_move(index).is_ok()
    }

    /// Checks that `index` names an empty cell of an ongoing round.
    pub fn check_move(&self, index: usize) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if index >= N_CELLS {
            return Err(MoveError::OutOfRange(index));
        }
        if !self.board.is_empty(index) {
            return Err(MoveError::CellOccupied(index));
        }
        Ok(())
    }

    /// Places the current player's mark at `index` and returns the new outcome.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] without touching the game if the round is over,
    /// `index` is out of range, or the cell is occupied.
    #[instrument(skip(self), fields(move_count = self.move_count))]
    pub fn make_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        if let Err(e) = self.check_move(index) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        let mark = self.mark_to_move();
        self.board.set_cell(index, mark);
        debug!(?mark, index, "Mark placed");

        if self.win_line == WinLine::NoWinLine
            && let Some(line) = self.board.find_win_line(mark)
        {
            info!(winner = ?mark, cells = ?line.cells(), "Line completed");
            self.win_line = WinLine::Line { line, winner: mark };
        }
        self.move_count += 1;

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "game invariants violated after move at {index}"
        );

        let outcome = self.outcome();
        if outcome.is_over() {
            info!(?outcome, moves = self.move_count, "Round finished");
        }
        Ok(outcome)
    }
}
