//! One human-versus-computer match, round after round.

use crate::config::{SessionConfig, StatusMessages};
use noughts_tictactoe::{Cell, Game, Mark, MoveError, N_CELLS, Outcome, RandomSource};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument};

/// What one human turn did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Cell the human (crosses) played.
    pub user_move: usize,
    /// Cell the computer (circles) answered with, unless the round ended first.
    pub computer_move: Option<usize>,
    /// Outcome after the turn.
    pub outcome: Outcome,
}

impl TurnReport {
    /// True if the turn finished the round.
    pub fn game_over(&self) -> bool {
        self.outcome.is_over()
    }
}

/// Response to a click on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickResponse {
    /// The round was ongoing and a turn was played.
    Played(TurnReport),
    /// The round was over; a new one has started.
    Restarted,
}

/// Owns the current [`Game`] and the computer's random source.
#[derive(Debug)]
pub struct Session<R = StdRng> {
    game: Game,
    rng: R,
    messages: StatusMessages,
    rounds_completed: usize,
}

impl Session<StdRng> {
    /// Creates a session seeded from `config`, or from OS entropy.
    #[instrument(skip(config), fields(seed = ?config.seed()))]
    pub fn new(config: &SessionConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> Session<R> {
    /// Creates a session drawing the computer's random moves from `rng`.
    pub fn with_rng(config: &SessionConfig, rng: R) -> Self {
        info!("Starting session");
        Self {
            game: Game::new(),
            rng,
            messages: config.messages().clone(),
            rounds_completed: 0,
        }
    }

    /// The current round.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Finished rounds that have been replaced by a new one.
    pub fn rounds_completed(&self) -> usize {
        self.rounds_completed
    }

    /// Plays the human's cross at `index`, then the computer's reply if the
    /// round is still open.
    ///
    /// # Errors
    ///
    /// Returns the engine's [`MoveError`] if the cell cannot be played; the
    /// round is unchanged and the caller should ignore the click.
    #[instrument(skip(self), fields(move_count = self.game.move_count()))]
    pub fn play_user_move(&mut self, index: usize) -> Result<TurnReport, MoveError> {
        debug_assert!(self.game.is_over() || self.game.mark_to_move() == Mark::Cross);

        let mut outcome = self.game.make_move(index)?;
        let mut computer_move = None;

        if !outcome.is_over() {
            let reply = self.game.find_computer_move(&mut self.rng)?;
            outcome = self.game.make_move(reply)?;
            computer_move = Some(reply);
        }

        debug!(index, ?computer_move, ?outcome, "Turn played");
        Ok(TurnReport {
            user_move: index,
            computer_move,
            outcome,
        })
    }

    /// Handles a click on cell `index`: plays a turn, or starts a new round
    /// if the current one is over (any cell will do).
    ///
    /// # Errors
    ///
    /// See [`play_user_move`](Self::play_user_move).
    pub fn click(&mut self, index: usize) -> Result<ClickResponse, MoveError> {
        if self.game.is_over() {
            self.restart();
            return Ok(ClickResponse::Restarted);
        }
        self.play_user_move(index).map(ClickResponse::Played)
    }

    /// Discards the current round and starts an empty one.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        if self.game.is_over() {
            self.rounds_completed += 1;
        }
        self.game = Game::new();
        info!(rounds_completed = self.rounds_completed, "New round");
    }

    /// Status line for the current round.
    pub fn status_text(&self) -> &str {
        match self.game.outcome() {
            Outcome::Ongoing => self.messages.ongoing().as_str(),
            Outcome::Won(Mark::Cross) => self.messages.user_won().as_str(),
            Outcome::Won(Mark::Circle) => self.messages.computer_won().as_str(),
            Outcome::Tie => self.messages.tie().as_str(),
        }
    }

    /// Button text per cell: the mark, or the 1-based cell number while empty.
    pub fn cell_labels(&self) -> [String; N_CELLS] {
        std::array::from_fn(|index| match self.game.board().cell_at(index) {
            Cell::Empty => (index + 1).to_string(),
            Cell::Marked(mark) => mark.symbol().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of choices for the random fallback.
    struct Scripted(Vec<usize>);

    impl RandomSource for Scripted {
        fn up_to(&mut self, bound: usize) -> usize {
            let choice = self.0.remove(0);
            assert!(choice < bound);
            choice
        }
    }

    fn session(choices: Vec<usize>) -> Session<Scripted> {
        Session::with_rng(&SessionConfig::default(), Scripted(choices))
    }

    #[test]
    fn test_turn_plays_both_marks() {
        let mut session = session(vec![0]);
        let report = session.play_user_move(4).unwrap();
        // Empty cells after the centre: 0 1 2 3 5 6 7 8; choice 0 is cell 0.
        assert_eq!(report.computer_move, Some(0));
        assert_eq!(report.outcome, Outcome::Ongoing);
        assert_eq!(session.game().move_count(), 2);
    }

    #[test]
    fn test_rejected_click_changes_nothing() {
        let mut session = session(vec![0]);
        session.play_user_move(4).unwrap();
        let before = session.game().clone();
        assert_eq!(session.play_user_move(0), Err(MoveError::CellOccupied(0)));
        assert_eq!(session.game(), &before);
    }

    #[test]
    fn test_cell_labels() {
        let mut session = session(vec![7]);
        session.play_user_move(0).unwrap();
        let labels = session.cell_labels();
        assert_eq!(labels[0], "X");
        assert_eq!(labels[8], "O");
        assert_eq!(labels[4], "5");
    }

    #[test]
    fn test_status_follows_outcome() {
        let mut session = session(vec![]);
        assert_eq!(session.status_text(), StatusMessages::default().ongoing());
        session.game = Game::new();
        for index in [0, 3, 1, 4, 2] {
            session.game.make_move(index).unwrap();
        }
        assert_eq!(session.status_text(), StatusMessages::default().user_won());
    }
}
