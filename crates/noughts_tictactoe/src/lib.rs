//! Tic-tac-toe game engine.
//!
//! The engine models a single round between a human playing crosses and the
//! computer playing circles:
//!
//! - **Board**: nine cells and the eight fixed win lines
//! - **Game**: move sequencing, outcome tracking, the recorded win line
//! - **Opponent**: win-if-possible, else block, else random
//!
//! # Example
//!
//! ```
//! use noughts_tictactoe::{Game, Mark, Outcome};
//!
//! let mut game = Game::new();
//! game.make_move(4)?;
//!
//! let mut rng = rand::rng();
//! let reply = game.find_computer_move(&mut rng)?;
//! game.make_move(reply)?;
//!
//! assert_eq!(game.move_count(), 2);
//! assert_eq!(game.outcome(), Outcome::Ongoing);
//! assert_eq!(game.board().cell_at(4).mark(), Some(Mark::Cross));
//! # Ok::<(), noughts_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cell;
mod error;
mod game;
pub mod invariants;
mod opponent;
mod position;

pub use board::{Board, LINES, Line, N_CELLS, SIZE};
pub use cell::{Cell, Mark};
pub use error::MoveError;
pub use game::{Game, InconsistentGame, Outcome, WinLine};
pub use opponent::{RandomSource, winning_cell};
pub use position::Position;
