//! Only moves mark cells.

use super::Invariant;
use crate::Game;

/// Invariant: the move count equals the number of marked cells.
pub struct MoveCountInvariant;

impl Invariant<Game> for MoveCountInvariant {
    fn holds(game: &Game) -> bool {
        let marked = game.board().cells().iter().filter(|c| !c.is_empty()).count();
        marked == game.move_count()
    }

    fn description() -> &'static str {
        "Move count matches marked cells"
    }
}
