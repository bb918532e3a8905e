//! Crosses move first and turns alternate, so crosses lead by 0 or 1.

use super::Invariant;
use crate::{Game, Mark};

/// Invariant: `crosses - circles` is 0 or 1.
pub struct MarksBalancedInvariant;

impl Invariant<Game> for MarksBalancedInvariant {
    fn holds(game: &Game) -> bool {
        let crosses = game.board().count(Mark::Cross);
        let circles = game.board().count(Mark::Circle);
        crosses == circles || crosses == circles + 1
    }

    fn description() -> &'static str {
        "Crosses move first and marks alternate"
    }
}
