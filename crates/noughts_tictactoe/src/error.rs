//! Move rejection errors.

/// Reason a move was rejected. The game is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Cell index outside `0..9`.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The game has already been won or tied.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
