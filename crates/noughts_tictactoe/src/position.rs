//! Named board positions.
//!
//! Presentation layers address cells by name or by `(col, row)` when laying
//! out buttons; the engine itself works with plain indices.

use crate::board::SIZE;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use tracing::instrument;

/// A cell of the board, row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Position {
    /// Index 0.
    TopLeft,
    /// Index 1.
    TopCenter,
    /// Index 2.
    TopRight,
    /// Index 3.
    MiddleLeft,
    /// Index 4.
    Center,
    /// Index 5.
    MiddleRight,
    /// Index 6.
    BottomLeft,
    /// Index 7.
    BottomCenter,
    /// Index 8.
    BottomRight,
}

impl Position {
    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Position for a board index, `None` outside `0..9`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Position for a column and a row counted from the top.
    pub fn from_coords(col: usize, row: usize) -> Option<Self> {
        if col >= SIZE || row >= SIZE {
            return None;
        }
        Self::from_index(row * SIZE + col)
    }

    /// Column (0 = left).
    pub fn col(self) -> usize {
        self.to_index() % SIZE
    }

    /// Row (0 = top).
    pub fn row(self) -> usize {
        self.to_index() / SIZE
    }

    /// Parses a board index ("4") or a label, case-insensitively ("center").
    #[instrument]
    pub fn from_label_or_number(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Ok(index) = text.parse::<usize>() {
            return Self::from_index(index);
        }
        let lower = text.to_lowercase();
        Self::iter().find(|pos| pos.label().to_lowercase() == lower)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
