//! The 3x3 board and its win lines.

use crate::cell::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Cells per row and per column.
pub const SIZE: usize = 3;

/// Total number of cells.
pub const N_CELLS: usize = SIZE * SIZE;

/// A win line: the cells `start`, `start + stride`, `start + 2 * stride`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    start: usize,
    stride: usize,
}

impl Line {
    const fn new(start: usize, stride: usize) -> Self {
        Self { start, stride }
    }

    /// Index of the first cell.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Distance between consecutive cells.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The three member cell indices, in increasing order.
    pub fn cells(&self) -> [usize; SIZE] {
        [
            self.start,
            self.start + self.stride,
            self.start + 2 * self.stride,
        ]
    }
}

/// The eight win lines: three rows, three columns, two diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line::new(0, 1),
    Line::new(3, 1),
    Line::new(6, 1),
    // Columns
    Line::new(0, 3),
    Line::new(1, 3),
    Line::new(2, 3),
    // Diagonals
    Line::new(0, 4),
    Line::new(2, 2),
];

/// 3x3 board, cells indexed `row * 3 + col` with row 0 at the top.
///
/// The board enforces no turn order; that is [`Game`](crate::Game)'s job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; N_CELLS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`.
    pub fn cell_at(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Places `mark` at `index`.
    ///
    /// Cells are written once; overwriting a marked cell is a caller bug.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`.
    pub fn set_cell(&mut self, index: usize, mark: Mark) {
        debug_assert!(
            self.cells[index].is_empty(),
            "cell {index} is already occupied"
        );
        self.cells[index] = Cell::Marked(mark);
    }

    /// True if the cell at `index` is empty. Out-of-range indices are not empty.
    pub fn is_empty(&self, index: usize) -> bool {
        self.cells.get(index).is_some_and(|cell| cell.is_empty())
    }

    /// All cells in index order.
    pub fn cells(&self) -> &[Cell; N_CELLS] {
        &self.cells
    }

    /// Indices of the empty cells, in increasing order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.mark() == Some(mark))
            .count()
    }

    /// Returns the first line completely filled with `mark`.
    #[instrument(level = "trace", skip(self))]
    pub fn find_win_line(&self, mark: Mark) -> Option<Line> {
        let found = LINES.iter().copied().find(|line| {
            let count = line
                .cells()
                .iter()
                .filter(|&&index| self.cells[index] == Cell::Marked(mark))
                .count();
            count == SIZE
        });
        if let Some(line) = found {
            trace!(?mark, cells = ?line.cells(), "Complete line found");
        }
        found
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with `X`, `O`, or the 1-based number of an empty cell.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                let index = row * SIZE + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Marked(mark) => write!(f, "{mark}")?,
                }
                if col < SIZE - 1 {
                    f.write_str("|")?;
                }
            }
            if row < SIZE - 1 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
