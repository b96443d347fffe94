//! Maze grid data model.
//!
//! This module contains the cell and grid types produced by the generator and consumed by the
//! solver and the user interface, together with the legacy one-character-per-cell textual
//! encoding.

/// State of a single maze cell.
///
/// This enumeration holds the possible states a cell in the maze grid can take. Cells start out as
/// walls during generation and are carved into passages; the entry and goal cells are overwritten
/// with their marker states once carving has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    /// Solid cell the player cannot enter.
    ///
    /// This variant represents an uncarved cell. The outer ring of every generated grid consists
    /// of walls only.
    Wall,
    /// Open cell the player can walk through.
    ///
    /// This variant represents a carved cell, either a room on the odd sub-lattice or a corridor
    /// between two rooms.
    Passage,
    /// Entry cell of the maze.
    ///
    /// This variant marks the cell the player starts on. Generated grids place it at (1, 1).
    Start,
    /// Goal cell of the maze.
    ///
    /// This variant marks the cell the player must reach. Generated grids place it at
    /// (width - 2, height - 2).
    End,
}

impl CellState {
    /// Returns the one-character symbol of the cell state.
    ///
    /// This function maps each state to the character the legacy renderer consumes: `1` for
    /// walls, `0` for passages, `S` for the start marker and `E` for the end marker.
    pub const fn symbol(self) -> char {
        match self {
            Self::Wall => '1',
            Self::Passage => '0',
            Self::Start => 'S',
            Self::End => 'E',
        }
    }

    /// Returns whether the cell state can be entered by the player.
    ///
    /// This function treats every state except [`CellState::Wall`] as walkable, so the start and
    /// end markers behave like ordinary passages for movement and reachability purposes.
    pub const fn is_walkable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// Rectangular maze grid.
///
/// This structure holds the cell states of a generated maze in row-major order. It is built once
/// by the generator and read many times afterwards; no mutation is exposed outside the crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of columns in the grid.
    ///
    /// This field holds the horizontal dimension of the grid after odd normalization.
    width: usize,
    /// Number of rows in the grid.
    ///
    /// This field holds the vertical dimension of the grid after odd normalization.
    height: usize,
    /// Cell states in row-major order.
    ///
    /// This field holds one entry per cell, indexed as `y * width + x`.
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates a grid of the given dimensions with every cell set to [`CellState::Wall`].
    ///
    /// This function provides the all-walls canvas the carving phase starts from.
    pub(crate) fn filled(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Wall; width.saturating_mul(height)],
        }
    }

    /// Returns the number of columns in the grid.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows in the grid.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the state of the cell at the given coordinates.
    ///
    /// This function returns `None` for coordinates outside the grid instead of panicking, which
    /// lets callers probe neighbor cells without separate bounds checks.
    pub fn get(&self, x: usize, y: usize) -> Option<CellState> {
        if x >= self.width || y >= self.height {
            return None;
        }

        self.cells.get(y.saturating_mul(self.width).saturating_add(x)).copied()
    }

    /// Overwrites the state of the cell at the given coordinates.
    ///
    /// This function silently ignores out-of-range coordinates. The generator relies on that for
    /// its marker placement on degenerate tiny grids, where the fixed marker coordinates may not
    /// exist.
    pub(crate) fn set(&mut self, x: usize, y: usize, state: CellState) {
        if x >= self.width || y >= self.height {
            return;
        }

        if let Some(cell) = self.cells.get_mut(y.saturating_mul(self.width).saturating_add(x)) {
            *cell = state;
        }
    }

    /// Returns whether the cell at the given coordinates can be entered.
    ///
    /// This function combines the bounds check and the wall check, so out-of-range coordinates
    /// count as not walkable.
    pub fn is_walkable(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(CellState::is_walkable)
    }

    /// Returns the coordinates of the first cell with the given state.
    ///
    /// This function scans the grid in row-major order. It is used to locate the unique start and
    /// end markers of a generated maze.
    pub fn find(&self, state: CellState) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|cell| *cell == state)
            .and_then(|index| Some((index.checked_rem(self.width)?, index.checked_div(self.width)?)))
    }

    /// Returns an iterator over the rows of the grid.
    ///
    /// This function yields one slice per row, ordered top to bottom, with the row index equal to
    /// the y coordinate and the column index equal to the x coordinate.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Returns the textual encoding of the grid.
    ///
    /// This function renders one string per row using the symbols `1`, `0`, `S` and `E`, one
    /// character per cell. This is the representation the `--print` mode writes to stdout and
    /// the one external tooling is expected to consume.
    pub fn text_rows(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }
}

/// Offsets a coordinate pair by a signed step.
///
/// This function returns `None` when either component would leave the `usize` range, which is how
/// the generator and the solver reject moves past the left or top edge without casts.
pub(crate) fn offset(
    x: usize,
    y: usize,
    step_x: isize,
    step_y: isize,
) -> Option<(usize, usize)> {
    Some((x.checked_add_signed(step_x)?, y.checked_add_signed(step_y)?))
}
