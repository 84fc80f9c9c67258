//! Grid geometry: states, actions and wall-bounded movement.

use std::fmt;

use crate::error::{MdpError, Result};

/// A grid cell `(x, y)`, 1-indexed. `x` is the column, `y` the row counted
/// from the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    pub x: usize,
    pub y: usize,
}

impl State {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for State {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four compass moves available from every state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Right,
    Down,
    Left,
}

/// Directions 90 degrees to either side, indexed by `Action as usize`.
const PERPENDICULAR: [[Action; 2]; 4] = [
    [Action::Right, Action::Left], // Up
    [Action::Up, Action::Down],    // Right
    [Action::Right, Action::Left], // Down
    [Action::Up, Action::Down],    // Left
];

impl Action {
    /// All actions in their fixed order.
    pub const ALL: [Action; 4] = [Action::Up, Action::Right, Action::Down, Action::Left];

    /// The two directions an agent can veer into when attempting `self`.
    pub fn perpendicular(self) -> [Action; 2] {
        PERPENDICULAR[self as usize]
    }
}

/// Rectangular grid with `rows` x `cols` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Creates a grid, rejecting empty dimensions.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MdpError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn num_states(&self) -> usize {
        self.rows * self.cols
    }

    pub fn contains(&self, state: State) -> bool {
        (1..=self.cols).contains(&state.x) && (1..=self.rows).contains(&state.y)
    }

    /// Returns `state` unchanged if it lies on the grid.
    pub fn check(&self, state: State) -> Result<State> {
        if self.contains(state) {
            Ok(state)
        } else {
            Err(MdpError::StateOutOfRange {
                state,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Iterates over every cell column by column: `x` in the outer loop,
    /// `y` in the inner loop.
    pub fn states(&self) -> impl Iterator<Item = State> + '_ {
        (1..=self.cols).flat_map(move |x| (1..=self.rows).map(move |y| State::new(x, y)))
    }

    /// The cell reached by moving one step in `action`. Moving into a wall
    /// leaves the agent where it was.
    pub fn neighbor(&self, state: State, action: Action) -> State {
        let State { x, y } = state;
        match action {
            Action::Up => State::new(x, (y + 1).min(self.rows)),
            Action::Right => State::new((x + 1).min(self.cols), y),
            Action::Down => State::new(x, y.saturating_sub(1).max(1)),
            Action::Left => State::new(x.saturating_sub(1).max(1), y),
        }
    }

    /// Zero-based `[column, row]` position in a utility table.
    pub(crate) fn index(&self, state: State) -> [usize; 2] {
        [state.x - 1, state.y - 1]
    }
}
