//! ASCII rendering of a utility table.

use std::fmt;

use crate::mdp::State;
use crate::utility::UtilityMap;

const CELL_WIDTH: usize = 9;

/// Draws `utilities` as a box grid, top row (`y = rows`) first, with each value
/// formatted as `{:7.4}`.
///
/// ```
/// use gridmdp::mdp::Grid;
/// use gridmdp::render::ascii_grid;
/// use gridmdp::utility::UtilityMap;
///
/// let utilities = UtilityMap::zeros(Grid::new(1, 2).unwrap());
/// let expected = concat!(
///     " ___________________  \n",
///     "|         |         | \n",
///     "|  0.0000 |  0.0000 | \n",
///     "|_________|_________| \n",
/// );
/// assert_eq!(ascii_grid(&utilities), expected);
/// ```
pub fn ascii_grid(utilities: &UtilityMap) -> String {
    utilities.to_string()
}

impl fmt::Display for UtilityMap {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.grid();
        let cols = grid.cols();
        let padding = " ".repeat(CELL_WIDTH);
        let floor = "_".repeat(CELL_WIDTH);

        writeln!(out, " {}  ", "_".repeat(cols * (CELL_WIDTH + 1) - 1))?;
        for y in (1..=grid.rows()).rev() {
            for _ in 0..cols {
                write!(out, "|{}", padding)?;
            }
            writeln!(out, "| ")?;
            for x in 1..=cols {
                write!(out, "| {:7.4} ", self[State::new(x, y)])?;
            }
            writeln!(out, "| ")?;
            for _ in 0..cols {
                write!(out, "|{}", floor)?;
            }
            writeln!(out, "| ")?;
        }
        Ok(())
    }
}
