//! State utilities produced by the solver.

use std::collections::HashMap;
use std::ops::Index;

use ndarray::Array2;

use crate::error::Result;
use crate::mdp::{Grid, State};

/// A utility value for every cell of a grid.
///
/// Values live in a `cols x rows` table indexed by `[x - 1, y - 1]`, so
/// iterating the table in memory order visits states column by column.
#[derive(Debug, Clone, PartialEq)]
pub struct UtilityMap {
    grid: Grid,
    values: Array2<f64>,
}

impl UtilityMap {
    /// All-zero utilities for `grid`.
    pub fn zeros(grid: Grid) -> Self {
        Self {
            grid,
            values: Array2::zeros((grid.cols(), grid.rows())),
        }
    }

    /// Builds a map from values listed in state enumeration order.
    pub(crate) fn from_ordered(grid: Grid, values: Vec<f64>) -> Result<Self> {
        let values = Array2::from_shape_vec((grid.cols(), grid.rows()), values)?;
        Ok(Self { grid, values })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Utility of `state`, or `None` if it is off the grid.
    pub fn get(&self, state: State) -> Option<f64> {
        if self.grid.contains(state) {
            Some(self.values[self.grid.index(state)])
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, state: State, value: f64) {
        let idx = self.grid.index(state);
        self.values[idx] = value;
    }

    /// `(state, utility)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (State, f64)> + '_ {
        self.grid.states().zip(self.values.iter().copied())
    }

    /// Largest absolute per-state difference between two maps over the same grid.
    /// A NaN difference (e.g. `inf - inf`) makes the result NaN.
    pub fn max_abs_diff(&self, other: &UtilityMap) -> f64 {
        self.values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0_f64, |acc, d| if d.is_nan() || d > acc { d } else { acc })
    }

    /// Whether every utility is a finite number.
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }

    pub fn to_hash_map(&self) -> HashMap<State, f64> {
        self.iter().collect()
    }
}

impl Index<State> for UtilityMap {
    type Output = f64;

    /// # Panics
    /// Panics if `state` is not on the grid.
    fn index(&self, state: State) -> &f64 {
        assert!(
            self.grid.contains(state),
            "State {} is outside the {}x{} grid",
            state,
            self.grid.rows(),
            self.grid.cols()
        );
        &self.values[self.grid.index(state)]
    }
}
