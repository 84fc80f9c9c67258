//! Error types for building and solving grid MDPs.

use thiserror::Error;

use crate::mdp::State;

/// Errors raised by model construction, model queries and the solver.
#[derive(Error, Debug)]
pub enum MdpError {
    /// Grid must have at least one row and one column
    #[error("invalid grid dimensions: {rows} rows x {cols} columns")]
    InvalidDimensions { rows: usize, cols: usize },

    /// A transition probability is outside [0, 1] or not finite
    #[error("{name} must be a finite probability in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    /// A reward is NaN or infinite
    #[error("reward for {state} must be finite, got {value}")]
    InvalidReward { state: State, value: f64 },

    /// Default reward is NaN or infinite
    #[error("default reward must be finite, got {0}")]
    InvalidDefaultReward(f64),

    /// Discount factor outside [0, 1)
    #[error("discount factor gamma must be in [0, 1), got {0}")]
    InvalidDiscount(f64),

    /// Convergence threshold is not a positive finite number
    #[error("convergence threshold epsilon must be positive and finite, got {0}")]
    InvalidThreshold(f64),

    /// A state lies outside the configured grid
    #[error("state {state} is outside the {rows}x{cols} grid")]
    StateOutOfRange {
        state: State,
        rows: usize,
        cols: usize,
    },

    /// A utility map built for a different grid was supplied
    #[error("utility map covers a {found_rows}x{found_cols} grid, expected {rows}x{cols}")]
    GridMismatch {
        rows: usize,
        cols: usize,
        found_rows: usize,
        found_cols: usize,
    },

    /// Sweep cap reached before the utilities settled
    #[error("value iteration did not converge after {sweeps} sweeps (last delta {delta})")]
    NotConverged { sweeps: usize, delta: f64 },

    /// Utilities grew without bound (the kernel is not a contraction)
    #[error("value iteration diverged after {sweeps} sweeps: utilities are no longer finite")]
    Diverged { sweeps: usize },

    /// Utility buffer could not be shaped to the grid
    #[error("utility table shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MdpError>;
