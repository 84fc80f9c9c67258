//! A grid-world Markov Decision Process.
//!
//! States are `(x, y)` cells starting at `(1, 1)`. Every state offers the four
//! actions Up, Right, Down and Left. With probability `prob_forward` the agent
//! moves in the intended direction and with probability `prob_side` it veers to
//! each side. Running into a wall leaves the agent in place.

pub mod grid;
pub mod reward;
pub mod transition;

use std::collections::{HashMap, HashSet};

use approx::abs_diff_eq;

use crate::error::{MdpError, Result};

pub use grid::{Action, Grid, State};

/// Immutable configuration of a grid MDP.
#[derive(Debug, Clone)]
pub struct GridMdp {
    grid: Grid,
    rewards: HashMap<State, f64>,
    default_reward: f64,
    terminals: HashSet<State>,
    prob_forward: f64,
    prob_side: f64,
}

impl GridMdp {
    /// Creates a new MDP.
    ///
    /// # Arguments
    /// - `rows`, `cols`: grid dimensions
    /// - `rewards`: per-state reward overrides; any other state earns `default_reward`
    /// - `terminals`: states with no outgoing transitions
    /// - `prob_forward`: probability of moving in the intended direction
    /// - `prob_side`: probability of veering to each perpendicular side
    ///
    /// # Errors
    /// Fails on empty dimensions, probabilities outside `[0, 1]`, non-finite
    /// rewards, or override/terminal states that are not on the grid.
    pub fn new(
        rows: usize,
        cols: usize,
        rewards: HashMap<State, f64>,
        terminals: HashSet<State>,
        prob_forward: f64,
        prob_side: f64,
        default_reward: f64,
    ) -> Result<Self> {
        let grid = Grid::new(rows, cols)?;
        check_probability("prob_forward", prob_forward)?;
        check_probability("prob_side", prob_side)?;
        for (&state, &value) in &rewards {
            grid.check(state)?;
            if !value.is_finite() {
                return Err(MdpError::InvalidReward { state, value });
            }
        }
        if !default_reward.is_finite() {
            return Err(MdpError::InvalidDefaultReward(default_reward));
        }
        for &state in &terminals {
            grid.check(state)?;
        }

        Ok(Self {
            grid,
            rewards,
            default_reward,
            terminals,
            prob_forward,
            prob_side,
        })
    }

    /// Starts a builder for a `rows` x `cols` grid with deterministic moves,
    /// no overrides, no terminals and a default reward of zero.
    pub fn builder(rows: usize, cols: usize) -> GridMdpBuilder {
        GridMdpBuilder {
            rows,
            cols,
            rewards: HashMap::new(),
            terminals: HashSet::new(),
            prob_forward: 1.0,
            prob_side: 0.0,
            default_reward: 0.0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn prob_forward(&self) -> f64 {
        self.prob_forward
    }

    pub fn prob_side(&self) -> f64 {
        self.prob_side
    }

    pub fn default_reward(&self) -> f64 {
        self.default_reward
    }

    /// All states, column by column.
    pub fn states(&self) -> impl Iterator<Item = State> + '_ {
        self.grid.states()
    }

    /// Actions available from `state`; always all four.
    pub fn actions(&self, state: State) -> Result<[Action; 4]> {
        self.grid.check(state)?;
        Ok(Action::ALL)
    }

    /// Whether `prob_forward + 2 * prob_side` sums to one.
    pub fn is_stochastic(&self) -> bool {
        abs_diff_eq!(
            self.prob_forward + 2.0 * self.prob_side,
            1.0,
            epsilon = 1e-9
        )
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(MdpError::InvalidProbability { name, value })
    }
}

/// Incremental construction of a [`GridMdp`].
///
/// ```
/// use gridmdp::mdp::{GridMdp, State};
///
/// let mdp = GridMdp::builder(3, 2)
///     .reward(State::new(1, 3), -2.0)
///     .reward(State::new(2, 3), 2.0)
///     .terminals([State::new(1, 3), State::new(2, 3)])
///     .probabilities(0.8, 0.1)
///     .build()
///     .unwrap();
///
/// assert_eq!(mdp.states().count(), 6);
/// assert!(mdp.is_stochastic());
/// ```
#[derive(Debug, Clone)]
pub struct GridMdpBuilder {
    rows: usize,
    cols: usize,
    rewards: HashMap<State, f64>,
    terminals: HashSet<State>,
    prob_forward: f64,
    prob_side: f64,
    default_reward: f64,
}

impl GridMdpBuilder {
    pub fn reward(mut self, state: impl Into<State>, value: f64) -> Self {
        self.rewards.insert(state.into(), value);
        self
    }

    pub fn rewards<S: Into<State>>(mut self, rewards: impl IntoIterator<Item = (S, f64)>) -> Self {
        self.rewards
            .extend(rewards.into_iter().map(|(s, r)| (s.into(), r)));
        self
    }

    pub fn terminal(mut self, state: impl Into<State>) -> Self {
        self.terminals.insert(state.into());
        self
    }

    pub fn terminals<S: Into<State>>(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.terminals.extend(states.into_iter().map(Into::into));
        self
    }

    /// Sets the forward and per-side veer probabilities.
    pub fn probabilities(mut self, forward: f64, side: f64) -> Self {
        self.prob_forward = forward;
        self.prob_side = side;
        self
    }

    pub fn default_reward(mut self, value: f64) -> Self {
        self.default_reward = value;
        self
    }

    pub fn build(self) -> Result<GridMdp> {
        GridMdp::new(
            self.rows,
            self.cols,
            self.rewards,
            self.terminals,
            self.prob_forward,
            self.prob_side,
            self.default_reward,
        )
    }
}
