//! Value iteration for grid MDPs.
//!
//! Repeatedly applies the Bellman optimality backup
//!
//! ```text
//! U(s) = R(s) + gamma * max_a sum_s' P(s' | s, a) * U(s')
//! ```
//!
//! until the largest per-state change over one sweep drops below `epsilon`.
//! Every sweep reads only the utilities of the previous sweep, so the result
//! does not depend on the order in which states are visited.

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::error::{MdpError, Result};
use crate::mdp::{GridMdp, State};
use crate::utility::UtilityMap;

/// Configuration for [`ValueIteration`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Discount factor, in `[0, 1)`
    pub gamma: f64,
    /// Stop once a sweep changes no utility by `epsilon` or more
    pub epsilon: f64,
    /// Give up after this many sweeps; `None` runs until convergence
    pub max_sweeps: Option<usize>,
    /// Compute each sweep's backups on the rayon thread pool
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            gamma: 0.9,
            epsilon: 0.01,
            max_sweeps: None,
            parallel: false,
        }
    }
}

impl SolverConfig {
    pub fn new(gamma: f64, epsilon: f64) -> Self {
        Self {
            gamma,
            epsilon,
            ..Self::default()
        }
    }

    /// Checks `gamma` and `epsilon` before any sweep runs.
    pub fn validate(&self) -> Result<()> {
        if !(self.gamma.is_finite() && (0.0..1.0).contains(&self.gamma)) {
            return Err(MdpError::InvalidDiscount(self.gamma));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(MdpError::InvalidThreshold(self.epsilon));
        }
        Ok(())
    }
}

/// Outcome of a converged run.
#[derive(Debug, Clone)]
pub struct ValueIterationResult {
    /// Utilities computed by the final sweep
    pub utilities: UtilityMap,
    /// Number of sweeps performed
    pub sweeps: usize,
    /// Largest per-state change of each sweep, in order
    pub deltas: Vec<f64>,
}

/// Synchronous value-iteration solver.
#[derive(Debug, Clone, Default)]
pub struct ValueIteration {
    config: SolverConfig,
}

impl ValueIteration {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves `mdp`, returning the utilities together with sweep statistics.
    ///
    /// # Errors
    /// Returns an error for an invalid configuration,
    /// [`MdpError::Diverged`] once any utility stops being finite, or
    /// [`MdpError::NotConverged`] if `max_sweeps` is reached first.
    pub fn run(&self, mdp: &GridMdp) -> Result<ValueIterationResult> {
        self.config.validate()?;
        let SolverConfig {
            epsilon,
            max_sweeps,
            ..
        } = self.config;

        let mut utilities = UtilityMap::zeros(*mdp.grid());
        let mut deltas = Vec::new();
        loop {
            let previous = utilities;
            utilities = self.sweep(mdp, &previous)?;

            let delta = utilities.max_abs_diff(&previous);
            deltas.push(delta);
            let sweeps = deltas.len();
            debug!("value iteration sweep {}: delta = {:e}", sweeps, delta);

            if delta.is_nan() || !utilities.is_finite() {
                warn!("value iteration diverged after {} sweeps", sweeps);
                return Err(MdpError::Diverged { sweeps });
            }
            if delta < epsilon {
                info!(
                    "value iteration converged after {} sweeps (delta {:e} < {:e})",
                    sweeps, delta, epsilon
                );
                return Ok(ValueIterationResult {
                    utilities,
                    sweeps,
                    deltas,
                });
            }
            if max_sweeps.is_some_and(|max| sweeps >= max) {
                warn!(
                    "value iteration stopped after {} sweeps without converging (delta {:e})",
                    sweeps, delta
                );
                return Err(MdpError::NotConverged { sweeps, delta });
            }
        }
    }

    /// One synchronous Bellman sweep over every state, reading only `previous`.
    pub(crate) fn sweep(&self, mdp: &GridMdp, previous: &UtilityMap) -> Result<UtilityMap> {
        if self.config.parallel {
            let states: Vec<State> = mdp.states().collect();
            let values: Vec<f64> = states
                .par_iter()
                .map(|&state| self.backup(mdp, state, previous))
                .collect();
            UtilityMap::from_ordered(*mdp.grid(), values)
        } else {
            let mut next = UtilityMap::zeros(*mdp.grid());
            for state in mdp.states() {
                next.set(state, self.backup(mdp, state, previous));
            }
            Ok(next)
        }
    }

    fn backup(&self, mdp: &GridMdp, state: State, previous: &UtilityMap) -> f64 {
        let best = mdp
            .expected_utilities(state, previous)
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max);
        mdp.reward_unchecked(state) + self.config.gamma * best
    }
}

/// Computes the utilities of every state of `mdp` by value iteration.
///
/// # Arguments
/// - `mdp`: the grid MDP
/// - `gamma`: discount factor in `[0, 1)`
/// - `epsilon`: convergence threshold; iteration stops once no state's utility
///   changes by `epsilon` or more in a sweep
///
/// # Examples
///
/// ```
/// use gridmdp::dynamic::value_iteration;
/// use gridmdp::mdp::{GridMdp, State};
///
/// let mdp = GridMdp::builder(1, 2)
///     .reward(State::new(2, 1), 10.0)
///     .terminal(State::new(2, 1))
///     .build()
///     .unwrap();
///
/// let utilities = value_iteration(&mdp, 0.9, 0.01).unwrap();
/// assert!((utilities[State::new(2, 1)] - 10.0).abs() < 1e-12);
/// assert!((utilities[State::new(1, 1)] - 9.0).abs() < 1e-12);
/// ```
pub fn value_iteration(mdp: &GridMdp, gamma: f64, epsilon: f64) -> Result<UtilityMap> {
    ValueIteration::new(SolverConfig::new(gamma, epsilon))
        .run(mdp)
        .map(|result| result.utilities)
}
