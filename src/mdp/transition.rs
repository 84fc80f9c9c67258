//! The stochastic action-outcome kernel.

use super::{Action, GridMdp, State};
use crate::error::{MdpError, Result};
use crate::utility::UtilityMap;

impl GridMdp {
    /// Probability of landing in `successor` after taking `action` in `state`.
    ///
    /// Terminal states have no outgoing transitions, so every query from one
    /// returns zero.
    ///
    /// ```
    /// use gridmdp::mdp::{Action, GridMdp, State};
    ///
    /// let mdp = GridMdp::builder(3, 2).probabilities(0.8, 0.1).build().unwrap();
    /// // From the bottom-left corner, veering Left bounces back in place.
    /// let p = mdp
    ///     .transition_prob(State::new(1, 1), Action::Up, State::new(1, 1))
    ///     .unwrap();
    /// assert!((p - 0.1).abs() < 1e-12);
    /// ```
    pub fn transition_prob(&self, state: State, action: Action, successor: State) -> Result<f64> {
        self.grid.check(state)?;
        self.grid.check(successor)?;
        Ok(self
            .outcomes(state, action)
            .into_iter()
            .find(|&(s, _)| s == successor)
            .map_or(0.0, |(_, p)| p))
    }

    /// Every successor reachable from `state` under `action` with its
    /// probability. Directions that bounce into the same cell are merged.
    pub fn successors(&self, state: State, action: Action) -> Result<Vec<(State, f64)>> {
        self.grid.check(state)?;
        Ok(self.outcomes(state, action))
    }

    /// Expected next-state utility for each action, in the order of
    /// [`Action::ALL`].
    pub fn expected_utility_per_action(
        &self,
        state: State,
        utility: &UtilityMap,
    ) -> Result<[f64; 4]> {
        self.grid.check(state)?;
        let found = utility.grid();
        if *found != self.grid {
            return Err(MdpError::GridMismatch {
                rows: self.grid.rows(),
                cols: self.grid.cols(),
                found_rows: found.rows(),
                found_cols: found.cols(),
            });
        }
        Ok(self.expected_utilities(state, utility))
    }

    pub(crate) fn expected_utilities(&self, state: State, utility: &UtilityMap) -> [f64; 4] {
        Action::ALL.map(|action| {
            self.outcomes(state, action)
                .into_iter()
                .map(|(s, p)| p * utility[s])
                .sum::<f64>()
        })
    }

    pub(crate) fn outcomes(&self, state: State, action: Action) -> Vec<(State, f64)> {
        let mut table: Vec<(State, f64)> = Vec::with_capacity(3);
        if self.is_terminal_unchecked(state) {
            return table;
        }

        let [left, right] = action.perpendicular();
        let moves = [
            (action, self.prob_forward),
            (left, self.prob_side),
            (right, self.prob_side),
        ];
        for (direction, prob) in moves {
            let next = self.grid.neighbor(state, direction);
            match table.iter_mut().find(|(s, _)| *s == next) {
                Some((_, acc)) => *acc += prob,
                None => table.push((next, prob)),
            }
        }
        table
    }
}
