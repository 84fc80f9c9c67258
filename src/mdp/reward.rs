//! Rewards and terminal states.

use super::{GridMdp, State};
use crate::error::Result;

impl GridMdp {
    /// Reward for `state`: its override if one was configured, else the default.
    pub fn reward(&self, state: State) -> Result<f64> {
        self.grid.check(state)?;
        Ok(self.reward_unchecked(state))
    }

    /// Whether `state` is terminal.
    pub fn is_terminal(&self, state: State) -> Result<bool> {
        self.grid.check(state)?;
        Ok(self.is_terminal_unchecked(state))
    }

    pub(crate) fn reward_unchecked(&self, state: State) -> f64 {
        match self.rewards.get(&state) {
            Some(&value) => value,
            None => self.default_reward,
        }
    }

    pub(crate) fn is_terminal_unchecked(&self, state: State) -> bool {
        self.terminals.contains(&state)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::MdpError;
    use crate::mdp::{GridMdp, State};

    fn mdp() -> GridMdp {
        GridMdp::builder(3, 2)
            .reward(State::new(1, 3), -2.0)
            .reward(State::new(2, 3), 2.0)
            .terminal(State::new(1, 3))
            .default_reward(-0.04)
            .build()
            .unwrap()
    }

    #[test]
    fn test_override_then_default() {
        let mdp = mdp();
        assert_eq!(mdp.reward(State::new(1, 3)).unwrap(), -2.0);
        assert_eq!(mdp.reward(State::new(2, 3)).unwrap(), 2.0);
        assert_eq!(mdp.reward(State::new(1, 1)).unwrap(), -0.04);
    }

    #[test]
    fn test_terminal_membership() {
        let mdp = mdp();
        assert!(mdp.is_terminal(State::new(1, 3)).unwrap());
        // A rewarded state is not terminal unless listed.
        assert!(!mdp.is_terminal(State::new(2, 3)).unwrap());
        assert!(!mdp.is_terminal(State::new(2, 2)).unwrap());
    }

    #[test]
    fn test_out_of_range_queries() {
        let mdp = mdp();
        assert!(matches!(
            mdp.reward(State::new(3, 3)),
            Err(MdpError::StateOutOfRange { .. })
        ));
        assert!(mdp.is_terminal(State::new(1, 0)).is_err());
    }
}
