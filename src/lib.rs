//! Value iteration for grid-world Markov Decision Processes.
//!
//! A [`GridMdp`] describes a rectangular grid with stochastic compass moves,
//! wall bounces, per-state rewards and terminal states.
//! [`value_iteration`] computes the utility of every state under an optimal
//! policy.

pub mod dynamic;
pub mod error;
pub mod mdp;
pub mod render;
pub mod utility;

pub use dynamic::{value_iteration, SolverConfig, ValueIteration, ValueIterationResult};
pub use error::{MdpError, Result};
pub use mdp::{Action, Grid, GridMdp, GridMdpBuilder, State};
pub use render::ascii_grid;
pub use utility::UtilityMap;
