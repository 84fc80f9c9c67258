//! Solves the 3-row x 2-column gridworld and prints its utility table.
//!
//! The table shows the utilities of the final sweep. Programs that report the
//! snapshot taken before that sweep print values that differ in the third or
//! fourth decimal (e.g. 1.2736 rather than 1.2681 at (1, 1)); both lie within
//! `EPSILON` of each other.

use gridmdp::{ascii_grid, value_iteration, GridMdp, State};

const GAMMA: f64 = 0.9;
const EPSILON: f64 = 0.01;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let gridworld = GridMdp::builder(3, 2)
        .reward(State::new(1, 3), -2.0)
        .reward(State::new(2, 3), 2.0)
        .terminals([State::new(1, 3), State::new(2, 3)])
        .probabilities(0.8, 0.1)
        .build()?;

    let utilities = value_iteration(&gridworld, GAMMA, EPSILON)?;
    println!("{}", ascii_grid(&utilities));
    Ok(())
}
