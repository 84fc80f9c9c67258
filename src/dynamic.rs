pub mod value_iteration;

// Re-export the solver with descriptive names
pub use value_iteration::{value_iteration, SolverConfig, ValueIteration, ValueIterationResult};
