//! Bounded board, its sources, and the B3/S23 stepper.

mod error;
mod grid;
mod pattern;
mod random;
mod rules;
mod stepper;

pub use error::BoardError;
pub use grid::Board;
pub use pattern::{load_pattern, parse_pattern};
pub use random::random_board;
pub use rules::{LIFE, RuleTable};
pub use stepper::{ParallelStepper, StepperConfig, neighbor_count, step, step_parallel};
