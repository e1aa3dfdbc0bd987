//! Bounded Conway's Game of Life (B3/S23) with terminal rendering, plus a
//! Tic-Tac-Toe toy and an image to ASCII-art converter.

pub mod ascii_art;
pub mod board;
pub mod render;
pub mod sim;
pub mod tictactoe;

pub use board::{Board, BoardError, ParallelStepper, StepperConfig, neighbor_count, step};
pub use sim::{Halt, RunSummary, Simulation, SimulationConfig};
