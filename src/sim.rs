//! Simulation loop: step, render, and decide when to stop.

use std::io;

use tracing::{debug, info};

use crate::board::{Board, ParallelStepper, step};
use crate::render::Renderer;

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Halt {
    /// `step(B) == B`.
    FixedPoint,
    /// `step(step(B)) == B` while `step(B) != B`.
    Cycle2,
    /// The configured generation cap was reached.
    GenerationLimit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: u64,
    pub halt: Halt,
    pub population: u64,
}

/// Termination policy for [`Simulation::run`].
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Stop after this many generations. `None` runs until a halt is
    /// detected, or forever when detection is off.
    pub max_generations: Option<u64>,
    /// Stop on fixed points and 2-cycles.
    pub detect_halt: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_generations: None,
            detect_halt: true,
        }
    }
}

impl SimulationConfig {
    pub fn max_generations(mut self, n: u64) -> Self {
        self.max_generations = Some(n);
        self
    }

    pub fn detect_halt(mut self, detect: bool) -> Self {
        self.detect_halt = detect;
        self
    }
}

pub struct Simulation {
    board: Board,
    generation: u64,
    config: SimulationConfig,
    stepper: Option<ParallelStepper>,
    // Successors of `board` already computed during halt detection.
    next: Option<Board>,
    after_next: Option<Board>,
}

impl Simulation {
    pub fn new(board: Board) -> Self {
        Self::with_config(board, SimulationConfig::default())
    }

    pub fn with_config(board: Board, config: SimulationConfig) -> Self {
        Self {
            board,
            generation: 0,
            config,
            stepper: None,
            next: None,
            after_next: None,
        }
    }

    /// Step rows in parallel on `stepper` instead of serially.
    pub fn with_stepper(mut self, stepper: ParallelStepper) -> Self {
        self.stepper = Some(stepper);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn successor(&self, board: &Board) -> Board {
        match &self.stepper {
            Some(stepper) => stepper.step(board),
            None => step(board),
        }
    }

    /// Replace the current board with its next generation.
    pub fn advance(&mut self) {
        let next = match self.next.take() {
            Some(next) => next,
            None => self.successor(&self.board),
        };
        self.board = next;
        self.next = self.after_next.take();
        self.generation += 1;
    }

    /// Check the current board for a fixed point or 2-cycle.
    pub fn detect_halt(&mut self) -> Option<Halt> {
        if self.next.is_none() {
            self.next = Some(self.successor(&self.board));
        }
        let next = self.next.as_ref()?;
        if *next == self.board {
            return Some(Halt::FixedPoint);
        }

        if self.after_next.is_none() {
            self.after_next = Some(self.successor(next));
        }
        if self.after_next.as_ref() == Some(&self.board) {
            return Some(Halt::Cycle2);
        }
        None
    }

    fn summary(&self, halt: Halt) -> RunSummary {
        RunSummary {
            generations: self.generation,
            halt,
            population: self.board.population(),
        }
    }

    /// Render every generation until the termination policy fires.
    ///
    /// On a 2-cycle the other phase is rendered once more before returning.
    pub fn run<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> io::Result<RunSummary> {
        info!(
            rows = self.board.rows(),
            cols = self.board.cols(),
            population = self.board.population(),
            "starting simulation"
        );
        loop {
            renderer.render(&self.board, self.generation)?;

            if self
                .config
                .max_generations
                .is_some_and(|max| self.generation >= max)
            {
                debug!(generation = self.generation, "generation limit reached");
                return Ok(self.summary(Halt::GenerationLimit));
            }

            if self.config.detect_halt {
                if let Some(halt) = self.detect_halt() {
                    if halt == Halt::Cycle2 {
                        self.advance();
                        renderer.render(&self.board, self.generation)?;
                    }
                    debug!(generation = self.generation, ?halt, "simulation halted");
                    return Ok(self.summary(halt));
                }
            }

            self.advance();
        }
    }
}
