//! Generation stepping over a bounded, non-wrapping board.
//!
//! Every cell of the next generation is read from the previous generation
//! only; the input board is never touched. Positions past the edge do not
//! exist and contribute nothing to a neighbour count.

use rayon::prelude::*;
use tracing::debug;

use super::grid::Board;
use super::rules::LIFE;

/// Boards with fewer rows than this are stepped serially even when a pool
/// is available.
const PARALLEL_MIN_ROWS: usize = 64;

/// Live cells among the up-to-8 Moore neighbours of `(row, col)`.
///
/// Panics when `(row, col)` is outside the board.
pub fn neighbor_count(board: &Board, row: usize, col: usize) -> u8 {
    let (rows, cols) = board.dims();
    assert!(
        row < rows && col < cols,
        "cell ({row}, {col}) outside {rows}x{cols} board"
    );

    let row_lo = row.saturating_sub(1);
    let row_hi = (row + 1).min(rows - 1);
    let col_lo = col.saturating_sub(1);
    let col_hi = (col + 1).min(cols - 1);

    let mut count = 0u8;
    for r in row_lo..=row_hi {
        let cells = board.row(r);
        for c in col_lo..=col_hi {
            if r == row && c == col {
                continue;
            }
            count += cells[c];
        }
    }
    count
}

#[inline]
fn step_row(board: &Board, row: usize, out: &mut [u8]) {
    let current = board.row(row);
    for (col, next) in out.iter_mut().enumerate() {
        *next = LIFE.lookup(current[col], neighbor_count(board, row, col));
    }
}

/// Next generation of `board`. Same dimensions, input left unchanged.
pub fn step(board: &Board) -> Board {
    let (rows, cols) = board.dims();
    let mut next = vec![0u8; rows * cols];
    if cols > 0 {
        for (row, out) in next.chunks_mut(cols).enumerate() {
            step_row(board, row, out);
        }
    }
    Board::from_raw(rows, cols, next)
}

/// Next generation of `board`, rows computed on `pool`.
///
/// Produces exactly the same board as [`step`].
pub fn step_parallel(board: &Board, pool: &rayon::ThreadPool) -> Board {
    let (rows, cols) = board.dims();
    let mut next = vec![0u8; rows * cols];
    if cols > 0 {
        pool.install(|| {
            next.par_chunks_mut(cols)
                .enumerate()
                .for_each(|(row, out)| step_row(board, row, out));
        });
    }
    Board::from_raw(rows, cols, next)
}

/// Configuration for a [`ParallelStepper`].
///
/// Use `StepperConfig::default()` for auto-detected defaults, or customise
/// individual knobs via the builder methods.
#[derive(Clone, Debug, Default)]
pub struct StepperConfig {
    /// Number of threads for the compute pool.
    /// `None` means the available parallelism reported by the OS.
    pub thread_count: Option<usize>,
    /// Hard upper bound on threads regardless of auto-detection.
    pub max_threads: Option<usize>,
    /// Boards shorter than this many rows are stepped serially.
    /// `None` means the built-in threshold.
    pub min_parallel_rows: Option<usize>,
}

impl StepperConfig {
    /// Set an explicit thread count for the compute pool.
    pub fn thread_count(mut self, n: usize) -> Self {
        self.thread_count = Some(n.max(1));
        self
    }

    /// Set a hard upper bound on threads.
    pub fn max_threads(mut self, n: usize) -> Self {
        self.max_threads = Some(n.max(1));
        self
    }

    pub fn min_parallel_rows(mut self, rows: usize) -> Self {
        self.min_parallel_rows = Some(rows);
        self
    }
}

fn resolve_thread_count(config: &StepperConfig) -> usize {
    let auto = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    let mut threads = config.thread_count.unwrap_or(auto);
    if let Some(max) = config.max_threads {
        threads = threads.min(max);
    }
    threads.max(1)
}

/// Row-parallel stepper owning its own rayon pool.
pub struct ParallelStepper {
    pool: rayon::ThreadPool,
    min_parallel_rows: usize,
}

impl ParallelStepper {
    pub fn new() -> Result<Self, rayon::ThreadPoolBuildError> {
        Self::with_config(StepperConfig::default())
    }

    pub fn with_config(config: StepperConfig) -> Result<Self, rayon::ThreadPoolBuildError> {
        let threads = resolve_thread_count(&config);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("grid-life-{i}"))
            .build()?;
        debug!(threads, "built stepper thread pool");
        Ok(Self {
            pool,
            min_parallel_rows: config.min_parallel_rows.unwrap_or(PARALLEL_MIN_ROWS),
        })
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn step(&self, board: &Board) -> Board {
        if board.rows() < self.min_parallel_rows {
            step(board)
        } else {
            step_parallel(board, &self.pool)
        }
    }
}
