//! 3x3 Tic-Tac-Toe state with win and draw detection.
//!
//! Cells are numbered 1 to 9 row-major from the top left.

pub mod ai;

use std::fmt;

pub use ai::choose_move;

/// Every winning line: rows, columns, then both diagonals. Indices are
/// zero-based.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mark::X => "X",
            Mark::O => "O",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Mark),
    Draw,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MoveError {
    #[error("cell {0} is not between 1 and 9")]
    OutOfRange(usize),
    #[error("cell {0} is already taken")]
    Occupied(usize),
    #[error("the game is already over")]
    GameOver,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicTacToe {
    cells: [Option<Mark>; 9],
}

impl TicTacToe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark at 1-based `cell`, `None` when free or out of range.
    pub fn get(&self, cell: usize) -> Option<Mark> {
        cell.checked_sub(1)
            .and_then(|i| self.cells.get(i).copied().flatten())
    }

    pub fn play(&mut self, cell: usize, mark: Mark) -> Result<(), MoveError> {
        if !(1..=9).contains(&cell) {
            return Err(MoveError::OutOfRange(cell));
        }
        if self.outcome().is_some() {
            return Err(MoveError::GameOver);
        }
        let slot = &mut self.cells[cell - 1];
        if slot.is_some() {
            return Err(MoveError::Occupied(cell));
        }
        *slot = Some(mark);
        Ok(())
    }

    /// Free cells, 1-based, ascending.
    pub fn free_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i + 1)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|&[a, b, c]| match self.cells[a] {
            Some(mark) if self.cells[b] == Some(mark) && self.cells[c] == Some(mark) => Some(mark),
            _ => None,
        })
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner() {
            Some(mark) => Some(Outcome::Win(mark)),
            None if self.is_full() => Some(Outcome::Draw),
            None => None,
        }
    }

    pub(crate) fn cell_at(&self, index: usize) -> Option<Mark> {
        self.cells[index]
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-------")?;
        for (r, cells) in self.cells.chunks(3).enumerate() {
            f.write_str("|")?;
            for (c, cell) in cells.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                match cell {
                    Some(mark) => write!(f, "{mark}")?,
                    None => write!(f, "{}", r * 3 + c + 1)?,
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "-------")
    }
}
