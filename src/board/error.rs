use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum BoardError {
    #[error("invalid board shape: row {row} has {found} cells, expected {expected}")]
    InvalidShape {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid cell value {value} at ({row}, {col}), expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },
    #[error("invalid board shape: {found} cells cannot fill {rows}x{cols}")]
    CellCount {
        rows: usize,
        cols: usize,
        found: usize,
    },
    #[error("board of {rows}x{cols} cells does not fit in memory")]
    TooLarge { rows: usize, cols: usize },
    #[error("invalid pattern character {ch:?} at line {line}, column {col}")]
    InvalidChar { line: usize, col: usize, ch: char },
    #[error("probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
    #[error("failed to read pattern {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
