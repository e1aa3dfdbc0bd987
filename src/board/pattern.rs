//! Plain-text pattern format: one row per line, `0` for dead and `1` for
//! alive.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::info;

use super::error::BoardError;
use super::grid::Board;

/// Parse a pattern. Trailing blank lines are ignored; an empty text is a
/// 0x0 board.
pub fn parse_pattern(text: &str) -> Result<Board, BoardError> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let mut rows = Vec::with_capacity(lines.len());
    for (line_index, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (col_index, ch) in line.chars().enumerate() {
            let value = match ch {
                '0' => 0,
                '1' => 1,
                _ => {
                    return Err(BoardError::InvalidChar {
                        line: line_index + 1,
                        col: col_index + 1,
                        ch,
                    });
                }
            };
            row.push(value);
        }
        rows.push(row);
    }

    Board::from_rows(rows)
}

/// Read and parse a pattern file.
pub fn load_pattern(path: impl AsRef<Path>) -> Result<Board, BoardError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| BoardError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let board = parse_pattern(&text)?;
    info!(
        path = %path.display(),
        rows = board.rows(),
        cols = board.cols(),
        population = board.population(),
        "loaded pattern"
    );
    Ok(board)
}

impl Board {
    /// Serialise in the pattern format, one newline-terminated line per row.
    pub fn to_pattern(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for &cell in row {
                f.write_str(if cell == 1 { "1" } else { "0" })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pattern(s)
    }
}
