//! Rectangular grid of binary cells.
//!
//! Cells are stored row-major in a single buffer, one byte per cell holding
//! 0 (dead) or 1 (alive). Dimensions are fixed at construction; stepping
//! produces a new `Board` rather than mutating this one.

use super::error::BoardError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Board {
    /// All-dead board of `rows` x `cols`.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`; see [`Board::try_new`].
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Ok(board) => board,
            Err(err) => panic!("{err}"),
        }
    }

    /// All-dead board of `rows` x `cols`, or `TooLarge` when the cell count
    /// overflows.
    pub fn try_new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let len = cell_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![0; len],
        })
    }

    /// Build a board from nested rows, rejecting jagged or non-binary input.
    ///
    /// An empty iterator yields a 0x0 board.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[u8]>,
    {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut row_count = 0;

        for (row, values) in rows.into_iter().enumerate() {
            let values = values.as_ref();
            let expected = *cols.get_or_insert(values.len());
            if values.len() != expected {
                return Err(BoardError::InvalidShape {
                    row,
                    expected,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if value > 1 {
                    return Err(BoardError::InvalidCell { row, col, value });
                }
            }
            cells.extend_from_slice(values);
            row_count += 1;
        }

        Ok(Self {
            rows: row_count,
            cols: cols.unwrap_or(0),
            cells,
        })
    }

    /// Build a board from a flat row-major buffer.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<u8>) -> Result<Self, BoardError> {
        if cells.len() != cell_count(rows, cols)? {
            return Err(BoardError::CellCount {
                rows,
                cols,
                found: cells.len(),
            });
        }
        if let Some(i) = cells.iter().position(|&v| v > 1) {
            return Err(BoardError::InvalidCell {
                row: i / cols,
                col: i % cols,
                value: cells[i],
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Wraps a buffer already known to be binary and correctly sized.
    pub(crate) fn from_raw(rows: usize, cols: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        debug_assert!(cells.iter().all(|&v| v <= 1));
        Self { rows, cols, cells }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Cell value at `(row, col)`. Panics when out of bounds.
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} board",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == 1
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} board",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col] = alive as u8;
    }

    /// One row as a slice of 0/1 values.
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.rows).map(move |row| self.row(row))
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.iter_rows().map(<[u8]>::to_vec).collect()
    }

    pub fn population(&self) -> u64 {
        self.cells.iter().map(|&v| v as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&v| v == 0)
    }

    pub fn for_each_live<F: FnMut(usize, usize)>(&self, mut f: F) {
        for (i, &v) in self.cells.iter().enumerate() {
            if v == 1 {
                f(i / self.cols, i % self.cols);
            }
        }
    }
}

/// `rows * cols`, rejecting products that overflow `usize`.
pub(crate) fn cell_count(rows: usize, cols: usize) -> Result<usize, BoardError> {
    rows.checked_mul(cols).ok_or(BoardError::TooLarge { rows, cols })
}
