//! CSV grid loading.
//!
//! Two parse strategies turn CSV text into a [`Grid`]:
//!
//! - [`quoted::parse`]: character-scan tokenizer honoring double-quoted
//!   fields and doubled-quote escapes; fails on mismatched quotes.
//! - [`lines::parse`]: naive split-and-trim over non-empty lines; simpler
//!   and lossier (quotes are kept in the cell text).
//!
//! Both are kept as distinct entry points because callers may depend on
//! either's quirks. Most callers go through [`unified::load_from_path`],
//! which also handles file reading and observer reporting.

pub mod lines;
pub mod observability;
pub mod quoted;
pub mod unified;

pub use observability::{
    CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats,
    StdErrObserver,
};
pub use unified::{load_from_path, load_from_str, LoadOptions, ParseMode};

use crate::error::{CsvError, CsvResult};

/// The parsed rows × columns string matrix from CSV text.
///
/// Essentially a wrapper over `Vec<Vec<String>>` with bounds-checked
/// accessors. Once loaded the grid is assumed rectangular by callers, but
/// this is not enforced; ragged access surfaces as an index error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<String>>,
}

impl Grid {
    /// Construct a grid directly from rows of cells.
    pub fn from_rows(cells: Vec<Vec<String>>) -> Self {
        Self { cells }
    }

    /// Whether any CSV data is currently loaded.
    pub fn has_data(&self) -> bool {
        !self.cells.is_empty()
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns, taken from the first row (0 when no rows).
    pub fn column_count(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// The cell at `row`/`col`.
    ///
    /// Fails with [`CsvError::Index`] identifying the violated index when
    /// `row` is outside the row count or `col` is outside the column count
    /// (or outside a shorter, ragged row).
    pub fn cell(&self, row: usize, col: usize) -> CsvResult<&str> {
        if row >= self.row_count() {
            return Err(CsvError::Index {
                what: "row",
                index: row,
                len: self.row_count(),
            });
        }
        if col >= self.column_count() {
            return Err(CsvError::Index {
                what: "column",
                index: col,
                len: self.column_count(),
            });
        }
        let cells = &self.cells[row];
        cells.get(col).map(String::as_str).ok_or(CsvError::Index {
            what: "column",
            index: col,
            len: cells.len(),
        })
    }

    /// All cells of row `index`, in column order.
    pub fn row(&self, index: usize) -> CsvResult<Vec<String>> {
        self.row_cells(index, 0, self.column_count())
    }

    /// All cells of column `index`, in row order.
    pub fn column(&self, index: usize) -> CsvResult<Vec<String>> {
        self.column_cells(index, 0, self.row_count())
    }

    /// `count` cells of `row`, starting at column `start_col`.
    pub fn row_cells(&self, row: usize, start_col: usize, count: usize) -> CsvResult<Vec<String>> {
        let mut values = Vec::with_capacity(count);
        for i in 0..count {
            values.push(self.cell(row, start_col + i)?.to_owned());
        }
        Ok(values)
    }

    /// `count` cells of `col`, starting at row `start_row`.
    pub fn column_cells(&self, col: usize, start_row: usize, count: usize) -> CsvResult<Vec<String>> {
        let mut values = Vec::with_capacity(count);
        for i in 0..count {
            values.push(self.cell(start_row + i, col)?.to_owned());
        }
        Ok(values)
    }

    /// Clears the grid to its empty state.
    ///
    /// Subsequent accessors behave as "no data": both counts report 0 and
    /// every cell access fails with an index error.
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}
