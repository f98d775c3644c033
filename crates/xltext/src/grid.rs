//! Token grids and the transformations between pipeline stages
//!
//! Every stage consumes a [`Grid`] and returns a new one under the same
//! sheet name; nothing is shared or mutated across stages.

use xltext_core::Worksheet;

use crate::annotate::{annotate, CellContext};
use crate::orientation::Orientation;

/// Named grid of cell tokens for one sheet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    /// Sheet name
    pub name: String,
    /// Rows of tokens
    pub rows: Vec<Vec<String>>,
}

impl Grid {
    /// Create a grid from rows
    pub fn new<S: Into<String>>(name: S, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row
    pub fn max_row_len(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check if the grid has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check if every row has the same length
    pub fn is_rectangular(&self) -> bool {
        self.rows.windows(2).all(|w| w[0].len() == w[1].len())
    }

    /// Token at `(row, col)`, if the row reaches that column
    pub fn token(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}

/// Build the token grid of a worksheet in source layout
///
/// Rows without cells are skipped. Column gaps are filled with empty tokens.
/// The first built row fixes the width that later rows are padded toward;
/// a later row wider than that keeps its extra tokens.
pub fn build(sheet: &Worksheet) -> Grid {
    let mut rows = Vec::new();
    let mut target: Option<usize> = None;

    for data in sheet.rows() {
        let last_cell_num = data.last_cell_num();
        if last_cell_num <= 0 {
            continue;
        }

        let mut tokens: Vec<String> = Vec::new();
        for &(col, cell) in &data.cells {
            let index = usize::from(col);
            if tokens.len() < index {
                tokens.resize(index, String::new());
            }
            let token = if cell.value.is_empty() {
                String::new()
            } else {
                annotate(&CellContext::resolve(sheet, data.index, col, cell))
                    .trim()
                    .to_string()
            };
            tokens.push(token);
        }

        let target = *target.get_or_insert(tokens.len());
        let padding = target.saturating_sub(last_cell_num as usize);
        tokens.extend(std::iter::repeat(String::new()).take(padding));

        if !tokens.is_empty() {
            rows.push(tokens);
        }
    }

    Grid::new(sheet.name(), rows)
}

/// Lay `rows` out as a dense `rows.len() x width` block
///
/// Short rows are padded with empty tokens; longer rows are cut to `width`.
pub fn rectangularize(rows: &[Vec<String>], width: usize) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            (0..width)
                .map(|col| row.get(col).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}

/// Swap rows and columns
///
/// Source rows may be ragged: the result has one row per column of the
/// longest source row, each as long as the source has rows.
pub fn transpose(grid: &Grid) -> Grid {
    let width = grid.max_row_len();
    let dense = rectangularize(&grid.rows, width);
    let rows = (0..width)
        .map(|col| dense.iter().map(|row| row[col].clone()).collect())
        .collect();
    Grid::new(grid.name.clone(), rows)
}

/// Remove rows whose tokens are all blank, keeping the order of the rest
pub fn drop_empty_rows(grid: &Grid) -> Grid {
    let rows = grid
        .rows
        .iter()
        .filter(|row| row.iter().any(|token| !token.trim().is_empty()))
        .cloned()
        .collect();
    Grid::new(grid.name.clone(), rows)
}

/// Bring a freshly built grid into row-major form and strip blank rows
pub fn normalize(grid: &Grid, orientation: Orientation) -> Grid {
    match orientation {
        Orientation::RowMajor => drop_empty_rows(grid),
        Orientation::ColumnMajor => drop_empty_rows(&transpose(grid)),
    }
}
