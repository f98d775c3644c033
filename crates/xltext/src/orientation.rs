//! Sheet orientation detection
//!
//! Protected templates lock their header cells. A locked cell deep inside a
//! row (past the third column) suggests headers run across the top; one deep
//! inside a column (past the third row) suggests headers run down the side.
//! The classification is a best-effort heuristic, not a guarantee.

use std::fmt;

use xltext_core::Worksheet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Direction the records of a sheet run in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// One record per row ("horizontal")
    #[default]
    RowMajor,
    /// One record per column ("vertical"), transposed before rendering
    ColumnMajor,
}

impl Orientation {
    /// Human-facing label
    pub fn label(&self) -> &'static str {
        match self {
            Orientation::RowMajor => "horizontal",
            Orientation::ColumnMajor => "vertical",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scan position of a locked cell
///
/// `row` counts only rows that hold cells; `col` is the cell's ordinal among
/// the populated cells of its row, not its sheet column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockedCell {
    pub row: usize,
    pub col: usize,
}

/// Classify a worksheet
pub fn detect(sheet: &Worksheet) -> Orientation {
    classify(&locked_cells(sheet))
}

/// First pass: positions of locked cells in row-major scan order
pub fn locked_cells(sheet: &Worksheet) -> Vec<LockedCell> {
    sheet
        .rows()
        .filter(|row| row.last_cell_num() > 0)
        .enumerate()
        .flat_map(|(row, data)| {
            data.cells
                .into_iter()
                .enumerate()
                .filter(move |(_, (_, cell))| sheet.style_of(cell).is_some_and(|s| s.is_locked()))
                .map(move |(col, _)| LockedCell { row, col })
        })
        .collect()
}

/// Second pass: the first locked cell satisfying either rule decides
pub fn classify(locked: &[LockedCell]) -> Orientation {
    locked
        .iter()
        .find_map(|cell| {
            if cell.row != 0 && cell.col > 2 {
                Some(Orientation::RowMajor)
            } else if cell.col != 0 && cell.row > 2 {
                Some(Orientation::ColumnMajor)
            } else {
                None
            }
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use xltext_core::Style;

    fn lock(ws: &mut Worksheet, address: &str) {
        ws.set_cell_value(address, "x").unwrap();
        ws.set_cell_style(address, &Style::new().locked(true)).unwrap();
    }

    #[test]
    fn test_classify_rules() {
        let at = |row, col| LockedCell { row, col };

        assert_eq!(classify(&[]), Orientation::RowMajor);
        assert_eq!(classify(&[at(1, 3)]), Orientation::RowMajor);
        assert_eq!(classify(&[at(3, 1)]), Orientation::ColumnMajor);
        // first row never votes row-major; first column never votes column-major
        assert_eq!(classify(&[at(0, 5)]), Orientation::RowMajor);
        assert_eq!(classify(&[at(5, 0)]), Orientation::RowMajor);
        assert_eq!(classify(&[at(0, 5), at(4, 1)]), Orientation::ColumnMajor);
        // first match wins
        assert_eq!(classify(&[at(4, 1), at(1, 4)]), Orientation::ColumnMajor);
        // row-major rule takes precedence at the same position
        assert_eq!(classify(&[at(3, 3)]), Orientation::RowMajor);
    }

    #[test]
    fn test_detect_column_major() {
        let mut ws = Worksheet::new("Vertical");
        for r in 1..=5 {
            ws.set_cell_value(&format!("A{r}"), "label").unwrap();
            ws.set_cell_value(&format!("B{r}"), "value").unwrap();
        }
        lock(&mut ws, "B4");
        assert_eq!(detect(&ws), Orientation::ColumnMajor);
    }

    #[test]
    fn test_detect_row_major() {
        let mut ws = Worksheet::new("Horizontal");
        for col in ["A", "B", "C", "D"] {
            ws.set_cell_value(&format!("{col}1"), "h").unwrap();
            ws.set_cell_value(&format!("{col}2"), "v").unwrap();
        }
        lock(&mut ws, "D2");
        assert_eq!(detect(&ws), Orientation::RowMajor);
    }

    #[test]
    fn test_positions_are_ordinals() {
        let mut ws = Worksheet::new("Sparse");
        ws.set_row_height(0, 20.0);
        ws.set_cell_value("A2", "a").unwrap();
        lock(&mut ws, "Z2");
        lock(&mut ws, "B9");

        let locked = locked_cells(&ws);
        assert_eq!(
            locked,
            vec![LockedCell { row: 0, col: 1 }, LockedCell { row: 1, col: 0 }]
        );
        assert_eq!(detect(&ws), Orientation::RowMajor);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Orientation::RowMajor.to_string(), "horizontal");
        assert_eq!(Orientation::ColumnMajor.label(), "vertical");
    }
}
