//! Row types

use crate::cell::CellData;

/// Row metadata
///
/// Decoders record rows that carry formatting but may hold no cells at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Row index (0-based)
    pub index: u32,
    /// Custom height (None = default)
    pub height: Option<f64>,
}

impl Row {
    /// Create a new row with default settings
    pub fn new(index: u32) -> Self {
        Self {
            index,
            height: None,
        }
    }
}

/// One source row as seen during iteration: populated cells in column order
#[derive(Debug, Clone)]
pub struct RowData<'a> {
    /// Row index in the sheet
    pub index: u32,
    /// Populated cells, ascending by column; gaps allowed
    pub cells: Vec<(u16, &'a CellData)>,
}

impl<'a> RowData<'a> {
    /// Create a new row data
    pub fn new(index: u32, cells: Vec<(u16, &'a CellData)>) -> Self {
        Self { index, cells }
    }

    /// One past the largest populated column index, or -1 when the row has no cells
    pub fn last_cell_num(&self) -> i32 {
        self.cells
            .last()
            .map_or(-1, |(col, _)| i32::from(*col) + 1)
    }

    /// Get a cell by column index
    pub fn cell(&self, col: u16) -> Option<&'a CellData> {
        self.cells
            .iter()
            .find(|(c, _)| *c == col)
            .map(|(_, data)| *data)
    }

    /// Check if row has any cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellValue;

    #[test]
    fn test_last_cell_num() {
        let a = CellData::new(CellValue::from("a"));
        let b = CellData::new(CellValue::from("b"));

        assert_eq!(RowData::new(0, vec![]).last_cell_num(), -1);
        assert_eq!(RowData::new(0, vec![(0, &a)]).last_cell_num(), 1);
        assert_eq!(RowData::new(0, vec![(1, &a), (4, &b)]).last_cell_num(), 5);
    }

    #[test]
    fn test_cell_lookup() {
        let a = CellData::new(CellValue::from("a"));
        let row = RowData::new(2, vec![(3, &a)]);
        assert!(row.cell(3).is_some());
        assert!(row.cell(0).is_none());
        assert!(!row.is_empty());
    }
}
