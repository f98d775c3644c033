//! Column width computation

use crate::grid::Grid;

/// Display width of every column reached by at least one row
///
/// Widths count characters, not bytes. Columns past the end are reported
/// as width 0.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnWidths {
    widths: Vec<usize>,
}

impl ColumnWidths {
    /// Compute the widest token per column
    pub fn compute(grid: &Grid) -> Self {
        let mut widths: Vec<usize> = Vec::new();
        for row in &grid.rows {
            if widths.len() < row.len() {
                widths.resize(row.len(), 0);
            }
            for (width, token) in widths.iter_mut().zip(row) {
                *width = (*width).max(token.chars().count());
            }
        }
        Self { widths }
    }

    /// Width of a column (0 when no row reaches it)
    pub fn get(&self, col: usize) -> usize {
        self.widths.get(col).copied().unwrap_or(0)
    }

    /// Number of columns reached by some row
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Check if no column was reached
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Iterate over `(column, width)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.widths.iter().copied().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(data: &[&[&str]]) -> Grid {
        Grid::new(
            "S",
            data.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_widths() {
        let widths = ColumnWidths::compute(&grid(&[&["a", "bbb"], &["cc", "", "dddd"], &[]]));
        assert_eq!(widths.iter().collect::<Vec<_>>(), vec![(0, 2), (1, 3), (2, 4)]);
        assert_eq!(widths.get(7), 0);
        assert_eq!(widths.len(), 3);
    }

    #[test]
    fn test_counts_characters() {
        let widths = ColumnWidths::compute(&grid(&[&["größe", "日本"]]));
        assert_eq!(widths.get(0), 5);
        assert_eq!(widths.get(1), 2);
    }

    #[test]
    fn test_empty_column_is_zero() {
        let widths = ColumnWidths::compute(&grid(&[&["x", ""], &["y", ""]]));
        assert_eq!(widths.get(1), 0);
        assert!(!widths.is_empty());
        assert!(ColumnWidths::compute(&grid(&[])).is_empty());
    }
}
