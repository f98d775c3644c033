//! Worksheet type

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::cell::{CellAddress, CellData, CellStorage, CellValue};
use crate::comment::CellComment;
use crate::conditional_format::ConditionalFormatRule;
use crate::error::{Error, Result};
use crate::row::{Row, RowData};
use crate::style::Style;
use crate::validation::DataValidation;
use crate::{MAX_COLS, MAX_ROWS};

/// A decoded worksheet (single sheet in a workbook)
#[derive(Debug)]
pub struct Worksheet {
    name: String,
    cells: CellStorage,
    /// Rows with explicit metadata, which may exist without cells
    row_meta: BTreeMap<u32, Row>,
    /// Cell comments keyed by (row, col)
    comments: HashMap<(u32, u16), CellComment>,
    data_validations: Vec<DataValidation>,
    conditional_formats: Vec<ConditionalFormatRule>,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: CellStorage::new(),
            row_meta: BTreeMap::new(),
            comments: HashMap::new(),
            data_validations: Vec::new(),
            conditional_formats: Vec::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    // === Cell Access ===

    /// Get a cell by row and column indices
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&CellData> {
        self.cells.get(row, col)
    }

    /// Get cell value by indices (`Empty` for absent cells)
    pub fn get_value_at(&self, row: u32, col: u16) -> CellValue {
        self.cells
            .get(row, col)
            .map(|c| c.value.clone())
            .unwrap_or_default()
    }

    /// Resolve the style a cell references
    pub fn style_of(&self, cell: &CellData) -> Option<&Style> {
        self.cells.style_pool().get(cell.style_index)
    }

    /// Get the style applied to a cell, if the cell exists
    pub fn cell_style_at(&self, row: u32, col: u16) -> Option<&Style> {
        self.cells.get(row, col).and_then(|c| self.style_of(c))
    }

    // === Cell Modification ===

    /// Set a cell value by address string
    pub fn set_cell_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_value_at(addr.row, addr.col, value)
    }

    /// Set a cell value by row and column indices
    pub fn set_cell_value_at<V: Into<CellValue>>(
        &mut self,
        row: u32,
        col: u16,
        value: V,
    ) -> Result<()> {
        validate_cell_position(row, col)?;
        self.cells.set_value(row, col, value.into());
        Ok(())
    }

    /// Set a cell formula by address string
    pub fn set_cell_formula(&mut self, address: &str, formula: &str) -> Result<()> {
        self.set_cell_value(address, CellValue::formula(formula))
    }

    /// Set a cell style by address string
    pub fn set_cell_style(&mut self, address: &str, style: &Style) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_style_at(addr.row, addr.col, style)
    }

    /// Set a cell style by row and column indices
    ///
    /// Styling an absent cell creates a blank, styled cell.
    pub fn set_cell_style_at(&mut self, row: u32, col: u16, style: &Style) -> Result<()> {
        validate_cell_position(row, col)?;
        self.cells.set_style(row, col, style);
        Ok(())
    }

    // === Rows ===

    /// Record a custom row height (creates the row if needed)
    pub fn set_row_height(&mut self, row: u32, height: f64) {
        self.row_meta
            .entry(row)
            .or_insert_with(|| Row::new(row))
            .height = Some(height);
    }

    /// Get row metadata, if the row was recorded explicitly
    pub fn row_meta(&self, row: u32) -> Option<&Row> {
        self.row_meta.get(&row)
    }

    /// Iterate over physical rows in source order
    ///
    /// A row is physical when it holds cells or has explicit metadata; the
    /// latter may yield a [`RowData`] without cells.
    pub fn rows(&self) -> impl Iterator<Item = RowData<'_>> {
        let indices: BTreeSet<u32> = self
            .cells
            .row_indices()
            .chain(self.row_meta.keys().copied())
            .collect();
        indices
            .into_iter()
            .map(move |index| RowData::new(index, self.cells.iter_row(index).collect()))
    }

    /// Get the number of stored cells
    pub fn cell_count(&self) -> usize {
        self.cells.cell_count()
    }

    /// Check if the worksheet has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    // === Comments ===

    /// Set a comment on a cell by address string
    pub fn set_comment(&mut self, address: &str, comment: CellComment) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_comment_at(addr.row, addr.col, comment);
        Ok(())
    }

    /// Set a comment on a cell by row and column indices
    pub fn set_comment_at(&mut self, row: u32, col: u16, comment: CellComment) {
        self.comments.insert((row, col), comment);
    }

    /// Get a comment from a cell by row and column indices
    pub fn comment_at(&self, row: u32, col: u16) -> Option<&CellComment> {
        self.comments.get(&(row, col))
    }

    /// Get the number of comments in this worksheet
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    // === Data Validation ===

    /// Add a data validation rule
    pub fn add_data_validation(&mut self, validation: DataValidation) {
        self.data_validations.push(validation);
    }

    /// Get the first data validation covering a cell
    pub fn data_validation_at(&self, row: u32, col: u16) -> Option<&DataValidation> {
        self.data_validations
            .iter()
            .find(|v| v.applies_to(row, col))
    }

    // === Conditional Formatting ===

    /// Add a conditional formatting rule
    pub fn add_conditional_format(&mut self, rule: ConditionalFormatRule) {
        self.conditional_formats.push(rule);
    }

    /// Rules that matched a cell, in the order they were added
    pub fn conditional_formats_at(
        &self,
        row: u32,
        col: u16,
    ) -> impl Iterator<Item = &ConditionalFormatRule> {
        self.conditional_formats
            .iter()
            .filter(move |r| r.applies_to(row, col))
    }
}

fn validate_cell_position(row: u32, col: u16) -> Result<()> {
    if row >= MAX_ROWS {
        return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
    }
    if col >= MAX_COLS {
        return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
    }
    Ok(())
}
