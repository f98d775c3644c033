//! Whole-document conversion

use std::io::Write;

use log::debug;
use xltext_core::{Workbook, Worksheet};

use crate::align::ColumnWidths;
use crate::error::LayoutResult;
use crate::grid::{self, Grid};
use crate::options::RenderOptions;
use crate::orientation::{self, Orientation};
use crate::render;

/// A sheet after the layout pipeline, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    pub orientation: Orientation,
    pub grid: Grid,
    pub widths: ColumnWidths,
}

impl SheetLayout {
    /// Run orientation detection, grid building, normalization and alignment
    pub fn of(sheet: &Worksheet) -> Self {
        let orientation = orientation::detect(sheet);
        let built = grid::build(sheet);
        let grid = grid::normalize(&built, orientation);
        let widths = ColumnWidths::compute(&grid);
        debug!(
            "sheet {:?}: {orientation}, {}x{} built, {}x{} rendered",
            sheet.name(),
            built.row_count(),
            built.max_row_len(),
            grid.row_count(),
            widths.len()
        );
        Self {
            orientation,
            grid,
            widths,
        }
    }

    /// Append this sheet's text block to `out`
    pub fn render_into(&self, out: &mut String, options: &RenderOptions) {
        render::render_sheet(out, &self.grid, self.orientation, &self.widths, options);
    }
}

/// Plain-text writer for decoded workbooks
pub struct TextWriter;

impl TextWriter {
    /// Render one worksheet as a text block
    pub fn render_sheet(sheet: &Worksheet, options: &RenderOptions) -> String {
        let mut out = String::new();
        SheetLayout::of(sheet).render_into(&mut out, options);
        out
    }

    /// Render every worksheet in source order, concatenated
    pub fn render_workbook(workbook: &Workbook, options: &RenderOptions) -> String {
        let mut out = String::new();
        for sheet in workbook.worksheets() {
            SheetLayout::of(sheet).render_into(&mut out, options);
        }
        out
    }

    /// Render a workbook to a writer as UTF-8
    pub fn write<W: Write>(
        workbook: &Workbook,
        mut writer: W,
        options: &RenderOptions,
    ) -> LayoutResult<()> {
        let text = Self::render_workbook(workbook, options);
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LineTerminator;
    use pretty_assertions::assert_eq;
    use xltext_core::Style;

    fn lf() -> RenderOptions {
        RenderOptions::default().with_line_terminator(LineTerminator::LF)
    }

    #[test]
    fn test_sheets_in_source_order() {
        let mut wb = Workbook::new();
        let first = wb.add_worksheet_with_name("One").unwrap();
        wb.worksheet_mut(first).unwrap().set_cell_value("A1", "a").unwrap();
        let second = wb.add_worksheet_with_name("Two").unwrap();
        wb.worksheet_mut(second).unwrap().set_cell_value("A1", "b").unwrap();

        let text = TextWriter::render_workbook(&wb, &lf());
        assert_eq!(
            text,
            "============One========================\n\
             Orientation: horizontal\n\
             a | \n\
             \n\
             ============Two========================\n\
             Orientation: horizontal\n\
             b | \n\
             \n"
        );
    }

    #[test]
    fn test_column_major_sheet_is_transposed() {
        let mut ws = Worksheet::new("Form");
        for (r, (key, value)) in [("Name", "Ann"), ("Age", "41"), ("City", "Oslo"), ("Zip", "0150")]
            .iter()
            .enumerate()
        {
            let row = r as u32;
            ws.set_cell_value_at(row, 0, *key).unwrap();
            ws.set_cell_value_at(row, 1, *value).unwrap();
        }
        ws.set_cell_style_at(3, 1, &Style::new().locked(true)).unwrap();

        let layout = SheetLayout::of(&ws);
        assert_eq!(layout.orientation, Orientation::ColumnMajor);
        assert_eq!(layout.grid.rows[0], vec!["Name", "Age", "City", "Zip"]);
        assert_eq!(layout.grid.rows[1], vec!["Ann", "41", "Oslo", "0150"]);
    }

    #[test]
    fn test_empty_sheet() {
        let ws = Worksheet::new("Blank");
        assert_eq!(
            TextWriter::render_sheet(&ws, &lf()),
            "============Blank========================\nOrientation: horizontal\n\n"
        );
    }

    #[test]
    fn test_write_to_buffer() {
        let mut wb = Workbook::new();
        wb.add_worksheet_with_name("S").unwrap();
        let mut buf = Vec::new();
        TextWriter::write(&wb, &mut buf, &lf()).unwrap();
        assert!(String::from_utf8(buf).unwrap().starts_with("============S="));
    }
}
