//! Fixed-width text rendering

use crate::align::ColumnWidths;
use crate::grid::Grid;
use crate::options::RenderOptions;
use crate::orientation::Orientation;

/// Append one sheet block to `out`
///
/// The block is a banner, an optional orientation line, one line per row,
/// and a trailing blank line. Columns of width 0 are left out entirely.
pub fn render_sheet(
    out: &mut String,
    grid: &Grid,
    orientation: Orientation,
    widths: &ColumnWidths,
    options: &RenderOptions,
) {
    let eol = options.line_terminator.as_str();

    out.push_str(&banner(&grid.name, options));
    out.push_str(eol);

    if options.show_orientation {
        out.push_str(&format!("Orientation: {orientation}{eol}"));
    }

    for row in &grid.rows {
        render_row(out, row, widths, options);
        out.push_str(eol);
    }

    out.push_str(eol);
}

/// Append one row's cells, without the line terminator
pub fn render_row(out: &mut String, row: &[String], widths: &ColumnWidths, options: &RenderOptions) {
    for (col, token) in row.iter().enumerate() {
        let width = widths.get(col);
        if width == 0 {
            continue;
        }
        out.push_str(&format!("{token:<width$}"));
        out.push_str(&options.column_separator);
    }
}

/// Banner line naming a sheet
pub fn banner(name: &str, options: &RenderOptions) -> String {
    format!("{}{name}{}", options.banner_prefix, options.banner_suffix)
}
