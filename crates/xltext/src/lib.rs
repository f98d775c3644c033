//! # xltext
//!
//! Renders decoded spreadsheets as column-aligned plain text.
//!
//! Each worksheet goes through the same pipeline: its orientation is
//! detected from the locked-cell pattern, its cells are annotated and laid
//! out as a dense grid, column-major sheets are transposed, blank rows are
//! dropped, and the result is printed with every column padded to its
//! widest token.
//!
//! ## Example
//!
//! ```rust
//! use xltext::{LineTerminator, RenderOptions, TextWriter};
//! use xltext_core::{Style, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let index = workbook.add_worksheet_with_name("Prices").unwrap();
//! let sheet = workbook.worksheet_mut(index).unwrap();
//! sheet.set_cell_value("A1", "Item").unwrap();
//! sheet.set_cell_value("B1", "Price").unwrap();
//! sheet.set_cell_value("A2", "Tea").unwrap();
//! sheet.set_cell_value("B2", 2.5).unwrap();
//! sheet.set_cell_style("A1", &Style::new().bold(true)).unwrap();
//!
//! let options = RenderOptions::default().with_line_terminator(LineTerminator::LF);
//! let text = TextWriter::render_workbook(&workbook, &options);
//!
//! assert_eq!(
//!     text,
//!     "============Prices========================\n\
//!      Orientation: horizontal\n\
//!      ItemBold | Price | \n\
//!      Tea      | 2.5   | \n\
//!      \n"
//! );
//! ```

pub mod align;
pub mod annotate;
pub mod batch;
pub mod convert;
pub mod error;
pub mod grid;
pub mod options;
pub mod orientation;
pub mod render;

pub use align::ColumnWidths;
pub use annotate::{annotate, CellContext};
pub use batch::{
    convert_batch, convert_document, target_path_for, BatchReport, ConvertedDocument,
    WorkbookSource,
};
pub use convert::{SheetLayout, TextWriter};
pub use error::{LayoutError, LayoutResult, SourceError};
pub use grid::Grid;
pub use options::{ConvertOptions, LineTerminator, RenderOptions};
pub use orientation::Orientation;
