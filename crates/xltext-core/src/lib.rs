//! # xltext-core
//!
//! The decoded spreadsheet model consumed by the `xltext` layout engine.
//!
//! A spreadsheet decoder fills these types with already-resolved values:
//! - [`CellValue`] - Decoded cell values (numbers, strings, booleans, errors, formulas)
//! - [`Style`] - Font, fill and protection settings of a cell
//! - [`CellComment`], [`DataValidation`], [`ConditionalFormatRule`] - Per-cell annotations
//! - [`Workbook`], [`Worksheet`] - The document structures, iterated row by row
//!
//! ## Example
//!
//! ```rust
//! use xltext_core::{CellValue, Style, Worksheet};
//!
//! let mut sheet = Worksheet::new("Inventory");
//! sheet.set_cell_value("A1", "Item").unwrap();
//! sheet.set_cell_value_at(0, 1, CellValue::Number(3.0)).unwrap();
//! sheet.set_cell_style("A1", &Style::new().bold(true)).unwrap();
//!
//! let rows: Vec<_> = sheet.rows().collect();
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].last_cell_num(), 2);
//! ```

pub mod cell;
pub mod comment;
pub mod conditional_format;
pub mod error;
pub mod row;
pub mod style;
pub mod validation;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{CellAddress, CellData, CellError, CellRange, CellValue, SharedString};
pub use comment::CellComment;
pub use conditional_format::{CfColorValue, CfOperator, CfRuleType, CfValueType, ConditionalFormatRule};
pub use error::{Error, Result};
pub use row::{Row, RowData};
pub use validation::{DataValidation, ValidationOperator, ValidationType};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

pub use style::{Color, FillStyle, FontStyle, PatternType, Protection, Style, StylePool, Underline};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
