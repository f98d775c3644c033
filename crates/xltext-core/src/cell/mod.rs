//! Cell-related types
//!
//! This module contains:
//! - [`CellValue`] - The decoded value of a cell
//! - [`CellAddress`] / [`CellRange`] - A cell's location and rectangular ranges
//! - [`CellData`] - Value plus style reference, as held by [`CellStorage`]

mod address;
mod storage;
mod value;

pub use address::{CellAddress, CellRange};
pub use storage::{CellData, CellStorage};
pub use value::{CellError, CellValue, SharedString};
