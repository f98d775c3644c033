//! Cell styling types
//!
//! Only the parts of a decoded style that show up in text output are kept:
//! - [`FontStyle`] - Bold and underline flags
//! - [`FillStyle`] - Background fill and its foreground color
//! - [`Protection`] - The lock flag used to detect sheet orientation
//! - [`Color`] - Color representation

mod color;
mod fill;
mod font;
mod pool;

pub use color::Color;
pub use fill::{FillStyle, PatternType};
pub use font::{FontStyle, Underline};
pub use pool::StylePool;

/// Complete cell style
///
/// Styles are deduplicated via [`StylePool`]; cells reference them by index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Font settings
    pub font: FontStyle,
    /// Fill/background settings
    pub fill: FillStyle,
    /// Cell protection
    pub protection: Protection,
}

impl Style {
    /// Create a new default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.font.bold = bold;
        self
    }

    /// Set the underline style
    pub fn underline(mut self, underline: Underline) -> Self {
        self.font.underline = underline;
        self
    }

    /// Set fill color (solid fill)
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = FillStyle::Solid { color };
        self
    }

    /// Set the protection lock flag
    pub fn locked(mut self, locked: bool) -> Self {
        self.protection.locked = locked;
        self
    }

    /// Check whether the cell is locked against edits
    pub fn is_locked(&self) -> bool {
        self.protection.locked
    }
}

/// Cell protection settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Protection {
    /// Cell is locked (protected when sheet is protected)
    pub locked: bool,
}
