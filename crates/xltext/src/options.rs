//! Rendering and conversion options

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options for rendering sheets as aligned text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Written after every cell (default: `" | "`)
    pub column_separator: String,
    /// Banner text before the sheet name
    pub banner_prefix: String,
    /// Banner text after the sheet name
    pub banner_suffix: String,
    /// Emit the `Orientation: ...` line under each banner
    pub show_orientation: bool,
    /// Line terminator
    pub line_terminator: LineTerminator,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            column_separator: " | ".to_string(),
            banner_prefix: "=".repeat(12),
            banner_suffix: "=".repeat(24),
            show_orientation: true,
            line_terminator: LineTerminator::default(),
        }
    }
}

impl RenderOptions {
    /// Set the line terminator
    pub fn with_line_terminator(mut self, terminator: LineTerminator) -> Self {
        self.line_terminator = terminator;
        self
    }

    /// Enable or disable the orientation line
    pub fn with_orientation_line(mut self, show: bool) -> Self {
        self.show_orientation = show;
        self
    }
}

/// Line terminator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineTerminator {
    /// Unix-style (LF)
    LF,
    /// Windows-style (CRLF)
    CRLF,
    /// Mac classic (CR)
    CR,
}

impl LineTerminator {
    /// The terminator's characters
    pub fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::LF => "\n",
            LineTerminator::CRLF => "\r\n",
            LineTerminator::CR => "\r",
        }
    }
}

impl Default for LineTerminator {
    /// The host platform's native line ending
    fn default() -> Self {
        if cfg!(windows) {
            LineTerminator::CRLF
        } else {
            LineTerminator::LF
        }
    }
}

/// Options for converting whole documents
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConvertOptions {
    /// How each sheet is rendered
    pub render: RenderOptions,
    /// Extension given to the derived output path (default: `txt`)
    pub target_extension: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            target_extension: "txt".to_string(),
        }
    }
}
