//! Cell annotation
//!
//! Turns one decoded cell into its text token: the base value followed by
//! suffixes describing the cell's allowed values, colors, comment, and font.

use xltext_core::{
    CellComment, CellData, CellValue, Color, ConditionalFormatRule, DataValidation, Style,
    Worksheet,
};

/// Marker opening the interesting part of a structured comment
const COMMENT_MARKER: &str = "Comment:";
/// Marker closing the interesting part of a structured comment
const FLAGS_MARKER: &str = "Flags:";

/// Everything the annotator needs to know about one cell
#[derive(Debug, Clone)]
pub struct CellContext<'a> {
    /// Decoded value
    pub value: &'a CellValue,
    /// Effective style (fill, font, protection)
    pub style: Option<&'a Style>,
    /// Attached comment
    pub comment: Option<&'a CellComment>,
    /// Data validation covering the cell
    pub validation: Option<&'a DataValidation>,
    /// Conditional-format rules that matched the cell, in sheet order
    pub conditional_formats: Vec<&'a ConditionalFormatRule>,
}

impl<'a> CellContext<'a> {
    /// A bare value with no style or sheet-level decorations
    pub fn new(value: &'a CellValue) -> Self {
        Self {
            value,
            style: None,
            comment: None,
            validation: None,
            conditional_formats: Vec::new(),
        }
    }

    /// Gather the cell at `(row, col)` together with its sheet-level lookups
    pub fn resolve(sheet: &'a Worksheet, row: u32, col: u16, cell: &'a CellData) -> Self {
        Self {
            value: &cell.value,
            style: sheet.style_of(cell),
            comment: sheet.comment_at(row, col),
            validation: sheet.data_validation_at(row, col),
            conditional_formats: sheet.conditional_formats_at(row, col).collect(),
        }
    }

    /// Set the style
    pub fn with_style(mut self, style: &'a Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the comment
    pub fn with_comment(mut self, comment: &'a CellComment) -> Self {
        self.comment = Some(comment);
        self
    }

    /// Set the data validation
    pub fn with_validation(mut self, validation: &'a DataValidation) -> Self {
        self.validation = Some(validation);
        self
    }

    /// Add a matching conditional-format rule
    pub fn with_conditional_format(mut self, rule: &'a ConditionalFormatRule) -> Self {
        self.conditional_formats.push(rule);
        self
    }
}

/// Render a cell as an untrimmed token
///
/// Suffix order: allowed values, fill color, conditional-format colors,
/// comment excerpt, `Underline`, `Bold`. Malformed decorations never fail;
/// at worst they contribute nothing.
pub fn annotate(cell: &CellContext<'_>) -> String {
    let mut token = base_text(cell.value);

    if let Some(values) = cell.validation.and_then(DataValidation::explicit_list_values) {
        token.push_str(&format!("[{}] ", values.join(", ")));
    }

    if let Some(color) = cell.style.and_then(|s| s.fill.foreground_color()) {
        push_color(&mut token, &color);
    }

    for rule in &cell.conditional_formats {
        if let Some(color) = rule.background_color() {
            push_color(&mut token, &color);
        } else {
            for color in rule.scale_colors() {
                push_color(&mut token, &color);
            }
        }
    }

    if let Some(comment) = cell.comment {
        token.push_str(&format!("{{{}}} ", comment_excerpt(&comment.text)));
    }

    if let Some(style) = cell.style {
        if style.font.is_underlined() {
            token.push_str("Underline ");
        }
        if style.font.bold {
            token.push_str("Bold ");
        }
    }

    token
}

/// Text form of a decoded value, without decorations
pub fn base_text(value: &CellValue) -> String {
    match value {
        CellValue::Empty => String::new(),
        CellValue::Boolean(b) => b.to_string(),
        CellValue::Number(n) => number_text(*n),
        CellValue::String(s) => s.as_str().to_string(),
        CellValue::Error(e) => e.as_str().to_string(),
        CellValue::Formula { text, .. } => text.strip_prefix('=').unwrap_or(text).to_string(),
    }
}

/// The part of a comment worth showing inline, with line breaks removed
///
/// Structured comments keep the span from `Comment:` up to a later
/// `Flags:` marker (or the end). Free-form comments keep their first line.
pub fn comment_excerpt(text: &str) -> String {
    let excerpt = match text.find(COMMENT_MARKER) {
        Some(start) => {
            let rest = &text[start..];
            match rest.find(FLAGS_MARKER) {
                Some(end) => &rest[..end],
                None => rest,
            }
        }
        None => text.split('\n').next().unwrap_or(text),
    };
    excerpt.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
}

/// Plain decimal text of a number, always with a fractional part
///
/// Never uses exponent notation: `1e21` renders as `1000000000000000000000.0`.
pub fn number_text(n: f64) -> String {
    let text = n.to_string();
    if n.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

fn push_color(token: &mut String, color: &Color) {
    token.push_str(&format!(" #{} ", color.to_argb_hex()));
}
