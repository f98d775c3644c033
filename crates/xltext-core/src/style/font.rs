//! Font style types

/// Font flags the text output reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FontStyle {
    /// Bold
    pub bold: bool,
    /// Underline style
    pub underline: Underline,
}

impl FontStyle {
    /// Whether any underline style is applied
    pub fn is_underlined(&self) -> bool {
        self.underline != Underline::None
    }
}

/// Underline style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Underline {
    /// No underline
    #[default]
    None,
    /// Single underline
    Single,
    /// Double underline
    Double,
    /// Single accounting underline (extends to cell width)
    SingleAccounting,
    /// Double accounting underline
    DoubleAccounting,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_underlined() {
        assert!(!FontStyle::default().is_underlined());
        for underline in [
            Underline::Single,
            Underline::Double,
            Underline::SingleAccounting,
            Underline::DoubleAccounting,
        ] {
            let font = FontStyle { bold: false, underline };
            assert!(font.is_underlined(), "{underline:?}");
        }
    }
}
