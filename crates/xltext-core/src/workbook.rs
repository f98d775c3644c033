//! Workbook type - the decoded document

use crate::error::{Error, Result};
use crate::worksheet::Worksheet;
use crate::MAX_SHEET_NAME_LEN;

/// A decoded workbook: worksheets in source order
#[derive(Debug, Default)]
pub struct Workbook {
    worksheets: Vec<Worksheet>,
}

impl Workbook {
    /// Create an empty workbook with no worksheets
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Check if the workbook has no worksheets
    pub fn is_empty(&self) -> bool {
        self.worksheets.is_empty()
    }

    /// Get a worksheet by index
    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.worksheets.get(index)
    }

    /// Get a mutable worksheet by index
    pub fn worksheet_mut(&mut self, index: usize) -> Option<&mut Worksheet> {
        self.worksheets.get_mut(index)
    }

    /// Get a worksheet by name
    pub fn worksheet_by_name(&self, name: &str) -> Result<&Worksheet> {
        self.worksheets
            .iter()
            .find(|ws| ws.name() == name)
            .ok_or_else(|| Error::SheetNotFound(name.to_string()))
    }

    /// Iterate over all worksheets in source order
    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.worksheets.iter()
    }

    /// Add a new empty worksheet and return its index
    pub fn add_worksheet_with_name(&mut self, name: &str) -> Result<usize> {
        self.push_worksheet(Worksheet::new(name))
    }

    /// Append a fully decoded worksheet and return its index
    pub fn push_worksheet(&mut self, worksheet: Worksheet) -> Result<usize> {
        self.validate_sheet_name(worksheet.name())?;
        self.worksheets.push(worksheet);
        Ok(self.worksheets.len() - 1)
    }

    fn validate_sheet_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {MAX_SHEET_NAME_LEN} characters)"
            )));
        }

        const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
        if let Some(c) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name cannot contain '{c}'"
            )));
        }

        let lower = name.to_lowercase();
        if self.worksheets.iter().any(|ws| ws.name().to_lowercase() == lower) {
            return Err(Error::DuplicateSheetName(name.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_worksheets_in_order() {
        let mut wb = Workbook::new();
        assert!(wb.is_empty());
        assert_eq!(wb.add_worksheet_with_name("First").unwrap(), 0);
        assert_eq!(wb.add_worksheet_with_name("Second").unwrap(), 1);

        let names: Vec<&str> = wb.worksheets().map(Worksheet::name).collect();
        assert_eq!(names, vec!["First", "Second"]);
        assert!(wb.worksheet_by_name("Second").is_ok());
        assert!(matches!(
            wb.worksheet_by_name("Third"),
            Err(Error::SheetNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_sheet_names() {
        let mut wb = Workbook::new();
        wb.add_worksheet_with_name("Data").unwrap();

        assert!(matches!(
            wb.add_worksheet_with_name("data"),
            Err(Error::DuplicateSheetName(_))
        ));
        assert!(matches!(
            wb.add_worksheet_with_name(""),
            Err(Error::InvalidSheetName(_))
        ));
        assert!(matches!(
            wb.add_worksheet_with_name("a/b"),
            Err(Error::InvalidSheetName(_))
        ));
        assert!(wb.add_worksheet_with_name(&"x".repeat(32)).is_err());
    }
}
