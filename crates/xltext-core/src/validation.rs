//! Data validation
//!
//! Validation rules restrict what may be entered in a range of cells. The
//! text engine only surfaces explicit dropdown lists, but decoders hand over
//! every rule type so the lookup stays faithful to the source.
//!
//! ```rust
//! use xltext_core::{CellRange, DataValidation};
//!
//! let validation = DataValidation::list("\"Yes,No,Maybe\"")
//!     .with_range(CellRange::parse("A1:A10").unwrap());
//!
//! assert!(validation.applies_to(4, 0));
//! assert_eq!(
//!     validation.explicit_list_values(),
//!     Some(vec!["Yes".to_string(), "No".to_string(), "Maybe".to_string()])
//! );
//! ```

use crate::cell::CellRange;

/// Data validation rule for cells
#[derive(Debug, Clone, PartialEq)]
pub struct DataValidation {
    /// Type of validation
    pub validation_type: ValidationType,
    /// Cell ranges this validation applies to
    pub ranges: Vec<CellRange>,
    /// Allow blank/empty cells
    pub allow_blank: bool,
    /// Show dropdown for list validation
    pub show_dropdown: bool,
}

impl Default for DataValidation {
    fn default() -> Self {
        Self {
            validation_type: ValidationType::None,
            ranges: Vec::new(),
            allow_blank: true,
            show_dropdown: true,
        }
    }
}

impl DataValidation {
    /// Create a new data validation with no restrictions
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list validation (dropdown)
    ///
    /// `source` is either an inline list (`"Yes,No"`, optionally quoted the
    /// way XLSX stores it) or a reference such as `=Lists!$A$1:$A$5`.
    pub fn list(source: impl Into<String>) -> Self {
        Self {
            validation_type: ValidationType::List {
                source: source.into(),
            },
            ..Self::default()
        }
    }

    /// Create a whole number validation
    pub fn whole_number(operator: ValidationOperator, value1: impl Into<String>) -> Self {
        Self {
            validation_type: ValidationType::Whole {
                operator,
                value1: value1.into(),
                value2: None,
            },
            ..Self::default()
        }
    }

    /// Create a custom formula validation
    pub fn custom(formula: impl Into<String>) -> Self {
        Self {
            validation_type: ValidationType::Custom {
                formula: formula.into(),
            },
            ..Self::default()
        }
    }

    /// Add a cell range to this validation
    pub fn with_range(mut self, range: CellRange) -> Self {
        self.ranges.push(range);
        self
    }

    /// Check if this validation applies to a specific cell
    pub fn applies_to(&self, row: u32, col: u16) -> bool {
        self.ranges.iter().any(|r| r.contains(row, col))
    }

    /// The allowed values of an inline list, in declaration order
    ///
    /// Returns `None` for non-list rules and for lists sourced from a cell
    /// reference, which carry no explicit values.
    pub fn explicit_list_values(&self) -> Option<Vec<String>> {
        let ValidationType::List { source } = &self.validation_type else {
            return None;
        };
        let source = source.trim();
        if source.starts_with('=') {
            return None;
        }
        let inner = source
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(source);
        Some(inner.split(',').map(str::to_string).collect())
    }
}

/// Types of data validation
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ValidationType {
    /// No validation (any value allowed)
    #[default]
    None,

    /// Must be a whole number
    Whole {
        operator: ValidationOperator,
        value1: String,
        value2: Option<String>,
    },

    /// Must be from a list
    List {
        /// Either comma-separated values or a range reference
        source: String,
    },

    /// Custom formula validation
    Custom {
        /// Formula that returns TRUE/FALSE
        formula: String,
    },
}

/// Comparison operators for validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationOperator {
    /// Value must be between value1 and value2
    #[default]
    Between,
    /// Value must NOT be between value1 and value2
    NotBetween,
    /// Value must equal value1
    Equal,
    /// Value must NOT equal value1
    NotEqual,
    /// Value must be greater than value1
    GreaterThan,
    /// Value must be less than value1
    LessThan,
}
