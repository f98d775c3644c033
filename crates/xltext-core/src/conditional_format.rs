//! Conditional formatting
//!
//! Rules arrive from the decoder already evaluated: a rule's `ranges` list
//! the cells it matched, so lookup by position is a plain range test.
//!
//! ```rust
//! use xltext_core::{CellRange, Color, ConditionalFormatRule, Style};
//!
//! let rule = ConditionalFormatRule::cell_is_greater_than("100")
//!     .with_range(CellRange::parse("A1:A10").unwrap())
//!     .with_format(Style::new().fill_color(Color::rgb(255, 199, 206)));
//!
//! assert_eq!(rule.background_color(), Some(Color::rgb(255, 199, 206)));
//! ```

use crate::cell::CellRange;
use crate::style::{Color, Style};

/// A conditional formatting rule
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalFormatRule {
    /// Rule type
    pub rule_type: CfRuleType,
    /// Cells this rule matched
    pub ranges: Vec<CellRange>,
    /// Priority (lower = higher priority)
    pub priority: u32,
    /// Differential format applied when the rule matches
    pub format: Option<Style>,
}

impl Default for ConditionalFormatRule {
    fn default() -> Self {
        Self {
            rule_type: CfRuleType::Expression {
                formula: String::new(),
            },
            ranges: Vec::new(),
            priority: 1,
            format: None,
        }
    }
}

impl ConditionalFormatRule {
    /// Create a new conditional format rule
    pub fn new(rule_type: CfRuleType) -> Self {
        Self {
            rule_type,
            ..Self::default()
        }
    }

    /// Highlight cells greater than a value
    pub fn cell_is_greater_than(value: impl Into<String>) -> Self {
        Self::new(CfRuleType::CellIs {
            operator: CfOperator::GreaterThan,
            formula1: value.into(),
            formula2: None,
        })
    }

    /// Highlight cells equal to a value
    pub fn cell_is_equal_to(value: impl Into<String>) -> Self {
        Self::new(CfRuleType::CellIs {
            operator: CfOperator::Equal,
            formula1: value.into(),
            formula2: None,
        })
    }

    /// Highlight cells where formula evaluates to TRUE
    pub fn expression(formula: impl Into<String>) -> Self {
        Self::new(CfRuleType::Expression {
            formula: formula.into(),
        })
    }

    /// Create a 2-color scale (min to max)
    pub fn color_scale_2(min_color: Color, max_color: Color) -> Self {
        Self::new(CfRuleType::ColorScale {
            colors: vec![
                CfColorValue::new(CfValueType::Min, None, min_color),
                CfColorValue::new(CfValueType::Max, None, max_color),
            ],
        })
    }

    /// Create a 3-color scale (min, mid, max)
    pub fn color_scale_3(min_color: Color, mid_color: Color, max_color: Color) -> Self {
        Self::new(CfRuleType::ColorScale {
            colors: vec![
                CfColorValue::new(CfValueType::Min, None, min_color),
                CfColorValue::new(CfValueType::Percentile, Some("50".to_string()), mid_color),
                CfColorValue::new(CfValueType::Max, None, max_color),
            ],
        })
    }

    /// Create a data bar
    pub fn data_bar(color: Color) -> Self {
        Self::new(CfRuleType::DataBar { color })
    }

    /// Add a cell range to this rule
    pub fn with_range(mut self, range: CellRange) -> Self {
        self.ranges.push(range);
        self
    }

    /// Set the differential format
    pub fn with_format(mut self, style: Style) -> Self {
        self.format = Some(style);
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Check if this rule applies to a specific cell
    pub fn applies_to(&self, row: u32, col: u16) -> bool {
        self.ranges.iter().any(|r| r.contains(row, col))
    }

    /// The solid background this rule paints through its differential format
    pub fn background_color(&self) -> Option<Color> {
        self.format.as_ref()?.fill.background_color()
    }

    /// Scale colors in rule order; empty for rules that are not color scales
    pub fn scale_colors(&self) -> impl Iterator<Item = Color> + '_ {
        let colors: &[CfColorValue] = match &self.rule_type {
            CfRuleType::ColorScale { colors } => colors.as_slice(),
            _ => &[],
        };
        colors.iter().map(|c| c.color)
    }

    /// Check whether this rule is a color scale
    pub fn is_color_scale(&self) -> bool {
        matches!(self.rule_type, CfRuleType::ColorScale { .. })
    }
}

/// Conditional formatting rule types
#[derive(Debug, Clone, PartialEq)]
pub enum CfRuleType {
    /// Compare cell value against one or two values
    CellIs {
        operator: CfOperator,
        formula1: String,
        formula2: Option<String>,
    },

    /// Formula returning TRUE/FALSE
    Expression { formula: String },

    /// Gradient of colors across the value range
    ColorScale { colors: Vec<CfColorValue> },

    /// In-cell bar proportional to the value
    DataBar { color: Color },
}

/// Comparison operators for CellIs rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CfOperator {
    /// Between formula1 and formula2
    #[default]
    Between,
    /// Not between formula1 and formula2
    NotBetween,
    /// Equal to formula1
    Equal,
    /// Not equal to formula1
    NotEqual,
    /// Greater than formula1
    GreaterThan,
    /// Less than formula1
    LessThan,
}

/// A color scale stop
#[derive(Debug, Clone, PartialEq)]
pub struct CfColorValue {
    /// How the threshold is computed
    pub value_type: CfValueType,
    /// Threshold value (for number/percent/percentile/formula types)
    pub value: Option<String>,
    /// Color at this stop
    pub color: Color,
}

impl CfColorValue {
    /// Create a new color scale stop
    pub fn new(value_type: CfValueType, value: Option<String>, color: Color) -> Self {
        Self {
            value_type,
            value,
            color,
        }
    }
}

/// Threshold types for color scale stops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CfValueType {
    /// Lowest value in range
    Min,
    /// Highest value in range
    Max,
    /// Literal number
    Number,
    /// Percentage of the range
    Percent,
    /// Percentile of the values
    Percentile,
    /// Formula result
    Formula,
}
