//! Fill/background style types

use super::Color;

/// Fill style for cell background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillStyle {
    /// No fill (transparent)
    #[default]
    None,

    /// Solid color fill
    Solid { color: Color },

    /// Pattern fill
    Pattern {
        pattern: PatternType,
        foreground: Color,
        background: Color,
    },
}

impl FillStyle {
    /// Create a solid fill with the given color
    pub fn solid(color: Color) -> Self {
        FillStyle::Solid { color }
    }

    /// Create a pattern fill
    pub fn pattern(pattern: PatternType, foreground: Color, background: Color) -> Self {
        FillStyle::Pattern {
            pattern,
            foreground,
            background,
        }
    }

    /// Check if this is a "no fill"
    pub fn is_none(&self) -> bool {
        matches!(self, FillStyle::None)
    }

    /// The explicitly set foreground color, if any
    ///
    /// For a solid fill the foreground is the visible color; `Auto` counts as unset.
    pub fn foreground_color(&self) -> Option<Color> {
        let color = match self {
            FillStyle::None => return None,
            FillStyle::Solid { color } => *color,
            FillStyle::Pattern { foreground, .. } => *foreground,
        };
        (!color.is_auto()).then_some(color)
    }

    /// The background color a differential (conditional) format paints
    ///
    /// Differential fills store the visible color as background; a pattern
    /// without one falls back to its foreground.
    pub fn background_color(&self) -> Option<Color> {
        let color = match self {
            FillStyle::None => return None,
            FillStyle::Solid { color } => *color,
            FillStyle::Pattern {
                foreground,
                background,
                ..
            } => {
                if background.is_auto() {
                    *foreground
                } else {
                    *background
                }
            }
        };
        (!color.is_auto()).then_some(color)
    }
}

/// Pattern fill types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PatternType {
    /// No pattern
    #[default]
    None,
    /// Solid (100% foreground)
    Solid,
    /// 50% gray
    MediumGray,
    /// 75% gray
    DarkGray,
    /// 25% gray
    LightGray,
    /// 12.5% gray
    Gray125,
    /// 6.25% gray
    Gray0625,
}
