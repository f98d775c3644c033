//! Color representation

use std::fmt;

/// Color representation
///
/// Supports RGB, ARGB and theme colors. Legacy indexed colors are resolved
/// to RGB by the decoder before they reach this model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Automatic/default color (i.e. "not set")
    #[default]
    Auto,

    /// RGB color (no alpha)
    Rgb { r: u8, g: u8, b: u8 },

    /// ARGB color with alpha channel
    Argb { a: u8, r: u8, g: u8, b: u8 },

    /// Theme color with tint
    ///
    /// Theme indices: 0/1 = background/text 1, 2/3 = background/text 2,
    /// 4-9 = accents 1-6.
    Theme {
        /// Theme color index (0-9)
        index: u8,
        /// Tint as a percentage (-100 to 100)
        tint: i8,
    },
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create an ARGB color
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color::Argb { a, r, g, b }
    }

    /// Create a theme color
    pub const fn theme(index: u8, tint: i8) -> Self {
        Color::Theme { index, tint }
    }

    /// Create from a hex string ("#RRGGBB", "RRGGBB" or "AARRGGBB")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();

        match hex.len() {
            6 => Some(Color::Rgb {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
            }),
            8 => Some(Color::Argb {
                a: byte(0)?,
                r: byte(2)?,
                g: byte(4)?,
                b: byte(6)?,
            }),
            _ => None,
        }
    }

    /// Convert to an 8-character ARGB hex string, e.g. "FFFF0000" for opaque red
    pub fn to_argb_hex(&self) -> String {
        let (a, (r, g, b)) = match self {
            Color::Argb { a, r, g, b } => (*a, (*r, *g, *b)),
            other => (0xFF, other.to_rgb()),
        };
        format!("{a:02X}{r:02X}{g:02X}{b:02X}")
    }

    /// Convert to RGB tuple
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Auto => (0, 0, 0),
            Color::Rgb { r, g, b } | Color::Argb { r, g, b, .. } => (*r, *g, *b),
            Color::Theme { index, tint } => Self::apply_tint(Self::theme_to_rgb(*index), *tint),
        }
    }

    /// Check if color is automatic/default
    pub fn is_auto(&self) -> bool {
        matches!(self, Color::Auto)
    }

    /// Default Office theme palette
    fn theme_to_rgb(index: u8) -> (u8, u8, u8) {
        match index {
            0 => (255, 255, 255),
            2 => (238, 236, 225),
            3 => (31, 73, 125),
            4 => (79, 129, 189),
            5 => (192, 80, 77),
            6 => (155, 187, 89),
            7 => (128, 100, 162),
            8 => (75, 172, 198),
            9 => (247, 150, 70),
            _ => (0, 0, 0),
        }
    }

    fn apply_tint(color: (u8, u8, u8), tint: i8) -> (u8, u8, u8) {
        let tint = f64::from(tint) / 100.0;
        let apply = |c: u8| -> u8 {
            let c = f64::from(c);
            let shaded = if tint < 0.0 {
                c * (1.0 + tint)
            } else {
                c + (255.0 - c) * tint
            };
            shaded.round().clamp(0.0, 255.0) as u8
        };
        (apply(color.0), apply(color.1), apply(color.2))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Auto => write!(f, "auto"),
            _ => write!(f, "#{}", self.to_argb_hex()),
        }
    }
}
