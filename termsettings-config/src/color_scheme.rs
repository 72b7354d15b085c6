//! Color scheme definitions referenced by name from profiles.

use serde::{Deserialize, Serialize};

/// Name of the scheme every profile falls back to when its scheme reference
/// does not resolve. The embedded defaults document always defines it.
pub const FALLBACK_SCHEME_NAME: &str = "Campbell";

/// Error returned when a color string is not of the form `#RRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color '{0}': expected #RRGGBB")]
pub struct ColorParseError(pub String);

/// A color in RGB format, serialized as `#RRGGBB`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is required, hex is case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.is_ascii())
            .ok_or_else(|| ColorParseError(s.to_string()))?;
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError(s.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn as_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// A named palette: 16 ANSI colors plus foreground/background.
///
/// Schemes are immutable once the settings documents are loaded. Missing
/// colors in a document entry take the Campbell palette values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorScheme {
    pub name: String,
    pub foreground: Color,
    pub background: Color,
    pub cursor_color: Color,
    pub selection_background: Color,

    // ANSI colors (0-15)
    pub black: Color,
    pub red: Color,
    pub green: Color,
    pub yellow: Color,
    pub blue: Color,
    pub purple: Color,
    pub cyan: Color,
    pub white: Color,
    pub bright_black: Color,
    pub bright_red: Color,
    pub bright_green: Color,
    pub bright_yellow: Color,
    pub bright_blue: Color,
    pub bright_purple: Color,
    pub bright_cyan: Color,
    pub bright_white: Color,
}

impl ColorScheme {
    /// The built-in fallback palette.
    pub fn campbell() -> Self {
        Self {
            name: FALLBACK_SCHEME_NAME.to_string(),
            foreground: Color::new(204, 204, 204),
            background: Color::new(12, 12, 12),
            cursor_color: Color::new(255, 255, 255),
            selection_background: Color::new(255, 255, 255),
            black: Color::new(12, 12, 12),
            red: Color::new(197, 15, 31),
            green: Color::new(19, 161, 14),
            yellow: Color::new(193, 156, 0),
            blue: Color::new(0, 55, 218),
            purple: Color::new(136, 23, 152),
            cyan: Color::new(58, 150, 221),
            white: Color::new(204, 204, 204),
            bright_black: Color::new(118, 118, 118),
            bright_red: Color::new(231, 72, 86),
            bright_green: Color::new(22, 198, 12),
            bright_yellow: Color::new(249, 241, 165),
            bright_blue: Color::new(59, 120, 255),
            bright_purple: Color::new(180, 0, 158),
            bright_cyan: Color::new(97, 214, 214),
            bright_white: Color::new(242, 242, 242),
        }
    }

    /// The 16-entry ANSI color table in index order.
    pub fn color_table(&self) -> [Color; 16] {
        [
            self.black,
            self.red,
            self.green,
            self.yellow,
            self.blue,
            self.purple,
            self.cyan,
            self.white,
            self.bright_black,
            self.bright_red,
            self.bright_green,
            self.bright_yellow,
            self.bright_blue,
            self.bright_purple,
            self.bright_cyan,
            self.bright_white,
        ]
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            name: String::new(),
            ..Self::campbell()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex_roundtrip() {
        let color = Color::from_hex("#0c0C0c").expect("valid hex");
        assert_eq!(color, Color::new(12, 12, 12));
        assert_eq!(color.to_hex(), "#0C0C0C");
    }

    #[test]
    fn test_color_rejects_malformed() {
        assert!(Color::from_hex("0C0C0C").is_err());
        assert!(Color::from_hex("#0C0C0").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
        assert!(Color::from_hex("#ÄÄÄ").is_err());
    }

    #[test]
    fn test_partial_scheme_inherits_campbell_colors() {
        let json = r##"{ "name": "Mine", "background": "#102030" }"##;
        let scheme: ColorScheme = serde_json::from_str(json).expect("deserialize");
        assert_eq!(scheme.name, "Mine");
        assert_eq!(scheme.background, Color::new(16, 32, 48));
        assert_eq!(scheme.red, ColorScheme::campbell().red);
    }

    #[test]
    fn test_color_table_order() {
        let scheme = ColorScheme::campbell();
        let table = scheme.color_table();
        assert_eq!(table[0], scheme.black);
        assert_eq!(table[5], scheme.purple);
        assert_eq!(table[15], scheme.bright_white);
    }
}
