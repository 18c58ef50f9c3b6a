//! Theme and color palettes for Quasar
//!
//! Two themes cover the onboarding flow: the dark registration theme
//! (black background, dark gray inputs, Quasar blue accent) and the light
//! theme used by the inner screens.

use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as an RGB hex string (e.g., "#FFFFFF")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

// =============================================================================
// Brand Colors
// =============================================================================

/// Quasar brand colors
pub mod brand {
    /// Primary action blue (buttons, links)
    pub const PRIMARY: &str = "#0044CC";

    /// Onboarding background black
    pub const BLACK: &str = "#000000";

    /// Input surface gray
    pub const SURFACE_DARK: &str = "#333333";

    /// Light screen background
    pub const BACKGROUND_LIGHT: &str = "#F5F5F5";

    /// Pure white
    pub const WHITE: &str = "#FFFFFF";

    /// Validation error red
    pub const ERROR_RED: &str = "#FF0000";
}

// =============================================================================
// Themes
// =============================================================================

/// Available theme names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Dark theme used by the registration screen
    #[default]
    Dark,
    /// Light theme used by the login and welcome screens
    Light,
}

/// Semantic colors for a theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Screen background
    pub background: Color,
    /// Input and card surface
    pub surface: Color,
    /// Primary text
    pub text_primary: Color,
    /// Secondary text (subtitles, footers)
    pub text_secondary: Color,
    /// Input placeholder text
    pub placeholder: Color,
    /// Accent for buttons and links
    pub accent: Color,
    /// Inline validation error text
    pub error: Color,
}

/// A complete theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Semantic colors
    pub colors: ThemeColors,
}

impl Theme {
    /// Whether this is a dark theme
    pub fn is_dark(&self) -> bool {
        self.name == ThemeName::Dark
    }
}

/// The dark registration theme
pub fn dark_theme() -> Theme {
    Theme {
        name: ThemeName::Dark,
        colors: ThemeColors {
            background: brand::BLACK.to_string(),
            surface: brand::SURFACE_DARK.to_string(),
            text_primary: brand::WHITE.to_string(),
            text_secondary: "#AAAAAA".to_string(),
            placeholder: "#999999".to_string(),
            accent: brand::PRIMARY.to_string(),
            error: brand::ERROR_RED.to_string(),
        },
    }
}

/// The light theme for the inner screens
pub fn light_theme() -> Theme {
    Theme {
        name: ThemeName::Light,
        colors: ThemeColors {
            background: brand::BACKGROUND_LIGHT.to_string(),
            surface: brand::WHITE.to_string(),
            text_primary: "#333333".to_string(),
            text_secondary: "#555555".to_string(),
            placeholder: "#999999".to_string(),
            accent: brand::PRIMARY.to_string(),
            error: brand::ERROR_RED.to_string(),
        },
    }
}

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Dark => dark_theme(),
        ThemeName::Light => light_theme(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#0044CC"), Some((0, 68, 204)));
        assert_eq!(parse_hex_color("333333"), Some((51, 51, 51)));
        assert_eq!(parse_hex_color("#12"), None);
    }

    #[test]
    fn test_rgb_to_hex_round_trip() {
        let hex = rgb_to_hex(0, 68, 204);
        assert_eq!(hex, "#0044CC");
        assert_eq!(parse_hex_color(&hex), Some((0, 68, 204)));
    }

    #[test]
    fn test_themes() {
        let dark = get_theme(ThemeName::Dark);
        assert!(dark.is_dark());
        assert_eq!(dark.colors.background, "#000000");

        let light = get_theme(ThemeName::Light);
        assert!(!light.is_dark());
        assert_eq!(light.colors.background, "#F5F5F5");
        // Accent is shared across themes
        assert_eq!(light.colors.accent, dark.colors.accent);
    }

    #[test]
    fn test_theme_serde() {
        let theme = dark_theme();
        let json = serde_json::to_string(&theme).unwrap();
        let parsed: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, theme);
    }
}
