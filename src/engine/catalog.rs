//! Static font and theme suggestion tables
//!
//! Every suggestion list the engine emits is a fixed constant keyed by the
//! condition or color-vision variant that triggers it. Keeping them in one
//! lookup table (rather than inline literals inside the rules) makes the
//! catalog testable on its own and keeps the rule bodies about merging, not
//! content.

use crate::profile::ColorVision;

use super::ThemeRecommendation;

/// Monospace fonts suggested whenever the astigmatism rule fires
///
/// Each entry is "<family> - <why>"; the renderer uses the text before
/// " - " as the `buffer_font_family` value.
pub const ASTIGMATISM_FONTS: [&str; 4] = [
    "IBM Plex Mono - excellent character distinction",
    "JetBrains Mono - wider spacing, clear shapes",
    "Fira Code - good default spacing",
    "Input Mono - customizable width variants",
];

/// (name, reason, zed theme id) rows for the light-sensitivity rule
const LIGHT_SENSITIVITY_THEMES: [(&str, &str, &str); 2] = [
    (
        "Solarized Dark",
        "Lower contrast, easier on sensitive eyes",
        "Solarized Dark",
    ),
    (
        "Gruvbox Dark",
        "Warm tones, reduced blue light",
        "Gruvbox Dark",
    ),
];

const DEUTERANOPIA_THEMES: [(&str, &str, &str); 4] = [
    (
        "Solarized Dark",
        "Uses blue/yellow contrast instead of red/green",
        "Solarized Dark",
    ),
    ("One Dark", "Good blue/orange/purple separation", "One Dark"),
    (
        "GitHub Dark",
        "Distinct hues beyond red/green spectrum",
        "GitHub Dark",
    ),
    (
        "Catppuccin Macchiato",
        "High contrast with colorblind-friendly palette",
        "Catppuccin Macchiato",
    ),
];

const PROTANOPIA_THEMES: [(&str, &str, &str); 2] = [
    (
        "Solarized Dark",
        "Designed with colorblind users in mind",
        "Solarized Dark",
    ),
    ("Nord", "Cool blue tones, minimal red reliance", "Nord"),
];

const TRITANOPIA_THEMES: [(&str, &str, &str); 2] = [
    (
        "Monokai",
        "Strong warm colors, less blue dependency",
        "Monokai",
    ),
    ("Dracula", "Pink/green/orange palette", "Dracula"),
];

const ACHROMATOPSIA_THEMES: [(&str, &str, &str); 1] = [(
    "High Contrast",
    "Maximum contrast, works without color",
    "Ayu Dark",
)];

fn to_recommendations(rows: &[(&str, &str, &str)]) -> Vec<ThemeRecommendation> {
    rows.iter()
        .map(|(name, reason, zed_name)| ThemeRecommendation {
            name: (*name).to_string(),
            reason: (*reason).to_string(),
            zed_name: (*zed_name).to_string(),
        })
        .collect()
}

/// Theme suggestions for the light-sensitivity rule, in emission order
pub fn light_sensitivity_themes() -> Vec<ThemeRecommendation> {
    to_recommendations(&LIGHT_SENSITIVITY_THEMES)
}

/// Theme suggestions for a color-vision variant, in emission order
///
/// `ColorVision::None` has no suggestions.
pub fn color_vision_themes(color_vision: ColorVision) -> Vec<ThemeRecommendation> {
    match color_vision {
        ColorVision::None => Vec::new(),
        ColorVision::Deuteranopia => to_recommendations(&DEUTERANOPIA_THEMES),
        ColorVision::Protanopia => to_recommendations(&PROTANOPIA_THEMES),
        ColorVision::Tritanopia => to_recommendations(&TRITANOPIA_THEMES),
        ColorVision::Achromatopsia => to_recommendations(&ACHROMATOPSIA_THEMES),
    }
}

/// Explanation text emitted alongside a color-vision variant's themes
pub fn color_vision_explanation(color_vision: ColorVision) -> Option<&'static str> {
    match color_vision {
        ColorVision::None => None,
        ColorVision::Deuteranopia => Some(
            "Deuteranopia (green-blind): Recommending themes that avoid red/green distinction for syntax highlighting",
        ),
        ColorVision::Protanopia => {
            Some("Protanopia (red-blind): Recommending themes with strong blue/yellow contrast")
        }
        ColorVision::Tritanopia => {
            Some("Tritanopia (blue-blind): Recommending themes with strong red/green contrast")
        }
        ColorVision::Achromatopsia => Some(
            "Achromatopsia (complete color blindness): Recommending high-contrast themes that work in grayscale",
        ),
    }
}
