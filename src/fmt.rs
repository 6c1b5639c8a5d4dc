//! Shared formatting utilities for console output

use console::Emoji;

/// Eye emoji for vision profile sections
pub const EYE: Emoji = Emoji("👁️ ", "*");

/// Glasses emoji for prescription data
pub const GLASSES: Emoji = Emoji("👓", ">");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Sparkles emoji for recommendations
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Palette emoji for theme suggestions
pub const PALETTE: Emoji = Emoji("🎨", "~");

/// Lightbulb emoji for explanations
pub const LIGHTBULB: Emoji = Emoji("💡", "!");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️ ", "i");

/// Format a diopter value with explicit sign, e.g. "-4.00 D" / "+2.25 D"
///
/// # Examples
///
/// ```
/// use zed_vision::fmt::format_diopters;
///
/// assert_eq!(format_diopters(-4.0), "-4.00 D");
/// assert_eq!(format_diopters(2.25), "+2.25 D");
/// assert_eq!(format_diopters(0.0), "+0.00 D");
/// ```
pub fn format_diopters(value: f64) -> String {
    format!("{:+.2} D", value)
}

/// Format a pixel measurement without trailing zeros, e.g. "0.4px"
///
/// # Examples
///
/// ```
/// use zed_vision::fmt::format_px;
///
/// assert_eq!(format_px(0.4), "0.4px");
/// assert_eq!(format_px(16.0), "16px");
/// ```
pub fn format_px(value: f64) -> String {
    format!("{}px", value)
}
