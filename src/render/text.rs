//! Settings snippet serialization
//!
//! Renders a [`ZedConfig`] as the exact text users paste into Zed's
//! settings.json, including the letter-spacing workaround comment. Key names
//! and layout are reproduced bit-for-bit for compatibility with Zed.

use crate::engine::Recommendations;

use super::{LineHeight, ZedConfig};

/// Format a float the way settings.json expects it: no trailing zeros,
/// whole numbers without a decimal point (1.7 -> "1.7", 2.0 -> "2")
fn format_number(value: f64) -> String {
    format!("{}", value)
}

/// Render the pasteable settings.json snippet
///
/// Layout: a header comment; if letter spacing was requested, a comment
/// block noting Zed's missing letter_spacing support and listing up to the
/// first three font recommendations as a workaround; then the brace-delimited
/// settings block. Every field except the last carries a trailing comma.
pub fn to_text(config: &ZedConfig, recommendations: &Recommendations) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("// Add to ~/.config/zed/settings.json".to_string());

    if recommendations.letter_spacing > 0.0 {
        lines.push(String::new());
        lines.push(format!(
            "// Note: Zed doesn't support letter_spacing (would need {}px)",
            format_number(recommendations.letter_spacing)
        ));
        lines.push("// Consider using a font with wider character spacing:".to_string());
        for font in recommendations.font_recommendations.iter().take(3) {
            lines.push(format!("//   • {}", font));
        }
    }

    lines.push(String::new());
    lines.push("{".to_string());
    lines.push(format!(
        "  \"buffer_font_size\": {},",
        config.buffer_font_size
    ));

    let line_height_value = match config.buffer_line_height {
        LineHeight::Comfortable => "\"comfortable\"".to_string(),
        LineHeight::Custom(value) => format!("{{\"custom\":{}}}", format_number(value)),
    };
    lines.push(format!("  \"buffer_line_height\": {},", line_height_value));

    lines.push(format!(
        "  \"buffer_font_weight\": {},",
        config.buffer_font_weight
    ));
    lines.push(format!(
        "  \"cursor_shape\": \"{}\"",
        config.cursor_shape.as_str()
    ));

    if let Some(family) = &config.buffer_font_family {
        append_comma(&mut lines);
        lines.push(format!("  \"buffer_font_family\": \"{}\"", family));
    }

    if let Some(theme) = &config.theme {
        append_comma(&mut lines);
        lines.push(format!("  \"theme\": \"{}\"", theme));
    }

    lines.push("}".to_string());

    lines.join("\n")
}

/// A field turned out not to be final after all; give the previous line its
/// trailing comma
fn append_comma(lines: &mut [String]) {
    if let Some(last) = lines.last_mut() {
        last.push(',');
    }
}
