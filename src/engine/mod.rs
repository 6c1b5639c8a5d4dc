//! Recommendation engine
//!
//! A deterministic, side-effect-free fold of a fixed rule list over the
//! user's vision profile. Identical inputs always yield identical output,
//! including explanation text and ordering.
//!
//! # Examples
//!
//! ```
//! use zed_vision::engine;
//! use zed_vision::profile::{
//!     BaselineSettings, ColorVision, Prescription, VisualConditions,
//! };
//!
//! let conditions = VisualConditions {
//!     myopia: true,
//!     ..Default::default()
//! };
//!
//! let rec = engine::evaluate(
//!     &conditions,
//!     ColorVision::None,
//!     &Prescription::default(),
//!     &BaselineSettings::default(),
//! );
//!
//! assert_eq!(rec.font_size, 16);
//! assert_eq!(rec.cursor_shape, engine::CursorShape::Block);
//! assert_eq!(rec.explanations.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::profile::{BaselineSettings, ColorVision, Prescription, VisualConditions};

pub mod catalog;
mod rules;

pub use rules::Merge;

/// Text-caret style in Zed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorShape {
    /// Thin vertical bar (Zed's default)
    #[default]
    Bar,
    /// Filled block covering the character cell
    Block,
    /// Underline beneath the character
    Underline,
}

impl CursorShape {
    /// The string Zed expects in settings.json
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Block => "block",
            Self::Underline => "underline",
        }
    }
}

/// A suggested Zed theme with the reason it helps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeRecommendation {
    /// Display name
    pub name: String,
    /// Why this theme suits the triggering condition
    pub reason: String,
    /// Theme id as Zed's `theme` setting expects it
    pub zed_name: String,
}

/// The engine's output for one evaluation
///
/// Numeric fields are floors merged monotonically across rules (font weight
/// excepted, see the light-sensitivity rule); list fields are append-only in
/// rule evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    /// Recommended buffer font size in px
    pub font_size: u32,
    /// Recommended buffer line height, rounded to one decimal
    pub line_height: f64,
    /// Recommended buffer font weight
    pub font_weight: u32,
    /// Recommended cursor shape
    pub cursor_shape: CursorShape,
    /// Desired extra letter spacing in px; 0 when no spacing rule fired.
    /// Zed has no native setting for this, so the renderer surfaces it as a
    /// comment plus font suggestions.
    pub letter_spacing: f64,
    /// One human-readable line per fired rule branch, in evaluation order
    pub explanations: Vec<String>,
    /// Suggested monospace fonts ("<family> - <why>"), in emission order
    pub font_recommendations: Vec<String>,
    /// Suggested themes, in emission order (first one wins in the config)
    pub theme_recommendations: Vec<ThemeRecommendation>,
}

/// Evaluate the rule set against one vision profile
///
/// Pure and total: malformed prescription text degrades to 0 and out-of-range
/// baselines simply propagate as floors. The output is normalized (font size
/// to the nearest integer, line height to one decimal) and the cursor shape
/// defaults to `bar` when no rule chose one.
pub fn evaluate(
    conditions: &VisualConditions,
    color_vision: ColorVision,
    prescription: &Prescription,
    baseline: &BaselineSettings,
) -> Recommendations {
    let ctx = rules::EvalContext {
        conditions,
        color_vision,
        baseline,
        avg_sphere: prescription.avg_sphere(),
        avg_cylinder: prescription.avg_cylinder(),
        astigmatism_inferred: prescription.indicates_astigmatism(),
    };

    let acc = rules::apply_all(&ctx);

    Recommendations {
        font_size: acc.font_size.round() as u32,
        line_height: (acc.line_height * 10.0).round() / 10.0,
        font_weight: acc.font_weight,
        cursor_shape: acc.cursor_shape.unwrap_or_default(),
        letter_spacing: acc.letter_spacing,
        explanations: acc.explanations,
        font_recommendations: acc.font_recommendations,
        theme_recommendations: acc.theme_recommendations,
    }
}
