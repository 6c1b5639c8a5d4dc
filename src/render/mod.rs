//! Zed settings.json rendering
//!
//! Two pure transforms: [`ZedConfig::from_recommendations`] picks the
//! concrete settings values out of an engine result, and [`to_text`] turns
//! them into the snippet users paste into `~/.config/zed/settings.json`.
//! Both are total; nothing here can fail.
//!
//! # Examples
//!
//! ```
//! use zed_vision::engine;
//! use zed_vision::profile::{
//!     BaselineSettings, ColorVision, Prescription, VisualConditions,
//! };
//! use zed_vision::render::{self, ZedConfig};
//!
//! let rec = engine::evaluate(
//!     &VisualConditions::default(),
//!     ColorVision::None,
//!     &Prescription::default(),
//!     &BaselineSettings::default(),
//! );
//!
//! let config = ZedConfig::from_recommendations(&rec);
//! let snippet = render::to_text(&config, &rec);
//! assert!(snippet.contains("\"buffer_line_height\": \"comfortable\""));
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::engine::{CursorShape, Recommendations};

mod text;

pub use text::to_text;

/// Zed's `buffer_line_height` setting: either the `comfortable` keyword
/// (exactly 1.5) or a custom numeric wrapper
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineHeight {
    /// The `"comfortable"` keyword, Zed's name for 1.5
    Comfortable,
    /// `{"custom": <value>}` for any other line height
    Custom(f64),
}

impl Serialize for LineHeight {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Comfortable => serializer.serialize_str("comfortable"),
            Self::Custom(value) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("custom", value)?;
                map.end()
            }
        }
    }
}

/// The settings subset zed-vision emits, keyed exactly as Zed expects
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZedConfig {
    /// `buffer_font_size` in px
    pub buffer_font_size: u32,
    /// `buffer_line_height` keyword or custom wrapper
    pub buffer_line_height: LineHeight,
    /// `buffer_font_weight`
    pub buffer_font_weight: u32,
    /// `cursor_shape`
    pub cursor_shape: CursorShape,
    /// `buffer_font_family`, present only when a font was recommended
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer_font_family: Option<String>,
    /// `theme`, present only when a theme was recommended
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl ZedConfig {
    /// Build the settings object from an engine result
    ///
    /// Font family comes from the first font recommendation (text before its
    /// " - " reason suffix); theme from the first theme recommendation's Zed
    /// id. First-wins means the engine's rule order decides which rule's
    /// suggestion lands in the config when several fired.
    pub fn from_recommendations(recommendations: &Recommendations) -> Self {
        let buffer_line_height = if recommendations.line_height == 1.5 {
            LineHeight::Comfortable
        } else {
            LineHeight::Custom(recommendations.line_height)
        };

        let buffer_font_family = recommendations
            .font_recommendations
            .first()
            .map(|entry| entry.split(" - ").next().unwrap_or(entry).to_string());

        let theme = recommendations
            .theme_recommendations
            .first()
            .map(|t| t.zed_name.clone());

        Self {
            buffer_font_size: recommendations.font_size,
            buffer_line_height,
            buffer_font_weight: recommendations.font_weight,
            cursor_shape: recommendations.cursor_shape,
            buffer_font_family,
            theme,
        }
    }
}
