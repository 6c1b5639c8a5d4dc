#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! zed-vision library
//!
//! Computes personalized Zed editor display settings from self-reported
//! visual conditions, optional eyeglass prescription values and the user's
//! current settings. The core is a deterministic, pure rule engine plus a
//! renderer that emits a pasteable settings.json snippet; it can be used
//! programmatically in addition to the CLI interface.
//!
//! # Basic Example
//!
//! ```
//! use zed_vision::engine;
//! use zed_vision::profile::{
//!     BaselineSettings, ColorVision, Prescription, VisualConditions,
//! };
//!
//! let conditions = VisualConditions {
//!     astigmatism: true,
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
//! assert_eq!(rec.letter_spacing, 0.4);
//! assert_eq!(rec.font_recommendations.len(), 4);
//! ```
//!
//! # Advanced Example: Prescription-driven Evaluation
//!
//! Prescription fields are free text and degrade to 0 when unparsable:
//!
//! ```
//! use zed_vision::engine::{self, CursorShape};
//! use zed_vision::profile::{
//!     BaselineSettings, ColorVision, Prescription, VisualConditions,
//! };
//!
//! let rx = Prescription {
//!     right_sphere: "-6.50".to_string(),
//!     left_sphere: "-6.00".to_string(),
//!     ..Prescription::default()
//! };
//!
//! let rec = engine::evaluate(
//!     &VisualConditions::default(),
//!     ColorVision::None,
//!     &rx,
//!     &BaselineSettings::default(),
//! );
//!
//! // High myopia: large font floor and a block cursor, no flag needed
//! assert_eq!(rec.font_size, 22);
//! assert_eq!(rec.cursor_shape, CursorShape::Block);
//! ```
//!
//! # Advanced Example: Rendering the Snippet
//!
//! ```
//! use zed_vision::engine;
//! use zed_vision::profile::{
//!     BaselineSettings, ColorVision, Prescription, VisualConditions,
//! };
//! use zed_vision::render::{self, ZedConfig};
//!
//! let conditions = VisualConditions {
//!     light_sensitivity: true,
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
//! let config = ZedConfig::from_recommendations(&rec);
//! let snippet = render::to_text(&config, &rec);
//! assert!(snippet.contains("\"theme\": \"Solarized Dark\""));
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Recommendation engine: the ordered rule fold
pub mod engine;
/// Error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Input types describing the user's vision profile
pub mod profile;
/// Zed settings.json rendering
pub mod render;
