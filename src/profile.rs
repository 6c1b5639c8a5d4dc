//! Input types describing the user's vision profile
//!
//! Everything the recommendation engine consumes lives here: the seven
//! self-reported condition flags, the color-vision type, the free-text
//! eyeglass prescription and the user's current editor settings.
//!
//! # Examples
//!
//! ```
//! use zed_vision::profile::{Condition, VisualConditions, Prescription};
//!
//! let conditions = VisualConditions::from_conditions(&[Condition::Myopia]);
//! assert!(conditions.myopia);
//! assert!(!conditions.astigmatism);
//!
//! // Prescription fields are free text; garbage degrades to 0, never errors.
//! let rx = Prescription {
//!     right_sphere: "-4.25".to_string(),
//!     left_sphere: "oops".to_string(),
//!     ..Prescription::default()
//! };
//! assert_eq!(rx.avg_sphere(), -2.125);
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ZedVisionError;

/// A single self-reported visual condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Condition {
    /// Nearsightedness
    Myopia,
    /// Farsightedness
    Hyperopia,
    /// Irregular cornea shape causing directional blur
    Astigmatism,
    /// Fatigue after long screen sessions
    EyeStrain,
    /// Double images or halo effects
    BlurGhosting,
    /// Discomfort from bright screens
    LightSensitivity,
    /// Dense text feels overwhelming
    VisualCrowding,
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "myopia" => Ok(Self::Myopia),
            "hyperopia" => Ok(Self::Hyperopia),
            "astigmatism" => Ok(Self::Astigmatism),
            "eye-strain" | "eyestrain" => Ok(Self::EyeStrain),
            "blur-ghosting" | "blurghosting" => Ok(Self::BlurGhosting),
            "light-sensitivity" | "lightsensitivity" => Ok(Self::LightSensitivity),
            "visual-crowding" | "visualcrowding" => Ok(Self::VisualCrowding),
            _ => Err(format!("Unknown condition: {}", s)),
        }
    }
}

impl Condition {
    /// All conditions, in the order the engine evaluates them
    pub fn all() -> Vec<Self> {
        vec![
            Self::Myopia,
            Self::Hyperopia,
            Self::Astigmatism,
            Self::EyeStrain,
            Self::BlurGhosting,
            Self::LightSensitivity,
            Self::VisualCrowding,
        ]
    }

    /// CLI flag value for this condition
    pub fn name(&self) -> &'static str {
        match self {
            Self::Myopia => "myopia",
            Self::Hyperopia => "hyperopia",
            Self::Astigmatism => "astigmatism",
            Self::EyeStrain => "eye-strain",
            Self::BlurGhosting => "blur-ghosting",
            Self::LightSensitivity => "light-sensitivity",
            Self::VisualCrowding => "visual-crowding",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Myopia => "Myopia",
            Self::Hyperopia => "Hyperopia",
            Self::Astigmatism => "Astigmatism",
            Self::EyeStrain => "Eye Strain",
            Self::BlurGhosting => "Blur / Ghosting",
            Self::LightSensitivity => "Light Sensitivity",
            Self::VisualCrowding => "Visual Crowding",
        }
    }

    /// Short description shown by `zed-vision conditions`
    pub fn description(&self) -> &'static str {
        match self {
            Self::Myopia => "Nearsightedness - difficulty seeing distant objects",
            Self::Hyperopia => "Farsightedness - difficulty focusing on close objects",
            Self::Astigmatism => "Blurred vision due to irregular cornea shape",
            Self::EyeStrain => "Fatigue after long screen sessions",
            Self::BlurGhosting => "Double images or halo effects",
            Self::LightSensitivity => "Discomfort from bright screens",
            Self::VisualCrowding => "Dense text feels overwhelming",
        }
    }
}

/// Complete set of condition flags for one evaluation
///
/// The flags are independent; any combination may be true at once. A missing
/// flag is simply false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualConditions {
    /// Nearsightedness
    pub myopia: bool,
    /// Farsightedness
    pub hyperopia: bool,
    /// Directional blur from irregular cornea shape
    pub astigmatism: bool,
    /// Screen fatigue
    pub eye_strain: bool,
    /// Double images / halos
    pub blur_ghosting: bool,
    /// Bright-screen discomfort
    pub light_sensitivity: bool,
    /// Dense text feels overwhelming
    pub visual_crowding: bool,
}

impl VisualConditions {
    /// Build a flag set from a list of conditions (duplicates are harmless)
    pub fn from_conditions(conditions: &[Condition]) -> Self {
        let mut flags = Self::default();
        for condition in conditions {
            flags.set(*condition);
        }
        flags
    }

    /// Set one condition flag
    pub fn set(&mut self, condition: Condition) {
        match condition {
            Condition::Myopia => self.myopia = true,
            Condition::Hyperopia => self.hyperopia = true,
            Condition::Astigmatism => self.astigmatism = true,
            Condition::EyeStrain => self.eye_strain = true,
            Condition::BlurGhosting => self.blur_ghosting = true,
            Condition::LightSensitivity => self.light_sensitivity = true,
            Condition::VisualCrowding => self.visual_crowding = true,
        }
    }

    /// True if no flag is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Color vision deficiency type (exactly one applies)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorVision {
    /// Normal color vision
    #[default]
    None,
    /// Green-blind (most common)
    Deuteranopia,
    /// Red-blind
    Protanopia,
    /// Blue-blind (rare)
    Tritanopia,
    /// Complete color blindness
    Achromatopsia,
}

impl FromStr for ColorVision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "deuteranopia" => Ok(Self::Deuteranopia),
            "protanopia" => Ok(Self::Protanopia),
            "tritanopia" => Ok(Self::Tritanopia),
            "achromatopsia" => Ok(Self::Achromatopsia),
            _ => Err(format!("Unknown color vision type: {}", s)),
        }
    }
}

impl ColorVision {
    /// All variants, `none` first
    pub fn all() -> Vec<Self> {
        vec![
            Self::None,
            Self::Deuteranopia,
            Self::Protanopia,
            Self::Tritanopia,
            Self::Achromatopsia,
        ]
    }

    /// CLI value for this variant
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Deuteranopia => "deuteranopia",
            Self::Protanopia => "protanopia",
            Self::Tritanopia => "tritanopia",
            Self::Achromatopsia => "achromatopsia",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "Normal Color Vision",
            Self::Deuteranopia => "Deuteranopia",
            Self::Protanopia => "Protanopia",
            Self::Tritanopia => "Tritanopia",
            Self::Achromatopsia => "Achromatopsia",
        }
    }

    /// Short description shown by `zed-vision conditions`
    pub fn description(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Deuteranopia => "Green-blind (most common)",
            Self::Protanopia => "Red-blind",
            Self::Tritanopia => "Blue-blind (rare)",
            Self::Achromatopsia => "Complete color blindness",
        }
    }
}

/// Eyeglass prescription as entered by the user
///
/// All six fields are free text. Empty or unparsable fields degrade to the
/// neutral value 0 rather than producing an error; 0 carries no
/// myopia/hyperopia/astigmatism signal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    /// Right eye sphere (diopters; negative = myopic, positive = hyperopic)
    pub right_sphere: String,
    /// Right eye cylinder (diopters)
    pub right_cylinder: String,
    /// Right eye axis (degrees, 0-180)
    pub right_axis: String,
    /// Left eye sphere (diopters)
    pub left_sphere: String,
    /// Left eye cylinder (diopters)
    pub left_cylinder: String,
    /// Left eye axis (degrees, 0-180)
    pub left_axis: String,
}

impl Prescription {
    /// Parse one field, degrading anything non-numeric (or non-finite) to 0
    fn value(field: &str) -> f64 {
        field
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    /// Mean of right/left sphere values
    pub fn avg_sphere(&self) -> f64 {
        (Self::value(&self.right_sphere) + Self::value(&self.left_sphere)) / 2.0
    }

    /// Mean of the absolute right/left cylinder values
    pub fn avg_cylinder(&self) -> f64 {
        (Self::value(&self.right_cylinder).abs() + Self::value(&self.left_cylinder).abs()) / 2.0
    }

    /// True if either axis is above 0 or either cylinder is non-zero
    pub fn indicates_astigmatism(&self) -> bool {
        Self::value(&self.right_axis) > 0.0
            || Self::value(&self.left_axis) > 0.0
            || Self::value(&self.right_cylinder) != 0.0
            || Self::value(&self.left_cylinder) != 0.0
    }
}

/// The user's current editor settings, used as the floor for recommendations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineSettings {
    /// Current buffer font size in px
    pub font_size: u32,
    /// Current buffer line height
    pub line_height: f64,
    /// Current buffer font weight
    pub font_weight: u32,
}

impl Default for BaselineSettings {
    fn default() -> Self {
        Self {
            font_size: 14,
            line_height: 1.5,
            font_weight: 400,
        }
    }
}

impl BaselineSettings {
    /// Sanity range for font size (px)
    pub const FONT_SIZE_RANGE: (u32, u32) = (10, 32);
    /// Sanity range for line height
    pub const LINE_HEIGHT_RANGE: (f64, f64) = (1.0, 3.0);
    /// Sanity range for font weight
    pub const FONT_WEIGHT_RANGE: (u32, u32) = (300, 700);

    /// Validate the baseline against sane editor ranges
    ///
    /// The engine itself never validates (it only takes the max against its
    /// own floors); callers that want stricter guarantees run this first.
    ///
    /// # Examples
    ///
    /// ```
    /// use zed_vision::profile::BaselineSettings;
    ///
    /// assert!(BaselineSettings::default().validate().is_ok());
    ///
    /// let bad = BaselineSettings { font_size: 4, ..Default::default() };
    /// assert!(bad.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ZedVisionError> {
        let (min, max) = Self::FONT_SIZE_RANGE;
        if self.font_size < min || self.font_size > max {
            return Err(ZedVisionError::BaselineOutOfRange {
                setting: "font-size".to_string(),
                value: f64::from(self.font_size),
                min: f64::from(min),
                max: f64::from(max),
            });
        }
        let (min, max) = Self::LINE_HEIGHT_RANGE;
        if !(min..=max).contains(&self.line_height) {
            return Err(ZedVisionError::BaselineOutOfRange {
                setting: "line-height".to_string(),
                value: self.line_height,
                min,
                max,
            });
        }
        let (min, max) = Self::FONT_WEIGHT_RANGE;
        if self.font_weight < min || self.font_weight > max {
            return Err(ZedVisionError::BaselineOutOfRange {
                setting: "font-weight".to_string(),
                value: f64::from(self.font_weight),
                min: f64::from(min),
                max: f64::from(max),
            });
        }
        Ok(())
    }
}
