//! Error types with contextual suggestions
//!
//! The engine and renderer are total functions and never fail; errors exist
//! only at the CLI boundary (baseline validation, writing the snippet to a
//! file). Each error carries an actionable suggestion and a sysexits-style
//! exit code.
//!
//! # Examples
//!
//! ```
//! use zed_vision::error::ZedVisionError;
//!
//! let err = ZedVisionError::BaselineOutOfRange {
//!     setting: "font-size".to_string(),
//!     value: 4.0,
//!     min: 10.0,
//!     max: 32.0,
//! };
//!
//! assert_eq!(err.exit_code(), 64);
//! assert!(err.suggestion().unwrap().contains("--font-size"));
//! ```

use thiserror::Error;

/// zed-vision errors with contextual suggestions
#[derive(Error, Debug)]
pub enum ZedVisionError {
    /// A baseline editor setting is outside its sane range
    #[error("Baseline {setting} {value} is outside the supported range {min}-{max}")]
    BaselineOutOfRange {
        /// Setting flag name (e.g. "font-size")
        setting: String,
        /// Value the user supplied
        value: f64,
        /// Lower bound (inclusive)
        min: f64,
        /// Upper bound (inclusive)
        max: f64,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl ZedVisionError {
    /// Get actionable suggestion for resolving this error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::BaselineOutOfRange {
                setting, min, max, ..
            } => Some(format!(
                "Pass --{} a value between {} and {} (check your current Zed settings.json)",
                setting, min, max
            )),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get appropriate exit code for this error (sysexits.h conventions)
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::BaselineOutOfRange { .. } => 64, // EX_USAGE
            Self::Io { .. } => 74,                 // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with suggestions
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(zv_error) = error.downcast_ref::<ZedVisionError>() {
            if let Some(suggestion) = zv_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(zv_error) = error.downcast_ref::<ZedVisionError>() {
            zv_error.exit_code()
        } else {
            1 // Generic error
        }
    }
}
