//! Recommend command implementation
//!
//! Handles `zed-vision recommend`: assembles the vision profile from CLI
//! flags, runs the engine and renderer, and prints a styled report, the raw
//! snippet, or machine-readable JSON.

use anyhow::Result;
use clap::Args;
use console::style;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use crate::engine::{self, Recommendations};
use crate::error::ZedVisionError;
use crate::fmt::{CHECKMARK, LIGHTBULB, PALETTE, SPARKLES};
use crate::profile::{BaselineSettings, ColorVision, Condition, Prescription, VisualConditions};
use crate::render::{self, ZedConfig};

/// Arguments for the recommend command
#[derive(Debug, Args)]
pub struct RecommendArgs {
    /// Visual condition to account for (repeat for several)
    #[arg(short, long = "condition", value_enum, value_name = "CONDITION")]
    pub conditions: Vec<Condition>,

    /// Color vision deficiency type
    #[arg(long, value_enum, default_value = "none")]
    pub color_vision: ColorVision,

    /// Right eye sphere in diopters (free text, e.g. "-4.25")
    #[arg(long, value_name = "DIOPTERS", allow_hyphen_values = true)]
    pub right_sphere: Option<String>,

    /// Right eye cylinder in diopters
    #[arg(long, value_name = "DIOPTERS", allow_hyphen_values = true)]
    pub right_cylinder: Option<String>,

    /// Right eye axis in degrees (0-180)
    #[arg(long, value_name = "DEGREES", allow_hyphen_values = true)]
    pub right_axis: Option<String>,

    /// Left eye sphere in diopters
    #[arg(long, value_name = "DIOPTERS", allow_hyphen_values = true)]
    pub left_sphere: Option<String>,

    /// Left eye cylinder in diopters
    #[arg(long, value_name = "DIOPTERS", allow_hyphen_values = true)]
    pub left_cylinder: Option<String>,

    /// Left eye axis in degrees (0-180)
    #[arg(long, value_name = "DEGREES", allow_hyphen_values = true)]
    pub left_axis: Option<String>,

    /// Current buffer font size in px
    #[arg(long, default_value_t = 14)]
    pub font_size: u32,

    /// Current buffer line height
    #[arg(long, default_value_t = 1.5)]
    pub line_height: f64,

    /// Current buffer font weight
    #[arg(long, default_value_t = 400)]
    pub font_weight: u32,

    /// Output as JSON (for scripting)
    #[arg(long)]
    pub json: bool,

    /// Print only the settings.json snippet
    #[arg(long)]
    pub snippet_only: bool,

    /// Also write the snippet to a file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Machine-readable output for `--json`
#[derive(Serialize)]
struct JsonReport<'a> {
    recommendations: &'a Recommendations,
    config: &'a ZedConfig,
    snippet: &'a str,
}

/// Compute and print display-setting recommendations
///
/// # Examples
///
/// ```no_run
/// use zed_vision::cmd::recommend::{cmd_recommend, RecommendArgs};
/// use clap::Parser;
///
/// #[derive(Parser)]
/// struct Wrapper {
///     #[command(flatten)]
///     args: RecommendArgs,
/// }
///
/// let wrapper = Wrapper::parse_from(["zed-vision", "--condition", "myopia"]);
/// cmd_recommend(&wrapper.args)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_recommend(args: &RecommendArgs) -> Result<()> {
    let conditions = VisualConditions::from_conditions(&args.conditions);

    let prescription = Prescription {
        right_sphere: args.right_sphere.clone().unwrap_or_default(),
        right_cylinder: args.right_cylinder.clone().unwrap_or_default(),
        right_axis: args.right_axis.clone().unwrap_or_default(),
        left_sphere: args.left_sphere.clone().unwrap_or_default(),
        left_cylinder: args.left_cylinder.clone().unwrap_or_default(),
        left_axis: args.left_axis.clone().unwrap_or_default(),
    };

    let baseline = BaselineSettings {
        font_size: args.font_size,
        line_height: args.line_height,
        font_weight: args.font_weight,
    };
    baseline.validate()?;

    let recommendations = engine::evaluate(&conditions, args.color_vision, &prescription, &baseline);
    let config = ZedConfig::from_recommendations(&recommendations);
    let snippet = render::to_text(&config, &recommendations);

    if args.json {
        let report = JsonReport {
            recommendations: &recommendations,
            config: &config,
            snippet: &snippet,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if args.snippet_only {
        println!("{}", snippet);
    } else {
        print_report(&baseline, &recommendations, &snippet);
    }

    if let Some(path) = &args.output {
        fs::write(path, &snippet).map_err(|source| ZedVisionError::Io {
            context: format!("writing snippet to {}", path.display()),
            source,
        })?;
        if !args.json {
            println!();
            println!("{} Wrote snippet to {}", CHECKMARK, style(path.display()).cyan());
        }
    }

    Ok(())
}

fn print_report(baseline: &BaselineSettings, recommendations: &Recommendations, snippet: &str) {
    println!(
        "{} {} Recommended settings",
        SPARKLES,
        style("zed-vision").bold()
    );
    println!();

    print_setting(
        "Font size",
        format!("{}px", baseline.font_size),
        format!("{}px", recommendations.font_size),
    );
    print_setting(
        "Line height",
        format!("{}", baseline.line_height),
        format!("{}", recommendations.line_height),
    );
    print_setting(
        "Font weight",
        format!("{}", baseline.font_weight),
        format!("{}", recommendations.font_weight),
    );
    print_setting(
        "Cursor shape",
        "-".to_string(),
        recommendations.cursor_shape.as_str().to_string(),
    );
    if recommendations.letter_spacing > 0.0 {
        print_setting(
            "Letter spacing",
            "-".to_string(),
            crate::fmt::format_px(recommendations.letter_spacing),
        );
    }
    println!();

    if !recommendations.explanations.is_empty() {
        println!("{} Why:", LIGHTBULB);
        for explanation in &recommendations.explanations {
            println!("   {} {}", style("•").dim(), explanation);
        }
        println!();
    }

    if !recommendations.font_recommendations.is_empty() {
        println!("{} Font suggestions:", SPARKLES);
        for font in &recommendations.font_recommendations {
            println!("   {} {}", style("•").dim(), font);
        }
        println!();
    }

    if !recommendations.theme_recommendations.is_empty() {
        println!("{} Theme suggestions:", PALETTE);
        for theme in &recommendations.theme_recommendations {
            println!(
                "   {} {} - {}",
                style("•").dim(),
                style(&theme.name).bold(),
                style(&theme.reason).dim()
            );
        }
        println!();
    }

    println!("{}", snippet);
}

fn print_setting(label: &str, current: String, recommended: String) {
    println!(
        "   {:<15} {} {} {}",
        label,
        style(current).dim(),
        style("→").dim(),
        style(recommended).green().bold()
    );
}
