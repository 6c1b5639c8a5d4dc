//! Conditions command implementation
//!
//! Handles `zed-vision conditions`, which lists the supported condition
//! flags and color-vision types with their descriptions.

use console::style;

use crate::fmt::{EYE, PALETTE};
use crate::profile::{ColorVision, Condition};

/// Print the catalog of supported conditions and color-vision types
pub fn cmd_conditions() {
    println!("{} Visual conditions (pass with --condition):", EYE);
    for condition in Condition::all() {
        println!(
            "   {} {:<18} {} - {}",
            style("•").dim(),
            style(condition.name()).cyan().bold(),
            condition.label(),
            style(condition.description()).dim()
        );
    }
    println!();

    println!("{} Color vision types (pass with --color-vision):", PALETTE);
    for variant in ColorVision::all() {
        if variant == ColorVision::None {
            println!(
                "   {} {:<18} {}",
                style("•").dim(),
                style(variant.name()).cyan().bold(),
                variant.label()
            );
        } else {
            println!(
                "   {} {:<18} {} - {}",
                style("•").dim(),
                style(variant.name()).cyan().bold(),
                variant.label(),
                style(variant.description()).dim()
            );
        }
    }
    println!();
    println!(
        "Example: {}",
        style("zed-vision recommend --condition astigmatism --color-vision deuteranopia").cyan()
    );
}
