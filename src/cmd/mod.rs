//! Command handlers for the zed-vision CLI
//!
//! This module contains all command implementations, organized by
//! functionality. Each submodule handles a specific CLI command.

pub mod completions;
pub mod conditions;
pub mod recommend;

// Re-export command functions for convenient access
pub use completions::cmd_completions;
pub use conditions::cmd_conditions;
pub use recommend::{cmd_recommend, RecommendArgs};
