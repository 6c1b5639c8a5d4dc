//! Completions command implementation
//!
//! Handles the `zed-vision completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap_complete::{generate, Shell};

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
/// Users can redirect this to their shell's completion directory.
///
/// # Examples
///
/// ```bash
/// # Bash
/// zed-vision completions bash > /etc/bash_completion.d/zed-vision
///
/// # Zsh
/// zed-vision completions zsh > ~/.zfunc/_zed-vision
///
/// # Fish
/// zed-vision completions fish > ~/.config/fish/completions/zed-vision.fish
/// ```
pub fn cmd_completions(shell: Shell) {
    // Re-create the command structure here since Cli lives in main.rs
    use clap::{Arg, ArgAction, Command};

    let mut cmd = Command::new("zed-vision")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Vision-aware Zed editor settings calculator")
        .arg(
            Arg::new("no-emoji")
                .long("no-emoji")
                .help("Disable emoji output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("recommend").about("Compute recommended display settings"))
        .subcommand(Command::new("conditions").about("List supported conditions and color vision types"))
        .subcommand(Command::new("completions").about("Generate shell completions"));

    let bin_name = "zed-vision".to_string();
    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}
