use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::process;
use zed_vision::cmd;

/// Vision-aware Zed editor settings calculator
///
/// zed-vision maps self-reported visual conditions and eyeglass prescription
/// values to ergonomic Zed display settings, and prints a snippet you can
/// paste into settings.json.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute recommended display settings
    Recommend(cmd::RecommendArgs),

    /// List supported conditions and color vision types
    Conditions,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    // Set console emoji mode based on CLI flag
    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let result = match &cli.command {
        Some(Commands::Recommend(args)) => cmd::cmd_recommend(args),
        Some(Commands::Conditions) => {
            cmd::cmd_conditions();
            Ok(())
        }
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell);
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("zed-vision v{}", env!("CARGO_PKG_VERSION"));
            println!("Vision-aware Zed editor settings calculator\n");
            println!("Usage: zed-vision <COMMAND>\n");
            println!("Commands:");
            println!("  recommend    Compute recommended display settings");
            println!("  conditions   List supported conditions and color vision types");
            println!("  completions  Generate shell completions");
            println!("\nRun 'zed-vision <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use zed_vision::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
