//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;
use docshape::output::OutputMode;

/// docshape - Layout validation for documentation content repositories
#[derive(Parser, Debug)]
#[command(
    name = "docshape",
    version,
    about = "Layout validation for documentation content repositories",
    long_about = "Enforce directory layout conventions via pre-commit hooks.\n\n\
                  Blueprints and patterns live in per-name subdirectories\n\
                  bundling markdown with images; other content areas hold\n\
                  markdown and image files at most one subdirectory deep."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize docshape in the current repository
    Init {
        /// Force re-initialization
        #[arg(short, long)]
        force: bool,
    },

    /// Validate the layout of staged files (used by pre-commit hook)
    Check {
        /// Validate these paths instead of the staged set
        paths: Vec<String>,

        /// Run in CI mode (stricter, non-interactive)
        #[arg(long)]
        ci: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Check { paths, ci }) => commands::check(paths, ci, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("docshape v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("docshape v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'docshape --help' for usage");
                println!("Run 'docshape init' to get started");
            }
            Ok(())
        },
    }
}
