//! Developer harness for the combat engine.
//!
//! Loads content (embedded or from a data directory), lists and validates
//! it, and runs scripted fights against a boss.
//! Run with: `cargo run -p combat-sim -- <command>`

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{ContentArgs, Fight, Skills, Validate};

/// Combat simulation and content tools
#[derive(Parser)]
#[command(name = "combat-sim")]
#[command(about = "Run scripted boss fights and inspect combat content", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    content: ContentArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List skills, optionally for one class
    Skills(Skills),

    /// Load and validate content, reporting every problem
    Validate(Validate),

    /// Run a deterministic fight against a boss
    Fight(Fight),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Skills(cmd) => cmd.execute(&cli.content),
        Command::Validate(cmd) => cmd.execute(&cli.content),
        Command::Fight(cmd) => cmd.execute(&cli.content),
    }
}
