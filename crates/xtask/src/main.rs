//! Development tasks for the rules engine
//!
//! This binary rolls dice and resolves checks from the terminal using the
//! same seeded generator as every other participant.
//! Run with: `cargo xtask <command>`

mod commands;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Attack, Create, Initiative, Roll, Save, Skill};

/// Development tasks for the rules engine
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the rules engine", long_about = None)]
#[command(version)]
struct Cli {
    /// Rules configuration file (TOML); defaults apply when omitted
    #[arg(long, global = true, env = "RULES_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print results as JSON instead of a styled summary
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Roll a dice expression
    Roll(Roll),

    /// Resolve an attack against an armor class
    Attack(Attack),

    /// Resolve a saving throw against a DC
    Save(Save),

    /// Roll a skill check, optionally against a DC
    Skill(Skill),

    /// Roll and order initiative
    Initiative(Initiative),

    /// Build starting attributes from an ancestry and background
    Create(Create),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for RULES_CONFIG and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = utils::Context::load(cli.config.as_deref(), cli.json)?;

    match cli.command {
        Command::Roll(cmd) => cmd.execute(&ctx),
        Command::Attack(cmd) => cmd.execute(&ctx),
        Command::Save(cmd) => cmd.execute(&ctx),
        Command::Skill(cmd) => cmd.execute(&ctx),
        Command::Initiative(cmd) => cmd.execute(&ctx),
        Command::Create(cmd) => cmd.execute(&ctx),
    }
}
