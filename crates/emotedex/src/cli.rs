use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::generate::{GenerateArgs, LocalesArgs, run_generate, run_locales};

#[derive(Debug, Parser)]
#[command(
    name = "emotedex",
    about = "Aggregate CommunityDragon summoner-emote manifests into one localized index",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch every locale's manifest and write the aggregated emote index.
    Generate(GenerateArgs),

    /// Print the locale identifiers the CDN currently publishes.
    Locales(LocalesArgs),
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Locales(args) => run_locales(args),
    }
}
