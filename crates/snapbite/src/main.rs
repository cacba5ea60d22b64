//! snapbite CLI - meal-photo nutrition analysis and next-meal suggestions.
//!
//! snapbite takes a meal photo and returns a structured nutrition summary,
//! optionally with a personalized suggestion for the next meal.
//!
//! # Usage
//!
//! ```bash
//! # Analyze a meal photo
//! snapbite analyze meal.jpg
//!
//! # Analyze and ask for a next-meal suggestion
//! snapbite analyze meal.jpg --suggest --height 170 --weight 60 --goal cut
//!
//! # Profile numbers only (no photo)
//! snapbite profile --height 170 --weight 60 --goal maintain
//!
//! # View configuration
//! snapbite config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// snapbite - meal-photo nutrition analysis and next-meal suggestions.
#[derive(Parser, Debug)]
#[command(name = "snapbite")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a meal photo and print the nutrition summary
    Analyze(cli::analyze::AnalyzeArgs),

    /// Compute BMI and the daily calorie target for a profile
    Profile(cli::profile::ProfileArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from config, with CLI verbose override.
    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match snapbite_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `snapbite config path`."
            );
            snapbite_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("snapbite v{}", snapbite_core::VERSION);

    // Dispatch to the appropriate command handler
    match cli.command {
        Commands::Analyze(args) => cli::analyze::execute(args, &config).await,
        Commands::Profile(args) => cli::profile::execute(args),
        Commands::Config(args) => cli::config::execute(args).await,
    }
}
