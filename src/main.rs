use clap::{Parser, Subcommand};

mod cli;
mod config;
mod core;
mod error;
mod services;
mod ui;
mod utils;

use cli::*;
use config::Config;
use error::Result;
use services::SimpleServices;

#[derive(Parser)]
#[command(name = "lyricloze")]
#[command(about = "Turn song lyrics into fill-in-the-blank quizzes")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Config file path (optional)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch lyrics for a song and mask words in them
    Quiz(quiz::QuizArgs),

    /// Mask words in lyrics read from a file or stdin
    Mask(mask::MaskArgs),

    /// Show the words that are never masked
    Exclusions(exclusions::ExclusionsArgs),

    /// Show or change configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // Initialize logging
    utils::logging::init_logging(cli.verbose, cli.quiet)
        .map_err(error::ClozeError::Internal)?;

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    // Initialize services
    let services = SimpleServices::new(config);

    // Execute command with services
    match cli.command {
        Commands::Quiz(args) => quiz::execute(args, &services, cli.quiet).await
            .map_err(error::ClozeError::Internal),
        Commands::Mask(args) => mask::execute(args, &services).await
            .map_err(error::ClozeError::Internal),
        Commands::Exclusions(args) => exclusions::execute(args, &services).await
            .map_err(error::ClozeError::Internal),
        Commands::Config(args) => cli::config::execute(args, &services.config(), cli.config.as_deref()).await
            .map_err(error::ClozeError::Internal),
    }
}
