use clap::{ArgAction, Parser, Subcommand};
use commands::{config, shell};
use media_tracker_config::{Config, PathManager};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "media-tracker")]
#[command(about = "Media Tracker - Keep track of the movies and shows you watch")]
#[command(version)]
struct Cli {
    /// Enable verbose logging (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Path to the configuration file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default when no command is given)
    #[command(long_about = "Start the interactive media tracker menu. Add movies and TV shows, update their watch status, rate the ones you have finished, and search or filter the collection. The collection lives in memory and is discarded on exit.")]
    Shell,
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },

    /// Print the configuration file location
    Path,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let path_manager = PathManager::default();
    let config_path = cli.config.clone().unwrap_or_else(|| path_manager.config_file());

    let config = Config::load_or_default(&config_path)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_path.display(), e))?;
    config
        .validate()
        .map_err(|e| color_eyre::eyre::eyre!("Invalid configuration in {}: {}", config_path.display(), e))?;

    logging::init_logging(cli.verbose, cli.quiet, &config.logging)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to initialize logging: {}", e))?;

    tracing::debug!(config_file = %config_path.display(), "Configuration loaded");

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => shell::run_shell(&config, &output),
        Commands::Config { cmd } => config::run_config(cmd, &config_path, &config, &output),
    }
}
