use clap::{ArgAction, Parser, Subcommand};
use commands::{config, oscars, reviews};
use filmstats_config::{Config, PathManager};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;
mod render;

#[derive(Parser)]
#[command(name = "filmstats")]
#[command(about = "filmstats - Oscar nominations and critic reviews, counted and ranked")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except results and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Path to the config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding the collection JSON files (overrides store.data_dir)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query Oscar nominations
    Oscars {
        #[command(subcommand)]
        cmd: OscarCommands,
    },
    /// Query critic reviews
    Reviews {
        #[command(subcommand)]
        cmd: ReviewCommands,
    },
    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
pub enum OscarCommands {
    /// Document, category and winner counts plus available queries
    Overview,
    /// Every film document with its nominations
    All,
    /// Film documents whose title contains TITLE (case-insensitive)
    Film { title: String },
    /// Nominations whose category contains CATEGORY (case-insensitive)
    Category { category: String },
    /// Nominations for films released in YEAR
    Year { year: String },
    /// Nominations by winner status ('true' or 'false')
    Winner { status: String },
    /// Films with the most Oscar wins
    Top { limit: String },
    /// Nominees with the most nominations, won or not
    Nominations { limit: String },
    /// Every distinct Oscar category
    Categories,
    /// A few documents, to check that the store answers
    Sample,
}

#[derive(Subcommand)]
pub enum ReviewCommands {
    /// Review, critic and top-critic counts plus available queries
    Overview,
    /// The review document of the film titled exactly TITLE
    Film { title: String },
    /// Reviews whose publisher contains PUBLISHER (case-insensitive)
    Publisher { publisher: String },
    /// Reviews by top-critic status ('true' or 'false')
    TopCritic { status: String },
    /// The 10 most recent reviews
    Latest,
    /// The 10 critics with the most reviews
    Critics,
    /// The 10 films reviewed by the most distinct critics
    Films,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let path_manager = PathManager::default();
    let config_path = cli.config.clone().unwrap_or_else(|| path_manager.config_file());
    let config = Config::load_or_default(&config_path)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_path.display(), e))?;
    config
        .validate()
        .map_err(|e| color_eyre::eyre::eyre!("Configuration validation failed: {}", e))?;

    logging::init_logging(cli.verbose, cli.quiet, &config.logging).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    let result = match cli.command {
        Commands::Oscars { cmd } => {
            let queries = commands::build_queries(&config, &path_manager, cli.data_dir)?;
            oscars::run_oscars(cmd, &queries, &output).await
        }
        Commands::Reviews { cmd } => {
            let queries = commands::build_queries(&config, &path_manager, cli.data_dir)?;
            reviews::run_reviews(cmd, &queries, &output).await
        }
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show);
            config::run_config(cmd, &config, &config_path, &output)
        }
    };

    if let Err(ref e) = result {
        if !output.is_human() {
            output.error(format!("{:#}", e));
        }
    }
    result
}
