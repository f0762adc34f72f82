//! game-roulette CLI
//!
//! Command-line interface for discovering random games from the remote
//! catalog and managing the saved-games vault.

use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use roulette_core::{FilterSpec, SortOrder};

mod commands;
mod error;
mod spinner;

#[derive(Parser)]
#[command(name = "game-roulette")]
#[command(about = "Discover random video games and keep the ones you like", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Discovery filter arguments.
#[derive(Args, Clone)]
struct FilterArgs {
    /// Genre id to narrow discovery to (see `game-roulette genres`)
    #[arg(short, long)]
    genre: Option<u32>,

    /// Platform ids, comma separated (see `game-roulette platforms`)
    #[arg(short, long, value_delimiter = ',')]
    platforms: Option<Vec<u32>>,

    /// Minimum community star rating (0-5)
    #[arg(short, long, default_value_t = 0.0)]
    min_rating: f32,

    /// Earliest release year (defaults to 1980)
    #[arg(long)]
    start_year: Option<i32>,

    /// Latest release year (defaults to the current year)
    #[arg(long)]
    end_year: Option<i32>,

    /// Sort order: rating, released, metacritic, or name
    #[arg(short, long, default_value = "rating")]
    ordering: SortOrder,
}

impl FilterArgs {
    fn into_spec(self) -> FilterSpec {
        FilterSpec {
            genre: self.genre,
            platforms: self.platforms.unwrap_or_default(),
            min_rating: self.min_rating,
            start_year: self.start_year,
            end_year: self.end_year,
            ordering: self.ordering,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Discover random games matching the filters
    Discover {
        #[command(flatten)]
        filters: FilterArgs,

        /// How many games to discover in this session
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Save each discovered game to the vault
        #[arg(long)]
        save: bool,
    },

    /// List the catalog's genres
    Genres,

    /// List the catalog's platforms
    Platforms,

    /// Manage the saved-games vault
    Vault {
        #[command(subcommand)]
        command: VaultCommands,
    },

    /// Show or update configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum VaultCommands {
    /// List saved games
    List,

    /// Show collection statistics
    Stats,

    /// Save a game by catalog id, or remove it if already saved
    Toggle { id: u64 },

    /// Remove a saved game
    Remove { id: u64 },

    /// Clear the whole collection
    Clear,

    /// Search saved games by name or genre
    Search { query: String },

    /// Attach a personal note to a saved game
    Note { id: u64, note: String },

    /// Rate a saved game (1-5)
    Rate { id: u64, rating: u8 },

    /// Print the collection as JSON
    Export,

    /// Import a previously exported collection from a JSON file
    Import { file: std::path::PathBuf },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the config path and where each setting comes from
    Show,

    /// Write settings to the config file
    Set {
        /// Catalog API key
        #[arg(long)]
        catalog_key: Option<String>,

        /// Translation API key (optional; omitting it keeps the local
        /// fallback translation)
        #[arg(long)]
        translate_key: Option<String>,

        /// Base URL of the saved-games backend
        #[arg(long)]
        vault_url: Option<String>,

        /// Language descriptions are translated into
        #[arg(long)]
        target_lang: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Discover {
            filters,
            count,
            save,
        } => commands::discover::run(filters.into_spec(), count, save).await,
        Commands::Genres => commands::refs::run_genres().await,
        Commands::Platforms => commands::refs::run_platforms().await,
        Commands::Vault { command } => commands::vault::run(command).await,
        Commands::Config { command } => commands::config::run(command),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "\u{2718}".if_supports_color(Stderr, |t| t.red()), e);
        std::process::exit(1);
    }
}
