//! Multiverse CLI
//!
//! Offline operator tool: runs commands directly against a data directory
//! (stop the server first, it does not watch the file) and prints the
//! replies as JSON.

use clap::{Args as ClapArgs, Parser, Subcommand};
use multiverse::protocol::{Command, Reply};
use multiverse::store::{CharacterQuery, QueryParams};
use multiverse::{Character, CharacterPatch, Config, Engine, MultiverseError, StorageFormat};
use tracing_subscriber::{fmt, EnvFilter};

/// Multiverse CLI
#[derive(Parser, Debug)]
#[command(name = "multiverse-cli")]
#[command(about = "CLI for the Multiverse character store")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, env = "MULTIVERSE_DATA_DIR", default_value = "./multiverse_data")]
    data_dir: String,

    /// Storage format: json or snapshot
    #[arg(short, long, env = "MULTIVERSE_STORAGE", default_value = "json")]
    storage: StorageFormat,

    /// Seed for dice and generated records
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every character
    List,

    /// Show one character by id
    Get {
        /// The character id
        id: String,
    },

    /// Show a random character
    Random,

    /// Search by category and power level
    Search(SearchArgs),

    /// Generate and store random characters
    Generate {
        /// How many to generate
        #[arg(short, long, default_value = "1")]
        count: usize,
    },

    /// Store a character given as JSON
    Create {
        /// Character JSON
        json: String,
    },

    /// Merge a JSON patch into a character
    Update {
        /// The character id
        id: String,

        /// Patch JSON (only the fields to change)
        json: String,
    },

    /// Delete a character by id
    #[command(alias = "del")]
    Delete {
        /// The character id
        id: String,
    },

    /// Show collection statistics
    Stats,

    /// Fight two characters
    Battle {
        /// First character id
        id1: String,

        /// Second character id
        id2: String,
    },
}

#[derive(ClapArgs, Debug)]
struct SearchArgs {
    #[arg(long)]
    universe: Option<String>,

    #[arg(long)]
    species: Option<String>,

    #[arg(long)]
    planet: Option<String>,

    #[arg(long)]
    min: Option<String>,

    #[arg(long)]
    max: Option<String>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> multiverse::Result<()> {
    let config = Config::builder()
        .data_dir(&args.data_dir)
        .storage_format(args.storage)
        .random_seed(args.seed)
        .build();

    let engine = Engine::open(config)?;

    let commands = match args.command {
        Commands::List => vec![Command::List],
        Commands::Get { id } => vec![Command::Get { id }],
        Commands::Random => vec![Command::Random],
        Commands::Search(search) => {
            let params = QueryParams {
                universe: search.universe,
                species: search.species,
                origin_planet: search.planet,
                power_level_min: search.min,
                power_level_max: search.max,
            };
            vec![Command::Query {
                query: CharacterQuery::from_params(&params)?,
            }]
        }
        Commands::Generate { count } => vec![Command::Generate; count],
        Commands::Create { json } => {
            let character: Character = serde_json::from_str(&json)?;
            vec![Command::Create { character }]
        }
        Commands::Update { id, json } => {
            let patch: CharacterPatch = serde_json::from_str(&json)?;
            vec![Command::Update { id, patch }]
        }
        Commands::Delete { id } => vec![Command::Delete { id }],
        Commands::Stats => vec![Command::Stats],
        Commands::Battle { id1, id2 } => vec![Command::Battle { id1, id2 }],
    };

    for command in commands {
        let reply = engine.execute(command)?;
        print_reply(&reply)?;
    }

    Ok(())
}

fn print_reply(reply: &Reply) -> Result<(), MultiverseError> {
    println!("{}", serde_json::to_string_pretty(reply)?);
    Ok(())
}
