//! Multiverse Server Binary
//!
//! Starts the HTTP server for Multiverse.

use std::sync::Arc;

use clap::Parser;
use multiverse::network::Server;
use multiverse::{Config, Engine, StorageFormat};
use tracing_subscriber::{fmt, EnvFilter};

/// Multiverse Server
#[derive(Parser, Debug)]
#[command(name = "multiverse-server")]
#[command(about = "Character store with generation, search, statistics and battles")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, env = "MULTIVERSE_DATA_DIR", default_value = "./multiverse_data")]
    data_dir: String,

    /// Listen address (host:port)
    #[arg(short, long, env = "MULTIVERSE_LISTEN", default_value = "127.0.0.1:3001")]
    listen: String,

    /// Port override (replaces the port of --listen)
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Storage format: json or snapshot
    #[arg(short, long, env = "MULTIVERSE_STORAGE", default_value = "json")]
    storage: StorageFormat,

    /// Comma-separated CORS origins ("*" allows any)
    #[arg(long, env = "MULTIVERSE_CORS_ORIGINS", default_value = "*")]
    cors_origins: String,

    /// Seed for dice and generated records
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,multiverse=debug,tower_http=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();
    let listen = with_port(&args.listen, args.port);

    tracing::info!("Multiverse Server v{}", multiverse::VERSION);
    tracing::info!("Data directory: {}", args.data_dir);
    tracing::info!("Storage format: {}", args.storage);

    // Build config from args
    let config = Config::builder()
        .data_dir(&args.data_dir)
        .storage_format(args.storage)
        .listen_addr(listen)
        .cors_allowed_origins(&args.cors_origins)
        .random_seed(args.seed)
        .build();

    // Open engine (blocking file I/O, done before the server starts)
    let engine = match Engine::open(config.clone()) {
        Ok(e) => Arc::new(e),
        Err(e) => {
            tracing::error!("Failed to open engine: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(characters = engine.len(), "Engine initialized successfully");

    let server = Server::new(config, engine);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}

/// Replace the port of `listen` when `port` is given
fn with_port(listen: &str, port: Option<u16>) -> String {
    match port {
        Some(port) => {
            let host = listen.rsplit_once(':').map_or(listen, |(host, _)| host);
            format!("{}:{}", host, port)
        }
        None => listen.to_string(),
    }
}
