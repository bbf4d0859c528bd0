//! Veritas evaluation server
//!
//! Starts the HTTP server exposing `POST /api/evaluate`.

use std::env;
use std::process;
use tracing_subscriber::EnvFilter;
use veritas_server::{config::ServerConfig, start_server, ServerError};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        ServerConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("No config file specified, using defaults");
        eprintln!("Usage: veritas-server --config <path-to-config.toml>");
        eprintln!();
        ServerConfig::default()
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Veritas Server - Question evaluation service");
    println!();
    println!("USAGE:");
    println!("    veritas-server [--config <path-to-config.toml>]");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("ENDPOINTS:");
    println!("    POST /api/evaluate    {{\"question\": \"...\"}}");
    println!("    GET  /health");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file may contain:");
    println!("    - bind_address: IP address to bind (default: '127.0.0.1')");
    println!("    - bind_port: Port number (default: 3000)");
    println!("    - explorer_base_url: Prefix for transaction links");
    println!("    - sources: Array of {{keyword, title, url}} citation rules");
    println!();
    println!("Log verbosity follows RUST_LOG (default: info).");
}
