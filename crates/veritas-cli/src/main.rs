//! Veritas CLI - Terminal chat client for the Veritas evaluation service.

use clap::Parser;
use veritas_cli::commands;
use veritas_cli::repl;
use veritas_cli::{Cli, Command, Config, Formatter};
use veritas_sdk::{ChatSession, VeritasClient};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> veritas_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let mut config = Config::load()?;

    // Override profile if specified
    if let Some(profile_name) = cli.profile {
        config.switch_profile(profile_name)?;
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Some(Command::Profile(args)) => {
            commands::execute_profile(args, &mut config, &formatter).await?;
        }
        cmd => {
            // Commands that talk to the service
            let url = config.service_url(cli.url.as_deref())?;
            let client = VeritasClient::new(&url);

            match cmd {
                None | Some(Command::Chat) => {
                    let mut session = ChatSession::new(client);
                    repl::run_repl(&mut session, &config, &formatter).await?;
                }
                Some(Command::Ask(args)) => {
                    commands::execute_ask(args, &client, &formatter).await?;
                }
                Some(Command::Health) => {
                    commands::execute_health(&client, &formatter).await?;
                }
                Some(Command::Profile(_)) => unreachable!(),
            }
        }
    }

    Ok(())
}
