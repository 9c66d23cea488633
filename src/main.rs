use anyhow::Context;
use clap::{Parser, Subcommand};

use portfolio_chatbot::{config::Config, server, state::AppState, terminal};

#[derive(Debug, Parser)]
#[command(name = "portfolio-chatbot", version, about = "Portfolio chatbot backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default).
    Serve,
    /// Chat with the configured reply source in the terminal.
    Chat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::from_env().context("invalid configuration")?;
    server::init_tracing(&config);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => server::serve(config).await,
        Command::Chat => {
            let state = AppState::from_config(&config).context("failed to set up reply source")?;
            terminal::run_stdio_chat(&state).await?;
            Ok(())
        }
    }
}
