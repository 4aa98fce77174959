//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use player_scout::{
    cli::{Commands, Scout},
    commands::{
        favorites::{handle_comment, handle_favorite},
        lists::handle_lists,
        players::{handle_options, handle_players, handle_refresh, handle_show},
    },
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Scout::parse();

    let default_level = if app.debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let api_url = app.api_url;
    match app.command {
        Commands::Players {
            filters,
            json,
            badges,
        } => handle_players(api_url, filters.into_criteria(), json, badges).await?,
        Commands::Options { json } => handle_options(api_url, json).await?,
        Commands::Show { id, json } => handle_show(api_url, id, json).await?,
        Commands::Favorite { id } => handle_favorite(api_url, id).await?,
        Commands::Comment { id, text } => handle_comment(api_url, id, text).await?,
        Commands::Refresh => handle_refresh(api_url).await?,
        Commands::Lists { cmd } => handle_lists(api_url, cmd).await?,
    }

    Ok(())
}
