//! Roster commands: listing, selector values, player detail, backend refresh.

use serde_json::json;

use crate::{
    cli::types::PlayerId,
    commands::common::{connect, format_active_filters, format_comment_line, format_player_line},
    filters::FilterCriteria,
    Result,
};

/// Handle the players command
pub async fn handle_players(
    api_url: Option<String>,
    criteria: FilterCriteria,
    as_json: bool,
    badges: bool,
) -> Result<()> {
    let mut session = connect(api_url)?;
    session.load_players().await?;
    let visible = session.set_criteria(criteria);
    let players = session.visible();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&players)?);
        return Ok(());
    }

    if badges {
        if let Some(summary) = format_active_filters(session.criteria()) {
            println!("{summary}");
        }
    }
    for player in &players {
        println!("{}", format_player_line(player));
    }
    println!("Showing {} of {} players", visible, session.store().len());
    Ok(())
}

/// Handle the options command
pub async fn handle_options(api_url: Option<String>, as_json: bool) -> Result<()> {
    let mut session = connect(api_url)?;
    session.load_players().await?;
    let options = session.store().filter_options();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    for (label, values) in [
        ("Leagues", &options.leagues),
        ("Clubs", &options.clubs),
        ("Positions", &options.positions),
        ("Nationalities", &options.nationalities),
        ("Feet", &options.feet),
    ] {
        println!("{label} ({}): {}", values.len(), values.join(", "));
    }
    Ok(())
}

/// Handle the show command
pub async fn handle_show(api_url: Option<String>, id: PlayerId, as_json: bool) -> Result<()> {
    let mut session = connect(api_url)?;
    session.load_players().await?;
    session.load_lists().await?;

    let player = session.store().find_by_id(&id)?;
    let lists = session.lists().lists_containing(&id);

    if as_json {
        let out = json!({ "player": player, "lists": lists });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", format_player_line(&player));
    println!("  League: {}  Nationality: {}", player.league, player.nationality);
    println!(
        "  Age: {}  Height: {}  Foot: {}",
        player.age.map_or("-".to_string(), |a| a.to_string()),
        player.height.map_or("-".to_string(), |h| format!("{h}cm")),
        player.foot.as_deref().unwrap_or("-"),
    );
    println!("  Contract: {}", player.contract.as_deref().unwrap_or("-"));
    if !lists.is_empty() {
        let ids: Vec<String> = lists.iter().map(ToString::to_string).collect();
        println!("  Lists: {}", ids.join(", "));
    }
    if player.comments.is_empty() {
        println!("  No comments");
    } else {
        println!("  Comments:");
        for comment in &player.comments {
            println!("    {}", format_comment_line(comment));
        }
    }
    Ok(())
}

/// Handle the refresh command
pub async fn handle_refresh(api_url: Option<String>) -> Result<()> {
    let mut session = connect(api_url)?;
    println!("Asking the backend to reload player data...");
    let count = session.refresh_data().await?;
    println!("✓ {count} players loaded");
    Ok(())
}
