//! Per-player actions: favorite toggle and comments.

use crate::{
    cli::types::PlayerId,
    commands::common::{connect, format_comment_line},
    Result,
};

/// Handle the favorite command
pub async fn handle_favorite(api_url: Option<String>, id: PlayerId) -> Result<()> {
    let mut session = connect(api_url)?;
    session.load_players().await?;

    let favorite = session.toggle_favorite(&id).await?;
    let player = session.store().find_by_id(&id)?;
    if favorite {
        println!("★ {} added to favorites", player.name);
    } else {
        println!("{} removed from favorites", player.name);
    }
    Ok(())
}

/// Handle the comment command
pub async fn handle_comment(api_url: Option<String>, id: PlayerId, text: String) -> Result<()> {
    let mut session = connect(api_url)?;
    session.load_players().await?;

    let comments = session.add_comment(&id, &text).await?;
    println!("{} comment(s):", comments.len());
    for comment in &comments {
        println!("  {}", format_comment_line(comment));
    }
    Ok(())
}
