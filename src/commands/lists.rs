//! Favorite list commands.

use serde_json::json;

use crate::{
    cli::{types::ListId, ListCmd},
    commands::common::{connect, format_player_line},
    filters::sort_by_percentile,
    session::Session,
    Result,
};

/// Handle the lists subcommands
pub async fn handle_lists(api_url: Option<String>, cmd: ListCmd) -> Result<()> {
    let mut session = connect(api_url)?;

    match cmd {
        ListCmd::Show { id, json } => {
            session.load_lists().await?;
            match id {
                Some(id) => show_list(&mut session, &id, json).await?,
                None => show_all(&session, json)?,
            }
        }
        ListCmd::Create { name, description } => {
            let id = session.create_list(&name, &description).await?;
            println!("✓ Created list {id} ({})", name.trim());
        }
        ListCmd::Rename {
            id,
            name,
            description,
        } => {
            session.load_lists().await?;
            let list = session
                .rename_list(&id, name.as_deref(), description.as_deref())
                .await?;
            println!("✓ List {id} is now \"{}\"", list.name);
        }
        ListCmd::Delete { id } => {
            session.load_lists().await?;
            let list = session.delete_list(&id).await?;
            println!("✓ Deleted list {id} ({})", list.name);
        }
        ListCmd::Add { id, player } => {
            session.load_players().await?;
            session.load_lists().await?;
            let count = session.add_to_list(&id, &player).await?;
            println!("✓ Added {player} to {id} ({count} players)");
        }
        ListCmd::Remove { id, player } => {
            session.load_players().await?;
            session.load_lists().await?;
            let count = session.remove_from_list(&id, &player).await?;
            println!("✓ Removed {player} from {id} ({count} players)");
        }
    }

    Ok(())
}

fn show_all(session: &Session, as_json: bool) -> Result<()> {
    let lists = session.lists().lists();

    if as_json {
        let out: Vec<_> = lists
            .iter()
            .map(|(id, list)| json!({ "id": id, "list": list }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for (id, list) in &lists {
        let mut line = format!("{id} {} ({} players)", list.name, list.members.len());
        if !list.description.is_empty() {
            line.push_str(&format!(" - {}", list.description));
        }
        println!("{line}");
    }
    Ok(())
}

async fn show_list(session: &mut Session, id: &ListId, as_json: bool) -> Result<()> {
    session.load_players().await?;
    let list = session.lists().get(id)?;

    let mut players: Vec<_> = list
        .members
        .iter()
        .filter_map(|member| session.store().find_by_id(member).ok())
        .collect();
    sort_by_percentile(&mut players);

    if as_json {
        let out = json!({ "id": id, "list": list, "players": players });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{} ({} players)", list.name, list.members.len());
    if !list.description.is_empty() {
        println!("{}", list.description);
    }
    for player in &players {
        println!("  {}", format_player_line(player));
    }
    Ok(())
}
