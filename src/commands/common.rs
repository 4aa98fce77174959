//! Helpers shared across commands: session setup and text output.

use tracing::debug;

use crate::{
    api::ApiClient,
    filters::{active_filters, FilterCriteria, PercentileTier},
    session::Session,
    store::{Comment, Player},
    Result,
};

use super::{resolve_api_url, resolve_timeout};

/// Build a session against the configured backend.
pub fn connect(api_url: Option<String>) -> Result<Session> {
    let api_url = resolve_api_url(api_url);
    let timeout = resolve_timeout()?;
    let client = ApiClient::with_timeout(&api_url, timeout)?;
    debug!(base_url = %client.base_url(), ?timeout, "backend configured");
    Ok(Session::new(client))
}

/// `id name (position) club value percentile% [tier]`, with a star for favorites.
pub fn format_player_line(player: &Player) -> String {
    let value = if player.market_value.trim().is_empty() {
        "-"
    } else {
        player.market_value.trim()
    };
    let mut line = format!(
        "{} {} ({}) {} {} {}% [{}]",
        player.id,
        player.name,
        player.position,
        player.club,
        value,
        player.percentile,
        PercentileTier::from_percentile(player.percentile),
    );
    if player.favorite {
        line.push_str(" ★");
    }
    line
}

pub fn format_comment_line(comment: &Comment) -> String {
    format!("[{}] {}", comment.timestamp, comment.text)
}

/// One line summarizing the active filters, or `None` when nothing is filtered.
pub fn format_active_filters(criteria: &FilterCriteria) -> Option<String> {
    let active = active_filters(criteria);
    if active.is_empty() {
        return None;
    }
    let parts: Vec<String> = active.iter().map(ToString::to_string).collect();
    Some(format!("Filters: {}", parts.join(" | ")))
}
