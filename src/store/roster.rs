//! The roster and its filtered view.

use std::collections::{BTreeSet, HashMap};

use serde_json::Value;
use tracing::debug;

use crate::{
    cli::types::PlayerId,
    filters::{self, FilterCriteria},
    store::models::{Comment, FilterOptions, Player},
    Result, ScoutError,
};

/// Owns the fetched roster and the currently visible subset.
///
/// The view stores positions into the roster rather than copies, so updates to
/// a player are observed by the view without any extra bookkeeping. Readers get
/// clones; the internal containers are never handed out mutably.
#[derive(Debug, Clone, Default)]
pub struct PlayerStore {
    roster: Vec<Player>,
    index: HashMap<PlayerId, usize>,
    view: Vec<usize>,
}

impl PlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the roster and show every player, highest percentile first.
    ///
    /// Fails with [`ScoutError::Load`] when a player has an empty id or an id
    /// appears twice; the previous roster is kept in that case.
    pub fn load(&mut self, players: Vec<Player>) -> Result<()> {
        let mut index = HashMap::with_capacity(players.len());
        for (pos, player) in players.iter().enumerate() {
            if player.id.is_empty() {
                return Err(ScoutError::load(format!("player at index {pos} has no id")));
            }
            if index.insert(player.id.clone(), pos).is_some() {
                return Err(ScoutError::load(format!(
                    "duplicate player id {} at index {pos}",
                    player.id
                )));
            }
        }

        self.view = filters::select(&players, &FilterCriteria::default());
        self.roster = players;
        self.index = index;
        debug!(players = self.roster.len(), "roster loaded");
        Ok(())
    }

    /// Load a raw `GET /api/players` payload.
    pub fn load_json(&mut self, payload: Value) -> Result<()> {
        let Value::Array(entries) = payload else {
            return Err(ScoutError::load("expected a JSON array of players"));
        };

        let mut players = Vec::with_capacity(entries.len());
        for (pos, entry) in entries.into_iter().enumerate() {
            if entry.get("id").map_or(true, Value::is_null) {
                return Err(ScoutError::load(format!("player at index {pos} has no id")));
            }
            let player: Player = serde_json::from_value(entry)
                .map_err(|e| ScoutError::load(format!("player at index {pos}: {e}")))?;
            players.push(player);
        }

        self.load(players)
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    pub fn contains(&self, id: &PlayerId) -> bool {
        self.index.contains_key(id)
    }

    pub fn find_by_id(&self, id: &PlayerId) -> Result<Player> {
        self.position(id).map(|pos| self.roster[pos].clone())
    }

    /// Set the favorite flag on the canonical entry.
    pub fn apply_favorite(&mut self, id: &PlayerId, favorite: bool) -> Result<Player> {
        let pos = self.position(id)?;
        let player = &mut self.roster[pos];
        player.favorite = favorite;
        Ok(player.clone())
    }

    /// Append a locally stamped comment and return the player's full sequence.
    pub fn append_comment(&mut self, id: &PlayerId, text: &str) -> Result<Vec<Comment>> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ScoutError::validation("comment text is empty"));
        }
        let pos = self.position(id)?;
        let comments = &mut self.roster[pos].comments;
        comments.push(Comment::now(text));
        Ok(comments.clone())
    }

    /// Install the backend's canonical comment sequence for a player.
    pub fn replace_comments(&mut self, id: &PlayerId, comments: Vec<Comment>) -> Result<Vec<Comment>> {
        let pos = self.position(id)?;
        self.roster[pos].comments = comments;
        Ok(self.roster[pos].comments.clone())
    }

    /// Recompute the view from `criteria`; returns the number of visible players.
    pub fn refilter(&mut self, criteria: &FilterCriteria) -> usize {
        self.view = filters::select(&self.roster, criteria);
        debug!(visible = self.view.len(), total = self.roster.len(), "view recomputed");
        self.view.len()
    }

    /// Visible players in display order.
    pub fn visible(&self) -> Vec<Player> {
        self.view.iter().map(|&pos| self.roster[pos].clone()).collect()
    }

    pub fn visible_len(&self) -> usize {
        self.view.len()
    }

    /// The full roster in fetch order.
    pub fn roster(&self) -> Vec<Player> {
        self.roster.clone()
    }

    pub fn favorite_ids(&self) -> BTreeSet<PlayerId> {
        self.roster
            .iter()
            .filter(|p| p.favorite)
            .map(|p| p.id.clone())
            .collect()
    }

    /// Sorted distinct values for the selector controls. Blank values are skipped.
    pub fn filter_options(&self) -> FilterOptions {
        fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
            values
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .map(str::to_string)
                .collect()
        }

        FilterOptions {
            clubs: distinct(self.roster.iter().map(|p| p.club.as_str())),
            leagues: distinct(self.roster.iter().map(|p| p.league.as_str())),
            positions: distinct(self.roster.iter().map(|p| p.position.as_str())),
            nationalities: distinct(self.roster.iter().map(|p| p.nationality.as_str())),
            feet: distinct(self.roster.iter().filter_map(|p| p.foot.as_deref())),
        }
    }

    fn position(&self, id: &PlayerId) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| ScoutError::PlayerNotFound { id: id.to_string() })
    }
}
