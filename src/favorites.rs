//! Favorite list bookkeeping.
//!
//! Lists are keyed by id. The reserved `"default"` list always exists and is the
//! list form of each player's `favorite` flag: every change to its membership is
//! mirrored into the [`PlayerStore`], and [`FavoriteListManager::reconcile_default`]
//! rebuilds it from the flags.

use std::{cmp::Ordering, collections::BTreeMap};

use icu_collator::{Collator, CollatorOptions, Strength};
use tracing::debug;

use crate::{
    cli::types::{ListId, PlayerId},
    store::{FavoriteList, PlayerStore},
    Result, ScoutError,
};


pub const DEFAULT_LIST_NAME: &str = "Favorites";
pub const DEFAULT_LIST_DESCRIPTION: &str = "Default favorites list";

#[derive(Debug, Clone)]
pub struct FavoriteListManager {
    lists: BTreeMap<ListId, FavoriteList>,
}

impl Default for FavoriteListManager {
    fn default() -> Self {
        Self::from_lists(BTreeMap::new())
    }
}

impl FavoriteListManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from lists fetched from the backend, adding the default list if absent.
    pub fn from_lists(mut lists: BTreeMap<ListId, FavoriteList>) -> Self {
        lists
            .entry(ListId::default_list())
            .or_insert_with(|| FavoriteList::new(DEFAULT_LIST_NAME, DEFAULT_LIST_DESCRIPTION));
        Self { lists }
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn get(&self, id: &ListId) -> Result<FavoriteList> {
        self.lists.get(id).cloned().ok_or_else(|| not_found(id))
    }

    pub fn contains_member(&self, id: &ListId, player: &PlayerId) -> bool {
        self.lists
            .get(id)
            .is_some_and(|list| list.members.contains(player))
    }

    /// Ids of every list that has `player` as a member.
    pub fn lists_containing(&self, player: &PlayerId) -> Vec<ListId> {
        self.lists()
            .into_iter()
            .filter(|(_, list)| list.members.contains(player))
            .map(|(id, _)| id)
            .collect()
    }

    /// All lists: the default list first, then by name in collation order
    /// (case-sensitive), then by id.
    pub fn lists(&self) -> Vec<(ListId, FavoriteList)> {
        let mut all: Vec<(ListId, FavoriteList)> = self
            .lists
            .iter()
            .map(|(id, list)| (id.clone(), list.clone()))
            .collect();
        let collator = name_collator();
        all.sort_by(|(a_id, a), (b_id, b)| {
            b_id.is_default()
                .cmp(&a_id.is_default())
                .then_with(|| compare_names(collator.as_ref(), &a.name, &b.name))
                .then_with(|| a_id.cmp(b_id))
        });
        all
    }

    /// Create an empty list under a fresh 8-character id.
    pub fn create_list(&mut self, name: &str, description: &str) -> Result<ListId> {
        let name = validate_name(name)?;
        let id = loop {
            let candidate = ListId::new(&uuid::Uuid::new_v4().simple().to_string()[..8]);
            if !self.lists.contains_key(&candidate) {
                break candidate;
            }
        };
        self.lists
            .insert(id.clone(), FavoriteList::new(name, description.trim()));
        debug!(list = %id, "favorite list created");
        Ok(id)
    }

    /// Install a list under a known id, replacing any list stored there.
    pub fn insert_list(&mut self, id: ListId, list: FavoriteList) {
        self.lists.insert(id, list);
    }

    /// Update name and/or description.
    ///
    /// A missing or blank name keeps the current one; a present description
    /// replaces the current one, even when empty.
    pub fn rename_list(
        &mut self,
        id: &ListId,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<FavoriteList> {
        let list = self.lists.get_mut(id).ok_or_else(|| not_found(id))?;
        if let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) {
            list.name = name.to_string();
        }
        if let Some(description) = description {
            list.description = description.trim().to_string();
        }
        Ok(list.clone())
    }

    /// Delete a list. The default list is protected.
    pub fn delete_list(&mut self, id: &ListId) -> Result<FavoriteList> {
        if id.is_default() {
            return Err(ScoutError::DefaultListProtected);
        }
        self.lists.remove(id).ok_or_else(|| not_found(id))
    }

    /// Add a player; adding a present member is a no-op. Returns the member count.
    pub fn add_member(
        &mut self,
        id: &ListId,
        player: &PlayerId,
        store: &mut PlayerStore,
    ) -> Result<usize> {
        self.set_membership(id, player, true, store)
    }

    /// Remove a player; removing an absent member is a no-op. Returns the member count.
    pub fn remove_member(
        &mut self,
        id: &ListId,
        player: &PlayerId,
        store: &mut PlayerStore,
    ) -> Result<usize> {
        self.set_membership(id, player, false, store)
    }

    /// Flip a player's default-list membership and favorite flag together.
    /// Returns the new flag.
    pub fn toggle_default(&mut self, player: &PlayerId, store: &mut PlayerStore) -> Result<bool> {
        let default = ListId::default_list();
        let now_member = !self.contains_member(&default, player);
        self.set_membership(&default, player, now_member, store)?;
        Ok(now_member)
    }

    /// Replace a list's members with the backend's canonical set.
    ///
    /// For the default list the favorite flags of players present in the store
    /// follow the new membership; ids unknown to the store are kept as members.
    pub fn set_members(
        &mut self,
        id: &ListId,
        members: impl IntoIterator<Item = PlayerId>,
        store: &mut PlayerStore,
    ) -> Result<usize> {
        let list = self.lists.get_mut(id).ok_or_else(|| not_found(id))?;
        let previous = std::mem::replace(&mut list.members, members.into_iter().collect());

        if id.is_default() {
            for gone in previous.difference(&list.members) {
                if store.contains(gone) {
                    store.apply_favorite(gone, false)?;
                }
            }
            for member in &list.members {
                if store.contains(member) {
                    store.apply_favorite(member, true)?;
                }
            }
        }
        Ok(list.members.len())
    }

    /// Rebuild the default list from the players' favorite flags.
    pub fn reconcile_default(&mut self, store: &PlayerStore) {
        let favorites = store.favorite_ids();
        let default = self
            .lists
            .entry(ListId::default_list())
            .or_insert_with(|| FavoriteList::new(DEFAULT_LIST_NAME, DEFAULT_LIST_DESCRIPTION));
        default.members = favorites;
    }

    fn set_membership(
        &mut self,
        id: &ListId,
        player: &PlayerId,
        member: bool,
        store: &mut PlayerStore,
    ) -> Result<usize> {
        if !store.contains(player) {
            return Err(ScoutError::PlayerNotFound {
                id: player.to_string(),
            });
        }
        let list = self.lists.get_mut(id).ok_or_else(|| not_found(id))?;

        if member {
            list.members.insert(player.clone());
        } else {
            list.members.remove(player);
        }
        if id.is_default() {
            store.apply_favorite(player, member)?;
        }
        Ok(list.members.len())
    }
}

fn validate_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ScoutError::validation("list name is empty"));
    }
    Ok(name)
}

fn name_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    Collator::try_new(&Default::default(), options)
        .inspect_err(|e| debug!(error = ?e, "collator unavailable, ordering names by code point"))
        .ok()
}

fn compare_names(collator: Option<&Collator>, a: &str, b: &str) -> Ordering {
    match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}

fn not_found(id: &ListId) -> ScoutError {
    ScoutError::ListNotFound { id: id.to_string() }
}
