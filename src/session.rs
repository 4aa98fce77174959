//! The browsing session: one roster, its favorite lists, the current filter
//! criteria and the backend they are synchronized with.
//!
//! Every mutation is confirm-then-apply. Local checks run first, then the
//! backend is called, and only the values the backend returned are written into
//! the store and lists. A failed call leaves the session exactly as it was.

use tracing::{info, warn};

use crate::{
    api::ApiClient,
    cli::types::{ListId, PlayerId},
    comments::{validate_comment, CommentLog},
    favorites::FavoriteListManager,
    filters::FilterCriteria,
    store::{Comment, FavoriteList, Player, PlayerStore},
    Result, ScoutError,
};


#[derive(Debug)]
pub struct Session {
    client: ApiClient,
    store: PlayerStore,
    lists: FavoriteListManager,
    criteria: FilterCriteria,
}

impl Session {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            store: PlayerStore::new(),
            lists: FavoriteListManager::new(),
            criteria: FilterCriteria::default(),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn store(&self) -> &PlayerStore {
        &self.store
    }

    pub fn lists(&self) -> &FavoriteListManager {
        &self.lists
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Players passing the current criteria, highest percentile first.
    pub fn visible(&self) -> Vec<Player> {
        self.store.visible()
    }

    /// Fetch the roster and re-apply the current criteria. Returns the roster size.
    pub async fn load_players(&mut self) -> Result<usize> {
        let store = self.fetch_store(&self.criteria).await?;
        self.install_store(store);
        Ok(self.store.len())
    }

    /// Ask the backend to reload its data, then fetch the new roster with the
    /// filters cleared. Returns the roster size.
    ///
    /// Criteria and roster are replaced together, only once the new roster loaded.
    pub async fn refresh_data(&mut self) -> Result<usize> {
        let count = self
            .client
            .refresh_data()
            .await
            .inspect_err(|e| warn!(error = %e, "refresh failed"))?;
        info!(count = ?count, "backend data refreshed");

        let criteria = FilterCriteria::default();
        let store = self.fetch_store(&criteria).await?;
        self.criteria = criteria;
        self.install_store(store);
        Ok(self.store.len())
    }

    /// Replace the criteria and recompute the view. Returns the visible count.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) -> usize {
        self.criteria = criteria;
        self.store.refilter(&self.criteria)
    }

    /// Change some criteria in place and recompute the view.
    pub fn update_criteria(&mut self, change: impl FnOnce(&mut FilterCriteria)) -> usize {
        change(&mut self.criteria);
        self.store.refilter(&self.criteria)
    }

    pub fn reset_filters(&mut self) -> usize {
        self.set_criteria(FilterCriteria::default())
    }

    /// Toggle a player's favorite flag. Returns the flag the backend settled on.
    pub async fn toggle_favorite(&mut self, player: &PlayerId) -> Result<bool> {
        self.store.find_by_id(player)?;

        let reply = self
            .client
            .toggle_favorite(player)
            .await
            .inspect_err(|e| warn!(%player, error = %e, "toggle favorite failed"))?;

        let default = ListId::default_list();
        if let Some(members) = reply.players {
            self.lists.set_members(&default, members, &mut self.store)?;
        }
        if reply.favorite {
            self.lists.add_member(&default, player, &mut self.store)?;
        } else {
            self.lists.remove_member(&default, player, &mut self.store)?;
        }
        self.store.refilter(&self.criteria);
        Ok(reply.favorite)
    }

    /// Post a comment and return the player's comments in the backend's order.
    pub async fn add_comment(&mut self, player: &PlayerId, text: &str) -> Result<Vec<Comment>> {
        let text = validate_comment(text)?;
        self.store.find_by_id(player)?;

        let reply = self
            .client
            .add_comment(player, text)
            .await
            .inspect_err(|e| warn!(%player, error = %e, "adding comment failed"))?;

        CommentLog::new(&mut self.store).accept(player, text, reply)
    }

    pub fn comments(&self, player: &PlayerId) -> Result<Vec<Comment>> {
        Ok(self.store.find_by_id(player)?.comments)
    }

    /// Fetch every favorite list. Returns the number of lists.
    ///
    /// Once a roster is loaded, the default list follows the players' flags.
    pub async fn load_lists(&mut self) -> Result<usize> {
        let lists = self
            .client
            .favorite_lists()
            .await
            .inspect_err(|e| warn!(error = %e, "loading favorite lists failed"))?;

        self.lists = FavoriteListManager::from_lists(lists);
        if !self.store.is_empty() {
            self.lists.reconcile_default(&self.store);
        }
        info!(lists = self.lists.len(), "favorite lists loaded");
        Ok(self.lists.len())
    }

    pub async fn create_list(&mut self, name: &str, description: &str) -> Result<ListId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ScoutError::validation("list name is empty"));
        }
        let description = description.trim();

        let created = self
            .client
            .create_list(name, description)
            .await
            .inspect_err(|e| warn!(list_name = name, error = %e, "creating list failed"))?;

        let list = created
            .list
            .unwrap_or_else(|| FavoriteList::new(name, description));
        self.lists.insert_list(created.list_id.clone(), list);
        info!(list = %created.list_id, "favorite list created");
        Ok(created.list_id)
    }

    /// Rename and/or re-describe a list. A blank name keeps the current one.
    pub async fn rename_list(
        &mut self,
        id: &ListId,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<FavoriteList> {
        self.lists.get(id)?;
        let name = name.map(str::trim).filter(|n| !n.is_empty());
        let description = description.map(str::trim);

        let updated = self
            .client
            .update_list(id, name, description)
            .await
            .inspect_err(|e| warn!(list = %id, error = %e, "updating list failed"))?;

        match updated {
            Some(list) => {
                self.lists.insert_list(id.clone(), list.clone());
                Ok(list)
            }
            None => self.lists.rename_list(id, name, description),
        }
    }

    pub async fn delete_list(&mut self, id: &ListId) -> Result<FavoriteList> {
        if id.is_default() {
            return Err(ScoutError::DefaultListProtected);
        }
        self.lists.get(id)?;

        self.client
            .delete_list(id)
            .await
            .inspect_err(|e| warn!(list = %id, error = %e, "deleting list failed"))?;

        self.lists.delete_list(id)
    }

    /// Add a player to a list. Returns the member count.
    pub async fn add_to_list(&mut self, id: &ListId, player: &PlayerId) -> Result<usize> {
        self.check_membership_change(id, player)?;

        let members = self
            .client
            .add_list_member(id, player)
            .await
            .inspect_err(|e| warn!(list = %id, %player, error = %e, "adding to list failed"))?;

        self.install_members(id, members)
    }

    /// Remove a player from a list. Returns the member count.
    pub async fn remove_from_list(&mut self, id: &ListId, player: &PlayerId) -> Result<usize> {
        self.check_membership_change(id, player)?;

        let members = self
            .client
            .remove_list_member(id, player)
            .await
            .inspect_err(|e| warn!(list = %id, %player, error = %e, "removing from list failed"))?;

        self.install_members(id, members)
    }

    async fn fetch_store(&self, criteria: &FilterCriteria) -> Result<PlayerStore> {
        let payload = self
            .client
            .fetch_players()
            .await
            .inspect_err(|e| warn!(error = %e, "loading players failed"))?;

        let mut store = PlayerStore::new();
        store
            .load_json(payload)
            .inspect_err(|e| warn!(error = %e, "roster rejected"))?;
        store.refilter(criteria);
        Ok(store)
    }

    fn install_store(&mut self, store: PlayerStore) {
        self.store = store;
        self.lists.reconcile_default(&self.store);
        info!(players = self.store.len(), "roster loaded");
    }

    fn check_membership_change(&self, id: &ListId, player: &PlayerId) -> Result<()> {
        self.lists.get(id)?;
        self.store.find_by_id(player)?;
        Ok(())
    }

    fn install_members(&mut self, id: &ListId, members: Vec<PlayerId>) -> Result<usize> {
        let count = self.lists.set_members(id, members, &mut self.store)?;
        if id.is_default() {
            self.store.refilter(&self.criteria);
        }
        Ok(count)
    }
}
