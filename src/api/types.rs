//! Request bodies and response payloads of the backend REST API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    cli::types::{ListId, PlayerId},
    store::FavoriteList,
};

#[derive(Debug, Serialize)]
pub struct PlayerRef<'a> {
    pub player_id: &'a PlayerId,
}

#[derive(Debug, Serialize)]
pub struct ToggleFavoriteRequest<'a> {
    pub player_id: &'a PlayerId,
}

#[derive(Debug, Serialize)]
pub struct AddCommentRequest<'a> {
    pub player_id: &'a PlayerId,
    pub comment: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ListRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshResponse {
    #[serde(default)]
    pub count: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToggleFavoriteResponse {
    pub favorite: bool,
    #[serde(default)]
    pub players: Option<Vec<PlayerId>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FavoriteListsResponse {
    #[serde(default)]
    pub lists: BTreeMap<ListId, FavoriteList>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateListResponse {
    pub list_id: ListId,
    #[serde(default)]
    pub list: Option<FavoriteList>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateListResponse {
    #[serde(default)]
    pub list: Option<FavoriteList>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MembersResponse {
    pub players: Vec<PlayerId>,
}
