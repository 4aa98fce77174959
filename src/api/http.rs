//! HTTP client for the player backend.
//!
//! Every call maps one REST endpoint. Non-2xx responses and replies carrying
//! `success: false` become [`ScoutError::Api`] with the backend's `message`.

use std::{collections::BTreeMap, time::Duration};

use reqwest::{Client, Response, Url};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;
use tracing::debug;

use crate::{
    api::types::{
        AddCommentRequest, CreateListResponse, FavoriteListsResponse, ListRequest,
        MembersResponse, PlayerRef, RefreshResponse, ToggleFavoriteRequest,
        ToggleFavoriteResponse, UpdateListResponse,
    },
    cli::types::{ListId, PlayerId},
    comments::CommentReply,
    core::{default_header_map, normalize_base_url, USER_AGENT},
    store::FavoriteList,
    Result, ScoutError,
};


pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(default_header_map())
            .timeout(timeout)
            .build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /api/players`: the raw roster payload.
    pub async fn fetch_players(&self) -> Result<Value> {
        let url = self.endpoint(&["api", "players"])?;
        debug!(%url, "GET");

        let v = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(v)
    }

    /// `POST /api/refresh_data`: ask the backend to reload its data.
    /// Returns the new roster size when the backend reports it.
    pub async fn refresh_data(&self) -> Result<Option<usize>> {
        let url = self.endpoint(&["api", "refresh_data"])?;
        debug!(%url, "POST");

        let response = self.http.post(url).send().await?;
        let body: RefreshResponse = read_envelope(response).await?;
        Ok(body.count)
    }

    /// `POST /api/toggle_favorite`: toggles membership of the default list.
    pub async fn toggle_favorite(&self, player: &PlayerId) -> Result<ToggleFavoriteResponse> {
        let url = self.endpoint(&["api", "toggle_favorite"])?;
        debug!(%url, %player, "POST");

        let response = self
            .http
            .post(url)
            .json(&ToggleFavoriteRequest { player_id: player })
            .send()
            .await?;
        read_envelope(response).await
    }

    /// `POST /api/add_comment`.
    pub async fn add_comment(&self, player: &PlayerId, text: &str) -> Result<CommentReply> {
        let url = self.endpoint(&["api", "add_comment"])?;
        debug!(%url, %player, "POST");

        let response = self
            .http
            .post(url)
            .json(&AddCommentRequest {
                player_id: player,
                comment: text,
            })
            .send()
            .await?;
        read_envelope(response).await
    }

    /// `GET /api/favorite_lists`.
    pub async fn favorite_lists(&self) -> Result<BTreeMap<ListId, FavoriteList>> {
        let url = self.endpoint(&["api", "favorite_lists"])?;
        debug!(%url, "GET");

        let response = self.http.get(url).send().await?;
        let body: FavoriteListsResponse = read_envelope(response).await?;
        Ok(body.lists)
    }

    /// `POST /api/favorite_lists`.
    pub async fn create_list(&self, name: &str, description: &str) -> Result<CreateListResponse> {
        let url = self.endpoint(&["api", "favorite_lists"])?;
        debug!(%url, list_name = name, "POST");

        let response = self
            .http
            .post(url)
            .json(&ListRequest {
                name: Some(name),
                description: Some(description),
            })
            .send()
            .await?;
        read_envelope(response).await
    }

    /// `PUT /api/favorite_lists/{id}`. Returns the updated list when the backend echoes it.
    pub async fn update_list(
        &self,
        id: &ListId,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Option<FavoriteList>> {
        let url = self.endpoint(&["api", "favorite_lists", id.as_str()])?;
        debug!(%url, "PUT");

        let response = self
            .http
            .put(url)
            .json(&ListRequest { name, description })
            .send()
            .await?;
        let body: UpdateListResponse = read_envelope(response).await?;
        Ok(body.list)
    }

    /// `DELETE /api/favorite_lists/{id}`.
    pub async fn delete_list(&self, id: &ListId) -> Result<()> {
        let url = self.endpoint(&["api", "favorite_lists", id.as_str()])?;
        debug!(%url, "DELETE");

        let response = self.http.delete(url).send().await?;
        let _: IgnoredAny = read_envelope(response).await?;
        Ok(())
    }

    /// `POST /api/favorite_lists/{id}/players`. Returns the list's members.
    pub async fn add_list_member(&self, id: &ListId, player: &PlayerId) -> Result<Vec<PlayerId>> {
        let url = self.endpoint(&["api", "favorite_lists", id.as_str(), "players"])?;
        debug!(%url, %player, "POST");

        let response = self
            .http
            .post(url)
            .json(&PlayerRef { player_id: player })
            .send()
            .await?;
        let body: MembersResponse = read_envelope(response).await?;
        Ok(body.players)
    }

    /// `DELETE /api/favorite_lists/{id}/players/{player}`. Returns the list's members.
    pub async fn remove_list_member(
        &self,
        id: &ListId,
        player: &PlayerId,
    ) -> Result<Vec<PlayerId>> {
        let url = self.endpoint(&[
            "api",
            "favorite_lists",
            id.as_str(),
            "players",
            player.as_str(),
        ])?;
        debug!(%url, "DELETE");

        let response = self.http.delete(url).send().await?;
        let body: MembersResponse = read_envelope(response).await?;
        Ok(body.players)
    }

    /// Base URL with path segments appended; segments are percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ScoutError::InvalidApiUrl {
                url: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Decode a `{success, ...}` reply, turning rejections into [`ScoutError::Api`].
async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let text = response.text().await?;
    let body: Option<Value> = serde_json::from_str(&text).ok();

    let refused = body
        .as_ref()
        .and_then(|b| b.get("success"))
        .and_then(Value::as_bool)
        == Some(false);

    if !status.is_success() || refused {
        let message = body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        return Err(ScoutError::Api {
            status: status.as_u16(),
            message,
        });
    }

    match body {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Ok(serde_json::from_str(&text)?),
    }
}
