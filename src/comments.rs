//! Per-player comment logs.
//!
//! Comments are append-only. After a successful backend call the local log is
//! replaced by the sequence the backend returned, so the order is always the
//! backend's order and never a guess from the local clock.

use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::Value;

use crate::{
    cli::types::PlayerId,
    store::{Comment, PlayerStore},
    Result, ScoutError,
};

/// What `POST /api/add_comment` answered with.
///
/// The shape is picked by key: `comments` must be a sequence and `comment` a
/// single entry. A malformed value under either key is an error, never a bare
/// acknowledgement.
#[derive(Debug, Clone, PartialEq)]
pub enum CommentReply {
    /// Full updated sequence
    Sequence { comments: Vec<Comment> },
    /// Legacy: only the new entry
    Single { comment: LegacyComment },
    /// Legacy: bare acknowledgement
    Acknowledged,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LegacyComment {
    Entry(Comment),
    Text(String),
}

impl<'de> Deserialize<'de> for CommentReply {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Value::Object(mut body) = Value::deserialize(deserializer)? else {
            return Err(D::Error::custom("comment reply is not a JSON object"));
        };

        if let Some(comments) = body.remove("comments") {
            let comments = serde_json::from_value(comments).map_err(D::Error::custom)?;
            return Ok(CommentReply::Sequence { comments });
        }
        if let Some(comment) = body.remove("comment") {
            let comment = serde_json::from_value(comment).map_err(D::Error::custom)?;
            return Ok(CommentReply::Single { comment });
        }
        Ok(CommentReply::Acknowledged)
    }
}

/// Trim comment text, rejecting blank input.
pub fn validate_comment(text: &str) -> Result<&str> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ScoutError::validation("comment text is empty"));
    }
    Ok(text)
}

/// Comment operations over the players held by a [`PlayerStore`].
pub struct CommentLog<'a> {
    store: &'a mut PlayerStore,
}

impl<'a> CommentLog<'a> {
    pub fn new(store: &'a mut PlayerStore) -> Self {
        Self { store }
    }

    pub fn history(&self, id: &PlayerId) -> Result<Vec<Comment>> {
        Ok(self.store.find_by_id(id)?.comments)
    }

    /// Append a locally stamped entry.
    pub fn add(&mut self, id: &PlayerId, text: &str) -> Result<Vec<Comment>> {
        self.store.append_comment(id, text)
    }

    /// Apply the backend's reply to a comment that was sent as `text`.
    pub fn accept(&mut self, id: &PlayerId, text: &str, reply: CommentReply) -> Result<Vec<Comment>> {
        match reply {
            CommentReply::Sequence { comments } => self.store.replace_comments(id, comments),
            CommentReply::Single { comment } => {
                let mut comments = self.history(id)?;
                comments.push(match comment {
                    LegacyComment::Entry(entry) => entry,
                    LegacyComment::Text(text) => Comment::now(text),
                });
                self.store.replace_comments(id, comments)
            }
            CommentReply::Acknowledged => self.add(id, text),
        }
    }
}
