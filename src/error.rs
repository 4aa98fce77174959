//! Error types for the player scouting client

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, ScoutError>;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid API URL {url:?}: expected an http:// or https:// address")]
    InvalidApiUrl { url: String },

    #[error("Invalid value {value:?} for {env_var}")]
    InvalidEnvVar { env_var: String, value: String },

    #[error("Player not found: {id}")]
    PlayerNotFound { id: String },

    #[error("Favorite list not found: {id}")]
    ListNotFound { id: String },

    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Malformed roster: {message}")]
    Load { message: String },

    #[error("Backend rejected the request (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("The default favorites list cannot be deleted")]
    DefaultListProtected,
}

impl ScoutError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        ScoutError::Validation {
            message: message.into(),
        }
    }

    pub(crate) fn load(message: impl Into<String>) -> Self {
        ScoutError::Load {
            message: message.into(),
        }
    }

    /// True for unknown player or list ids.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ScoutError::PlayerNotFound { .. } | ScoutError::ListNotFound { .. }
        )
    }

    /// True when the failure came from talking to the backend: transport errors,
    /// non-2xx responses, and replies carrying `success: false`.
    pub fn is_network(&self) -> bool {
        matches!(self, ScoutError::Http(_) | ScoutError::Api { .. })
    }
}
