//! HTTP utilities for backend communication

use crate::{Result, ScoutError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Url;

pub const USER_AGENT: &str = concat!("player-scout/", env!("CARGO_PKG_VERSION"));

/// Headers sent with every backend request.
pub fn default_header_map() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Parse and validate a backend base URL.
///
/// Only `http` and `https` are accepted. A trailing `/` is dropped so that
/// endpoint segments can be appended uniformly.
pub fn normalize_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = || ScoutError::InvalidApiUrl {
        url: raw.to_string(),
    };

    let url = Url::parse(trimmed).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(invalid());
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_header_map_accepts_json() {
        let headers = default_header_map();
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
    }

    #[test]
    fn test_user_agent_carries_version() {
        assert!(USER_AGENT.starts_with("player-scout/"));
    }

    #[test]
    fn test_normalize_base_url_strips_trailing_slash() {
        let url = normalize_base_url("http://127.0.0.1:5000/").unwrap();
        assert_eq!(url.host_str(), Some("127.0.0.1"));
        assert_eq!(url.port(), Some(5000));
    }

    #[test]
    fn test_normalize_base_url_keeps_prefix_path() {
        let url = normalize_base_url("https://example.com/scout/").unwrap();
        assert_eq!(url.path(), "/scout");
    }

    #[test]
    fn test_normalize_base_url_rejects_other_schemes() {
        let result = normalize_base_url("ftp://example.com");
        assert!(matches!(result, Err(ScoutError::InvalidApiUrl { .. })));
    }

    #[test]
    fn test_normalize_base_url_rejects_garbage() {
        assert!(normalize_base_url("not a url").is_err());
        assert!(normalize_base_url("").is_err());
    }
}
