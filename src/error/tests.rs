//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod scout_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // Create a real HTTP error by making a request to an invalid URL
        let client = reqwest::Client::new();
        let result = client
            .get("http://invalid-url-that-does-not-exist.fake")
            .send()
            .await;
        let reqwest_error = result.unwrap_err();
        let scout_error = ScoutError::from(reqwest_error);

        match scout_error {
            ScoutError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let scout_error = ScoutError::from(json_error);

        match scout_error {
            ScoutError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let scout_error = ScoutError::from(io_error);

        match scout_error {
            ScoutError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_not_found_messages() {
        let player = ScoutError::PlayerNotFound {
            id: "28003".to_string(),
        };
        assert_eq!(player.to_string(), "Player not found: 28003");
        assert!(player.is_not_found());
        assert!(!player.is_network());

        let list = ScoutError::ListNotFound {
            id: "a1b2c3d4".to_string(),
        };
        assert_eq!(list.to_string(), "Favorite list not found: a1b2c3d4");
        assert!(list.is_not_found());
    }

    #[test]
    fn test_validation_and_load_helpers() {
        let validation = ScoutError::validation("comment text is empty");
        assert_eq!(
            validation.to_string(),
            "Validation failed: comment text is empty"
        );

        let load = ScoutError::load("player at index 3 has no id");
        assert_eq!(
            load.to_string(),
            "Malformed roster: player at index 3 has no id"
        );
        assert!(!load.is_not_found());
    }

    #[test]
    fn test_api_error_is_network() {
        let error = ScoutError::Api {
            status: 404,
            message: "List not found".to_string(),
        };
        assert!(error.is_network());
        assert_eq!(
            error.to_string(),
            "Backend rejected the request (HTTP 404): List not found"
        );
    }

    #[test]
    fn test_default_list_protected_message() {
        let error = ScoutError::DefaultListProtected;
        assert!(error.to_string().contains("cannot be deleted"));
        assert!(!error.is_network());
    }

    #[test]
    fn test_invalid_api_url_message() {
        let error = ScoutError::InvalidApiUrl {
            url: "ftp://example.com".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://example.com"));
        assert!(message.contains("http://"));
    }

    #[test]
    fn test_error_debug_format() {
        let error = ScoutError::DefaultListProtected;
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("DefaultListProtected"));
    }
}
